use log::Level;

const DEFAULT_FORM_ENDPOINT: &str = "https://formsubmit.co/hello@letsbuilddao.org";

/// Local path every image and icon is served under.
pub const ASSET_PREFIX: &str = "/images";

pub const CONTACT_EMAIL: &str = "hello@letsbuilddao.org";

/// How long the branded overlay stays up after mount. Not tied to asset readiness.
pub const LOADING_SCREEN_MS: u32 = 5_000;

pub const HERO_REVEAL_MS: u32 = 100;

/// Fraction of the viewport height, measured from the top, a section must reach into.
pub const VIEWPORT_BAND: f64 = 0.7;

/// Scroll distance over which the hero shrinks and rounds its corners.
pub const HERO_SCROLL_RANGE: f64 = 400.0;

pub const NAV_SCROLLED_AT: f64 = 80.0;

pub const PAGE_TITLE: &str = "Let's Build Labs - Innovating Web3 Technology in Africa";

/// Form relay endpoint, overridable with `LBL_FORM_ENDPOINT` at build time.
pub fn form_endpoint() -> &'static str {
    option_env!("LBL_FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

pub fn asset(path: &str) -> String {
    format!("{}/{}", ASSET_PREFIX, path.trim_start_matches('/'))
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_sit_under_the_prefix() {
        assert_eq!(asset("hero.jpg"), "/images/hero.jpg");
        assert_eq!(asset("/partners/lisk.png"), "/images/partners/lisk.png");
    }

    #[test]
    fn endpoint_is_an_https_url() {
        assert!(form_endpoint().starts_with("https://"));
    }
}
