use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{QUICK_LINKS, SOCIALS};
use crate::Route;

pub fn copyright_line(year: i32) -> String {
    format!("Copyright © {} LB Labs. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer { margin: 2.5rem; }
                .quick-links { text-align: center; }
                .quick-links-title {
                    color: #C4C4C4;
                    margin-bottom: 1.5rem;
                }
                .quick-links-row {
                    display: flex;
                    justify-content: space-between;
                    max-width: 20rem;
                    margin: 0 auto;
                }
                .quick-links-row a {
                    color: inherit;
                    text-decoration: none;
                }
                .footer-brand {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin: 2rem 0;
                }
                .footer-logo { width: 2.5rem; }
                .footer-socials {
                    display: flex;
                    gap: 0.25rem;
                }
                .footer-socials img {
                    width: 3rem;
                    height: 3rem;
                }
                .copyright {
                    background: #E5DEFF;
                    color: #030303;
                    border-radius: 2px;
                    margin-top: 1.5rem;
                    padding: 1rem;
                    text-align: center;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .footer-brand { flex-direction: column; gap: 1rem; }
                }
                "#}
            </style>
            <div class="quick-links">
                <p class="quick-links-title">{"Quick Links"}</p>
                <div class="quick-links-row">
                    <p><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></p>
                    {
                        for QUICK_LINKS.iter().map(|link| html! {
                            <p><a href={link.href}>{link.label}</a></p>
                        })
                    }
                </div>
            </div>
            <div class="footer-brand">
                <img class="footer-logo" src={config::asset("new-logo.png")} alt="" />
                <div class="footer-socials">
                    {
                        for SOCIALS.iter().map(|(link, icon)| html! {
                            <a href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                                <img src={config::asset(icon)} alt="" />
                            </a>
                        })
                    }
                </div>
            </div>
            <div class="copyright">
                <p>{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright_line(2026), "Copyright © 2026 LB Labs. All rights reserved.");
    }
}
