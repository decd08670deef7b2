use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header_nav::HeaderNav;
use crate::components::loading_screen::LoadingScreen;
use crate::config;
use crate::hooks::{use_loading, use_scroll_visibility};
use crate::motion;
use crate::sections::{about::About, contact::Contact, hero::Hero, partners::Partners, projects::Projects, team::Team};
use crate::visibility::Section;

#[function_component(Home)]
pub fn home() -> Html {
    let loading = use_loading(config::LOADING_SCREEN_MS);
    let visibility = use_scroll_visibility();

    use_effect_with_deps(
        move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(config::PAGE_TITLE);
            }
            || ()
        },
        (),
    );

    let scroll_y = visibility.scroll_y();
    let shown = |section: Section| visibility.is_visible(section);

    html! {
        <>
            <style>
                {motion::STYLES}
                {r#"
                .page-content {
                    opacity: 1;
                    transition: opacity 500ms;
                }
                .page-content.is-loading { opacity: 0; }
                .page-section { padding: 4rem 1.5rem; }
                .section-inner { max-width: 72rem; margin: 0 auto; }
                .section-inner.wide { max-width: 80rem; }
                .section-inner.narrow { max-width: 56rem; }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-header h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1rem;
                    transition: color 300ms;
                }
                .section-header h2:hover { color: #6B46C1; }
                .section-header p {
                    font-size: 1.125rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                "#}
            </style>
            if loading {
                <LoadingScreen />
            }
            <div class={classes!("page-content", loading.then_some("is-loading"))}>
                <HeaderNav scrolled={scroll_y > config::NAV_SCROLLED_AT} />
                <Hero visible={shown(Section::Hero)} {scroll_y} />
                <About visible={shown(Section::About)} />
                <Partners visible={shown(Section::Partners)} />
                <Projects visible={shown(Section::Projects)} />
                <Team visible={shown(Section::Team)} />
                <Contact visible={shown(Section::Contact)} />
                <Footer />
            </div>
        </>
    }
}
