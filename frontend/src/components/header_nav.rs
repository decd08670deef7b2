use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::NAV_LINKS;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderNavProps {
    pub scrolled: bool,
}

#[function_component(HeaderNav)]
pub fn header_nav(props: &HeaderNavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // in-page anchors still navigate, only the menu closes
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", props.scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1rem 1.5rem;
                    transition: background 300ms ease, box-shadow 300ms ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo img { width: 2.5rem; }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    color: #ffffff;
                    font-weight: 600;
                    text-decoration: none;
                    transition: color 300ms;
                }
                .top-nav.scrolled .nav-link { color: #030303; }
                .nav-link:hover { color: #E879F9; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; color: #ffffff; }
                    .top-nav.scrolled .burger-menu { color: #030303; }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: #6B46C1;
                    }
                    .nav-links.mobile-menu-open { display: flex; }
                    .top-nav.scrolled .nav-links .nav-link { color: #ffffff; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={config::asset("new-logo.png")} alt="Let's Build Labs" />
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", (*menu_open).then_some("mobile-menu-open"))}>
                    {
                        for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.href} class="nav-link" onclick={close_menu.clone()}>
                                {link.label}
                            </a>
                        })
                    }
                </div>
            </div>
        </nav>
    }
}
