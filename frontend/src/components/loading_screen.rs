use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::content;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    // picked once per mount
    let line = use_state(|| content::loading_line(Math::random()));

    html! {
        <div class="loading-screen">
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to bottom right, #6B46C1, #9333EA, #E879F9);
                    transition: opacity 500ms;
                    text-align: center;
                }
                .loading-brand {
                    margin-bottom: 2rem;
                    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .loading-orb {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .loading-orb div {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    animation: bounce 1s infinite;
                }
                .loading-brand h1 {
                    color: #ffffff;
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: 0.025em;
                }
                .loading-line {
                    color: rgba(255, 255, 255, 0.9);
                    font-weight: 500;
                }
                @keyframes pulse {
                    50% { opacity: 0.5; }
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: none; }
                }
                "#}
            </style>
            <div>
                <div class="loading-brand">
                    <div class="loading-orb"><div></div></div>
                    <h1>{"Let's Build Labs"}</h1>
                </div>
                <p class="loading-line">{*line}</p>
            </div>
        </div>
    }
}
