use yew::prelude::*;

use crate::config;
use crate::motion::{delay, reveal, Enter};
use crate::visibility::HeroTransform;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub visible: bool,
    pub scroll_y: f64,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let visible = props.visible;
    let transform = HeroTransform::from_scroll(props.scroll_y);

    html! {
        <section id="hero" class="hero" style={transform.style()}>
            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    transition: transform 200ms ease-out;
                }
                .hero-image {
                    width: 100%;
                    height: 100vh;
                    object-fit: cover;
                    display: block;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: #000000;
                    opacity: 0.8;
                }
                .hero-content {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 0 1.5rem;
                    color: #ffffff;
                    text-align: center;
                    transition-duration: 1000ms;
                }
                .hero-inner { max-width: 64rem; margin: 0 auto; }
                .hero-badge {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.025em;
                    text-transform: uppercase;
                }
                .hero-title {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .hero-title span { display: block; }
                .hero-title .gradient-text {
                    background: linear-gradient(to right, #7B5CFF, #E879F9);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    line-height: 1.625;
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-cta, .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    color: #ffffff;
                    cursor: pointer;
                    text-decoration: none;
                    transition: all 300ms;
                }
                .hero-cta {
                    border: none;
                    background: linear-gradient(to right, #7B5CFF, #6B46C1);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }
                .hero-secondary {
                    background: rgba(255, 255, 255, 0.1);
                    border: 2px solid rgba(255, 255, 255, 0.3);
                }
                .hero-cta:hover, .hero-secondary:hover { transform: translateY(-4px) scale(1.05); }
                "#}
            </style>
            <img
                src={config::asset("hero.jpg")}
                class="hero-image"
                alt="Let's Build Labs hero image showcasing Web3 and blockchain innovation in Africa"
                loading="eager"
            />
            <div class="hero-shade"></div>

            <div class={classes!("hero-content", reveal(visible, Enter::Rise))}>
                <div class="hero-inner">
                    <div class={reveal(visible, Enter::RiseShort)} style={delay(visible, 300)}>
                        <span class="hero-badge">{"Let's Build Labs"}</span>
                    </div>

                    <h1 class={classes!("hero-title", reveal(visible, Enter::Rise))} style={delay(visible, 500)}>
                        <span>{"The Future Begins"}</span>
                        <span class="gradient-text">{"In Africa"}</span>
                        <span>{"With Web3 Innovation"}</span>
                    </h1>

                    <p class={classes!("hero-subtitle", reveal(visible, Enter::RiseShort))} style={delay(visible, 700)}>
                        {"In the heart of Africa, a revolution is brewing. We're not just building technology – we're crafting the foundation for a new digital era that will transform how an entire continent interacts with the decentralized world."}
                    </p>

                    <div class={classes!("hero-actions", reveal(visible, Enter::RiseShort))} style={delay(visible, 900)}>
                        <a href="#contact" class="hero-cta">{"Join the Revolution"}</a>
                        <a href="#about" class="hero-secondary">{"Read Our Story"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
