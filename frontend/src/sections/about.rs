use yew::prelude::*;

use crate::content::{ADVANTAGES, STATS, VALUES};
use crate::motion::{delay, reveal, Enter};

const CHECK: &str = "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z";

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub visible: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let visible = props.visible;

    html! {
        <section id="about" class="page-section">
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 3rem;
                    align-items: center;
                    margin-bottom: 4rem;
                }
                .about-grid h3 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .about-grid p { line-height: 1.625; margin-bottom: 1.5rem; }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .stat {
                    text-align: center;
                    padding: 1rem;
                    background: #ffffff;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .stat h4 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #6B46C1;
                    margin-bottom: 0.5rem;
                }
                .stat p { color: #6B7280; font-size: 0.875rem; margin: 0; }
                .advantage-card {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom right, #6B46C1, #9333EA);
                    border-radius: 1rem;
                    padding: 2rem;
                    color: #ffffff;
                }
                .advantage-card h4 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .advantage-card ul { list-style: none; padding: 0; }
                .advantage-card li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .advantage-card svg { width: 1.25rem; height: 1.25rem; flex-shrink: 0; }
                .values {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                }
                .value {
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    transition: transform 300ms;
                }
                .value:hover { transform: translateY(-0.5rem); }
                .value-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: #E5DEFF;
                    color: #6B46C1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .value-icon svg { width: 2rem; height: 2rem; }
                .value h4 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
                "#}
            </style>
            <div class="section-inner wide">
                <div class={classes!("section-header", reveal(visible, Enter::Rise))}>
                    <h2>{"Our Origin Story"}</h2>
                    <p>{"Every great movement starts with a vision. Ours began with seeing Africa's untapped potential in the Web3 revolution and realizing that the continent needed its own champions to lead the charge."}</p>
                </div>

                <div class="about-grid">
                    <div class={reveal(visible, Enter::FromLeft)} style={delay(visible, 200)}>
                        <h3>{"The Mission That Drives Us"}</h3>
                        <p>{"We recognized that Africa needed more than just access to Web3 technology – it needed infrastructure built by Africans, for Africans. Our mission became clear: create a robust ecosystem of tools and services that would make blockchain technology as accessible as mobile banking has become across the continent."}</p>
                        <p>{"But we knew we couldn't do this alone. That's why we're building more than just technology – we're cultivating the \"Let's Build DAO\" community, a collaborative space where African developers, entrepreneurs, and visionaries come together to shape the continent's digital future."}</p>

                        <div class="stats">
                            {
                                for STATS.iter().map(|stat| html! {
                                    <div class="stat">
                                        <h4>{stat.figure}</h4>
                                        <p>{stat.label}</p>
                                    </div>
                                })
                            }
                        </div>
                    </div>

                    <div class={reveal(visible, Enter::FromRight)} style={delay(visible, 400)}>
                        <div class="advantage-card">
                            <h4>{"Our African Advantage"}</h4>
                            <ul>
                                {
                                    for ADVANTAGES.iter().map(|advantage| html! {
                                        <li>
                                            <svg fill="currentColor" viewBox="0 0 20 20">
                                                <path fill-rule="evenodd" d={CHECK} clip-rule="evenodd" />
                                            </svg>
                                            <span>{*advantage}</span>
                                        </li>
                                    })
                                }
                            </ul>
                        </div>
                    </div>
                </div>

                <div class={classes!("values", reveal(visible, Enter::Rise))} style={delay(visible, 600)}>
                    {
                        for VALUES.iter().map(|value| html! {
                            <div class="value">
                                <div class="value-icon">
                                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={value.icon} />
                                    </svg>
                                </div>
                                <h4>{value.title}</h4>
                                <p>{value.blurb}</p>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
