use yew::prelude::*;

use crate::config;
use crate::content::Partner;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub partners: &'static [Partner],
    /// Seconds for one full pass of the strip.
    #[prop_or(20)]
    pub duration: u32,
    #[prop_or(true)]
    pub pause_on_hover: bool,
}

/// Endless horizontal strip of partner logos.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let logo = |partner: &Partner| {
        html! {
            <div class="marquee-item">
                <img src={config::asset(partner.logo)} alt={partner.name} />
            </div>
        }
    };

    // the track holds two copies so the loop has no visible seam
    html! {
        <div class={classes!("marquee", props.pause_on_hover.then_some("pausable"))}>
            <style>
                {r#"
                .marquee {
                    overflow: hidden;
                    display: flex;
                    padding: 2rem 0;
                }
                .marquee-track {
                    display: flex;
                    flex-shrink: 0;
                    min-width: 100%;
                    animation-name: marquee-scroll;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                .marquee.pausable:hover .marquee-track { animation-play-state: paused; }
                .marquee-item {
                    display: flex;
                    padding: 0 2.5rem;
                }
                .marquee-item img {
                    height: 4rem;
                    width: auto;
                    margin: auto 0;
                    object-fit: contain;
                    filter: grayscale(100%);
                    transition: filter 300ms;
                }
                .marquee-item img:hover { filter: none; }
                @keyframes marquee-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-100%); }
                }
                "#}
            </style>
            <div class="marquee-track" style={format!("animation-duration: {}s;", props.duration)}>
                { for props.partners.iter().map(logo) }
            </div>
            <div class="marquee-track" aria-hidden="true" style={format!("animation-duration: {}s;", props.duration)}>
                { for props.partners.iter().map(logo) }
            </div>
        </div>
    }
}
