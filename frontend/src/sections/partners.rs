use yew::prelude::*;

use crate::components::marquee::Marquee;
use crate::content::PARTNERS;
use crate::motion::{reveal, Enter};

#[derive(Properties, PartialEq)]
pub struct PartnersProps {
    pub visible: bool,
}

#[function_component(Partners)]
pub fn partners(props: &PartnersProps) -> Html {
    html! {
        <section id="partners" class="page-section">
            <div class="section-inner">
                <div class={classes!("section-header", reveal(props.visible, Enter::Rise))}>
                    <h2>{"Building Alliances"}</h2>
                    <p>{"No revolution succeeds in isolation. These visionary organizations joined our mission to transform Africa's digital landscape, bringing their expertise and resources to amplify our impact."}</p>
                </div>
                <Marquee partners={PARTNERS} />
            </div>
        </section>
    }
}
