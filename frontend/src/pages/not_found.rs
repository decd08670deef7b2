use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 4rem 1rem;
                    text-align: center;
                }
                .not-found h1 { font-size: 3rem; font-weight: 700; color: #6B46C1; }
                .not-found a { color: #6B46C1; font-weight: 600; }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"The requested page could not be found."}</p>
            <Link<Route> to={Route::Home}>{"Back to Let's Build Labs"}</Link<Route>>
        </main>
    }
}
