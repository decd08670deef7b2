use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{submit_contact, ContactAction, ContactFormState, Field, HttpRelay, SubmitGuard, SubmitStatus};
use crate::motion::{delay, reveal, Enter};

const SPINNER: &str = "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z";

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub visible: bool,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let visible = props.visible;
    let state = use_reducer(ContactFormState::default);
    let guard = use_state(|| Rc::new(SubmitGuard::default()));
    let relay = use_state(HttpRelay::default);
    let submitting = state.is_submitting();

    let on_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            state.dispatch(ContactAction::Edit(field, value));
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            state.dispatch(ContactAction::Edit(Field::Message, value));
        })
    };

    let onsubmit = {
        let state = state.clone();
        let guard = (*guard).clone();
        let relay = (*relay).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = match state.pending_submission() {
                Some(form) => form,
                None => return,
            };
            state.dispatch(ContactAction::Begin);

            let state = state.clone();
            let guard = guard.clone();
            let relay = relay.clone();
            spawn_local(async move {
                if let Some(action) = submit_contact(&relay, &guard, form).await {
                    state.dispatch(action);
                }
            });
        })
    };

    let banner = match state.status {
        SubmitStatus::Success => html! {
            <div class="form-banner success">
                <p>{"✅ Message sent successfully! We'll get back to you soon."}</p>
            </div>
        },
        SubmitStatus::Error => html! {
            <div class="form-banner error">
                <p>{"❌ Failed to send message. Please try again or email us directly."}</p>
            </div>
        },
        SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
    };

    html! {
        <section id="contact" class="page-section">
            <style>
                {r#"
                .contact-card {
                    border-radius: 1rem;
                    padding: 3rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .contact-form > * + * { margin-top: 1.5rem; }
                .contact-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #030303;
                    margin-bottom: 0.5rem;
                }
                .contact-form input, .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #E5DEFF;
                    border-radius: 0.5rem;
                    background: #F8F6FF;
                    color: #030303;
                    outline: none;
                    font: inherit;
                    transition: all 300ms;
                }
                .contact-form textarea { resize: vertical; }
                .contact-form input:focus, .contact-form textarea:focus {
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #6B46C1;
                }
                .contact-form :disabled { opacity: 0.5; cursor: not-allowed; }
                .form-banner {
                    border-radius: 0.5rem;
                    padding: 1rem;
                    font-weight: 500;
                }
                .form-banner p { margin: 0; }
                .form-banner.success { background: #F0FDF4; border: 1px solid #BBF7D0; color: #166534; }
                .form-banner.error { background: #FEF2F2; border: 1px solid #FECACA; color: #991B1B; }
                .submit-button {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #6B46C1;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 300ms;
                }
                .submit-button:hover:enabled { background: #553C9A; transform: scale(1.02); }
                .submit-button .sending {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .submit-button svg {
                    width: 1.25rem;
                    height: 1.25rem;
                    margin-right: 0.75rem;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .mail-link { color: #6B46C1; font-weight: 600; }
                .mail-link:hover { color: #553C9A; }
                "#}
            </style>
            <div class="section-inner narrow">
                <div class={classes!("section-header", reveal(visible, Enter::Rise))}>
                    <h2>{"Join Our Story"}</h2>
                    <p>
                        {"Every great story needs new chapters, and yours could be next. Whether you're a developer, entrepreneur, or simply someone who believes in Africa's digital future, we want to hear from you. Reach out at "}
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="mail-link">{config::CONTACT_EMAIL}</a>
                        {" or use the form below to start your journey with us."}
                    </p>
                </div>

                <div class={classes!("contact-card", reveal(visible, Enter::Rise))} style={delay(visible, 200)}>
                    <form class="contact-form" {onsubmit}>
                        {banner}

                        <div>
                            <label for="name">{"Full Name"}</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                value={state.form.get(Field::Name).to_string()}
                                oninput={on_input(Field::Name)}
                                required={true}
                                disabled={submitting}
                                placeholder="Enter your full name"
                            />
                        </div>

                        <div>
                            <label for="email">{"Email Address"}</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                value={state.form.get(Field::Email).to_string()}
                                oninput={on_input(Field::Email)}
                                required={true}
                                disabled={submitting}
                                placeholder="Enter your email address"
                            />
                        </div>

                        <div>
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                value={state.form.get(Field::Message).to_string()}
                                oninput={on_message}
                                required={true}
                                disabled={submitting}
                                placeholder="Tell us about your project or inquiry..."
                            />
                        </div>

                        <div>
                            <button type="submit" class="submit-button" disabled={submitting}>
                                {
                                    if submitting {
                                        html! {
                                            <span class="sending">
                                                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                                                    <circle opacity="0.25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                                    <path opacity="0.75" fill="currentColor" d={SPINNER}></path>
                                                </svg>
                                                {"Sending..."}
                                            </span>
                                        }
                                    } else {
                                        html! { {"Send Message"} }
                                    }
                                }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}
