use yew::prelude::*;

use crate::content::{Member, Social, TEAM};
use crate::motion::{delay, reveal, Enter};

fn icon(social: Social) -> Html {
    match social {
        Social::LinkedIn => html! {
            <svg fill="currentColor" viewBox="0 0 20 20">
                <path fill-rule="evenodd" clip-rule="evenodd" d="M16.338 16.338H13.67V12.16c0-.995-.017-2.277-1.387-2.277-1.39 0-1.601 1.086-1.601 2.207v4.248H8.014v-8.59h2.559v1.174h.037c.356-.675 1.227-1.387 2.526-1.387 2.703 0 3.203 1.778 3.203 4.092v4.711zM5.005 6.575a1.548 1.548 0 11-.003-3.096 1.548 1.548 0 01.003 3.096zm-1.337 9.763H6.34v-8.59H3.667v8.59zM17.668 1H2.328C1.595 1 1 1.581 1 2.298v15.403C1 18.418 1.595 19 2.328 19h15.34c.734 0 1.332-.582 1.332-1.299V2.298C19 1.581 18.402 1 17.668 1z" />
            </svg>
        },
        Social::X => html! {
            <svg fill="currentColor" viewBox="0 0 20 20">
                <path d="M6.29 18.251c7.547 0 11.675-6.253 11.675-11.675 0-.178 0-.355-.012-.53A8.348 8.348 0 0020 3.92a8.19 8.19 0 01-2.357.646 4.118 4.118 0 001.804-2.27 8.224 8.224 0 01-2.605.996 4.107 4.107 0 00-6.993 3.743 11.65 11.65 0 01-8.457-4.287 4.106 4.106 0 001.27 5.477A4.073 4.073 0 01.8 7.713v.052a4.105 4.105 0 003.292 4.022 4.095 4.095 0 01-1.853.07 4.108 4.108 0 003.834 2.85A8.233 8.233 0 010 16.407a11.616 11.616 0 006.29 1.84" />
            </svg>
        },
        Social::GitHub => html! {
            <svg fill="currentColor" viewBox="0 0 20 20">
                <path fill-rule="evenodd" clip-rule="evenodd" d="M10 0C4.477 0 0 4.484 0 10.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0110 4.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.203 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.942.359.31.678.921.678 1.856 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0020 10.017C20 4.484 15.522 0 10 0z" />
            </svg>
        },
    }
}

fn member_card(member: &Member, visible: bool, millis: u32) -> Html {
    html! {
        <div class={classes!("member-card", reveal(visible, Enter::Rise))} style={delay(visible, millis)}>
            <div class="member-avatar">{member.initials}</div>
            <h3>{member.name}</h3>
            {
                match member.role {
                    Some(role) => html! { <p class="member-role">{role}</p> },
                    None => html! {},
                }
            }
            <div class="member-links">
                {
                    for member.links.iter().map(|(social, href)| html! {
                        <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={social.label()}>
                            { icon(*social) }
                        </a>
                    })
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub visible: bool,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    let visible = props.visible;

    html! {
        <section id="team" class="page-section">
            <style>
                {r#"
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 2rem;
                }
                .member-card {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .member-card.is-visible:hover {
                    transform: translateY(-0.75rem) scale(1.02);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .member-avatar {
                    width: 6rem;
                    height: 6rem;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: linear-gradient(to bottom right, #6B46C1, #9333EA);
                    color: #ffffff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 300ms;
                }
                .member-card:hover .member-avatar { transform: scale(1.1); }
                .member-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #030303;
                    margin-bottom: 0.5rem;
                }
                .member-role { color: #6B46C1; font-weight: 600; margin-bottom: 0.75rem; }
                .member-links {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .member-links a { color: #6B46C1; }
                .member-links a:hover { color: #553C9A; }
                .member-links svg { width: 1.25rem; height: 1.25rem; }
                "#}
            </style>
            <div class="section-inner">
                <div class={classes!("section-header", reveal(visible, Enter::Rise))}>
                    <h2>{"Meet The Visionaries"}</h2>
                    <p>{"Behind every revolution are the brave souls who dare to dream differently. Meet the architects of Africa's Web3 transformation - each bringing unique expertise to our shared mission."}</p>
                </div>

                <div class="team-grid">
                    { for TEAM.iter().zip(1u32..).map(|(member, n)| member_card(member, visible, n * 100)) }
                </div>
            </div>
        </section>
    }
}
