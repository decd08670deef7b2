use yew::prelude::*;

use crate::config;
use crate::content::PROJECTS;
use crate::motion::{delay, reveal, Enter};

const ARROW: &str = "M17 8l4 4m0 0l-4 4m4-4H3";

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub visible: bool,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let visible = props.visible;

    html! {
        <section id="projects" class="page-section">
            <style>
                {r#"
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                }
                .project-card.is-visible:hover {
                    transform: translateY(-0.75rem) scale(1.02);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .project-card img {
                    height: 20rem;
                    width: 100%;
                    object-fit: cover;
                    transition: transform 700ms;
                }
                .project-card:hover img { transform: scale(1.1); }
                .project-body { padding: 1.5rem; }
                .project-body h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #030303;
                    margin-bottom: 0.75rem;
                }
                .learn-more {
                    display: inline-flex;
                    align-items: center;
                    color: #6B46C1;
                    font-weight: 600;
                    text-decoration: none;
                }
                .learn-more svg {
                    width: 1rem;
                    height: 1rem;
                    margin-left: 0.5rem;
                    transition: transform 300ms;
                }
                .project-card:hover .learn-more svg { transform: translateX(0.25rem); }
                "#}
            </style>
            <div class="section-inner">
                <div class={classes!("section-header", reveal(visible, Enter::Rise))}>
                    <h2>{"Transforming Ideas into Reality"}</h2>
                    <p>{"From vision to execution. These are the groundbreaking projects where our dreams take digital form, each one a stepping stone toward Africa's Web3 future."}</p>
                </div>

                <div class="card-grid">
                    {
                        for PROJECTS.iter().zip(1u32..).map(|(project, n)| html! {
                            <div class={classes!("project-card", reveal(visible, Enter::Rise))} style={delay(visible, n * 100)}>
                                <img src={config::asset(project.image)} alt={project.image_alt} />
                                <div class="project-body">
                                    <h3>{project.title}</h3>
                                    <p>{project.summary}</p>
                                    <a href={project.url} target="_blank" rel="noopener noreferrer" class="learn-more">
                                        {"Learn More"}
                                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={ARROW} />
                                        </svg>
                                    </a>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>
        </section>
    }
}
