//! Landing page: profile hero built from the personal-info document.

use leptos::*;
use leptos_router::A;
use site_ui::{NoticeTone, PageSection, StatusNotice};

use crate::services::use_site_services;

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_site_services();
    let info = create_local_resource(
        || (),
        move |_| {
            let content = services.content.clone();
            async move { content.personal_info().await }
        },
    );

    view! {
        <PageSection layout_class="home-hero">
            {move || match info.get() {
                None => view! {
                    <StatusNotice message="Loading…" />
                }
                .into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Could not load profile: {err}")
                    />
                }
                .into_view(),
                Some(Ok(info)) => {
                    let initials = info.initials();
                    view! {
                        <p class="home-kicker">"Welcome to my Portfolio"</p>

                        {match info.profile_image.clone() {
                            Some(url) => view! {
                                <img class="home-avatar" src=url alt=info.name.clone() />
                            }
                            .into_view(),
                            None => view! {
                                <span class="home-avatar home-avatar-fallback" aria-hidden="true">
                                    {initials}
                                </span>
                            }
                            .into_view(),
                        }}

                        <h1>{format!("Hi, I'm {}", info.name)}</h1>
                        {info
                            .bio
                            .clone()
                            .map(|bio| view! { <p class="home-bio">{bio}</p> })}

                        <div class="home-actions">
                            <span class="home-action-primary">
                                <A href="/projects">"View My Work"</A>
                            </span>
                            <span class="home-action-secondary">
                                <A href="/terminal">"Terminal"</A>
                            </span>
                            {info.resume.clone().map(|resume| view! {
                                <a
                                    class="home-action-secondary"
                                    href=resume
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Resume"
                                </a>
                            })}
                        </div>

                        <div class="home-socials">
                            {info.socials.github.clone().map(|github| view! {
                                <a href=github target="_blank" rel="noopener noreferrer">
                                    "GitHub"
                                </a>
                            })}
                            {info.socials.linkedin.clone().map(|linkedin| view! {
                                <a href=linkedin target="_blank" rel="noopener noreferrer">
                                    "LinkedIn"
                                </a>
                            })}
                        </div>
                    }
                    .into_view()
                }
            }}
        </PageSection>
    }
}
