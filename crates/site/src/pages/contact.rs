//! Contact: email/GitHub/LinkedIn cards built from personal info, with a
//! copy-to-clipboard affordance for the email address.

use std::time::Duration;

use leptos::*;
use site_ui::{Card, CardGrid, EmptyState, NoticeTone, PageSection, SectionHeader, StatusNotice};

use crate::services::use_site_services;

const COPY_FEEDBACK_MS: u64 = 2000;

#[component]
pub fn ContactPage() -> impl IntoView {
    let services = use_site_services();
    let clipboard = services.clipboard.clone();

    let info = create_local_resource(
        || (),
        move |_| {
            let content = services.content.clone();
            async move { content.personal_info().await }
        },
    );

    let copied = create_rw_signal(false);
    let copy_email = move |email: String| {
        let clipboard = clipboard.clone();
        spawn_local(async move {
            match clipboard.write_text(&email).await {
                Ok(()) => {
                    copied.set(true);
                    set_timeout(move || copied.set(false), Duration::from_millis(COPY_FEEDBACK_MS));
                }
                Err(err) => logging::warn!("copy email failed: {err}"),
            }
        });
    };

    view! {
        <PageSection>
            <SectionHeader
                title="Let's Connect"
                lede="Have a project in mind or want to collaborate? I'm always open to \
                      discussing new opportunities and interesting ideas."
            />

            {move || match info.get() {
                None => view! { <StatusNotice message="Loading…" /> }.into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Could not load contact info. {err}")
                    />
                }
                .into_view(),
                Some(Ok(info)) => {
                    let email = info.email.clone().filter(|email| !email.is_empty());
                    let github = info.socials.github.clone().filter(|url| !url.is_empty());
                    let linkedin = info.socials.linkedin.clone().filter(|url| !url.is_empty());
                    if email.is_none() && github.is_none() && linkedin.is_none() {
                        return view! {
                            <EmptyState message="No contact details available yet." />
                        }
                        .into_view();
                    }
                    let copy_email = copy_email.clone();
                    view! {
                        <CardGrid>
                            {email.map(|email| {
                                let mailto = format!("mailto:{email}");
                                let copy_value = email.clone();
                                view! {
                                    <Card layout_class="contact-card">
                                        <h2>"Email"</h2>
                                        <p>"Send me a message"</p>
                                        <a href=mailto>{email}</a>
                                        <button
                                            type="button"
                                            on:click=move |_| copy_email(copy_value.clone())
                                        >
                                            {move || if copied.get() { "Copied!" } else { "Copy Email" }}
                                        </button>
                                    </Card>
                                }
                            })}
                            {github.map(|url| view! {
                                <Card layout_class="contact-card">
                                    <h2>"GitHub"</h2>
                                    <p>"View my code"</p>
                                    <a href=url.clone() target="_blank" rel="noopener noreferrer">
                                        {url}
                                    </a>
                                </Card>
                            })}
                            {linkedin.map(|url| view! {
                                <Card layout_class="contact-card">
                                    <h2>"LinkedIn"</h2>
                                    <p>"Connect professionally"</p>
                                    <a href=url.clone() target="_blank" rel="noopener noreferrer">
                                        {url}
                                    </a>
                                </Card>
                            })}
                        </CardGrid>
                    }
                    .into_view()
                }
            }}
        </PageSection>
    }
}
