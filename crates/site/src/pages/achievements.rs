//! Achievements: awards, certifications, and milestones.

use leptos::*;
use site_ui::{Badge, BadgeTone, Card, CardGrid, EmptyState, NoticeTone, PageSection, SectionHeader, StatusNotice};

use crate::services::use_site_services;

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let services = use_site_services();
    let achievements = create_local_resource(
        || (),
        move |_| {
            let content = services.content.clone();
            async move { content.achievements().await }
        },
    );

    view! {
        <PageSection>
            <SectionHeader
                title="Achievements"
                lede="Awards, certifications, and milestones."
            />

            {move || match achievements.get() {
                None => view! { <StatusNotice message="Loading…" /> }.into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Could not load achievements. {err}")
                    />
                }
                .into_view(),
                Some(Ok(achievements)) if achievements.is_empty() => view! {
                    <EmptyState message="No achievements yet." />
                }
                .into_view(),
                Some(Ok(achievements)) => view! {
                    <CardGrid columns=2>
                        <For
                            each=move || achievements.clone()
                            key=|achievement| achievement.id.clone()
                            let:achievement
                        >
                            <Card layout_class="achievement-card">
                                <div class="achievement-card-header">
                                    <h2>{achievement.title.clone()}</h2>
                                    {achievement.year.map(|year| view! {
                                        <Badge tone=BadgeTone::Accent>{year.to_string()}</Badge>
                                    })}
                                </div>
                                {achievement.organization.clone().map(|organization| view! {
                                    <p class="achievement-organization">{organization}</p>
                                })}
                                {achievement.description.clone().map(|description| view! {
                                    <p>{description}</p>
                                })}
                                {(!achievement.highlights.is_empty()).then(|| view! {
                                    <ul class="achievement-highlights">
                                        {achievement
                                            .highlights
                                            .iter()
                                            .map(|highlight| view! { <li>{highlight.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                })}
                                {achievement.certificate_url.clone().map(|url| view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">
                                        "View Certificate"
                                    </a>
                                })}
                            </Card>
                        </For>
                    </CardGrid>
                }
                .into_view(),
            }}
        </PageSection>
    }
}
