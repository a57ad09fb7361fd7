//! Projects index: card per project, linking into the detail page.

use leptos::*;
use leptos_router::A;
use site_ui::{Card, CardGrid, EmptyState, NoticeTone, PageSection, SectionHeader, StatusNotice, TagPill};

use crate::services::use_site_services;

const VISIBLE_TAGS: usize = 4;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let services = use_site_services();
    let projects = create_local_resource(
        || (),
        move |_| {
            let content = services.content.clone();
            async move { content.projects().await }
        },
    );

    view! {
        <PageSection>
            <SectionHeader title="Projects" lede="Explore my work and side projects." />

            {move || match projects.get() {
                None => view! { <StatusNotice message="Loading…" /> }.into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Could not load projects. {err}")
                    />
                }
                .into_view(),
                Some(Ok(projects)) if projects.is_empty() => {
                    view! { <EmptyState message="No projects yet." /> }.into_view()
                }
                Some(Ok(projects)) => view! {
                    <CardGrid>
                        <For each=move || projects.clone() key=|project| project.slug.clone() let:project>
                            <A href=format!("/projects/{}", project.slug)>
                                <Card layout_class="project-card">
                                    {project.hero_image().map(|image| view! {
                                        <img
                                            data-ui-slot="cover"
                                            src=image.to_string()
                                            alt=project.title.clone()
                                            loading="lazy"
                                            decoding="async"
                                        />
                                    })}
                                    <h2>{project.title.clone()}</h2>
                                    <p>{project.description.clone()}</p>
                                    <div class="project-card-tags">
                                        {project
                                            .tech_stack
                                            .iter()
                                            .take(VISIBLE_TAGS)
                                            .cloned()
                                            .map(|tech| view! { <TagPill>{tech}</TagPill> })
                                            .collect_view()}
                                    </div>
                                </Card>
                            </A>
                        </For>
                    </CardGrid>
                }
                .into_view(),
            }}
        </PageSection>
    }
}
