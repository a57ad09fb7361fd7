//! Project detail: hero column, tabbed content (Overview / Features /
//! Impact), gallery. The active tab resets whenever the slug changes.

use content_model::{ContentError, ContentValue, Project};
use leptos::*;
use leptos_router::{use_params_map, A};
use site_ui::{
    EmptyState, NoticeTone, PageSection, StatusNotice, TabButton, TabList, TagPill,
};
use view_state::{reduce_tabs, DetailTab, TabAction, TabState};

use crate::services::use_site_services;

fn content_paragraphs(value: &ContentValue) -> View {
    match value {
        ContentValue::Text(text) => view! { <p class="detail-paragraph">{text.clone()}</p> }.into_view(),
        ContentValue::List(items) => view! {
            <ul class="detail-list">
                {items
                    .iter()
                    .map(|item| view! { <li>{item.clone()}</li> })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    }
}

fn overview_panel(project: &Project) -> View {
    let text = project.overview_text().map(str::to_string);
    let list: Vec<String> = project.overview_list().to_vec();
    if text.is_none() && list.is_empty() {
        return view! { <EmptyState message="No overview content yet." /> }.into_view();
    }
    view! {
        {text.map(|text| view! { <p class="detail-paragraph">{text}</p> })}
        {(!list.is_empty()).then(|| view! {
            <h2>"Project Details"</h2>
            {content_paragraphs(&ContentValue::List(list))}
        })}
    }
    .into_view()
}

fn features_panel(project: &Project) -> View {
    let features: Vec<String> = project.features_list().to_vec();
    if features.is_empty() {
        return view! { <EmptyState message="No features content yet." /> }.into_view();
    }
    content_paragraphs(&ContentValue::List(features))
}

fn impact_panel(project: &Project) -> View {
    match project.impact() {
        Some(value) => content_paragraphs(value),
        None => view! { <EmptyState message="No impact content yet." /> }.into_view(),
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let services = use_site_services();
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_default()
    };

    let project = create_local_resource(slug, move |slug: String| {
        let content = services.content.clone();
        async move {
            if slug.is_empty() {
                return Err(ContentError::NotFound);
            }
            content.project_by_slug(&slug).await
        }
    });

    let tabs = create_rw_signal(TabState::default());
    create_effect(move |_| {
        let slug = slug();
        if !slug.is_empty() {
            tabs.update(|state| reduce_tabs(state, TabAction::SubjectChanged(slug)));
        }
    });
    let select = move |tab: DetailTab| tabs.update(|state| reduce_tabs(state, TabAction::Select(tab)));

    view! {
        <PageSection layout_class="project-detail">
            {move || match project.get() {
                None => view! { <StatusNotice message="Loading…" /> }.into_view(),
                Some(Err(ContentError::NotFound)) => view! {
                    <StatusNotice tone=NoticeTone::Error message="Project not found" />
                    <A href="/projects">"Back to Projects"</A>
                }
                .into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Failed to load project. {err}")
                    />
                    <A href="/projects">"Back to Projects"</A>
                }
                .into_view(),
                Some(Ok(project)) => view! {
                    <div class="project-detail-grid">
                        <aside class="project-detail-side">
                            {match project.hero_image() {
                                Some(image) => view! {
                                    <img
                                        class="project-detail-hero"
                                        src=image.to_string()
                                        alt=project.title.clone()
                                        decoding="async"
                                    />
                                }
                                .into_view(),
                                None => view! {
                                    <EmptyState message="No image" />
                                }
                                .into_view(),
                            }}

                            {project.overview_text().map(|intro| view! {
                                <p class="project-detail-intro">{intro.to_string()}</p>
                            })}

                            <div class="project-detail-tags">
                                {project
                                    .tech_stack
                                    .iter()
                                    .cloned()
                                    .map(|tech| view! { <TagPill>{tech}</TagPill> })
                                    .collect_view()}
                            </div>

                            <div class="project-detail-actions">
                                {project.live_url.clone().map(|url| view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">
                                        "Live Demo"
                                    </a>
                                })}
                                {project.github_url.clone().map(|url| view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">
                                        "View Code"
                                    </a>
                                })}
                            </div>
                        </aside>

                        <div class="project-detail-main">
                            <A href="/projects">"Back to Projects"</A>
                            <h1>{project.title.clone()}</h1>

                            <TabList aria_label="Project content">
                                {DetailTab::ALL
                                    .into_iter()
                                    .map(|tab| {
                                        let selected =
                                            Signal::derive(move || tabs.with(|state| state.active == tab));
                                        view! {
                                            <TabButton
                                                selected=selected
                                                on_click=Callback::new(move |_| select(tab))
                                            >
                                                {tab.title()}
                                            </TabButton>
                                        }
                                    })
                                    .collect_view()}
                            </TabList>

                            <div class="project-detail-panel">
                                {
                                    let project = project.clone();
                                    move || match tabs.with(|state| state.active) {
                                        DetailTab::Overview => overview_panel(&project),
                                        DetailTab::Features => features_panel(&project),
                                        DetailTab::Impact => impact_panel(&project),
                                    }
                                }
                            </div>
                        </div>
                    </div>

                    {(project.images.len() > 1).then(|| view! {
                        <div class="project-detail-gallery">
                            <h2>"Gallery"</h2>
                            <div class="project-detail-gallery-grid">
                                {project
                                    .images
                                    .iter()
                                    .skip(1)
                                    .map(|url| view! {
                                        <img
                                            src=url.clone()
                                            alt=format!("{} screenshot", project.title)
                                            loading="lazy"
                                            decoding="async"
                                        />
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })}
                }
                .into_view(),
            }}
        </PageSection>
    }
}
