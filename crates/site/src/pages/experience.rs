//! Work experience: entry cards on the left, resume panel on the right.

use leptos::*;
use site_ui::{Card, EmptyState, NoticeTone, PageSection, SectionHeader, StatusNotice};

use crate::services::use_site_services;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats an ISO date string as "Mon YYYY". Unparseable input is shown
/// verbatim rather than dropped.
fn format_end_date(iso: &str) -> String {
    let mut parts = iso.split('-');
    let year = parts
        .next()
        .filter(|year| year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()));
    let month = parts
        .next()
        .and_then(|month| month.parse::<usize>().ok())
        .filter(|month| (1..=12).contains(month));
    match (year, month) {
        (Some(year), Some(month)) => format!("{} {year}", MONTH_ABBREVIATIONS[month - 1]),
        _ => iso.to_string(),
    }
}

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let services = use_site_services();
    let external_urls = services.external_urls.clone();

    let page_data = create_local_resource(
        || (),
        move |_| {
            let content = services.content.clone();
            async move {
                let entries = content.experience().await?;
                let resume = content.personal_info().await?.resume;
                Ok::<_, content_model::ContentError>((entries, resume))
            }
        },
    );

    let open_resume = move |url: String| {
        let external_urls = external_urls.clone();
        spawn_local(async move {
            if let Err(err) = external_urls.open_url(&url).await {
                logging::warn!("resume open failed: {err}");
            }
        });
    };

    view! {
        <PageSection>
            <SectionHeader
                title="Work Experience"
                lede="My professional journey and accomplishments."
            />

            {move || match page_data.get() {
                None => view! { <StatusNotice message="Loading…" /> }.into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Could not load experience. {err}")
                    />
                }
                .into_view(),
                Some(Ok((entries, resume))) => {
                    let open_resume = open_resume.clone();
                    view! {
                        <div class="experience-grid">
                            <div class="experience-entries">
                                {entries.is_empty().then(|| view! {
                                    <EmptyState message="No experience entries yet." />
                                })}
                                {entries
                                    .into_iter()
                                    .map(|entry| view! {
                                        <Card layout_class="experience-card">
                                            <div class="experience-card-header">
                                                <div>
                                                    <h2>{entry.organization.clone()}</h2>
                                                    <p class="experience-role">{entry.title.clone()}</p>
                                                    {entry.kind.clone().map(|kind| view! {
                                                        <p class="experience-kind">{kind}</p>
                                                    })}
                                                </div>
                                                <div class="experience-meta">
                                                    {entry.end_date.as_deref().map(|date| view! {
                                                        <span>{format_end_date(date)}</span>
                                                    })}
                                                    {entry.location.clone().map(|location| view! {
                                                        <span>{location}</span>
                                                    })}
                                                </div>
                                            </div>
                                            {entry.description.clone().map(|description| view! {
                                                <p>{description}</p>
                                            })}
                                            {(!entry.responsibilities.is_empty()).then(|| view! {
                                                <h3>"Key Responsibilities & Achievements"</h3>
                                                <ul class="experience-responsibilities">
                                                    {entry
                                                        .responsibilities
                                                        .iter()
                                                        .map(|item| view! { <li>{item.clone()}</li> })
                                                        .collect_view()}
                                                </ul>
                                            })}
                                            {entry.certificate_url.clone().map(|url| view! {
                                                <a href=url target="_blank" rel="noopener noreferrer">
                                                    "View Certificate"
                                                </a>
                                            })}
                                        </Card>
                                    })
                                    .collect_view()}
                            </div>

                            <aside class="experience-resume">
                                <Card layout_class="experience-resume-card">
                                    <h2>"Resume"</h2>
                                    <p>"Professional experience & skills"</p>
                                    {match resume.clone() {
                                        Some(url) => {
                                            let open_resume = open_resume.clone();
                                            let open_url = url.clone();
                                            view! {
                                                <iframe src=url title="Resume preview"></iframe>
                                                <button
                                                    type="button"
                                                    on:click=move |_| open_resume(open_url.clone())
                                                >
                                                    "View Resume"
                                                </button>
                                            }
                                            .into_view()
                                        }
                                        None => view! {
                                            <EmptyState message="Resume link is not available yet." />
                                        }
                                        .into_view(),
                                    }}
                                </Card>
                            </aside>
                        </div>
                    }
                    .into_view()
                }
            }}
        </PageSection>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::format_end_date;

    #[test]
    fn iso_dates_format_as_month_and_year() {
        assert_eq!(format_end_date("2024-03-15T00:00:00.000Z"), "Mar 2024");
        assert_eq!(format_end_date("2021-12-01"), "Dec 2021");
    }

    #[test]
    fn unparseable_dates_pass_through_verbatim() {
        assert_eq!(format_end_date("spring 2020"), "spring 2020");
        assert_eq!(format_end_date(""), "");
        assert_eq!(format_end_date("2024-00-01"), "2024-00-01");
    }
}
