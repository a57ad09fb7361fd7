//! Trip detail: cover hero, day-by-day timeline, optional gallery.

use content_model::{normalize_image_url, ContentError, TripDay};
use leptos::*;
use leptos_router::{use_params_map, A};
use site_ui::{Badge, BadgeTone, EmptyState, NoticeTone, PageSection, StatusNotice};

use crate::services::use_site_services;

fn day_number(day: &TripDay, position: usize) -> u32 {
    day.day_number.unwrap_or(position as u32 + 1)
}

#[component]
pub fn TravelDetailPage() -> impl IntoView {
    let services = use_site_services();
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_default()
    };

    let trip = create_local_resource(slug, move |slug: String| {
        let content = services.content.clone();
        async move {
            if slug.is_empty() {
                return Err(ContentError::NotFound);
            }
            content.trip_by_slug(&slug).await
        }
    });

    view! {
        <PageSection layout_class="travel-detail">
            {move || match trip.get() {
                None => view! { <StatusNotice message="Loading…" /> }.into_view(),
                Some(Err(ContentError::NotFound)) => view! {
                    <StatusNotice tone=NoticeTone::Error message="Trip not found" />
                    <A href="/travel">"Back to Travel"</A>
                }
                .into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Failed to load trip. {err}")
                    />
                    <A href="/travel">"Back to Travel"</A>
                }
                .into_view(),
                Some(Ok(trip)) => view! {
                    <section class="travel-detail-hero">
                        {normalize_image_url(trip.cover_image.as_deref()).map(|cover| view! {
                            <img
                                src=cover
                                alt=trip.title.clone()
                                decoding="async"
                                referrerpolicy="no-referrer"
                            />
                        })}
                        <div class="travel-detail-hero-copy">
                            <h1>{trip.title.clone()}</h1>
                            <div class="travel-detail-badges">
                                {trip.location.name.clone().map(|name| {
                                    let place = match trip.location.country.clone() {
                                        Some(country) => format!("{name}, {country}"),
                                        None => name,
                                    };
                                    view! { <Badge>{place}</Badge> }
                                })}
                                {trip.duration.clone().map(|duration| view! {
                                    <Badge>{duration}</Badge>
                                })}
                                {trip.trip_type_label().map(|label| view! {
                                    <Badge tone=BadgeTone::Accent>{label}</Badge>
                                })}
                            </div>
                            {trip.short_description.clone().map(|description| view! {
                                <p>{description}</p>
                            })}
                        </div>
                    </section>

                    <A href="/travel">"Back to Travel"</A>

                    {if trip.days.is_empty() {
                        view! {
                            <EmptyState message="No day-by-day entries for this trip yet." />
                        }
                        .into_view()
                    } else {
                        view! {
                            <ol class="travel-detail-timeline">
                                {trip
                                    .days
                                    .iter()
                                    .enumerate()
                                    .map(|(position, day)| view! {
                                        <li class="travel-detail-day">
                                            <span class="travel-detail-day-number">
                                                {day_number(day, position)}
                                            </span>
                                            <div class="travel-detail-day-card">
                                                {day.title.clone().map(|title| view! { <h2>{title}</h2> })}
                                                {day.description.clone().map(|description| view! {
                                                    <p>{description}</p>
                                                })}
                                                {(!day.highlights.is_empty()).then(|| view! {
                                                    <ul class="travel-detail-highlights">
                                                        {day
                                                            .highlights
                                                            .iter()
                                                            .map(|highlight| view! { <li>{highlight.clone()}</li> })
                                                            .collect_view()}
                                                    </ul>
                                                })}
                                                {(!day.images.is_empty()).then(|| view! {
                                                    <div class="travel-detail-day-images">
                                                        {day
                                                            .images
                                                            .iter()
                                                            .map(|image| view! {
                                                                <img
                                                                    src=image.clone()
                                                                    alt=format!("Day {}", day_number(day, position))
                                                                    loading="lazy"
                                                                    decoding="async"
                                                                    referrerpolicy="no-referrer"
                                                                />
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                })}
                                            </div>
                                        </li>
                                    })
                                    .collect_view()}
                            </ol>
                        }
                        .into_view()
                    }}

                    {(!trip.gallery.is_empty()).then(|| view! {
                        <div class="travel-detail-gallery">
                            <h2>"Gallery"</h2>
                            <div class="travel-detail-gallery-grid">
                                {trip
                                    .gallery
                                    .iter()
                                    .map(|image| view! {
                                        <img
                                            src=image.clone()
                                            alt="Trip gallery"
                                            loading="lazy"
                                            decoding="async"
                                            referrerpolicy="no-referrer"
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
