//! Travel index: rotating hero over the derived slide sequence, then the
//! trip card grid.

use std::time::Duration;

use content_model::derive_hero_slides;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use leptos_router::A;
use site_ui::{
    Badge, BadgeTone, Card, CardGrid, EmptyState, HeroDots, HeroFrame, NoticeTone, PageSection,
    SectionHeader, StatusNotice,
};
use view_state::{reduce_hero, HeroAction, HeroState, HERO_ROTATION_INTERVAL_MS};

use crate::services::use_site_services;

/// Sequence key used when no trip is available to name the hero sequence.
const FALLBACK_SEQUENCE_KEY: &str = "travel-index";

#[component]
pub fn TravelPage() -> impl IntoView {
    let services = use_site_services();

    let trips = create_local_resource(
        || (),
        {
            let content = services.content.clone();
            move |_| {
                let content = content.clone();
                async move { content.trips().await }
            }
        },
    );
    // The main background image is a soft dependency: failures just drop the
    // last hero fallback.
    let main_image = create_local_resource(
        || (),
        {
            let content = services.content.clone();
            move |_| {
                let content = content.clone();
                async move { content.my_life().await.ok().and_then(|my_life| my_life.main_image) }
            }
        },
    );

    let hero = create_rw_signal(HeroState::default());
    create_effect(move |_| {
        let Some(Ok(trips)) = trips.get() else {
            return;
        };
        let main_image = main_image.get().flatten();
        let slides = derive_hero_slides(&trips, main_image.as_deref());
        let sequence_key = trips
            .first()
            .map(|trip| trip.slug.clone())
            .unwrap_or_else(|| FALLBACK_SEQUENCE_KEY.to_string());
        hero.update(|state| {
            reduce_hero(
                state,
                HeroAction::SlidesResolved {
                    sequence_key,
                    slides,
                },
            )
        });
    });

    // One cancelable interval handle, re-armed only when the enabled flag
    // flips and released on page teardown.
    let rotation_enabled = create_memo(move |_| hero.with(HeroState::timer_enabled));
    let interval = store_value(None::<IntervalHandle>);
    let clear_interval = move || {
        if let Some(handle) = interval.get_value() {
            handle.clear();
            interval.set_value(None);
        }
    };
    create_effect(move |_| {
        let enabled = rotation_enabled.get();
        clear_interval();
        if enabled {
            if let Ok(handle) = set_interval_with_handle(
                move || hero.update(|state| reduce_hero(state, HeroAction::Tick)),
                Duration::from_millis(HERO_ROTATION_INTERVAL_MS),
            ) {
                interval.set_value(Some(handle));
            }
        }
    });
    on_cleanup(clear_interval);

    let slide_count = Signal::derive(move || hero.with(HeroState::len));
    let current_slide_index =
        Signal::derive(move || hero.with(|state| state.current_index().unwrap_or(0)));
    let jump = Callback::new(move |index: usize| {
        hero.update(|state| reduce_hero(state, HeroAction::JumpTo(index)))
    });

    view! {
        <PageSection>
            <Show when=move || hero.with(|state| !state.is_empty()) fallback=|| ()>
                <div class="travel-hero">
                    {move || {
                        hero.with(|state| state.current_slide().cloned()).map(|slide| {
                            view! {
                                <HeroFrame image=slide.image.clone() alt=slide.heading.clone()>
                                    {slide.subheading.clone().map(|subheading| view! {
                                        <p data-ui-slot="kicker">{subheading}</p>
                                    })}
                                    <h1>{slide.heading.clone()}</h1>
                                    {slide.description.clone().map(|description| view! {
                                        <p data-ui-slot="description">{description}</p>
                                    })}
                                </HeroFrame>
                            }
                        })
                    }}
                    <Show when=move || hero.with(HeroState::timer_enabled) fallback=|| ()>
                        <div class="travel-hero-controls">
                            <button
                                type="button"
                                aria-label="Previous slide"
                                on:click=move |_| hero.update(|state| reduce_hero(state, HeroAction::Prev))
                            >
                                "‹"
                            </button>
                            <HeroDots count=slide_count current=current_slide_index on_select=jump />
                            <button
                                type="button"
                                aria-label="Next slide"
                                on:click=move |_| hero.update(|state| reduce_hero(state, HeroAction::Next))
                            >
                                "›"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>

            <SectionHeader
                title="Travel Journal"
                lede="Places I've visited and journeys I want to remember."
            />

            {move || match trips.get() {
                None => view! { <StatusNotice message="Loading…" /> }.into_view(),
                Some(Err(err)) => view! {
                    <StatusNotice
                        tone=NoticeTone::Error
                        message=format!("Could not load travel entries. {err}")
                    />
                }
                .into_view(),
                Some(Ok(trips)) if trips.is_empty() => view! {
                    <EmptyState message="No travel entries yet." />
                }
                .into_view(),
                Some(Ok(trips)) => view! {
                    <CardGrid>
                        <For each=move || trips.clone() key=|trip| trip.slug.clone() let:trip>
                            <A href=format!("/travel/{}", trip.slug)>
                                <Card layout_class="travel-card">
                                    {trip.cover_image.clone().and_then(|cover| {
                                        content_model::normalize_image_url(Some(cover.as_str()))
                                    }).map(|cover| view! {
                                        <img
                                            data-ui-slot="cover"
                                            src=cover
                                            alt=trip.title.clone()
                                            loading="lazy"
                                            decoding="async"
                                            referrerpolicy="no-referrer"
                                        />
                                    })}
                                    <div class="travel-card-header">
                                        <h2>{trip.title.clone()}</h2>
                                        {trip.trip_type_label().map(|label| view! {
                                            <Badge>{label}</Badge>
                                        })}
                                    </div>
                                    {trip.location.name.clone().map(|name| view! {
                                        <Badge tone=BadgeTone::Accent>{name}</Badge>
                                    })}
                                    {trip.duration.clone().map(|duration| view! {
                                        <p class="travel-card-duration">{duration}</p>
                                    })}
                                    {trip.short_description.clone().map(|description| view! {
                                        <p class="travel-card-description">{description}</p>
                                    })}
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
