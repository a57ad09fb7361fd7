//! Hero slide derivation for the travel index page.
//!
//! The rotating hero prefers a trip's curated slide deck and falls back to
//! the trip cover image, then to the site-wide main image, so the page still
//! renders a hero when no deck has been authored yet.

use view_state::{presentable_slides, Slide};

use crate::records::TravelTrip;

const DEFAULT_HERO_HEADING: &str = "Travel Journal";
const DEFAULT_HERO_DESCRIPTION: &str = "Places I've visited and journeys I want to remember.";

/// Trims an image URL, treating blank strings as missing.
pub fn normalize_image_url(url: Option<&str>) -> Option<String> {
    let trimmed = url?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Derives the hero slide sequence for the travel index.
///
/// Order of preference: the first trip's curated `heroSlides` (normalized and
/// filtered to presentable slides); else a single slide from the trip's cover
/// image or `main_image`; else, with no trips at all, a single default slide
/// from `main_image`. Returns an empty sequence when no usable image exists.
pub fn derive_hero_slides(trips: &[TravelTrip], main_image: Option<&str>) -> Vec<Slide> {
    let Some(primary) = trips.first() else {
        return normalize_image_url(main_image)
            .map(|image| {
                vec![Slide {
                    image,
                    heading: DEFAULT_HERO_HEADING.to_string(),
                    subheading: None,
                    description: Some(DEFAULT_HERO_DESCRIPTION.to_string()),
                }]
            })
            .unwrap_or_default();
    };

    if !primary.hero_slides.is_empty() {
        let curated = presentable_slides(
            primary
                .hero_slides
                .iter()
                .map(|slide| Slide {
                    image: normalize_image_url(Some(&slide.image)).unwrap_or_default(),
                    heading: slide.heading.clone(),
                    subheading: slide.subheading.clone(),
                    description: slide.description.clone(),
                })
                .collect(),
        );
        if !curated.is_empty() {
            return curated;
        }
    }

    let fallback_image = normalize_image_url(primary.cover_image.as_deref())
        .or_else(|| normalize_image_url(main_image));
    let Some(image) = fallback_image else {
        return Vec::new();
    };

    let heading = if primary.title.is_empty() {
        DEFAULT_HERO_HEADING.to_string()
    } else {
        primary.title.clone()
    };
    vec![Slide {
        image,
        heading,
        subheading: primary.location.name.clone(),
        description: Some(
            primary
                .short_description
                .clone()
                .unwrap_or_else(|| DEFAULT_HERO_DESCRIPTION.to_string()),
        ),
    }]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::records::TripLocation;

    fn trip_with_slides(slides: Vec<Slide>) -> TravelTrip {
        TravelTrip {
            slug: "kyoto".to_string(),
            title: "Kyoto in Autumn".to_string(),
            cover_image: Some("https://img.example/cover.webp".to_string()),
            short_description: Some("Five days of temples.".to_string()),
            location: TripLocation {
                name: Some("Kyoto".to_string()),
                country: Some("Japan".to_string()),
            },
            hero_slides: slides,
            ..TravelTrip::default()
        }
    }

    #[test]
    fn normalize_trims_and_rejects_blank_urls() {
        assert_eq!(normalize_image_url(None), None);
        assert_eq!(normalize_image_url(Some("   ")), None);
        assert_eq!(
            normalize_image_url(Some("  https://img.example/a.webp  ")),
            Some("https://img.example/a.webp".to_string())
        );
    }

    #[test]
    fn curated_slides_win_over_cover_image() {
        let trips = vec![trip_with_slides(vec![
            Slide {
                image: " https://img.example/1.webp ".to_string(),
                heading: "Fushimi Inari".to_string(),
                subheading: None,
                description: None,
            },
            Slide {
                image: String::new(),
                heading: "Broken slide".to_string(),
                subheading: None,
                description: None,
            },
        ])];

        let slides = derive_hero_slides(&trips, Some("https://img.example/bg.webp"));
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].image, "https://img.example/1.webp");
        assert_eq!(slides[0].heading, "Fushimi Inari");
    }

    #[test]
    fn cover_image_fallback_builds_single_slide_from_trip_fields() {
        let trips = vec![trip_with_slides(Vec::new())];

        let slides = derive_hero_slides(&trips, None);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].image, "https://img.example/cover.webp");
        assert_eq!(slides[0].heading, "Kyoto in Autumn");
        assert_eq!(slides[0].subheading.as_deref(), Some("Kyoto"));
        assert_eq!(slides[0].description.as_deref(), Some("Five days of temples."));
    }

    #[test]
    fn main_image_backstops_a_trip_without_cover() {
        let mut trip = trip_with_slides(Vec::new());
        trip.cover_image = None;

        let slides = derive_hero_slides(&[trip], Some("https://img.example/bg.webp"));
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].image, "https://img.example/bg.webp");
    }

    #[test]
    fn no_trips_yields_default_slide_only_with_main_image() {
        let slides = derive_hero_slides(&[], Some("https://img.example/bg.webp"));
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].heading, DEFAULT_HERO_HEADING);

        assert_eq!(derive_hero_slides(&[], None), Vec::<Slide>::new());
    }

    #[test]
    fn all_sources_missing_yields_empty_sequence() {
        let mut trip = trip_with_slides(Vec::new());
        trip.cover_image = Some("   ".to_string());

        assert_eq!(derive_hero_slides(&[trip], None), Vec::<Slide>::new());
    }
}
