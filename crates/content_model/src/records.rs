//! Serde models for the content API's JSON documents.

use serde::{Deserialize, Serialize};
use view_state::Slide;

/// Free-form rich content: the backend stores either a paragraph string or a
/// list of bullet strings under the same field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    /// A single paragraph.
    Text(String),
    /// A bullet list.
    List(Vec<String>),
}

impl ContentValue {
    /// The paragraph text, when this value is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    /// The bullet items, when this value is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// True for an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }
}

/// Tabbed detail content attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContent {
    /// Overview tab content.
    #[serde(default)]
    pub overview: Option<ContentValue>,
    /// Features tab content.
    #[serde(default)]
    pub features: Option<ContentValue>,
    /// Impact tab content.
    #[serde(default)]
    pub impact: Option<ContentValue>,
}

/// One portfolio project document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// URL slug, the project's stable identity.
    #[serde(default)]
    pub slug: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Short description shown on cards.
    #[serde(default)]
    pub description: String,
    /// Technology tags.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Screenshot URLs; the first doubles as the hero image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Legacy flat feature list, superseded by `content.features` when set.
    #[serde(default)]
    pub features: Vec<String>,
    /// Repository link.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Live deployment link.
    #[serde(default)]
    pub live_url: Option<String>,
    /// Tabbed detail content.
    #[serde(default)]
    pub content: ProjectContent,
}

impl Project {
    /// Hero image for the detail page, when any screenshot exists.
    pub fn hero_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Overview paragraph: `content.overview` when it is a string, else the
    /// card description when non-empty.
    pub fn overview_text(&self) -> Option<&str> {
        if let Some(text) = self.content.overview.as_ref().and_then(ContentValue::as_text) {
            return Some(text);
        }
        (!self.description.is_empty()).then_some(self.description.as_str())
    }

    /// Overview bullet list: `content.overview` when it is a list, else the
    /// feature list shown under "Project Details".
    pub fn overview_list(&self) -> &[String] {
        self.content
            .overview
            .as_ref()
            .and_then(ContentValue::as_list)
            .unwrap_or(self.features_list())
    }

    /// Features tab items: `content.features` when set, else the legacy flat
    /// feature list.
    pub fn features_list(&self) -> &[String] {
        self.content
            .features
            .as_ref()
            .and_then(ContentValue::as_list)
            .unwrap_or(&self.features)
    }

    /// Impact tab content, when present and non-empty.
    pub fn impact(&self) -> Option<&ContentValue> {
        self.content
            .impact
            .as_ref()
            .filter(|value| !value.is_empty())
    }
}

/// Where a trip took place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripLocation {
    /// City or region name.
    #[serde(default)]
    pub name: Option<String>,
    /// Country name.
    #[serde(default)]
    pub country: Option<String>,
}

/// One day in a trip's day-by-day timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TripDay {
    /// Explicit day number; falls back to position when absent.
    #[serde(default)]
    pub day_number: Option<u32>,
    /// Day heading.
    #[serde(default)]
    pub title: Option<String>,
    /// Day narrative.
    #[serde(default)]
    pub description: Option<String>,
    /// Highlight bullets.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Image URLs for this day.
    #[serde(default)]
    pub images: Vec<String>,
}

/// One travel journal document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelTrip {
    /// Document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// URL slug, the trip's stable identity.
    #[serde(default)]
    pub slug: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// One-line teaser.
    #[serde(default)]
    pub short_description: Option<String>,
    /// Trip location.
    #[serde(default)]
    pub location: TripLocation,
    /// Human-readable duration, for example "5 days".
    #[serde(default)]
    pub duration: Option<String>,
    /// `"one-day"` or `"multi-day"`.
    #[serde(default)]
    pub trip_type: Option<String>,
    /// Curated hero slides for the travel index page.
    #[serde(default)]
    pub hero_slides: Vec<Slide>,
    /// Day-by-day timeline.
    #[serde(default)]
    pub days: Vec<TripDay>,
    /// Extra gallery image URLs.
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl TravelTrip {
    /// Badge label for the trip type.
    pub fn trip_type_label(&self) -> Option<&'static str> {
        match self.trip_type.as_deref() {
            Some("multi-day") => Some("Multi-day"),
            Some(_) => Some("One-day"),
            None => None,
        }
    }
}

/// Social profile links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Socials {
    /// GitHub profile URL.
    #[serde(default)]
    pub github: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// The single personal-info document behind the home and contact pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Full display name.
    #[serde(default)]
    pub name: String,
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Profile photo URL.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Resume document URL.
    #[serde(default)]
    pub resume: Option<String>,
    /// Social links.
    #[serde(default)]
    pub socials: Socials,
}

impl PersonalInfo {
    /// Up-to-two-letter initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
            .chars()
            .take(2)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// One work-experience document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Employer or organization name.
    #[serde(default)]
    pub organization: String,
    /// Role title.
    #[serde(default)]
    pub title: String,
    /// Engagement type, for example "internship".
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Work location.
    #[serde(default)]
    pub location: Option<String>,
    /// ISO end date.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Role summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Responsibility bullets.
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Certificate link.
    #[serde(default)]
    pub certificate_url: Option<String>,
}

/// One achievement document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Document id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Achievement title.
    #[serde(default)]
    pub title: String,
    /// Year awarded.
    #[serde(default)]
    pub year: Option<u32>,
    /// Awarding organization.
    #[serde(default)]
    pub organization: Option<String>,
    /// Description paragraph.
    #[serde(default)]
    pub description: Option<String>,
    /// Highlight bullets.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Certificate link.
    #[serde(default)]
    pub certificate_url: Option<String>,
}

/// The "my life" document carrying the site-wide main background image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MyLife {
    /// Main background image URL. Legacy documents use an all-lowercase key.
    #[serde(default, alias = "mainimage")]
    pub main_image: Option<String>,
}

/// The web-profile document behind the navbar avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebProfile {
    /// Navbar profile image URL. Legacy documents use an all-lowercase key.
    #[serde(default, alias = "profileimageurl")]
    pub profile_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn project_decodes_camel_case_document() {
        let project: Project = serde_json::from_value(json!({
            "_id": "65f0",
            "slug": "atlas",
            "title": "Atlas",
            "description": "Mapping side project",
            "techStack": ["Rust", "Leptos"],
            "images": ["https://img.example/atlas.webp"],
            "githubUrl": "https://github.com/example/atlas",
            "content": { "overview": "Long form overview", "features": ["Offline tiles"] }
        }))
        .expect("decode project");

        assert_eq!(project.slug, "atlas");
        assert_eq!(project.tech_stack, vec!["Rust", "Leptos"]);
        assert_eq!(project.hero_image(), Some("https://img.example/atlas.webp"));
        assert_eq!(project.overview_text(), Some("Long form overview"));
        assert_eq!(project.features_list(), ["Offline tiles".to_string()]);
        assert_eq!(project.impact(), None);
    }

    #[test]
    fn project_content_falls_back_to_flat_fields() {
        let project: Project = serde_json::from_value(json!({
            "slug": "atlas",
            "title": "Atlas",
            "description": "Card text",
            "features": ["Legacy feature"]
        }))
        .expect("decode project");

        assert_eq!(project.overview_text(), Some("Card text"));
        assert_eq!(project.features_list(), ["Legacy feature".to_string()]);
        assert_eq!(project.overview_list(), ["Legacy feature".to_string()]);
    }

    #[test]
    fn trip_decodes_days_and_hero_slides() {
        let trip: TravelTrip = serde_json::from_value(json!({
            "_id": "65f1",
            "slug": "kyoto",
            "title": "Kyoto",
            "coverImage": "https://img.example/kyoto.webp",
            "tripType": "multi-day",
            "location": { "name": "Kyoto", "country": "Japan" },
            "heroSlides": [
                { "image": "https://img.example/1.webp", "heading": "Fushimi Inari" }
            ],
            "days": [
                { "dayNumber": 1, "title": "Arrival", "highlights": ["Night market"] }
            ]
        }))
        .expect("decode trip");

        assert_eq!(trip.trip_type_label(), Some("Multi-day"));
        assert_eq!(trip.hero_slides.len(), 1);
        assert_eq!(trip.days[0].highlights, vec!["Night market"]);
    }

    #[test]
    fn my_life_accepts_legacy_lowercase_key() {
        let my_life: MyLife = serde_json::from_value(json!({
            "mainimage": "https://img.example/bg.webp"
        }))
        .expect("decode my life");
        assert_eq!(
            my_life.main_image.as_deref(),
            Some("https://img.example/bg.webp")
        );
    }

    #[test]
    fn initials_take_first_letters_of_first_two_words() {
        let info = PersonalInfo {
            name: "Ada Mae Lovelace".to_string(),
            ..PersonalInfo::default()
        };
        assert_eq!(info.initials(), "AM");

        let unnamed = PersonalInfo::default();
        assert_eq!(unnamed.initials(), "?");
    }
}
