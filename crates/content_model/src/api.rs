//! Read-only content API contract and in-memory adapters.

use std::{future::Future, pin::Pin};

use thiserror::Error;

use crate::records::{
    Achievement, ExperienceEntry, MyLife, PersonalInfo, Project, TravelTrip, WebProfile,
};

/// Object-safe boxed future used by [`ContentApi`] methods.
pub type ContentFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ContentError>> + 'a>>;

/// Errors surfaced by content lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The requested document does not exist.
    #[error("not found")]
    NotFound,
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },
    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// No content source is reachable on this target.
    #[error("content api unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the portfolio's content documents.
///
/// Implementations never expose a write path; the site only consumes.
pub trait ContentApi {
    /// All projects, in backend order.
    fn projects(&self) -> ContentFuture<'_, Vec<Project>>;

    /// One project by slug.
    fn project_by_slug<'a>(&'a self, slug: &'a str) -> ContentFuture<'a, Project>;

    /// All travel journal entries, in backend order.
    fn trips(&self) -> ContentFuture<'_, Vec<TravelTrip>>;

    /// One trip by slug.
    fn trip_by_slug<'a>(&'a self, slug: &'a str) -> ContentFuture<'a, TravelTrip>;

    /// The single personal-info document.
    fn personal_info(&self) -> ContentFuture<'_, PersonalInfo>;

    /// All experience entries.
    fn experience(&self) -> ContentFuture<'_, Vec<ExperienceEntry>>;

    /// All achievements.
    fn achievements(&self) -> ContentFuture<'_, Vec<Achievement>>;

    /// The "my life" document.
    fn my_life(&self) -> ContentFuture<'_, MyLife>;

    /// The web-profile document.
    fn web_profile(&self) -> ContentFuture<'_, WebProfile>;
}

/// No-op content source for unsupported targets; every lookup reports
/// [`ContentError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopContentApi;

impl NoopContentApi {
    fn unavailable<T>(&self) -> ContentFuture<'_, T> {
        Box::pin(async { Err(ContentError::Unavailable("no content source".to_string())) })
    }
}

impl ContentApi for NoopContentApi {
    fn projects(&self) -> ContentFuture<'_, Vec<Project>> {
        self.unavailable()
    }

    fn project_by_slug<'a>(&'a self, _slug: &'a str) -> ContentFuture<'a, Project> {
        self.unavailable()
    }

    fn trips(&self) -> ContentFuture<'_, Vec<TravelTrip>> {
        self.unavailable()
    }

    fn trip_by_slug<'a>(&'a self, _slug: &'a str) -> ContentFuture<'a, TravelTrip> {
        self.unavailable()
    }

    fn personal_info(&self) -> ContentFuture<'_, PersonalInfo> {
        self.unavailable()
    }

    fn experience(&self) -> ContentFuture<'_, Vec<ExperienceEntry>> {
        self.unavailable()
    }

    fn achievements(&self) -> ContentFuture<'_, Vec<Achievement>> {
        self.unavailable()
    }

    fn my_life(&self) -> ContentFuture<'_, MyLife> {
        self.unavailable()
    }

    fn web_profile(&self) -> ContentFuture<'_, WebProfile> {
        self.unavailable()
    }
}

/// Seedable in-memory content source for tests and host-side tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentApi {
    /// Seeded projects.
    pub projects: Vec<Project>,
    /// Seeded trips.
    pub trips: Vec<TravelTrip>,
    /// Seeded personal info; absent maps to [`ContentError::NotFound`].
    pub personal_info: Option<PersonalInfo>,
    /// Seeded experience entries.
    pub experience: Vec<ExperienceEntry>,
    /// Seeded achievements.
    pub achievements: Vec<Achievement>,
    /// Seeded "my life" document.
    pub my_life: Option<MyLife>,
    /// Seeded web profile.
    pub web_profile: Option<WebProfile>,
}

impl ContentApi for MemoryContentApi {
    fn projects(&self) -> ContentFuture<'_, Vec<Project>> {
        Box::pin(async move { Ok(self.projects.clone()) })
    }

    fn project_by_slug<'a>(&'a self, slug: &'a str) -> ContentFuture<'a, Project> {
        Box::pin(async move {
            self.projects
                .iter()
                .find(|project| project.slug == slug)
                .cloned()
                .ok_or(ContentError::NotFound)
        })
    }

    fn trips(&self) -> ContentFuture<'_, Vec<TravelTrip>> {
        Box::pin(async move { Ok(self.trips.clone()) })
    }

    fn trip_by_slug<'a>(&'a self, slug: &'a str) -> ContentFuture<'a, TravelTrip> {
        Box::pin(async move {
            self.trips
                .iter()
                .find(|trip| trip.slug == slug)
                .cloned()
                .ok_or(ContentError::NotFound)
        })
    }

    fn personal_info(&self) -> ContentFuture<'_, PersonalInfo> {
        Box::pin(async move { self.personal_info.clone().ok_or(ContentError::NotFound) })
    }

    fn experience(&self) -> ContentFuture<'_, Vec<ExperienceEntry>> {
        Box::pin(async move { Ok(self.experience.clone()) })
    }

    fn achievements(&self) -> ContentFuture<'_, Vec<Achievement>> {
        Box::pin(async move { Ok(self.achievements.clone()) })
    }

    fn my_life(&self) -> ContentFuture<'_, MyLife> {
        Box::pin(async move { self.my_life.clone().ok_or(ContentError::NotFound) })
    }

    fn web_profile(&self) -> ContentFuture<'_, WebProfile> {
        Box::pin(async move { self.web_profile.clone().ok_or(ContentError::NotFound) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn seeded() -> MemoryContentApi {
        MemoryContentApi {
            projects: vec![Project {
                slug: "atlas".to_string(),
                title: "Atlas".to_string(),
                ..Project::default()
            }],
            trips: vec![TravelTrip {
                slug: "kyoto".to_string(),
                title: "Kyoto".to_string(),
                ..TravelTrip::default()
            }],
            personal_info: Some(PersonalInfo {
                name: "Ada Lovelace".to_string(),
                ..PersonalInfo::default()
            }),
            ..MemoryContentApi::default()
        }
    }

    #[test]
    fn memory_api_finds_documents_by_slug() {
        let api = seeded();
        let api_obj: &dyn ContentApi = &api;

        let project = block_on(api_obj.project_by_slug("atlas")).expect("project");
        assert_eq!(project.title, "Atlas");

        let trip = block_on(api_obj.trip_by_slug("kyoto")).expect("trip");
        assert_eq!(trip.title, "Kyoto");
    }

    #[test]
    fn memory_api_reports_missing_documents_as_not_found() {
        let api = seeded();
        let api_obj: &dyn ContentApi = &api;

        assert_eq!(
            block_on(api_obj.project_by_slug("nope")),
            Err(ContentError::NotFound)
        );
        assert_eq!(block_on(api_obj.my_life()), Err(ContentError::NotFound));
    }

    #[test]
    fn noop_api_is_always_unavailable() {
        let api = NoopContentApi;
        let api_obj: &dyn ContentApi = &api;

        assert!(matches!(
            block_on(api_obj.projects()),
            Err(ContentError::Unavailable(_))
        ));
        assert!(matches!(
            block_on(api_obj.personal_info()),
            Err(ContentError::Unavailable(_))
        ));
    }
}
