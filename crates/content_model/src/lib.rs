//! Typed content records served by the portfolio's read-only content API,
//! plus the object-safe [`ContentApi`] contract and in-memory adapters.
//!
//! Records mirror the backend's camelCase JSON documents. The crate treats
//! every record as data: no fetching happens here, and concrete transports
//! live in the browser adapter crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod api;
mod records;
mod slides;

pub use api::{ContentApi, ContentError, ContentFuture, MemoryContentApi, NoopContentApi};
pub use records::{
    Achievement, ContentValue, ExperienceEntry, MyLife, PersonalInfo, Project, ProjectContent,
    Socials, TravelTrip, TripDay, TripLocation, WebProfile,
};
pub use slides::{derive_hero_slides, normalize_image_url};
