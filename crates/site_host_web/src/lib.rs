//! Browser adapters for the portfolio's host-service contracts.
//!
//! Each adapter degrades gracefully off-target: on non-wasm builds loads
//! report nothing or an explicit unavailability error, so host-side tests of
//! consuming code never touch browser APIs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod clipboard;
mod content_api;
mod external_url;
mod prefs;

pub use clipboard::WebClipboard;
pub use content_api::WebContentApi;
pub use external_url::WebExternalUrlService;
pub use prefs::WebPrefsStore;
