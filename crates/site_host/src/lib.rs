//! Host-service contracts used by the portfolio site.
//!
//! This crate is the API boundary between the app and its environment:
//! key-value preference storage, the clipboard, and external navigation.
//! Concrete browser adapters live in `site_host_web`; the memory and noop
//! implementations here back tests and unsupported targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod external_url;
pub mod prefs;

pub use clipboard::{ClipboardFuture, ClipboardService, MemoryClipboard, NoopClipboard};
pub use external_url::{ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService};
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
