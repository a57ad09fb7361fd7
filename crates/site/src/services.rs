//! Service bundle injected into the view tree at construction time.
//!
//! Pages depend on these trait objects instead of concrete adapters, so the
//! whole tree can run against in-memory services in tests and against the
//! browser adapters in production. No hidden singletons.

use std::rc::Rc;

use content_model::{ContentApi, MemoryContentApi};
use leptos::*;
use site_host::{
    ClipboardService, ExternalUrlService, MemoryClipboard, MemoryPrefsStore, NoopExternalUrlService,
    PrefsStore,
};
use site_host_web::{WebClipboard, WebContentApi, WebExternalUrlService, WebPrefsStore};

/// Shared external collaborators of the site.
#[derive(Clone)]
pub struct SiteServices {
    /// Read-only content documents.
    pub content: Rc<dyn ContentApi>,
    /// Durable key-value preferences.
    pub prefs: Rc<dyn PrefsStore>,
    /// Opens links outside the app.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Clipboard writes.
    pub clipboard: Rc<dyn ClipboardService>,
}

impl SiteServices {
    /// Browser-backed services used by the deployed site.
    pub fn browser() -> Self {
        Self {
            content: Rc::new(WebContentApi::default()),
            prefs: Rc::new(WebPrefsStore),
            external_urls: Rc::new(WebExternalUrlService),
            clipboard: Rc::new(WebClipboard),
        }
    }

    /// In-memory services for tests and host-side rendering experiments.
    pub fn in_memory(content: MemoryContentApi) -> Self {
        Self {
            content: Rc::new(content),
            prefs: Rc::new(MemoryPrefsStore::default()),
            external_urls: Rc::new(NoopExternalUrlService),
            clipboard: Rc::new(MemoryClipboard::default()),
        }
    }
}

/// Provides [`SiteServices`] to descendant components.
pub fn provide_site_services(services: SiteServices) {
    provide_context(services);
}

/// Returns the current [`SiteServices`].
///
/// # Panics
///
/// Panics if called outside a tree that ran [`provide_site_services`].
pub fn use_site_services() -> SiteServices {
    use_context::<SiteServices>().expect("SiteServices not provided")
}
