//! Light/dark theme state with pref-store persistence.
//!
//! The theme survives visits via the injected [`site_host::PrefsStore`] and
//! is applied as a class on `<html>` and `<body>` so CSS can style the whole
//! page.

use leptos::*;
use serde::{Deserialize, Serialize};
use site_host::{load_pref_with, save_pref_with};

use crate::services::use_site_services;

/// Pref-store key the theme is persisted under.
pub const THEME_PREF_KEY: &str = "portfolio-theme";

/// Site color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Class applied to the document for this theme.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle button while this theme is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Leptos context exposing the active theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flips between light and dark.
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

fn apply_theme_to_document(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let targets = [
            document.document_element(),
            document.body().map(web_sys::Element::from),
        ];
        for target in targets.into_iter().flatten() {
            let classes = target.class_list();
            let _ = classes.remove_2(Theme::Light.class_name(), Theme::Dark.class_name());
            let _ = classes.add_1(theme.class_name());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

#[component]
/// Provides [`ThemeContext`], restores the persisted theme, and mirrors every
/// change to the document and the pref store.
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let services = use_site_services();
    let theme = create_rw_signal(Theme::default());
    provide_context(ThemeContext { theme });

    let prefs = services.prefs.clone();
    spawn_local(async move {
        match load_pref_with::<_, Theme>(prefs.as_ref(), THEME_PREF_KEY).await {
            Ok(Some(saved)) => theme.set(saved),
            Ok(None) => {}
            Err(err) => logging::warn!("theme restore failed: {err}"),
        }
    });

    let prefs = services.prefs.clone();
    create_effect(move |_| {
        let current = theme.get();
        apply_theme_to_document(current);
        let prefs = prefs.clone();
        spawn_local(async move {
            if let Err(err) = save_pref_with(prefs.as_ref(), THEME_PREF_KEY, &current).await {
                logging::warn!("theme persist failed: {err}");
            }
        });
    });

    children().into_view()
}

/// Returns the current [`ThemeContext`].
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn theme_serializes_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&Theme::Dark).expect("encode"), "\"dark\"");
        let decoded: Theme = serde_json::from_str("\"light\"").expect("decode");
        assert_eq!(decoded, Theme::Light);
    }
}
