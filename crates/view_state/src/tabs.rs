//! Detail-page tab selection keyed by the viewed subject.

use serde::{Deserialize, Serialize};

/// Named content views offered on a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailTab {
    /// Long-form description of the subject.
    Overview,
    /// Feature or highlight list.
    Features,
    /// Outcomes and impact notes.
    Impact,
}

impl DetailTab {
    /// All tabs in display order.
    pub const ALL: [DetailTab; 3] = [DetailTab::Overview, DetailTab::Features, DetailTab::Impact];

    /// The default tab shown for a freshly loaded subject.
    pub fn first() -> Self {
        Self::ALL[0]
    }

    /// Display label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Features => "Features",
            Self::Impact => "Impact",
        }
    }
}

impl Default for DetailTab {
    fn default() -> Self {
        Self::first()
    }
}

/// Active tab plus the identity of the subject it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TabState {
    /// Stable id (slug) of the currently viewed subject, once known.
    pub subject: Option<String>,
    /// The single active tab. Exactly one tab is active at all times.
    pub active: DetailTab,
}

/// Events accepted by [`reduce_tabs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    /// Activate a tab. Selecting the already-active tab is a legal no-op.
    Select(DetailTab),
    /// The viewed subject changed identity; the selection resets to the
    /// first tab so a stale choice never carries across subjects.
    SubjectChanged(String),
}

/// Applies a [`TabAction`] to the tab state.
pub fn reduce_tabs(state: &mut TabState, action: TabAction) {
    match action {
        TabAction::Select(tab) => state.active = tab,
        TabAction::SubjectChanged(subject) => {
            state.subject = Some(subject);
            state.active = DetailTab::first();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn select_activates_named_tab() {
        let mut state = TabState::default();
        reduce_tabs(&mut state, TabAction::Select(DetailTab::Features));
        assert_eq!(state.active, DetailTab::Features);
    }

    #[test]
    fn reselecting_active_tab_is_a_noop() {
        let mut state = TabState::default();
        reduce_tabs(&mut state, TabAction::Select(DetailTab::Impact));
        let before = state.clone();
        reduce_tabs(&mut state, TabAction::Select(DetailTab::Impact));
        assert_eq!(state, before);
    }

    #[test]
    fn subject_change_resets_to_first_tab() {
        let mut state = TabState::default();
        reduce_tabs(&mut state, TabAction::SubjectChanged("trip-one".to_string()));
        reduce_tabs(&mut state, TabAction::Select(DetailTab::Features));
        assert_eq!(state.active, DetailTab::Features);

        reduce_tabs(&mut state, TabAction::SubjectChanged("trip-two".to_string()));
        assert_eq!(state.active, DetailTab::Overview);
        assert_eq!(state.subject.as_deref(), Some("trip-two"));
    }
}
