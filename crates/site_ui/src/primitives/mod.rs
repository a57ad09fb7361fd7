//! Structural, data-display, navigation, terminal, and hero primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod hero;
mod navigation;
mod surfaces;
mod terminal;

pub use hero::{HeroDots, HeroFrame};
pub use navigation::{TabButton, TabList};
pub use surfaces::{
    Badge, BadgeTone, Card, CardGrid, EmptyState, NoticeTone, PageSection, SectionHeader,
    StatusNotice, TagPill,
};
pub use terminal::{TerminalLine, TerminalPrompt, TerminalSurface, TerminalTone, TerminalTranscript};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
