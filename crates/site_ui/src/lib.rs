//! Shared UI primitive library for the portfolio site.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM
//! contract consumed by the site's CSS layers. Pages compose these primitives
//! instead of emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, BadgeTone, Card, CardGrid, EmptyState, HeroDots, HeroFrame, NoticeTone, PageSection,
    SectionHeader, StatusNotice, TabButton, TabList, TagPill, TerminalLine, TerminalPrompt,
    TerminalSurface, TerminalTone, TerminalTranscript,
};
