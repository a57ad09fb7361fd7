//! Reducer-style view state for the portfolio's interactive widgets.
//!
//! Both components here share one shape: a small discrete state advanced by
//! explicit events, kept deliberately free of any UI runtime so transitions
//! are unit-testable on the host. The rendering layer subscribes to state
//! changes and owns timers, focus, and scrolling.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod hero;
mod tabs;

pub use hero::{
    presentable_slides, reduce_hero, HeroAction, HeroState, Slide, HERO_ROTATION_INTERVAL_MS,
};
pub use tabs::{reduce_tabs, DetailTab, TabAction, TabState};
