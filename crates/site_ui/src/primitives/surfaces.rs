use super::*;

#[component]
/// Centered page-width section wrapper.
pub fn PageSection(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-page-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-section"
        >
            {children()}
        </section>
    }
}

#[component]
/// Page heading block: title plus optional lede paragraph.
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] lede: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header
            class="ui-section-header"
            data-ui-primitive="true"
            data-ui-kind="section-header"
        >
            <h1 data-ui-slot="title">{title}</h1>
            {lede.map(|lede| view! { <p data-ui-slot="lede">{lede}</p> })}
        </header>
    }
}

#[component]
/// Responsive card grid.
pub fn CardGrid(
    #[prop(default = 3u8)] columns: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-grid"
            data-ui-columns=columns.to_string()
        >
            {children()}
        </div>
    }
}

#[component]
/// Raised content card.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
        >
            {children()}
        </article>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic tones for [`Badge`].
pub enum BadgeTone {
    /// Neutral metadata badge.
    #[default]
    Neutral,
    /// Accent-colored badge.
    Accent,
}

impl BadgeTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Accent => "accent",
        }
    }
}

#[component]
/// Small rounded status/metadata badge.
pub fn Badge(
    #[prop(default = BadgeTone::Neutral)] tone: BadgeTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-badge"
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Pill for technology and skill tags.
pub fn TagPill(children: Children) -> impl IntoView {
    view! {
        <span
            class="ui-tag-pill"
            data-ui-primitive="true"
            data-ui-kind="tag-pill"
        >
            {children()}
        </span>
    }
}

#[component]
/// Placeholder for sections whose data set is empty.
pub fn EmptyState(#[prop(into)] message: TextProp) -> impl IntoView {
    view! {
        <p
            class="ui-empty-state"
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {move || message.get()}
        </p>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic tones for [`StatusNotice`].
pub enum NoticeTone {
    /// Progress or loading message.
    #[default]
    Info,
    /// Failure message.
    Error,
}

impl NoticeTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[component]
/// Inline load/error status line for fetch-render pages.
pub fn StatusNotice(
    #[prop(default = NoticeTone::Info)] tone: NoticeTone,
    #[prop(into)] message: TextProp,
) -> impl IntoView {
    let role = (tone == NoticeTone::Error).then_some("alert");
    view! {
        <p
            class="ui-status-notice"
            data-ui-primitive="true"
            data-ui-kind="status-notice"
            data-ui-tone=tone.token()
            role=role
        >
            {move || message.get()}
        </p>
    }
}
