use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic tones for [`TerminalLine`].
pub enum TerminalTone {
    /// Echoed command line.
    Command,
    /// Handler output.
    #[default]
    Output,
}

impl TerminalTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Output => "output",
        }
    }
}

#[component]
/// Terminal surface root. The owning page scrolls it via `node_ref`.
pub fn TerminalSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-terminal-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
            node_ref=node_ref
            role="log"
            aria-live="polite"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Terminal transcript container.
pub fn TerminalTranscript(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-transcript"
            data-ui-primitive="true"
            data-ui-kind="terminal-transcript"
        >
            {children()}
        </div>
    }
}

#[component]
/// One transcript line.
pub fn TerminalLine(
    #[prop(default = TerminalTone::Output)] tone: TerminalTone,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-line"
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Prompt row holding the input field.
pub fn TerminalPrompt(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-prompt"
            data-ui-primitive="true"
            data-ui-kind="terminal-prompt"
        >
            {children()}
        </div>
    }
}
