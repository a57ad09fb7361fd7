//! Terminal page: line-oriented pseudo-terminal over the headless console
//! reducer. The page owns only presentation concerns (focus, scrolling).

use console_core::{reduce_console, CommandRegistry, ConsoleAction, ConsoleEffect, ConsoleState};
use leptos::ev::KeyboardEvent;
use leptos::*;
use site_ui::{
    PageSection, SectionHeader, TerminalLine, TerminalPrompt, TerminalSurface, TerminalTone,
    TerminalTranscript,
};

#[component]
pub fn TerminalPage() -> impl IntoView {
    let registry = store_value(CommandRegistry::builtin());
    let console = create_rw_signal(ConsoleState::default());
    let surface_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let scroll_to_end = move || {
        if let Some(surface) = surface_ref.get_untracked() {
            surface.set_scroll_top(surface.scroll_height());
        }
    };

    let dispatch = move |action: ConsoleAction| {
        let mut effects = Vec::new();
        registry.with_value(|registry| {
            console.update(|state| effects = reduce_console(state, registry, action));
        });
        for effect in effects {
            match effect {
                ConsoleEffect::ScrollToEnd => scroll_to_end(),
            }
        }
    };

    let focus_input = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    let indexed_entries = move || {
        console.with(|state| {
            state
                .transcript
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageSection>
            <SectionHeader
                title="Terminal"
                lede="Type a command and press Enter. Try \"help\"."
            />

            <div class="terminal-wrap" on:click=focus_input>
                <TerminalSurface node_ref=surface_ref aria_label="Terminal">
                    <TerminalTranscript>
                        <For each=indexed_entries key=|(index, _)| *index let:entry>
                            <TerminalLine tone=TerminalTone::Command>
                                <span data-ui-slot="prompt-mark" aria-hidden="true">"$"</span>
                                <span>{entry.1.input.clone()}</span>
                            </TerminalLine>
                            <TerminalLine tone=TerminalTone::Output>{entry.1.output.clone()}</TerminalLine>
                        </For>
                    </TerminalTranscript>

                    <TerminalPrompt>
                        <span data-ui-slot="prompt-mark" aria-hidden="true">"$"</span>
                        <input
                            node_ref=input_ref
                            class="terminal-input"
                            type="text"
                            prop:value=move || console.with(|state| state.pending_input.clone())
                            on:input=move |ev| {
                                dispatch(ConsoleAction::UpdateInput(event_target_value(&ev)))
                            }
                            on:keydown=move |ev: KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    dispatch(ConsoleAction::Submit);
                                }
                            }
                            aria-label="Command input"
                            autocomplete="off"
                            spellcheck="false"
                        />
                    </TerminalPrompt>
                </TerminalSurface>
            </div>
        </PageSection>
    }
}
