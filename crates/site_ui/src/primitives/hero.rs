use super::*;

#[component]
/// Rotating-hero frame: the current slide image with a caption overlay.
pub fn HeroFrame(
    #[prop(into)] image: MaybeSignal<String>,
    #[prop(into)] alt: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <figure
            class=merge_layout_class("ui-hero-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="hero-frame"
        >
            <img
                data-ui-slot="image"
                src=move || image.get()
                alt=move || alt.get()
                decoding="async"
                referrerpolicy="no-referrer"
            />
            <figcaption data-ui-slot="caption">{children()}</figcaption>
        </figure>
    }
}

#[component]
/// Slide position indicator: one dot per slide, current dot highlighted.
pub fn HeroDots(
    #[prop(into)] count: Signal<usize>,
    #[prop(into)] current: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div
            class="ui-hero-dots"
            data-ui-primitive="true"
            data-ui-kind="hero-dots"
            role="group"
            aria-label="Slides"
        >
            <For each=move || 0..count.get() key=|index| *index let:index>
                <button
                    type="button"
                    class="ui-hero-dot"
                    data-ui-kind="hero-dot"
                    data-ui-selected=move || bool_token(current.get() == index)
                    aria-label=format!("Go to slide {}", index + 1)
                    aria-pressed=move || bool_token(current.get() == index)
                    on:click=move |_| on_select.call(index)
                ></button>
            </For>
        </div>
    }
}
