//! Sticky top navigation: brand, route links, theme toggle.

use leptos::*;
use leptos_router::A;

use crate::{services::use_site_services, theme::use_theme};

const BRAND_NAME: &str = "Vedant Mahajan";
const BRAND_INITIALS: &str = "VM";

const NAV_ITEMS: [(&str, &str); 8] = [
    ("/", "Home"),
    ("/travel", "Travel"),
    ("/projects", "Projects"),
    ("/skills", "Skills"),
    ("/experience", "Experience"),
    ("/achievements", "Achievements"),
    ("/terminal", "Terminal"),
    ("/contact", "Contact"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let services = use_site_services();
    let theme = use_theme();

    let profile = create_local_resource(
        || (),
        move |_| {
            let content = services.content.clone();
            async move { content.web_profile().await }
        },
    );
    let profile_image = move || {
        profile
            .get()
            .and_then(|result| result.ok())
            .and_then(|profile| profile.profile_image_url)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    };

    view! {
        <nav class="site-navbar">
            <div class="site-navbar-brand">
                <A href="/">
                {move || match profile_image() {
                    Some(url) => view! {
                        <img class="site-navbar-avatar" src=url alt=BRAND_NAME />
                    }
                    .into_view(),
                    None => view! {
                        <span class="site-navbar-avatar site-navbar-avatar-fallback" aria-hidden="true">
                            {BRAND_INITIALS}
                        </span>
                    }
                    .into_view(),
                }}
                <span>{BRAND_NAME}</span>
                </A>
            </div>

            <ul class="site-navbar-links">
                <For each=|| NAV_ITEMS.to_vec() key=|(href, _)| *href let:item>
                    <li>
                        <A href=item.0 exact={item.0 == "/"}>{item.1}</A>
                    </li>
                </For>
            </ul>

            <button
                type="button"
                class="site-navbar-theme-toggle"
                aria-label=move || theme.theme().toggle_label()
                title=move || theme.theme().toggle_label()
                on:click=move |_| theme.toggle()
            >
                {move || match theme.theme() {
                    crate::theme::Theme::Dark => "Light",
                    crate::theme::Theme::Light => "Dark",
                }}
            </button>
        </nav>
    }
}
