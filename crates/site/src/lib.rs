mod components;
mod pages;
mod services;
mod theme;
mod web_app;

pub use services::{provide_site_services, use_site_services, SiteServices};
pub use theme::{use_theme, Theme, ThemeProvider, THEME_PREF_KEY};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| {
        leptos::view! { <SiteApp services=SiteServices::browser() /> }
    })
}
