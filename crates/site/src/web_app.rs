use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::NavBar,
    pages::{
        AchievementsPage, ContactPage, ExperiencePage, HomePage, ProjectDetailPage, ProjectsPage,
        SkillsPage, TerminalPage, TravelDetailPage, TravelPage,
    },
    services::{provide_site_services, SiteServices},
    theme::ThemeProvider,
};

#[component]
pub fn SiteApp(
    /// External collaborators, assembled by the entry layer.
    services: SiteServices,
) -> impl IntoView {
    provide_meta_context();
    provide_site_services(services);

    view! {
        <Title text="Vedant Mahajan" />
        <Meta
            name="description"
            content="Personal portfolio: projects, travel journal, experience, and a toy terminal."
        />

        <ThemeProvider>
            <Router>
                <NavBar />
                <main class="site-root">
                    <Routes>
                        <Route path="" view=HomePage />
                        <Route path="/travel/:slug" view=TravelDetailPage />
                        <Route path="/travel" view=TravelPage />
                        <Route path="/projects/:slug" view=ProjectDetailPage />
                        <Route path="/projects" view=ProjectsPage />
                        <Route path="/skills" view=SkillsPage />
                        <Route path="/experience" view=ExperiencePage />
                        <Route path="/achievements" view=AchievementsPage />
                        <Route path="/terminal" view=TerminalPage />
                        <Route path="/contact" view=ContactPage />
                    </Routes>
                </main>
            </Router>
        </ThemeProvider>
    }
}
