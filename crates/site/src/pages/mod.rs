//! Route pages. Every page is a fetch-render-display cycle over the injected
//! content service; interactive state lives in the reducer crates.

mod achievements;
mod contact;
mod experience;
mod home;
mod project_detail;
mod projects;
mod skills;
mod terminal;
mod travel;
mod travel_detail;

pub use achievements::AchievementsPage;
pub use contact::ContactPage;
pub use experience::ExperiencePage;
pub use home::HomePage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use skills::SkillsPage;
pub use terminal::TerminalPage;
pub use travel::TravelPage;
pub use travel_detail::TravelDetailPage;
