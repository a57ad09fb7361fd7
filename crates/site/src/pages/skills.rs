//! Skills: a static category grid, kept client-side like the rest of the
//! site's fixed copy.

use leptos::*;
use site_ui::{Card, CardGrid, PageSection, SectionHeader, TagPill};

struct SkillCategory {
    category: &'static str,
    items: &'static [&'static str],
}

const SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        category: "Languages",
        items: &["Rust", "TypeScript", "JavaScript", "Python", "SQL"],
    },
    SkillCategory {
        category: "Frontend",
        items: &["Leptos", "WebAssembly", "React", "Vite", "Tailwind CSS", "HTML", "CSS"],
    },
    SkillCategory {
        category: "Backend",
        items: &["Node.js", "Express", "REST APIs", "MongoDB", "PostgreSQL"],
    },
    SkillCategory {
        category: "Tools",
        items: &["Git", "GitHub", "Docker", "Postman", "Supabase", "Figma"],
    },
];

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <PageSection>
            <SectionHeader title="Skills" lede="Technologies and tools I work with." />

            <CardGrid>
                {SKILLS
                    .iter()
                    .map(|group| view! {
                        <Card layout_class="skills-card">
                            <h2>{group.category}</h2>
                            <div class="skills-tags">
                                {group
                                    .items
                                    .iter()
                                    .map(|skill| view! { <TagPill>{*skill}</TagPill> })
                                    .collect_view()}
                            </div>
                        </Card>
                    })
                    .collect_view()}
            </CardGrid>
        </PageSection>
    }
}
