//! Skills Section

use leptos::prelude::*;

use crate::components::Reveal;
use crate::models::SkillGroup;
use crate::routes::Anchor;

static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Engineering & Simulation",
        icon: "⚙",
        items: &["Fusion 360", "ANSYS Fluent/CFD", "SolidWorks", "Blender"],
    },
    SkillGroup {
        category: "Programming",
        icon: "⌨",
        items: &["C/C++ (Embedded)", "Python", "JavaScript", "Arduino", "Raspberry Pi"],
    },
    SkillGroup {
        category: "Design",
        icon: "🎨",
        items: &["Figma", "Adobe InDesign", "User Research", "Prototyping"],
    },
    SkillGroup {
        category: "Manufacturing",
        icon: "🏭",
        items: &["3D Printing (FDM/SLA)", "Basic CNC", "Wind Tunnel Testing", "Granta Edupack"],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Anchor::Skills.id() class="section skills">
            <div class="section-backdrop section-backdrop-bottom"></div>
            <div class="section-inner">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Expertise"</span>
                    <h2 class="section-title">"SKILLS"</h2>
                    <p class="section-lead">
                        "A diverse skill set spanning engineering, programming, design, and manufacturing."
                    </p>
                </Reveal>
                <div class="skills-grid">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| view! {
                            <Reveal class="skill-card">
                                <div class="skill-card-heading">
                                    <div class="icon-badge">{group.icon}</div>
                                    <h3 class="skill-card-title">{group.category}</h3>
                                </div>
                                <div class="skill-chips">
                                    {group
                                        .items
                                        .iter()
                                        .map(|skill| view! { <span class="skill-chip">{*skill}</span> })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
