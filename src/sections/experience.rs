//! Experience Section

use leptos::prelude::*;

use crate::components::Reveal;
use crate::models::Experience;
use crate::routes::Anchor;

static EXPERIENCES: [Experience; 3] = [
    Experience {
        company: "Xiaomi",
        location: "Shenzhen",
        role: "Product Testing Intern",
        period: "Jul 2024 – Sep 2024",
        description: "Participated in mobile phone reliability testing processes. Executed 'six sides, eight edges, twelve corners' standard drop tests. Accurately recorded data and identified 'corner drops' as the weakest failure mode.",
    },
    Experience {
        company: "Candela",
        location: "Shenzhen",
        role: "Robotics R&D Intern",
        period: "Sep 2022 – Dec 2022",
        description: "Developed next-generation robotic vacuum prototype. Addressed hair entanglement pain point with innovative dual-blade cutting mechanism, reducing manual cleaning by ~40%.",
    },
    Experience {
        company: "Imperial College London",
        location: "London",
        role: "Research Assistant",
        period: "Aug 2023 – Nov 2025",
        description: "EMG technology research under Prof. D.F. Independently developed Arduino-based six-channel EMG signal acquisition system. Led commercialization effort with comprehensive business plan.",
    },
];

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id=Anchor::Experience.id() class="section experience">
            <div class="section-backdrop section-backdrop-top"></div>
            <div class="section-inner">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Career"</span>
                    <h2 class="section-title">"EXPERIENCE"</h2>
                    <p class="section-lead">
                        "Professional journey through product testing, robotics R&D, and academic research."
                    </p>
                </Reveal>
                <div class="experience-list">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| view! {
                            <Reveal class="experience-card">
                                <div class="experience-main">
                                    <div class="experience-heading">
                                        <div class="icon-badge">"💼"</div>
                                        <div>
                                            <h3 class="experience-company">{exp.company}</h3>
                                            <div class="experience-location">"📍 "{exp.location}</div>
                                        </div>
                                    </div>
                                    <h4 class="experience-role">{exp.role}</h4>
                                    <p class="experience-description">{exp.description}</p>
                                </div>
                                <div class="experience-period">"📅 "{exp.period}</div>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
