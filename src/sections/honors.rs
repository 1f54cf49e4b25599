//! Honors Section
//!
//! Awards grid; icons cycle through a fixed set by position.

use leptos::prelude::*;

use crate::components::Reveal;
use crate::models::Honor;
use crate::routes::Anchor;

static HONORS: [Honor; 5] = [
    Honor { title: "BPhO Global Gold Award", year: "2022" },
    Honor { title: "Physics Bowl Global 72nd Place", year: "2022" },
    Honor { title: "AMC Global Gold Award", year: "2021" },
    Honor { title: "Imperial College Table Tennis Team - UK National Ranking 33rd", year: "2024" },
    Honor { title: "Imperial College American Football Team - Starting Wide Receiver", year: "2024" },
];

const HONOR_ICONS: [&str; 5] = ["🏅", "🏆", "🎖", "⭐", "🚩"];

fn honor_icon(index: usize) -> &'static str {
    HONOR_ICONS[index % HONOR_ICONS.len()]
}

#[component]
pub fn Honors() -> impl IntoView {
    view! {
        <section id=Anchor::Honors.id() class="section honors">
            <div class="section-inner">
                <Reveal class="section-header">
                    <span class="section-eyebrow">"Achievements"</span>
                    <h2 class="section-title">"HONORS"</h2>
                    <p class="section-lead">
                        "Recognition in academic competitions and athletic achievements."
                    </p>
                </Reveal>
                <div class="honors-grid">
                    {HONORS
                        .iter()
                        .enumerate()
                        .map(|(index, honor)| view! {
                            <Reveal class="honor-card">
                                <div class="icon-badge">{honor_icon(index)}</div>
                                <div class="honor-body">
                                    <h3 class="honor-title">{honor.title}</h3>
                                    <p class="honor-year">{honor.year}</p>
                                </div>
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honor_icons_cycle() {
        assert_eq!(honor_icon(0), "🏅");
        assert_eq!(honor_icon(4), "🚩");
        assert_eq!(honor_icon(5), honor_icon(0));
        assert_eq!(honor_icon(12), honor_icon(2));
    }
}
