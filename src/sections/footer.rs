//! Footer Section
//!
//! Name, affiliation, contact links and the copyright line.

use leptos::prelude::*;

use crate::config::{ContactLink, PROFILE};

fn copyright_line(year: u32, first_name: &str, last_name: &str) -> String {
    format!("© {} {} {}. All rights reserved.", year, title_case(first_name), title_case(last_name))
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
fn ContactButton(link: ContactLink) -> impl IntoView {
    let (target, rel) = if link.external {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a href=link.href target=target rel=rel class="contact-link" title=link.label>
            {link.label}
        </a>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-main">
                    <div class="footer-identity">
                        <h3 class="footer-name">{format!("{} {}", PROFILE.first_name, PROFILE.last_name)}</h3>
                        <p class="footer-role">{PROFILE.role}</p>
                        <p class="footer-role">{PROFILE.affiliation}</p>
                    </div>
                    <div class="footer-contacts">
                        {PROFILE
                            .contacts
                            .iter()
                            .map(|link| view! { <ContactButton link=*link /> })
                            .collect_view()}
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{copyright_line(year, PROFILE.first_name, PROFILE.last_name)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2026, "FANJUN", "WEI"), "© 2026 Fanjun Wei. All rights reserved.");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
