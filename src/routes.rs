//! Routes and Anchors
//!
//! Path builders for the two routes plus in-page section anchors.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

pub const HOME_PATH: &str = "/";

/// Detail page path for a project slug
pub fn project_href(slug: &str) -> String {
    format!("/project/{}", utf8_percent_encode(slug, SEGMENT_ENCODE_SET))
}

/// Home page sections reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Works,
    Experience,
    Honors,
    Skills,
}

impl Anchor {
    pub const NAV: [Anchor; 4] = [Anchor::Works, Anchor::Experience, Anchor::Honors, Anchor::Skills];

    /// Element id of the section
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Works => "works",
            Anchor::Experience => "experience",
            Anchor::Honors => "honors",
            Anchor::Skills => "skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Works => "WORKS",
            Anchor::Experience => "EXPERIENCE",
            Anchor::Honors => "HONORS",
            Anchor::Skills => "SKILLS",
        }
    }

    /// Same-page fragment, e.g. `#works`
    pub fn fragment(self) -> String {
        format!("#{}", self.id())
    }

    /// Home page path landing on this section, e.g. `/#works`
    pub fn home_href(self) -> String {
        format!("{}#{}", HOME_PATH, self.id())
    }

    pub fn from_fragment(fragment: &str) -> Option<Anchor> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        Anchor::NAV.into_iter().find(|a| a.id() == id)
    }
}

// ========================
// DOM scrolling
// ========================

fn smooth_scroll_to(top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll so the element with `id` sits `offset` pixels below the top.
/// Returns `false` when no such element is on the current page.
pub fn scroll_to_element(id: &str, offset: f64) -> bool {
    let Some(win) = web_sys::window() else { return false };
    let Some(element) = win.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return false;
    };
    let page_y = win.page_y_offset().unwrap_or(0.0);
    let top = element.get_bounding_client_rect().top() + page_y - offset;
    smooth_scroll_to(top);
    true
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Whether the device has only a coarse (touch) pointer
pub fn is_coarse_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_href() {
        assert_eq!(project_href("luna"), "/project/luna");
        assert_eq!(project_href("concept-car"), "/project/concept-car");
    }

    #[test]
    fn test_project_href_escapes_segment() {
        assert_eq!(project_href("a/b c"), "/project/a%2Fb%20c");
        assert_eq!(project_href("x#y"), "/project/x%23y");
    }

    #[test]
    fn test_anchor_hrefs() {
        assert_eq!(Anchor::Works.fragment(), "#works");
        assert_eq!(Anchor::Works.home_href(), "/#works");
    }

    #[test]
    fn test_anchor_from_fragment() {
        assert_eq!(Anchor::from_fragment("#skills"), Some(Anchor::Skills));
        assert_eq!(Anchor::from_fragment("honors"), Some(Anchor::Honors));
        assert_eq!(Anchor::from_fragment("#home"), None);
        assert_eq!(Anchor::from_fragment(""), None);
    }
}
