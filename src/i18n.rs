//! Display Language
//!
//! Two-valued language switch and the localized strings of the detail page.

use serde::{Deserialize, Serialize};

/// Language of the UI chrome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// The other language
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// Toggle button caption, written in the language it switches to
    pub fn switch_label(self) -> &'static str {
        match self {
            Language::En => "中文",
            Language::Zh => "English",
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn labels(self) -> &'static DetailLabels {
        match self {
            Language::En => &EN_LABELS,
            Language::Zh => &ZH_LABELS,
        }
    }
}

/// Fixed captions on the project detail page
#[derive(Debug, PartialEq)]
pub struct DetailLabels {
    pub back: &'static str,
    pub overview: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub gallery: &'static str,
    pub tools: &'static str,
    pub features: &'static str,
    pub not_found: &'static str,
}

static EN_LABELS: DetailLabels = DetailLabels {
    back: "Back to Projects",
    overview: "Overview",
    challenge: "Challenge",
    solution: "Solution",
    gallery: "Gallery",
    tools: "Tools",
    features: "Key Features",
    not_found: "Project not found",
};

static ZH_LABELS: DetailLabels = DetailLabels {
    back: "返回项目",
    overview: "概述",
    challenge: "挑战",
    solution: "方案",
    gallery: "图集",
    tools: "工具",
    features: "主要特点",
    not_found: "未找到该项目",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involutive() {
        for lang in [Language::En, Language::Zh] {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_switch_label_names_other_language() {
        assert_eq!(Language::En.switch_label(), "中文");
        assert_eq!(Language::Zh.switch_label(), "English");
    }

    #[test]
    fn test_labels_differ_per_language() {
        assert_eq!(Language::En.labels().overview, "Overview");
        assert_ne!(Language::En.labels(), Language::Zh.labels());
    }
}
