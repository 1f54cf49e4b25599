//! Frontend Models
//!
//! Content records shown by the listing and detail views.

use serde::{Deserialize, Serialize};

/// Full project record (detail page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub year: String,
    /// Cover image path
    pub image: String,
    pub overview: String,
    pub challenge: String,
    pub solution: String,
    pub tools: Vec<String>,
    pub features: Vec<String>,
    /// Gallery image paths, in display order
    pub images: Vec<String>,
}

/// Listing card (Works section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub year: String,
    pub image: String,
    pub description: String,
}

impl ProjectSummary {
    /// Fields that must agree with the matching [`ProjectRecord`]
    pub fn drift_from(&self, record: &ProjectRecord) -> Option<&'static str> {
        if self.title != record.title {
            Some("title")
        } else if self.category != record.category {
            Some("category")
        } else if self.year != record.year {
            Some("year")
        } else if self.image != record.image {
            Some("image")
        } else {
            None
        }
    }
}

/// Work experience entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experience {
    pub company: &'static str,
    pub location: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// Award / achievement entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Honor {
    pub title: &'static str,
    pub year: &'static str,
}

/// Skill category with its items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(slug: &str) -> ProjectRecord {
        ProjectRecord {
            slug: slug.to_string(),
            title: "Luna".to_string(),
            subtitle: "Lamp".to_string(),
            category: "Product Design".to_string(),
            year: "2025".to_string(),
            image: "/images/luna.png".to_string(),
            overview: String::new(),
            challenge: String::new(),
            solution: String::new(),
            tools: vec![],
            features: vec![],
            images: vec![],
        }
    }

    fn make_summary(slug: &str) -> ProjectSummary {
        ProjectSummary {
            slug: slug.to_string(),
            title: "Luna".to_string(),
            category: "Product Design".to_string(),
            year: "2025".to_string(),
            image: "/images/luna.png".to_string(),
            description: "A lamp".to_string(),
        }
    }

    #[test]
    fn test_summary_matches_record() {
        assert_eq!(make_summary("luna").drift_from(&make_record("luna")), None);
    }

    #[test]
    fn test_summary_drift_reports_field() {
        let mut summary = make_summary("luna");
        summary.year = "2024".to_string();
        assert_eq!(summary.drift_from(&make_record("luna")), Some("year"));
    }
}
