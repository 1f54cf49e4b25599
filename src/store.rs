//! Content Store
//!
//! Immutable project table, built once from the embedded JSON content.
//! Construction validates the data; lookups afterwards cannot fail.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::models::{ProjectRecord, ProjectSummary};

const PROJECTS_JSON: &str = include_str!("../content/projects.json");
const LISTING_JSON: &str = include_str!("../content/listing.json");

static CONTENT_STORE: OnceLock<ContentStore> = OnceLock::new();

/// Reasons the embedded content can be rejected
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed {name}: {error}")]
    Malformed {
        name: &'static str,
        #[source]
        error: serde_json::Error,
    },
    #[error("duplicate slug `{0}` in project records")]
    DuplicateSlug(String),
    #[error("duplicate slug `{0}` in listing")]
    DuplicateListing(String),
    #[error("listing entry `{0}` has no project record")]
    DanglingListing(String),
    #[error("listing entry `{slug}` disagrees with its record on {field}")]
    Drift { slug: String, field: &'static str },
}

/// Slug -> record table plus the listing shown on the home page
#[derive(Debug)]
pub struct ContentStore {
    records: Vec<ProjectRecord>,
    index: HashMap<String, usize>,
    listing: Vec<ProjectSummary>,
}

impl ContentStore {
    pub fn new(
        records: Vec<ProjectRecord>,
        listing: Vec<ProjectSummary>,
    ) -> Result<Self, ContentError> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.slug.clone(), pos).is_some() {
                return Err(ContentError::DuplicateSlug(record.slug.clone()));
            }
        }

        let mut listed = HashMap::with_capacity(listing.len());
        for summary in &listing {
            if listed.insert(summary.slug.as_str(), ()).is_some() {
                return Err(ContentError::DuplicateListing(summary.slug.clone()));
            }
            let record = index
                .get(&summary.slug)
                .map(|&pos| &records[pos])
                .ok_or_else(|| ContentError::DanglingListing(summary.slug.clone()))?;
            if let Some(field) = summary.drift_from(record) {
                return Err(ContentError::Drift {
                    slug: summary.slug.clone(),
                    field,
                });
            }
        }

        Ok(Self {
            records,
            index,
            listing,
        })
    }

    pub fn from_json(projects: &str, listing: &str) -> Result<Self, ContentError> {
        let records = serde_json::from_str(projects).map_err(|error| ContentError::Malformed {
            name: "projects",
            error,
        })?;
        let listing = serde_json::from_str(listing).map_err(|error| ContentError::Malformed {
            name: "listing",
            error,
        })?;
        Self::new(records, listing)
    }

    /// Record for `slug`, or `None` when the slug is unknown
    pub fn lookup(&self, slug: &str) -> Option<&ProjectRecord> {
        self.index.get(slug).map(|&pos| &self.records[pos])
    }

    /// Listing cards in display order
    pub fn listing(&self) -> &[ProjectSummary] {
        &self.listing
    }

    #[cfg(test)]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Process-wide store built from the embedded content on first use
pub fn content_store() -> &'static ContentStore {
    CONTENT_STORE.get_or_init(|| {
        let store = ContentStore::from_json(PROJECTS_JSON, LISTING_JSON)
            .unwrap_or_else(|err| panic!("embedded content rejected: {err}"));
        log::info!("Loaded {} projects, {} listed", store.len(), store.listing().len());
        store
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(slug: &str) -> ProjectRecord {
        ProjectRecord {
            slug: slug.to_string(),
            title: format!("Project {}", slug),
            subtitle: "Subtitle".to_string(),
            category: "Design".to_string(),
            year: "2024".to_string(),
            image: format!("/images/{}.png", slug),
            overview: "Overview".to_string(),
            challenge: "Challenge".to_string(),
            solution: "Solution".to_string(),
            tools: vec!["Arduino".to_string()],
            features: vec!["Feature".to_string()],
            images: vec!["/images/a.png".to_string()],
        }
    }

    fn make_summary(record: &ProjectRecord) -> ProjectSummary {
        ProjectSummary {
            slug: record.slug.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            year: record.year.clone(),
            image: record.image.clone(),
            description: "Short".to_string(),
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let store = content_store();
        assert_eq!(store.len(), 5);
        assert_eq!(store.listing().len(), 5);
    }

    #[test]
    fn test_lookup_identity() {
        let store = content_store();
        for record in store.records() {
            let found = store.lookup(&record.slug).expect("every slug resolves");
            assert_eq!(found.slug, record.slug);
        }
    }

    #[test]
    fn test_lookup_unknown_slug() {
        let store = content_store();
        assert!(store.lookup("does-not-exist").is_none());
        assert!(store.lookup("").is_none());
        assert!(store.lookup("LUNA").is_none());
    }

    #[test]
    fn test_listing_consistent_with_records() {
        let store = content_store();
        for summary in store.listing() {
            let record = store.lookup(&summary.slug).expect("listing slug resolves");
            assert_eq!(summary.title, record.title);
            assert_eq!(summary.category, record.category);
            assert_eq!(summary.year, record.year);
        }
    }

    #[test]
    fn test_listing_keeps_file_order() {
        let slugs: Vec<&str> = content_store().listing().iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["luna", "concept-car", "airplane-seat", "armusic", "sketches"]);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let records = vec![make_record("luna"), make_record("luna")];
        let err = ContentStore::new(records, vec![]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(slug) if slug == "luna"));
    }

    #[test]
    fn test_dangling_listing_rejected() {
        let orphan = make_summary(&make_record("ghost"));
        let err = ContentStore::new(vec![make_record("luna")], vec![orphan]).unwrap_err();
        assert!(matches!(err, ContentError::DanglingListing(slug) if slug == "ghost"));
    }

    #[test]
    fn test_drift_rejected() {
        let record = make_record("luna");
        let mut summary = make_summary(&record);
        summary.category = "Other".to_string();
        let err = ContentStore::new(vec![record], vec![summary]).unwrap_err();
        assert!(matches!(err, ContentError::Drift { field: "category", .. }));
    }

    #[test]
    fn test_duplicate_listing_rejected() {
        let record = make_record("luna");
        let listing = vec![make_summary(&record), make_summary(&record)];
        let err = ContentStore::new(vec![record], listing).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateListing(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ContentStore::from_json("[{]", "[]").unwrap_err();
        assert!(matches!(err, ContentError::Malformed { name: "projects", .. }));
    }

    #[test]
    fn test_unlisted_record_still_resolves() {
        let store = ContentStore::new(vec![make_record("hidden")], vec![]).unwrap();
        assert!(store.listing().is_empty());
        assert_eq!(store.lookup("hidden").map(|r| r.title.as_str()), Some("Project hidden"));
    }
}
