//! Site Configuration
//!
//! Interaction tuning and owner identity, compiled in.

use leptos_pointer::DistortionField;
use serde::{Deserialize, Serialize};

/// Tuning values for the pointer / scroll effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Quiet interval before the cursor shrinks
    pub idle_quiet_ms: u32,
    /// Scroll offset past which the navigation bar turns solid
    pub scroll_threshold_px: f64,
    /// Pointer distance at which the hero orb lights up
    pub orb_radius_px: f64,
    pub distortion: DistortionField,
    /// Space left above a section when jumping to its anchor (fixed nav height)
    pub anchor_offset_px: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            idle_quiet_ms: 1000,
            scroll_threshold_px: 50.0,
            orb_radius_px: 200.0,
            distortion: DistortionField {
                radius: 150.0,
                max_offset: 8.0,
            },
            anchor_offset_px: 80.0,
        }
    }
}

/// External profile link in the footer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

/// Who the site belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteProfile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub brand: &'static str,
    pub role: &'static str,
    pub affiliation: &'static str,
    pub contacts: &'static [ContactLink],
}

pub const PROFILE: SiteProfile = SiteProfile {
    first_name: "FANJUN",
    last_name: "WEI",
    brand: "FANJUN.",
    role: "Design Engineering Student",
    affiliation: "Imperial College London",
    contacts: &[
        ContactLink { label: "Email", href: "mailto:fanjun.wei22@imperial.ac.uk", external: false },
        ContactLink { label: "LinkedIn", href: "https://linkedin.com", external: true },
        ContactLink { label: "GitHub", href: "https://github.com", external: true },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interaction_values() {
        let config = InteractionConfig::default();
        assert_eq!(config.idle_quiet_ms, 1000);
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert!(config.distortion.radius < config.orb_radius_px);
    }

    #[test]
    fn test_config_deserializes() {
        let json = r#"{
            "idle_quiet_ms": 500,
            "scroll_threshold_px": 10.0,
            "orb_radius_px": 120.0,
            "distortion": { "radius": 90.0, "max_offset": 4.0 },
            "anchor_offset_px": 64.0
        }"#;
        let config: InteractionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.idle_quiet_ms, 500);
        assert_eq!(config.distortion.max_offset, 4.0);
    }
}
