use crate::foundation::error::{SpotCheckError, SpotCheckResult};

/// Category names recognized by prefix when a video key carries no `category/` part.
///
/// Order matters: the first matching prefix wins, even when a later entry is more specific.
pub const KNOWN_CATEGORY_PREFIXES: &[&str] = &[
    "motorcycle_repair",
    "assembling_motor_starter",
    "adjusting_vehicle_tire",
    "baking",
    "candy",
    "clay",
    "ac_maintenance",
    "fan_assembly",
    "professionalchef",
    "panel_assembly",
    "construction_wirework",
    "building_bookshelf",
    "air_purifier_deep_clean",
    "installing_car_speakers",
    "mosaic_number_tiles",
    "washing_clothes",
];

/// Marker separating a category from a clip sequence suffix (`clay_seq4`).
pub const SEQUENCE_MARKER: &str = "_seq";

/// Result of classifying a top-level video key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub category: String,
    pub video_name: String,
}

/// One entry of the ordered rule table: keys starting with `prefix` belong to `category`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRule {
    pub prefix: String,
    pub category: String,
}

impl CategoryRule {
    pub fn prefix(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            prefix: name.clone(),
            category: name,
        }
    }

    fn matches(&self, key: &str) -> bool {
        key.starts_with(self.prefix.as_str())
    }
}

/// Maps opaque video keys to `(category, video_name)`.
///
/// Rules are applied in order:
///
/// 1. `category/name`, split on the last `/`
/// 2. the prefix table, first match wins
/// 3. the text before [`SEQUENCE_MARKER`]
#[derive(Clone, Debug)]
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
    sequence_marker: String,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::with_rules(
            KNOWN_CATEGORY_PREFIXES
                .iter()
                .map(|p| CategoryRule::prefix(*p))
                .collect(),
        )
    }
}

impl CategoryClassifier {
    pub fn with_rules(rules: Vec<CategoryRule>) -> Self {
        Self {
            rules,
            sequence_marker: SEQUENCE_MARKER.to_string(),
        }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn classify(&self, video_key: &str) -> SpotCheckResult<Classified> {
        if let Some((category, video_name)) = video_key.rsplit_once('/') {
            return Ok(Classified {
                category: category.to_string(),
                video_name: video_name.to_string(),
            });
        }

        if let Some(rule) = self.rules.iter().find(|r| r.matches(video_key)) {
            return Ok(Classified {
                category: rule.category.clone(),
                video_name: video_key.to_string(),
            });
        }

        let mut parts = video_key.split(self.sequence_marker.as_str());
        if let (Some(head), Some(_)) = (parts.next(), parts.next()) {
            return Ok(Classified {
                category: head.to_string(),
                video_name: video_key.to_string(),
            });
        }

        Err(SpotCheckError::unclassifiable(video_key))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/classify.rs"]
mod tests;
