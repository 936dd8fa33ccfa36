use std::{io::Read, path::Path};

use anyhow::Context as _;
use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{
    core::{Point, Rgb8},
    error::{SpotCheckError, SpotCheckResult},
};

/// How a point category is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// Filled disc with a white ring and a centered "+".
    Positive,
    /// Two crossing strokes.
    Negative,
}

/// The fixed vocabulary of renderable point groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointCategory {
    Obj1Positive,
    Obj1Negative,
    Obj2Positive,
    Obj2Negative,
    Positive,
    Negative,
}

impl PointCategory {
    /// Draw order. Later categories land on top of earlier ones.
    pub const ALL: [PointCategory; 6] = [
        PointCategory::Obj1Positive,
        PointCategory::Obj1Negative,
        PointCategory::Obj2Positive,
        PointCategory::Obj2Negative,
        PointCategory::Positive,
        PointCategory::Negative,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Obj1Positive => "obj1_positive_points",
            Self::Obj1Negative => "obj1_negative_points",
            Self::Obj2Positive => "obj2_positive_points",
            Self::Obj2Negative => "obj2_negative_points",
            Self::Positive => "positive_points",
            Self::Negative => "negative_points",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn color(self) -> Rgb8 {
        match self {
            Self::Obj1Positive | Self::Obj1Negative => Rgb8::MAGENTA,
            Self::Obj2Positive | Self::Obj2Negative => Rgb8::CYAN,
            Self::Positive => Rgb8::GREEN,
            Self::Negative => Rgb8::RED,
        }
    }

    pub fn style(self) -> MarkerStyle {
        if self.key().contains("positive") {
            MarkerStyle::Positive
        } else {
            MarkerStyle::Negative
        }
    }
}

/// Labeled points for one frame, keyed by category.
///
/// Keys outside the [`PointCategory`] vocabulary are kept verbatim in `unknown` and are never
/// drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    recognized: IndexMap<PointCategory, Vec<Point>>,
    unknown: IndexMap<String, Value>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(mut self, category: PointCategory, points: &[(f64, f64)]) -> Self {
        self.recognized.insert(
            category,
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        );
        self
    }

    pub fn from_value(value: &Value) -> SpotCheckResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            SpotCheckError::validation(format!(
                "point set must be a JSON object, got {}",
                json_kind(value)
            ))
        })?;

        let mut out = Self::default();
        for (key, v) in obj {
            match PointCategory::from_key(key) {
                Some(category) => {
                    let points = parse_points(category, v)?;
                    out.recognized.insert(category, points);
                }
                None => {
                    out.unknown.insert(key.clone(), v.clone());
                }
            }
        }
        Ok(out)
    }

    pub fn points(&self, category: PointCategory) -> Option<&[Point]> {
        self.recognized.get(&category).map(Vec::as_slice)
    }

    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.unknown.keys().map(String::as_str)
    }

    pub fn total_points(&self) -> usize {
        self.recognized.values().map(Vec::len).sum()
    }
}

fn parse_points(category: PointCategory, value: &Value) -> SpotCheckResult<Vec<Point>> {
    let items = value.as_array().ok_or_else(|| {
        SpotCheckError::validation(format!(
            "'{}' must be an array of [x, y] pairs",
            category.key()
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let xy = item
                .as_array()
                .filter(|a| a.len() >= 2)
                .and_then(|a| Some((a[0].as_f64()?, a[1].as_f64()?)))
                .ok_or_else(|| {
                    SpotCheckError::validation(format!(
                        "'{}'[{i}] is not a numeric [x, y] pair",
                        category.key()
                    ))
                })?;
            Ok(Point::new(xy.0, xy.1))
        })
        .collect()
}

/// Sparse per-video annotations: frame-index key → point set (kept as raw JSON until a frame is
/// selected).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationRecord {
    frames: IndexMap<String, Value>,
}

impl AnnotationRecord {
    /// Normalize one document value into a record.
    ///
    /// An object that carries any point-category key is itself a point set and becomes the only
    /// entry of an implicit frame `"0"`.
    pub fn from_value(value: &Value) -> SpotCheckResult<Self> {
        let obj = value.as_object().ok_or_else(|| {
            SpotCheckError::validation(format!(
                "annotation record must be a JSON object, got {}",
                json_kind(value)
            ))
        })?;

        if obj.keys().any(|k| PointCategory::from_key(k).is_some()) {
            let mut frames = IndexMap::with_capacity(1);
            frames.insert("0".to_string(), value.clone());
            return Ok(Self { frames });
        }

        let frames = obj
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<IndexMap<_, _>>();
        Ok(Self { frames })
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_keys(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    pub(crate) fn first(&self) -> Option<(&str, &Value)> {
        self.frames.first().map(|(k, v)| (k.as_str(), v))
    }
}

/// One top-level document entry after classification.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoEntry {
    pub key: String,
    pub category: String,
    pub video_name: String,
    pub record: AnnotationRecord,
}

/// The top-level annotation document: video key → annotation record, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationDocument {
    entries: IndexMap<String, Value>,
}

impl AnnotationDocument {
    pub fn from_path(path: &Path) -> SpotCheckResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open annotation document '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    pub fn from_reader(reader: impl Read) -> SpotCheckResult<Self> {
        let value: Value = serde_json::from_reader(reader)
            .map_err(|e| SpotCheckError::serde(format!("parse annotation JSON: {e}")))?;
        Self::from_json(value)
    }

    pub fn from_json_str(s: &str) -> SpotCheckResult<Self> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| SpotCheckError::serde(format!("parse annotation JSON: {e}")))?;
        Self::from_json(value)
    }

    fn from_json(value: Value) -> SpotCheckResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            other => Err(SpotCheckError::validation(format!(
                "annotation document must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/model.rs"]
mod tests;
