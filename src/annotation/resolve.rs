use crate::{
    annotation::model::{AnnotationRecord, PointSet},
    foundation::{
        core::FrameIndex,
        error::{SpotCheckError, SpotCheckResult},
    },
};

/// The single frame selected from a record, with its parsed points.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedFrame {
    pub frame: FrameIndex,
    pub points: PointSet,
}

/// Pick the target frame: the first frame key in document order.
///
/// Only that frame's points are parsed; later frames are not inspected.
pub fn resolve_frame(record: &AnnotationRecord) -> SpotCheckResult<ResolvedFrame> {
    let (key, value) = record.first().ok_or(SpotCheckError::EmptyRecord)?;
    let frame = FrameIndex::parse_key(key)?;
    let points = PointSet::from_value(value)?;
    Ok(ResolvedFrame { frame, points })
}

#[cfg(test)]
#[path = "../../tests/unit/annotation/resolve.rs"]
mod tests;
