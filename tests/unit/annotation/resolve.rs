use serde_json::json;

use super::*;
use crate::annotation::model::PointCategory;

#[test]
fn empty_record_fails() {
    let record = AnnotationRecord::from_value(&json!({})).unwrap();
    assert!(matches!(
        resolve_frame(&record).unwrap_err(),
        SpotCheckError::EmptyRecord
    ));
}

#[test]
fn first_key_in_document_order_is_the_target() {
    let record = AnnotationRecord::from_value(&json!({
        "120": {"positive_points": [[50, 50]], "negative_points": [[-5, 10]]},
        "3": {"positive_points": [[1, 1]]}
    }))
    .unwrap();

    let resolved = resolve_frame(&record).unwrap();
    assert_eq!(resolved.frame, FrameIndex(120));
    assert_eq!(
        resolved.points.points(PointCategory::Negative).unwrap().len(),
        1
    );
}

#[test]
fn resolved_frame_is_always_one_of_the_record_keys() {
    let cases = [
        json!({"0": {}}),
        json!({"45": {}, "46": {}}),
        json!({"9000": {"obj2_negative_points": []}, "1": {}}),
    ];
    for case in cases {
        let record = AnnotationRecord::from_value(&case).unwrap();
        let resolved = resolve_frame(&record).unwrap();
        let keys: Vec<u64> = record
            .frame_keys()
            .map(|k| k.parse::<u64>().unwrap())
            .collect();
        assert!(keys.contains(&resolved.frame.0));
    }
}

#[test]
fn point_set_shaped_record_resolves_to_frame_zero() {
    let record = AnnotationRecord::from_value(&json!({
        "obj1_positive_points": [[10, 20]]
    }))
    .unwrap();
    let resolved = resolve_frame(&record).unwrap();
    assert_eq!(resolved.frame, FrameIndex(0));
    assert_eq!(
        resolved.points.points(PointCategory::Obj1Positive).unwrap()[0].x,
        10.0
    );
}

#[test]
fn malformed_later_frames_are_not_inspected() {
    let record = AnnotationRecord::from_value(&json!({
        "5": {"negative_points": [[1, 2]]},
        "6": "not a point set"
    }))
    .unwrap();
    assert_eq!(resolve_frame(&record).unwrap().frame, FrameIndex(5));
}

#[test]
fn non_numeric_first_key_is_a_validation_error() {
    let record = AnnotationRecord::from_value(&json!({"frame_a": {}})).unwrap();
    assert!(matches!(
        resolve_frame(&record).unwrap_err(),
        SpotCheckError::Validation(_)
    ));
}
