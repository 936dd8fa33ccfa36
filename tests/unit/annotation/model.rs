use super::*;

use serde_json::json;

#[test]
fn category_table_order_and_styles() {
    let keys: Vec<_> = PointCategory::ALL.iter().map(|c| c.key()).collect();
    assert_eq!(
        keys,
        [
            "obj1_positive_points",
            "obj1_negative_points",
            "obj2_positive_points",
            "obj2_negative_points",
            "positive_points",
            "negative_points",
        ]
    );

    assert_eq!(PointCategory::Obj1Positive.style(), MarkerStyle::Positive);
    assert_eq!(PointCategory::Obj2Negative.style(), MarkerStyle::Negative);
    assert_eq!(PointCategory::Positive.style(), MarkerStyle::Positive);
    assert_eq!(PointCategory::Negative.style(), MarkerStyle::Negative);

    assert_eq!(PointCategory::Obj1Negative.color(), Rgb8::MAGENTA);
    assert_eq!(PointCategory::Obj2Positive.color(), Rgb8::CYAN);
    assert_eq!(PointCategory::Positive.color(), Rgb8::GREEN);
    assert_eq!(PointCategory::Negative.color(), Rgb8::RED);
}

#[test]
fn point_set_keeps_unknown_keys_aside() {
    let v = json!({
        "positive_points": [[50, 50], [10.7, 3.2]],
        "obj3_positive_points": [[1, 1]],
        "note": "ignored"
    });
    let set = PointSet::from_value(&v).unwrap();

    let pos = set.points(PointCategory::Positive).unwrap();
    assert_eq!(pos.len(), 2);
    assert_eq!(pos[1], Point::new(10.7, 3.2));
    assert!(set.points(PointCategory::Negative).is_none());
    assert_eq!(set.total_points(), 2);

    let unknown: Vec<_> = set.unknown_keys().collect();
    assert_eq!(unknown, ["obj3_positive_points", "note"]);
}

#[test]
fn point_set_rejects_malformed_recognized_points() {
    assert!(PointSet::from_value(&json!({"negative_points": [[1]]})).is_err());
    assert!(PointSet::from_value(&json!({"negative_points": [["a", 2]]})).is_err());
    assert!(PointSet::from_value(&json!({"negative_points": 3})).is_err());
    assert!(PointSet::from_value(&json!([[1, 2]])).is_err());
}

#[test]
fn point_set_ignores_extra_coordinate_components() {
    let set = PointSet::from_value(&json!({"negative_points": [[4, 5, 0.9]]})).unwrap();
    assert_eq!(
        set.points(PointCategory::Negative).unwrap(),
        &[Point::new(4.0, 5.0)]
    );
}

#[test]
fn record_keeps_frame_order_from_document() {
    let doc = AnnotationDocument::from_json_str(
        r#"{"v": {"300": {"positive_points": []}, "12": {}, "7": {}}}"#,
    )
    .unwrap();
    let (_, value) = doc.iter().next().unwrap();
    let record = AnnotationRecord::from_value(value).unwrap();
    let keys: Vec<_> = record.frame_keys().collect();
    assert_eq!(keys, ["300", "12", "7"]);
}

#[test]
fn point_set_shaped_record_becomes_frame_zero() {
    let record = AnnotationRecord::from_value(&json!({
        "obj1_positive_points": [[1, 2]]
    }))
    .unwrap();
    assert_eq!(record.len(), 1);
    assert_eq!(record.frame_keys().collect::<Vec<_>>(), ["0"]);

    let record = AnnotationRecord::from_value(&json!({
        "note": 1,
        "obj2_negative_points": []
    }))
    .unwrap();
    assert_eq!(record.frame_keys().collect::<Vec<_>>(), ["0"]);
}

#[test]
fn record_must_be_an_object() {
    let err = AnnotationRecord::from_value(&json!([1, 2])).unwrap_err();
    assert!(matches!(err, SpotCheckError::Validation(_)));
}

#[test]
fn document_preserves_entry_order_and_rejects_non_objects() {
    let doc = AnnotationDocument::from_json_str(r#"{"z/b": {}, "a/c": {}, "m": {}}"#).unwrap();
    assert_eq!(doc.len(), 3);
    let keys: Vec<_> = doc.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["z/b", "a/c", "m"]);

    assert!(matches!(
        AnnotationDocument::from_json_str("[1]").unwrap_err(),
        SpotCheckError::Validation(_)
    ));
    assert!(matches!(
        AnnotationDocument::from_json_str("{").unwrap_err(),
        SpotCheckError::Serde(_)
    ));
}
