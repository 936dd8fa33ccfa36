use super::*;

#[test]
fn annotated_locator_follows_layout() {
    let loc = AssetLocator::annotated_720p("s3://bucket/CLIPPED", "baking", "baking_seq3");
    assert_eq!(
        loc.as_str(),
        "s3://bucket/CLIPPED/baking/baking_seq3/baking_seq3_annotated_720p.mp4"
    );
    assert!(loc.is_s3());
}

#[test]
fn trailing_slash_on_base_is_not_doubled() {
    let loc = AssetLocator::annotated_720p("/data/clips/", "clay", "v1");
    assert_eq!(loc.as_str(), "/data/clips/clay/v1/v1_annotated_720p.mp4");
    assert!(!loc.is_s3());
}

#[test]
fn default_base_is_s3() {
    let loc = AssetLocator::annotated_720p(DEFAULT_ASSET_BASE, "candy", "c");
    assert!(loc.is_s3());
    assert!(loc.to_string().ends_with("/candy/c/c_annotated_720p.mp4"));
}
