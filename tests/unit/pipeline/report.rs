use super::*;
use crate::foundation::error::SpotCheckError;

fn summary() -> RunSummary {
    RunSummary {
        successful: 1,
        failed: 1,
        outcomes: vec![
            EntryOutcome {
                key: "baking/video_7".to_string(),
                video_name: Some("video_7".to_string()),
                frame: Some(FrameIndex(120)),
                stage: EntryStage::Persisted,
                status: EntryStatus::Succeeded {
                    output: PathBuf::from("out/video_7_annotated_spot_check.png"),
                },
            },
            EntryOutcome {
                key: "mystery".to_string(),
                video_name: None,
                frame: None,
                stage: EntryStage::Received,
                status: EntryStatus::Failed {
                    error: SpotCheckError::unclassifiable("mystery"),
                },
            },
        ],
    }
}

#[test]
fn report_serializes_outcomes_in_order() {
    let report = RunReport::from_summary(&summary());
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["successful"], 1);
    assert_eq!(value["failed"], 1);

    let ok = &value["entries"][0];
    assert_eq!(ok["frame"], 120);
    assert_eq!(ok["stage"], "persisted");
    assert_eq!(ok["output"], "out/video_7_annotated_spot_check.png");
    assert!(ok.get("error").is_none());

    let bad = &value["entries"][1];
    assert_eq!(bad["key"], "mystery");
    assert!(bad["frame"].is_null());
    assert_eq!(bad["stage"], "received");
    assert_eq!(bad["error_kind"], "UnclassifiableKey");
    assert!(bad["error"].as_str().unwrap().contains("mystery"));
}

#[test]
fn report_is_written_as_json() {
    let dir = PathBuf::from("target").join("unit_report");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("spot_check_report.json");

    write_report(&RunReport::from_summary(&summary()), &path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["entries"].as_array().unwrap().len(), 2);
}
