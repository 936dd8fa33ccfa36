use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_config").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults_validate() {
    let cfg = SpotCheckConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.input_path, PathBuf::from("perfect_frame_annotation.json"));
    assert!(cfg.output_dir.is_absolute());
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!(cfg.presign_expiry_secs, 3600);
    assert!(!cfg.fail_on_error);
}

#[test]
fn validation_catches_bad_values() {
    assert!(
        SpotCheckConfig {
            presign_expiry_secs: 0,
            ..SpotCheckConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        SpotCheckConfig {
            output_dir: PathBuf::new(),
            ..SpotCheckConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        SpotCheckConfig {
            asset_base: "  ".to_string(),
            ..SpotCheckConfig::default()
        }
        .validate()
        .is_err()
    );
    assert!(
        SpotCheckConfig {
            fps: Fps { num: 0, den: 1 },
            ..SpotCheckConfig::default()
        }
        .validate()
        .is_err()
    );
}

#[test]
fn relative_input_falls_back_to_output_dir() {
    let out = scratch_dir("fallback");
    std::fs::write(out.join("only_in_output.json"), "{}").unwrap();

    let cfg = SpotCheckConfig {
        input_path: PathBuf::from("only_in_output.json"),
        output_dir: out.clone(),
        ..SpotCheckConfig::default()
    };
    assert_eq!(
        cfg.resolve_input_path().unwrap(),
        out.join("only_in_output.json")
    );
}

#[test]
fn existing_relative_input_wins_over_output_dir() {
    let out = scratch_dir("cwd_wins");
    let cfg = SpotCheckConfig {
        input_path: PathBuf::from("Cargo.toml"),
        output_dir: out,
        ..SpotCheckConfig::default()
    };
    assert_eq!(cfg.resolve_input_path().unwrap(), PathBuf::from("Cargo.toml"));
}

#[test]
fn missing_input_is_reported() {
    let cfg = SpotCheckConfig {
        input_path: PathBuf::from("no_such_annotations.json"),
        output_dir: scratch_dir("missing"),
        ..SpotCheckConfig::default()
    };
    let err = cfg.resolve_input_path().unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn fetch_config_carries_tool_settings() {
    let cfg = SpotCheckConfig {
        ffmpeg_bin: PathBuf::from("/opt/ffmpeg"),
        presign_expiry_secs: 60,
        ..SpotCheckConfig::default()
    };
    let fetch = cfg.fetch_config();
    assert_eq!(fetch.ffmpeg_bin, PathBuf::from("/opt/ffmpeg"));
    assert_eq!(fetch.presign_expiry_secs, 60);
    assert_eq!(fetch.fps, cfg.fps);
}
