use super::*;

#[test]
fn output_names_follow_convention() {
    let dir = Path::new("/out");
    assert_eq!(
        spot_check_path(dir, "baking_seq3"),
        PathBuf::from("/out/baking_seq3_annotated_spot_check.png")
    );
    assert_eq!(
        temp_frame_path(dir, "baking_seq3"),
        PathBuf::from("/out/baking_seq3_frame_temp.png")
    );
}

#[test]
fn saved_png_round_trips_pixels() {
    let dir = PathBuf::from("target").join("unit_output").join("nested").join("dir");
    ensure_output_dir(&dir).unwrap();

    let mut frame = Frame::from_pixel(3, 2, image::Rgb([1, 2, 3]));
    frame.put_pixel(2, 1, image::Rgb([250, 0, 9]));
    let path = spot_check_path(&dir, "clip");
    save_spot_check(&frame, &path).unwrap();

    let back = image::open(&path).unwrap().to_rgb8();
    assert_eq!(back, frame);
}

#[test]
fn save_into_missing_dir_is_an_error() {
    let frame = Frame::from_pixel(1, 1, image::Rgb([0, 0, 0]));
    let path = PathBuf::from("target/unit_output/does/not/exist/x.png");
    let _ = std::fs::remove_dir_all("target/unit_output/does");
    assert!(save_spot_check(&frame, &path).is_err());
}
