use std::fs;

use recast_cli::{run, TranslateOptions};

const GOOD: &str = r#"<LinearLayout android:orientation="vertical"><TextView android:text="Hi" /></LinearLayout>"#;
const BAD: &str = r#"<RangeSlider android:min="50" android:max="10" />"#;

#[test]
fn writes_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("activity_main.xml");
    fs::write(&input, GOOD).unwrap();

    let summary = run(&[input.clone()], &TranslateOptions::default());
    assert_eq!(summary.translated, [input]);
    assert!(summary.failed.is_empty());

    let code = fs::read_to_string(dir.path().join("activity_main.kt")).unwrap();
    assert_eq!(code, "Column {\n    Text(text = \"Hi\")\n}\n");
}

#[test]
fn failing_file_is_skipped_and_never_written() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("generated");
    let bad = dir.path().join("broken.xml");
    let good = dir.path().join("home_screen.xml");
    fs::write(&bad, BAD).unwrap();
    fs::write(&good, GOOD).unwrap();

    let options = TranslateOptions { output_dir: Some(out.clone()), ..Default::default() };
    let summary = run(&[bad.clone(), good.clone()], &options);

    assert_eq!(summary.failed, [bad]);
    assert_eq!(summary.translated, [good]);
    assert!(!out.join("broken.kt").exists());
    assert!(out.join("home_screen.kt").exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.xml");
    let summary = run(&[missing.clone()], &TranslateOptions::default());
    assert_eq!(summary.failed, [missing]);
}

#[test]
fn complete_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("home_screen.xml");
    fs::write(&input, GOOD).unwrap();

    let options = TranslateOptions { complete: true, ..Default::default() };
    run(&[input], &options);

    let code = fs::read_to_string(dir.path().join("home_screen.kt")).unwrap();
    assert!(code.contains("@Composable\n@OptIn(ExperimentalMaterialApi::class)\nfun HomeScreen() {\n    Column {\n        Text(text = \"Hi\")\n    }\n}\n"));
    assert!(code.contains("fun HomeScreenPreview() {\n    HomeScreen()\n}"));
}

#[test]
fn stdout_mode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("card.xml");
    fs::write(&input, GOOD).unwrap();

    let options = TranslateOptions { to_stdout: true, ..Default::default() };
    let summary = run(&[input], &options);
    assert_eq!(summary.translated.len(), 1);
    assert!(!dir.path().join("card.kt").exists());
}
