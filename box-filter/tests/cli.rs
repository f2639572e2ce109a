use std::{path::PathBuf, process::Output, sync::OnceLock};

use escargot::CargoBuild;

fn bin_path() -> &'static PathBuf {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        CargoBuild::new()
            .bin("box-filter-gen")
            .current_target()
            .current_release()
            .manifest_path(env!("CARGO_MANIFEST_PATH"))
            .run()
            .unwrap()
            .path()
            .to_path_buf()
    })
}

fn run(args: &[&str]) -> Output {
    std::process::Command::new(bin_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8 string")
}

#[test]
fn test_full_3x3() {
    let output = run(&["3"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "===\n***\n***\n***\n===\n3,3,1,1,1,1,1,1,1,1,1\n"
    );
}

#[test]
fn test_oddeven_word() {
    let output = run(&["3", "0", "9999", "oddeven"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "===\n.*.\n***\n.*.\n===\n3,3,0,1,0,1,1,1,0,1,0\n"
    );
}

#[test]
fn test_density_flag() {
    let output = run(&["--density", "onefifth", "5"]);
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines[..7],
        ["=====", "*....", "...*.", ".**..", "....*", "..*..", "====="]
    );
    assert_eq!(lines[7].split(',').count(), 27);
}

#[test]
fn test_degenerate_band_keeps_center() {
    let output = run(&["3", "5", "5"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "===\n...\n.*.\n...\n===\n3,3,0,0,0,0,1,0,0,0,0\n"
    );
}

#[test]
fn test_json_format() {
    let output = run(&["5", "0", "9999", "--format", "json", "quarter"]);
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["width"], 5);
    assert_eq!(v["density"], "quarter");
    assert_eq!(v["cells"].as_array().unwrap().len(), 25);
    assert_eq!(v["on_count"], 9);
}

#[test]
fn test_invalid_diameter_prints_no_mask() {
    for bad in ["4", "0", "-1", "x"] {
        let output = run(&[bad]);
        assert!(!output.status.success(), "{bad} should fail");
        assert!(output.stdout.is_empty(), "{bad} should not print a mask");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("odd positive integer"), "{stderr}");
    }
}

#[test]
fn test_invalid_radius_prints_no_mask() {
    let output = run(&["5", "0", "far"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid radius"));
}

#[test]
fn test_missing_diameter_prints_usage() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
