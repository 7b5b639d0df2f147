/*!
 * End-to-end tests for the promptify binary
 */

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn promptify() -> Command {
    Command::new(env!("CARGO_BIN_EXE_promptify"))
}

#[test]
fn test_json_report_and_explicit_output() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir_all(project.join("src")).unwrap();
    fs::write(project.join("src").join("app.py"), "print('hi')\n").unwrap();
    fs::write(project.join("notes.md"), "Some notes\n").unwrap();
    fs::write(
        project.join("keys.py"),
        "API_KEY = \"abcdefghijklmnopqrstuvwxyz012345\"\n",
    )
    .unwrap();

    let output_file = temp_dir.path().join("context.md");
    let output = promptify()
        .current_dir(temp_dir.path())
        .arg(&project)
        .args(["--format", "json", "--quiet", "--output"])
        .arg(&output_file)
        .output()
        .unwrap();

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["included"], serde_json::json!(["notes.md", "src/app.py"]));
    assert_eq!(report["skipped"][0]["path"], "keys.py");
    assert!(report["metadata"]["token_count"].as_u64().unwrap() > 0);

    let document = fs::read_to_string(&output_file).unwrap();
    assert!(document.contains("---\nFile: `src/app.py`\n\n```\nprint('hi')\n\n```\n"));
    assert!(!document.contains("API_KEY"));
}

#[test]
fn test_missing_directory_still_exits_cleanly() {
    let temp_dir = tempdir().unwrap();
    let output = promptify()
        .current_dir(temp_dir.path())
        .arg(temp_dir.path().join("does-not-exist"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Target directory not found"));
}

#[test]
fn test_unwritable_output_is_a_warning_after_the_report() {
    let temp_dir = tempdir().unwrap();
    let project = temp_dir.path().join("project");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("main.py"), "print('hi')\n").unwrap();

    let output_file = temp_dir.path().join("missing").join("out.md");
    let output = promptify()
        .current_dir(temp_dir.path())
        .arg(&project)
        .args(["--format", "json", "--quiet", "--output"])
        .arg(&output_file)
        .output()
        .unwrap();

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["included"], serde_json::json!(["main.py"]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: Failed to write"));
    assert!(!stderr.contains("Error:"));
    assert!(!output_file.exists());
}

#[test]
fn test_generate_completions() {
    let output = promptify().args(["--generate", "bash"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("promptify"));
}
