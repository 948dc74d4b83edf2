use std::fs;

use tempfile::tempdir;

use archmap_cli::{Args, run};

fn args_for(output: &str, format: &str) -> Args {
    Args {
        output: output.to_string(),
        format: format.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_dot_output() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("architecture_diagram");

    let args = args_for(&output.to_string_lossy(), "dot");
    run(&args).expect("Rendering the built-in diagram to DOT should succeed");

    let written = temp_dir.path().join("architecture_diagram.dot");
    assert!(written.exists(), "Expected {} to exist", written.display());

    let dot = fs::read_to_string(&written).expect("Failed to read DOT output");
    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("BlogSite Microservices Architecture"));
    assert!(dot.contains("gateway -> blog_service"));
}

#[test]
fn e2e_smoke_test_dot_output_is_stable() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let first_path = temp_dir.path().join("first");
    run(&args_for(&first_path.to_string_lossy(), "dot")).expect("First render failed");

    let second_path = temp_dir.path().join("second");
    run(&args_for(&second_path.to_string_lossy(), "dot")).expect("Second render failed");

    let first = fs::read(temp_dir.path().join("first.dot")).expect("Failed to read first output");
    let second =
        fs::read(temp_dir.path().join("second.dot")).expect("Failed to read second output");
    assert_eq!(first, second, "Repeated runs should write identical bytes");
}

#[test]
fn e2e_smoke_test_unknown_format_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("diagram");

    let args = args_for(&output.to_string_lossy(), "pdf");
    assert!(run(&args).is_err(), "Unknown format should be rejected");

    // Nothing should have been written
    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .expect("Failed to list temp dir")
        .collect();
    assert!(entries.is_empty());
}

#[test]
fn e2e_smoke_test_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("diagram");

    let args = Args {
        output: output.to_string_lossy().to_string(),
        format: "dot".to_string(),
        config: Some(
            temp_dir
                .path()
                .join("no_such_config.toml")
                .to_string_lossy()
                .to_string(),
        ),
        log_level: "off".to_string(),
    };
    assert!(run(&args).is_err(), "Missing explicit config should fail");
}

#[test]
fn e2e_smoke_test_config_changes_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nbackground_color = \"lightgray\"\n")
        .expect("Failed to write config");

    let output = temp_dir.path().join("styled");
    let args = Args {
        output: output.to_string_lossy().to_string(),
        format: "dot".to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };
    run(&args).expect("Rendering with explicit config should succeed");

    let dot = fs::read_to_string(temp_dir.path().join("styled.dot"))
        .expect("Failed to read DOT output");
    assert!(dot.contains("bgcolor=\"lightgray\""));
}
