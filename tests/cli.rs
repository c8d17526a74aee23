use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    // Run somewhere without an ieee-specials.toml
    let output = Command::new(env!("CARGO_BIN_EXE_ieee-specials"))
        .args(args)
        .current_dir(std::env::temp_dir())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output();

    assert!(output.is_ok(), "Failed to run ieee-specials!");
    output.unwrap()
}

#[test]
fn test_classify_values() {
    let output = run(&["--", "0x7FF0000000000000", "-0", "1.5", "-nan"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "{stdout}");
    assert!(lines[0].ends_with("positive infinity  [sentinel: inf]"));
    assert!(lines[1].ends_with("negative zero"));
    assert!(lines[2].ends_with("positive normalized"));
    assert!(lines[3].ends_with("negative quiet NaN  [sentinel: nvp]"));
}

#[test]
fn test_table_toml() {
    let output = run(&["--table", "--width", "32", "--format", "toml"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: toml::Value = toml::from_str(&stdout).unwrap();
    assert_eq!(parsed["width"].as_integer(), Some(32));
    assert_eq!(parsed["range"].as_array().map(Vec::len), Some(13));
}

#[test]
fn test_invalid_value() {
    let output = run(&["not-a-number"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_too_wide_for_32_bits() {
    let output = run(&["-w", "32", "0x100000000"]);
    assert_eq!(output.status.code(), Some(1));
}
