use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn convert_quiet_prints_copy_text() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["convert", "--duration", "300", "--bounce", "0.1", "--quiet"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert_eq!(text.trim(), "stiffness: 438.65, damping: 37.70");
}

#[test]
fn convert_accepts_negative_bounce() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["convert", "--bounce", "-0.5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("Stiffness: 438.65"), "unexpected report: {text}");
    assert!(text.contains("Damping: 83.78"), "unexpected report: {text}");
}

#[test]
fn convert_rejects_zero_duration() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["convert", "--duration", "0"])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("invalid duration"), "unexpected stderr: {text}");
}

#[test]
fn convert_json_has_damping_ratio() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["convert", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let ratio = value["damping_ratio"].as_f64().expect("ratio is a number");
    assert!((ratio - 0.9).abs() < 1e-9);
}

#[test]
fn generate_all_platforms() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["generate", "--all"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for title in ["── Tux ──", "── iOS ──", "── Android ──", "── Web ──"] {
        assert!(text.contains(title), "missing {title}");
    }
    assert!(text.contains(".setDampingRatio(0.90f)"));
    assert!(text.contains("stiffness: 438.65, damping: 37.70"));
}

#[test]
fn generate_without_terminal_uses_surfaced_platforms() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .arg("generate")
        .write_stdin("")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("── Tux ──"));
    assert!(text.contains("── Web ──"));
    assert!(!text.contains("── Android ──"));
}

#[test]
fn fallback_describes_fixed_curve() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["fallback", "--duration", "300"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert_eq!(
        text.trim(),
        "Fallback curve: 0.30s cubic-bezier(0.33, 0.86, 0.20, 1.00)"
    );
}

#[test]
fn interactive_refuses_piped_stdin() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    cmd.arg("interactive").write_stdin("").assert().code(2);
}

#[test]
fn convert_json_keeps_infinite_damping() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["convert", "--bounce", "-1", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["damping"], "inf");
    assert_eq!(value["damping_ratio"], "inf");
}

#[test]
fn convert_rejects_non_finite_bounce() {
    let mut cmd = cargo_bin_cmd!("springcheck");
    let output = cmd
        .args(["convert", "--bounce=NaN"])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("Bounce must be a finite number"), "unexpected stderr: {text}");
}
