use super::utils;

#[test]
#[ignore]
fn test_check_fixture() {
    let output = utils::UasniffCli::run(&["check", "uasniff-ua/testdata/agents.txt"]);
    assert!(output.contains("passed; 0 failed"));
}

#[test]
#[ignore]
fn test_check_fixture_mismatch() {
    let path = std::env::temp_dir().join("uasniff_cli_test_check_fixture_mismatch.txt");
    std::fs::write(&path, "Java/1.6.0_20\nDevice-NoPhone\nDevice-Desktop\n").unwrap();

    let output = utils::UasniffCli::run_with_stdin(&["check", path.to_str().unwrap()], "");
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0 passed; 1 failed"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("classification mismatch"));
    assert!(stderr.contains("1 of 1 fixture entries failed"));
}

#[test]
#[ignore]
fn test_check_missing_file() {
    let output = utils::UasniffCli::run_with_stdin(&["check", "does/not/exist.txt"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("read fixture file does/not/exist.txt"));
}
