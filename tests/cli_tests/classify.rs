use super::utils;

const CHROME: &str = "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

#[test]
#[ignore]
fn test_classify_text() {
    let lines = utils::UasniffCli::run(&["classify", CHROME]);
    let mut lines = lines.lines();
    assert_eq!(lines.next(), Some(CHROME));
    let tags: Vec<_> = lines.collect();
    assert!(tags.contains(&"Device-Desktop"));
    assert!(tags.contains(&"BrowserOS-Windows-7"));
    assert!(tags.contains(&"Browser-Chrome-58"));
}

#[test]
#[ignore]
fn test_classify_json() {
    let output = utils::UasniffCli::run(&["classify", "--format", "json", "Java/1.6.0_20"]);
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(value["agent"], "Java/1.6.0_20");
    assert_eq!(value["tags"], serde_json::json!(["Device-NoPhone", "Device-Bot"]));
    assert_eq!(value["capabilities"]["device"], "bot");
    assert_eq!(value["capabilities"]["is_browser"], false);
}

#[test]
#[ignore]
fn test_classify_xml() {
    let output = utils::UasniffCli::run(&["classify", "-f", "xml", "Java/1.6.0_20"]);
    assert_eq!(
        output.trim(),
        r#"<UserAgent string="Java/1.6.0_20"><Recognized name="Device-NoPhone"/><Recognized name="Device-Bot"/></UserAgent>"#
    );
}

#[test]
#[ignore]
fn test_classify_stdin() {
    let output = utils::UasniffCli::run_with_stdin(
        &["classify", "--format", "json"],
        "Java/1.6.0_20\n\nWget/1.12 (linux-gnu)\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
#[ignore]
fn test_classify_without_agents() {
    let output = utils::UasniffCli::run_with_stdin(&["classify"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid input: user agent string is absent"));
}
