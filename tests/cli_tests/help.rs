use super::utils;

#[test]
#[ignore]
fn test_help() {
    let lines = utils::UasniffCli::run(&["help"]);
    assert!(lines.contains("uasniff cli to classify user agent strings"));
    assert!(lines.contains("Usage:"));
    assert!(lines.contains("Commands:"));
    assert!(lines.contains("Options:"));
}

#[test]
#[ignore]
fn test_help_classify() {
    let lines = utils::UasniffCli::run(&["help", "classify"]);
    assert!(lines.contains("classify user agent strings into hierarchical tags"));
    assert!(lines.contains("Arguments:"));
    assert!(lines.contains("--format"));
}

#[test]
#[ignore]
fn test_help_check() {
    let lines = utils::UasniffCli::run(&["help", "check"]);
    assert!(lines.contains("verify the classification of all agents in a fixture file"));
    assert!(lines.contains("Usage:"));
}
