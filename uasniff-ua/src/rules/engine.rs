use super::{Action, Rule, Trigger, VersionTags, apply_first_match};
use crate::TagSet;

pub(crate) static ENGINE_RULES: &[Rule] = &[
    Rule {
        name: "webkit",
        when: Trigger::Contains("applewebkit/"),
        then: Action::Version(
            VersionTags::new("BrowserEngine-WebKit", "applewebkit/").with_min_parts(4),
        ),
    },
    Rule {
        name: "gecko",
        when: Trigger::Contains("gecko/"),
        then: Action::Version(VersionTags::new("BrowserEngine-Gecko", "rv:").with_min_parts(4)),
    },
    Rule {
        name: "presto",
        when: Trigger::Contains("presto/"),
        then: Action::Version(VersionTags::new("BrowserEngine-Presto", "presto/")),
    },
    Rule {
        name: "presto-legacy",
        when: Trigger::Contains("presto"),
        then: Action::Version(VersionTags::new("BrowserEngine-Presto", "presto ")),
    },
    Rule {
        name: "trident",
        when: Trigger::Contains("trident/"),
        then: Action::Version(VersionTags::new("BrowserEngine-Trident", "trident/")),
    },
    Rule {
        name: "trident-legacy",
        when: Trigger::Contains("trident"),
        then: Action::Version(VersionTags::new("BrowserEngine-Trident", "trident ")),
    },
    Rule {
        name: "khtml",
        when: Trigger::Contains("khtml/"),
        then: Action::Version(VersionTags::new("BrowserEngine-KHTML", "khtml/")),
    },
];

/// Emit the `BrowserEngine-*` tags, if the rendering engine is recognised.
pub(crate) fn classify(tags: &mut TagSet, ua: &str) -> Option<&'static str> {
    apply_first_match("engine", ENGINE_RULES, tags, ua)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::position;

    fn run(ua: &str) -> Vec<String> {
        let mut tags = TagSet::new();
        classify(&mut tags, &ua.to_lowercase());
        tags.iter().map(ToOwned::to_owned).collect()
    }

    #[test]
    fn test_precedence() {
        // webkit agents advertise `khtml, like gecko`
        assert!(position(ENGINE_RULES, "webkit") < position(ENGINE_RULES, "gecko"));
        assert!(position(ENGINE_RULES, "webkit") < position(ENGINE_RULES, "khtml"));
        assert!(position(ENGINE_RULES, "presto") < position(ENGINE_RULES, "presto-legacy"));
        assert!(position(ENGINE_RULES, "trident") < position(ENGINE_RULES, "trident-legacy"));
    }

    #[test]
    fn test_webkit() {
        assert_eq!(
            run("Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0"),
            [
                "BrowserEngine-WebKit",
                "BrowserEngine-WebKit-537",
                "BrowserEngine-WebKit-537-36",
                "BrowserEngine-WebKit-537-36-0",
                "BrowserEngine-WebKit-537-36-0-0",
            ]
        );
    }

    #[test]
    fn test_gecko_uses_revision() {
        assert_eq!(
            run("Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.9.2.3) Gecko/20100401 Firefox/3.6.3"),
            [
                "BrowserEngine-Gecko",
                "BrowserEngine-Gecko-1",
                "BrowserEngine-Gecko-1-9",
                "BrowserEngine-Gecko-1-9-2",
                "BrowserEngine-Gecko-1-9-2-3",
            ]
        );
    }

    #[test]
    fn test_presto_and_trident() {
        assert_eq!(
            run("Opera/9.80 (Windows NT 5.1; U; en) Presto/2.9.168 Version/11.52"),
            [
                "BrowserEngine-Presto",
                "BrowserEngine-Presto-2",
                "BrowserEngine-Presto-2-9",
                "BrowserEngine-Presto-2-9-168",
            ]
        );
        assert_eq!(
            run("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)"),
            [
                "BrowserEngine-Trident",
                "BrowserEngine-Trident-4",
                "BrowserEngine-Trident-4-0",
                "BrowserEngine-Trident-4-0-0",
            ]
        );
    }

    #[test]
    fn test_khtml() {
        assert_eq!(
            run("Mozilla/5.0 (compatible; Konqueror/4.1; Linux) KHTML/4.1.2 (like Gecko)"),
            [
                "BrowserEngine-KHTML",
                "BrowserEngine-KHTML-4",
                "BrowserEngine-KHTML-4-1",
                "BrowserEngine-KHTML-4-1-2",
            ]
        );
    }

    #[test]
    fn test_unknown() {
        assert!(run("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)").is_empty());
    }
}
