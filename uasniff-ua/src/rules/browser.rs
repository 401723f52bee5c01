use super::{Action, Rule, Trigger, VersionTags, apply_first_match};
use crate::TagSet;

const fn firefox(marker: &'static str) -> Action {
    Action::Version(VersionTags::new("Browser-Firefox", marker))
}

/// Browser families, most specific first.
///
/// Several browsers advertise the family they are derived from as well
/// (e.g. `Flock/1.2.7` next to `Firefox/2.0`), hence the order matters.
pub(crate) static BROWSER_RULES: &[Rule] = &[
    Rule {
        name: "lunascape",
        when: Trigger::Contains("lunascape"),
        then: Action::Custom(lunascape),
    },
    Rule {
        name: "maxthon",
        when: Trigger::Contains("maxthon"),
        then: Action::Version(VersionTags::new("Browser-Maxthon", "maxthon ")),
    },
    Rule {
        name: "konqueror",
        when: Trigger::Contains("konqueror"),
        then: Action::VersionWith(
            VersionTags::new("Browser-Konqueror", "konqueror/").with_min_parts(2),
            &["BrowserEngine-KHTML"],
        ),
    },
    Rule {
        name: "fennec",
        when: Trigger::Contains("fennec"),
        then: Action::Version(VersionTags::new("Browser-Fennec", "fennec/")),
    },
    Rule {
        name: "epiphany",
        when: Trigger::Contains("epiphany"),
        then: Action::Version(VersionTags::new("Browser-Epiphany", "epiphany/")),
    },
    Rule {
        name: "flock",
        when: Trigger::Contains("flock"),
        then: Action::Version(VersionTags::new("Browser-Flock", "flock/")),
    },
    Rule {
        name: "camino",
        when: Trigger::Contains("camino"),
        then: Action::Version(VersionTags::new("Browser-Camino", "camino/")),
    },
    Rule {
        name: "seamonkey",
        when: Trigger::Contains("seamonkey/"),
        then: Action::Version(VersionTags::new("Browser-SeaMonkey", "seamonkey/")),
    },
    Rule {
        name: "seamonkey-legacy",
        when: Trigger::Contains("seamonkey-"),
        then: Action::VersionWith(
            VersionTags::new("Browser-SeaMonkey", "seamonkey-"),
            &["BrowserEngine-Gecko"],
        ),
    },
    Rule {
        name: "navigator",
        when: Trigger::Contains("navigator/"),
        then: Action::VersionWith(
            VersionTags::new("Browser-Netscape", "navigator/"),
            &["BrowserEngine-Gecko"],
        ),
    },
    Rule {
        name: "firefox",
        when: Trigger::Contains("firefox"),
        then: firefox("firefox/"),
    },
    Rule {
        name: "minefield",
        when: Trigger::Contains("minefield/"),
        then: firefox("minefield/"),
    },
    Rule {
        name: "namoroka",
        when: Trigger::Contains("namoroka/"),
        then: firefox("namoroka/"),
    },
    Rule {
        name: "shiretoko",
        when: Trigger::Contains("shiretoko/"),
        then: firefox("shiretoko/"),
    },
    Rule {
        name: "firebird",
        when: Trigger::Contains("firebird/"),
        then: firefox("firebird/"),
    },
    Rule {
        name: "phoenix",
        when: Trigger::Contains("phoenix/"),
        then: firefox("phoenix/"),
    },
    Rule {
        name: "opera",
        when: Trigger::StartsWith("opera/"),
        then: Action::Custom(opera),
    },
    Rule {
        name: "opera-legacy",
        when: Trigger::Contains("opera"),
        then: Action::Custom(opera_legacy),
    },
    Rule {
        name: "palm-pre",
        when: Trigger::Contains("pre/"),
        then: Action::Version(VersionTags::new("Browser-PalmPreBrowser", "version/")),
    },
    Rule {
        name: "omniweb",
        when: Trigger::Contains("omniweb"),
        then: Action::Tags(&["Browser-OmniWeb"]),
    },
    Rule {
        name: "rockmelt",
        when: Trigger::Contains("rockmelt"),
        then: Action::Version(VersionTags::new("Browser-RockMelt", "rockmelt/").with_min_parts(4)),
    },
    Rule {
        name: "chrome",
        when: Trigger::Contains("chrome"),
        then: Action::Version(VersionTags::new("Browser-Chrome", "chrome/").with_min_parts(4)),
    },
    Rule {
        name: "safari",
        when: Trigger::Contains("safari"),
        then: Action::Custom(safari),
    },
    Rule {
        name: "netscape6",
        when: Trigger::Contains("netscape6"),
        then: Action::VersionWith(
            VersionTags::new("Browser-Netscape", "netscape6/"),
            &["Browser-Netscape-6", "BrowserEngine-Gecko"],
        ),
    },
    Rule {
        name: "netscape",
        when: Trigger::Contains("netscape"),
        then: Action::VersionWith(
            VersionTags::new("Browser-Netscape", "netscape/").with_digitwise_minor(),
            &["BrowserEngine-Gecko"],
        ),
    },
    Rule {
        name: "icab",
        when: Trigger::Contains("icab"),
        then: Action::Custom(icab),
    },
    Rule {
        name: "msie",
        when: Trigger::Contains("msie"),
        then: Action::Custom(msie),
    },
    Rule {
        name: "netscape-legacy",
        when: Trigger::Custom(is_legacy_netscape),
        then: Action::Version(VersionTags::new("Browser-Netscape", "mozilla/").with_digitwise_minor()),
    },
];

/// Emit the `Browser-*` tags, if the browser is recognised.
///
/// Must run after the operating system was classified,
/// as mobile Internet Explorer is recognised by its OS tag.
pub(crate) fn classify(tags: &mut TagSet, ua: &str) -> Option<&'static str> {
    apply_first_match("browser", BROWSER_RULES, tags, ua)
}

fn lunascape(tags: &mut TagSet, ua: &str) {
    for marker in ["lunascape ", "lunascape/"] {
        VersionTags::new("Browser-Lunascape", marker)
            .with_min_parts(4)
            .emit(tags, ua);
    }
}

fn opera(tags: &mut TagSet, ua: &str) {
    tags.extend(["BrowserEngine-Presto", "Browser-Opera"]);

    let marker = if ua.contains("version/") {
        "version/"
    } else {
        "opera/"
    };
    let edition = if ua.contains("mobi/") {
        VersionTags::new("Browser-OperaMobile", marker)
    } else if ua.contains("mini/") {
        VersionTags::new("Browser-OperaMini", "mini/")
    } else {
        VersionTags::new("Browser-OperaDesktop", marker)
    };
    edition.with_digitwise_minor().emit(tags, ua);
}

fn opera_legacy(tags: &mut TagSet, ua: &str) {
    tags.insert("Browser-Opera");
    VersionTags::new("Browser-OperaDesktop", "opera ").emit(tags, ua);
    tags.insert("BrowserEngine-Presto");
}

fn safari(tags: &mut TagSet, ua: &str) {
    tags.extend(["BrowserEngine-WebKit", "Browser-Safari"]);

    let name = if ua.contains("mobile/") || ua.contains("android") {
        "Browser-MobileSafari"
    } else {
        "Browser-DesktopSafari"
    };
    VersionTags::new(name, "version/").emit(tags, ua);
}

fn icab(tags: &mut TagSet, ua: &str) {
    for marker in ["icab/", "icab "] {
        VersionTags::new("Browser-iCab", marker).emit(tags, ua);
    }
    // iCab 4 renders with WebKit without advertising it
    if tags.contains("Browser-iCab-4") {
        tags.insert("BrowserEngine-WebKit");
    }
}

fn msie(tags: &mut TagSet, ua: &str) {
    tags.extend(["BrowserEngine-Trident", "Browser-MSIE"]);

    if ua.contains("iemobile") {
        VersionTags::new("Browser-MobileMSIE", "iemobile ")
            .with_digitwise_minor()
            .emit(tags, ua);
    } else if tags.contains("BrowserOS-Windows-Mobile") {
        tags.insert("Browser-MobileMSIE");
    } else {
        VersionTags::new("Browser-DesktopMSIE", "msie ")
            .with_digitwise_minor()
            .emit(tags, ua);
    }
}

fn is_legacy_netscape(ua: &str) -> bool {
    !ua.contains("(compatible") && (ua.starts_with("mozilla/4.") || ua.starts_with("mozilla/3."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{os, position};

    fn run(ua: &str) -> Vec<String> {
        let mut tags = TagSet::new();
        classify(&mut tags, &ua.to_lowercase());
        tags.iter().map(ToOwned::to_owned).collect()
    }

    #[test]
    fn test_precedence() {
        let firefox = position(BROWSER_RULES, "firefox");
        for derived in ["konqueror", "flock", "camino", "seamonkey", "navigator"] {
            assert!(position(BROWSER_RULES, derived) < firefox, "{derived}");
        }

        let safari = position(BROWSER_RULES, "safari");
        for derived in ["palm-pre", "omniweb", "rockmelt", "chrome"] {
            assert!(position(BROWSER_RULES, derived) < safari, "{derived}");
        }

        assert!(position(BROWSER_RULES, "rockmelt") < position(BROWSER_RULES, "chrome"));
        assert!(position(BROWSER_RULES, "opera") < position(BROWSER_RULES, "opera-legacy"));
        assert!(position(BROWSER_RULES, "netscape6") < position(BROWSER_RULES, "netscape"));
        assert_eq!(position(BROWSER_RULES, "netscape-legacy"), BROWSER_RULES.len() - 1);
    }

    #[test]
    fn test_flock_before_firefox() {
        assert_eq!(
            run("Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.8.1.18) Gecko/20081107 Firefox/2.0.0.18 Flock/1.2.7"),
            ["Browser-Flock", "Browser-Flock-1", "Browser-Flock-1-2", "Browser-Flock-1-2-7"]
        );
    }

    #[test]
    fn test_firefox_code_names() {
        assert_eq!(
            run("Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.9.1b3) Gecko/20090327 Shiretoko/3.5b3"),
            ["Browser-Firefox", "Browser-Firefox-3", "Browser-Firefox-3-5", "Browser-Firefox-3-5-0"]
        );
    }

    #[test]
    fn test_seamonkey_legacy_adds_gecko() {
        assert_eq!(
            run("Seamonkey-1.1.13-1(X11; U; GNU Fedora fc 10) Gecko/20081112"),
            [
                "Browser-SeaMonkey",
                "Browser-SeaMonkey-1",
                "Browser-SeaMonkey-1-1",
                "Browser-SeaMonkey-1-1-13",
                "BrowserEngine-Gecko",
            ]
        );
    }

    #[test]
    fn test_opera_editions() {
        assert_eq!(
            run("Opera/9.80 (Windows NT 5.1; U; en) Presto/2.9.168 Version/11.52"),
            [
                "BrowserEngine-Presto",
                "Browser-Opera",
                "Browser-OperaDesktop",
                "Browser-OperaDesktop-11",
                "Browser-OperaDesktop-11-5",
                "Browser-OperaDesktop-11-5-2",
            ]
        );
        assert_eq!(
            run("Opera/9.51 Beta (Microsoft Windows; PPC; Opera Mobi/1718; U; de)"),
            [
                "BrowserEngine-Presto",
                "Browser-Opera",
                "Browser-OperaMobile",
                "Browser-OperaMobile-9",
                "Browser-OperaMobile-9-5",
                "Browser-OperaMobile-9-5-1",
            ]
        );
        assert_eq!(
            run("Opera/9.80 (J2ME/MIDP; Opera Mini/5.0.16823/1428; U; en) Presto/2.5.25 Version/10.54"),
            [
                "BrowserEngine-Presto",
                "Browser-Opera",
                "Browser-OperaMini",
                "Browser-OperaMini-5",
                "Browser-OperaMini-5-0",
                "Browser-OperaMini-5-0-16823",
            ]
        );
    }

    #[test]
    fn test_opera_legacy() {
        assert_eq!(
            run("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; en) Opera 8.54"),
            [
                "Browser-Opera",
                "Browser-OperaDesktop",
                "Browser-OperaDesktop-8",
                "Browser-OperaDesktop-8-54",
                "Browser-OperaDesktop-8-54-0",
                "BrowserEngine-Presto",
            ]
        );
    }

    #[test]
    fn test_chrome_and_rockmelt() {
        assert_eq!(
            run("Mozilla/5.0 (Windows; U; Windows NT 6.1; en-US) AppleWebKit/534.13 (KHTML, like Gecko) RockMelt/0.9.48.51 Chrome/9.0.597.107 Safari/534.13"),
            [
                "Browser-RockMelt",
                "Browser-RockMelt-0",
                "Browser-RockMelt-0-9",
                "Browser-RockMelt-0-9-48",
                "Browser-RockMelt-0-9-48-51",
            ]
        );
    }

    #[test]
    fn test_safari_desktop_and_mobile() {
        assert_eq!(
            run("Mozilla/5.0 (Macintosh; U; Intel Mac OS X 10_6_3; en-us) AppleWebKit/531.22.7 (KHTML, like Gecko) Version/4.0.5 Safari/531.22.7"),
            [
                "BrowserEngine-WebKit",
                "Browser-Safari",
                "Browser-DesktopSafari",
                "Browser-DesktopSafari-4",
                "Browser-DesktopSafari-4-0",
                "Browser-DesktopSafari-4-0-5",
            ]
        );
        assert_eq!(
            run("Mozilla/5.0 (Linux; U; Android 2.2; en-us) AppleWebKit/533.1 (KHTML, like Gecko) Version/4.0 Mobile Safari/533.1"),
            [
                "BrowserEngine-WebKit",
                "Browser-Safari",
                "Browser-MobileSafari",
                "Browser-MobileSafari-4",
                "Browser-MobileSafari-4-0",
                "Browser-MobileSafari-4-0-0",
            ]
        );
    }

    #[test]
    fn test_netscape() {
        assert_eq!(
            run("Mozilla/5.0 (Windows; U; Win98; en-US; m18) Gecko/20010131 Netscape6/6.01"),
            [
                "Browser-Netscape",
                "Browser-Netscape-6",
                "Browser-Netscape-6-01",
                "Browser-Netscape-6-01-0",
                "BrowserEngine-Gecko",
            ]
        );
        assert_eq!(
            run("Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.7.5) Gecko/20050519 Netscape/8.0.1"),
            [
                "Browser-Netscape",
                "Browser-Netscape-8",
                "Browser-Netscape-8-0",
                "Browser-Netscape-8-0-1",
                "BrowserEngine-Gecko",
            ]
        );
        assert_eq!(
            run("Mozilla/4.79 [en] (X11; U; SunOS 5.8 sun4u)"),
            ["Browser-Netscape", "Browser-Netscape-4", "Browser-Netscape-4-7", "Browser-Netscape-4-7-9"]
        );
        assert!(run("Mozilla/4.0 (compatible; Something)").is_empty());
    }

    #[test]
    fn test_icab_advertises_webkit() {
        assert_eq!(
            run("iCab/4.5 (Macintosh; U; Mac OS X Leopard 10.5.7)"),
            [
                "Browser-iCab",
                "Browser-iCab-4",
                "Browser-iCab-4-5",
                "Browser-iCab-4-5-0",
                "BrowserEngine-WebKit",
            ]
        );
        assert_eq!(
            run("iCab 3.0.5 (Macintosh; U; PPC Mac OS X)"),
            ["Browser-iCab", "Browser-iCab-3", "Browser-iCab-3-0", "Browser-iCab-3-0-5"]
        );
    }

    #[test]
    fn test_msie() {
        assert_eq!(
            run("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; SV1)"),
            [
                "BrowserEngine-Trident",
                "Browser-MSIE",
                "Browser-DesktopMSIE",
                "Browser-DesktopMSIE-6",
                "Browser-DesktopMSIE-6-0",
                "Browser-DesktopMSIE-6-0-0",
            ]
        );
        assert_eq!(
            run("Mozilla/4.0 (compatible; MSIE 6.0; Windows CE; IEMobile 7.11)"),
            [
                "BrowserEngine-Trident",
                "Browser-MSIE",
                "Browser-MobileMSIE",
                "Browser-MobileMSIE-7",
                "Browser-MobileMSIE-7-1",
                "Browser-MobileMSIE-7-1-1",
            ]
        );
    }

    #[test]
    fn test_msie_reads_os_tags() {
        let ua = "mozilla/4.0 (compatible; msie 4.01; windows ce; ppc; 240x320)";
        let mut tags = TagSet::new();
        os::classify(&mut tags, ua);
        assert!(tags.contains("BrowserOS-Windows-Mobile"));
        classify(&mut tags, ua);
        assert!(tags.contains("Browser-MobileMSIE"));
        assert!(!tags.contains_prefix("Browser-DesktopMSIE"));
    }
}
