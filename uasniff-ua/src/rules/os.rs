use super::{Action, Rule, Trigger, VersionTags, apply_first_match};
use crate::TagSet;

pub(crate) static OS_RULES: &[Rule] = &[
    Rule {
        name: "linux",
        when: Trigger::Contains("linux"),
        then: Action::Custom(linux),
    },
    Rule {
        name: "chrome-os",
        when: Trigger::Contains("cros "),
        then: Action::Tags(&["BrowserOS-CrOS"]),
    },
    Rule {
        name: "webos",
        when: Trigger::Contains("webos/"),
        then: Action::Version(VersionTags::new("BrowserOS-WebOS", "webos/")),
    },
    Rule {
        name: "iphone-os",
        when: Trigger::ContainsAny(&["iphone", "ipod"]),
        then: Action::Custom(iphone_os),
    },
    Rule {
        name: "mac-os",
        when: Trigger::ContainsAny(&["mac os", "mac_", "macintosh"]),
        then: Action::Custom(mac_os),
    },
    Rule {
        name: "windows",
        when: Trigger::ContainsAny(&["windows", "win3.", "win9", "winnt", "wince"]),
        then: Action::Custom(windows),
    },
    Rule {
        name: "dragonfly-bsd",
        when: Trigger::Contains("dragonfly"),
        then: Action::Tags(&["BrowserOS-NIX", "BrowserOS-BSD", "BrowserOS-BSD-DragonFlyBSD"]),
    },
    Rule {
        name: "bsd",
        when: Trigger::Contains("bsd"),
        then: Action::Custom(bsd),
    },
    Rule {
        name: "aix",
        when: Trigger::Contains("aix"),
        then: Action::Tags(&["BrowserOS-NIX", "BrowserOS-AIX"]),
    },
    Rule {
        name: "irix",
        when: Trigger::Contains("irix"),
        then: Action::Tags(&["BrowserOS-NIX", "BrowserOS-IRIX"]),
    },
    Rule {
        name: "hp-ux",
        when: Trigger::Contains("hp-ux"),
        then: Action::Tags(&["BrowserOS-NIX", "BrowserOS-HPUX"]),
    },
    Rule {
        name: "solaris",
        when: Trigger::Contains("sunos"),
        then: Action::Custom(solaris),
    },
    Rule {
        name: "beos",
        when: Trigger::Contains("beos"),
        then: Action::Tags(&["BrowserOS-BeOS"]),
    },
    Rule {
        name: "os2",
        when: Trigger::Contains("(os/2"),
        then: Action::Version(VersionTags::new("BrowserOS-OS2", "warp ").with_min_parts(1)),
    },
];

const WINDOWS_NT: VersionTags = VersionTags::new("BrowserOS-Windows-NT", "nt/").with_min_parts(2);

/// Windows flavours, checked once `BrowserOS-Windows` is known.
pub(crate) static WINDOWS_VERSION_RULES: &[Rule] = &[
    Rule {
        name: "windows-nt",
        when: Trigger::Contains("windows nt"),
        then: Action::Version(
            VersionTags::new("BrowserOS-Windows-NT", "windows nt ")
                .with_min_parts(2)
                .with_digitwise_minor(),
        ),
    },
    Rule {
        name: "windows-nt-short",
        when: Trigger::ContainsAny(&["windows 5.", "windows 6."]),
        then: Action::Version(VersionTags::new("BrowserOS-Windows-NT", "windows ").with_min_parts(2)),
    },
    Rule {
        name: "windows-vista",
        when: Trigger::Contains("windows vista"),
        then: Action::Custom(|tags, _| WINDOWS_NT.emit(tags, "nt/6.0")),
    },
    Rule {
        name: "windows-xp",
        when: Trigger::Contains("windows xp"),
        then: Action::Custom(|tags, _| WINDOWS_NT.emit(tags, "nt/5.1")),
    },
    Rule {
        name: "windows-2000",
        when: Trigger::Contains("windows 2000"),
        then: Action::Custom(|tags, _| WINDOWS_NT.emit(tags, "nt/5.0")),
    },
    Rule {
        name: "winnt",
        when: Trigger::Contains("winnt"),
        then: Action::Version(
            VersionTags::new("BrowserOS-Windows-NT", "winnt")
                .with_min_parts(2)
                .with_digitwise_minor(),
        ),
    },
    Rule {
        name: "windows-me",
        when: Trigger::ContainsAny(&["win 9x 4.90", "windows me"]),
        then: Action::Tags(&["BrowserOS-Windows-ME"]),
    },
    Rule {
        name: "windows-98",
        when: Trigger::ContainsAny(&["windows 98", "win98"]),
        then: Action::Tags(&["BrowserOS-Windows-98"]),
    },
    Rule {
        name: "windows-95",
        when: Trigger::ContainsAny(&["windows 95", "win95"]),
        then: Action::Tags(&["BrowserOS-Windows-95"]),
    },
    Rule {
        name: "windows-mobile",
        when: Trigger::ContainsAny(&["windows mobile", "windows; ppc", "windows ce", "wince"]),
        then: Action::Version(
            VersionTags::new("BrowserOS-Windows-Mobile", "windows mobile ").with_digitwise_minor(),
        ),
    },
    Rule {
        name: "windows-3",
        when: Trigger::Contains("windows 3."),
        then: Action::Version(VersionTags::new("BrowserOS-Windows", "windows ").with_digitwise_minor()),
    },
    Rule {
        name: "win3",
        when: Trigger::Contains("win3."),
        then: Action::Custom(windows_3x),
    },
];

/// Marketing names derived from the NT version, first match only.
pub(crate) static WINDOWS_MARKETING_NAMES: &[(&str, &str)] = &[
    ("BrowserOS-Windows-NT-5-0", "BrowserOS-Windows-2000"),
    ("BrowserOS-Windows-NT-5", "BrowserOS-Windows-XP"),
    ("BrowserOS-Windows-NT-6-0", "BrowserOS-Windows-Vista"),
    ("BrowserOS-Windows-NT-6-1", "BrowserOS-Windows-7"),
];

static MAC_OS_X_RELEASE_MARKERS: &[&str] = &[
    "mac os x ",
    "mac os x tiger ",
    "mac os x leopard ",
    "mac os x snow leopard ",
    "mac os x lion ",
];

static BSD_VARIANTS: &[(&str, &str)] = &[
    ("netbsd", "BrowserOS-BSD-NetBSD"),
    ("openbsd", "BrowserOS-BSD-OpenBSD"),
    ("freebsd", "BrowserOS-BSD-FreeBSD"),
];

/// Emit the `BrowserOS-*` tags, if the operating system is recognised.
pub(crate) fn classify(tags: &mut TagSet, ua: &str) -> Option<&'static str> {
    apply_first_match("os", OS_RULES, tags, ua)
}

fn linux(tags: &mut TagSet, ua: &str) {
    tags.extend(["BrowserOS-NIX", "BrowserOS-Linux"]);
    if ua.contains("linux 2.") {
        VersionTags::new("BrowserOS-Linux", "linux ").emit(tags, ua);
    }
    if ua.contains("android") {
        VersionTags::new("BrowserOS-Linux-Android", "android ").emit(tags, ua);
    }
}

fn iphone_os(tags: &mut TagSet, ua: &str) {
    VersionTags::new("BrowserOS-iPhoneOS", "iphone os ").emit(tags, &ua.replace('_', "."));
}

fn mac_os(tags: &mut TagSet, ua: &str) {
    tags.insert("BrowserOS-MacOS");
    if !ua.contains("mac os x") {
        return;
    }

    tags.extend(["BrowserOS-NIX", "BrowserOS-MacOS-10"]);
    let source = ua.replace('_', ".");
    // each release marker is scanned, not only the first one found
    for &marker in MAC_OS_X_RELEASE_MARKERS {
        VersionTags::new("BrowserOS-MacOS", marker)
            .with_min_parts(0)
            .emit(tags, &source);
    }
}

fn windows(tags: &mut TagSet, ua: &str) {
    tags.insert("BrowserOS-Windows");
    apply_first_match("os.windows", WINDOWS_VERSION_RULES, tags, ua);

    if let Some((_, name)) = WINDOWS_MARKETING_NAMES
        .iter()
        .find(|(nt_version, _)| tags.contains(nt_version))
    {
        tags.insert(name);
    }
}

fn windows_3x(tags: &mut TagSet, ua: &str) {
    let source = match (ua.find("windows"), ua.find("win3.")) {
        (Some(windows), Some(win3)) if windows < win3 => ua.get(windows + 1..).unwrap_or(ua),
        _ => ua,
    };
    VersionTags::new("BrowserOS-Windows", "win")
        .with_digitwise_minor()
        .emit(tags, source);
}

fn bsd(tags: &mut TagSet, ua: &str) {
    tags.extend(["BrowserOS-NIX", "BrowserOS-BSD"]);
    if let Some((_, variant)) = BSD_VARIANTS.iter().find(|(snippet, _)| ua.contains(snippet)) {
        tags.insert(variant);
    }
}

fn solaris(tags: &mut TagSet, ua: &str) {
    tags.insert("BrowserOS-NIX");
    VersionTags::new("BrowserOS-Solaris", "sunos ")
        .with_min_parts(1)
        .emit(tags, ua);
}
