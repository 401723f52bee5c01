use super::VersionTags;
use crate::{Capabilities, DeviceKind, TagSet};
use uasniff_utils::str::any_submatch_ignore_ascii_case;

/// Snippets identifying a mobile device.
pub(crate) static MOBILE_DEVICE_SNIPPETS: &[&str] = &[
    "windows ce",
    "windowsce",
    "symbian",
    "nokia",
    "opera mini",
    "wget",
    "fennec",
    "opera mobi",
    "windows; ppc",
    "blackberry",
];

/// Mobile devices which cannot follow `tel:` links.
pub(crate) static NO_TEL_SUPPORT_SNIPPETS: &[&str] = &[
    "opera/8.", "opera/7.", "opera/6.", "opera/5.", "opera/4.", "opera/3.", "ipod",
];

pub(crate) static BOT_SNIPPETS: &[&str] = &[
    "spider", "bot", "crawl", "miner", "checker", "java", "pingdom",
];

const TOUCH: Capabilities = Capabilities {
    supports_tel_protocol: true,
    supports_flash: false,
    ..Capabilities::DESKTOP
};

/// Capable (touch) devices, reported as desktop class.
static DESKTOP_CLASS_PROFILES: &[(&str, Capabilities)] = &[
    (
        "ipod",
        Capabilities {
            supports_tel_protocol: false,
            ..TOUCH
        },
    ),
    ("iphone", TOUCH),
    ("android", TOUCH),
    ("pre/", TOUCH),
];

const BLACKBERRY: VersionTags = VersionTags::new("Device-Blackberry", "blackberry").with_min_parts(1);

/// Decide the device capabilities and emit the `Device-*` tags.
pub(crate) fn classify(tags: &mut TagSet, ua: &str) -> Capabilities {
    let capabilities = capabilities(ua);

    tags.insert(if capabilities.supports_tel_protocol {
        "Device-Phone"
    } else {
        "Device-NoPhone"
    });

    let apple_touch = ua.contains("ipod") || ua.contains("iphone");
    if capabilities.device == DeviceKind::Mobile
        || apple_touch
        || ua.contains("android")
        || ua.contains("webos/")
    {
        tags.insert("Device-Mobile");
    } else if capabilities.device == DeviceKind::Bot {
        tags.insert("Device-Bot");
    } else {
        tags.insert("Device-Desktop");
    }

    if apple_touch {
        tags.insert("Device-AppleTouch");
        tags.insert(if ua.contains("ipod") {
            "Device-AppleTouch-iPod"
        } else {
            "Device-AppleTouch-iPhone"
        });
    } else if ua.contains("blackberry") {
        BLACKBERRY.emit(tags, ua);
    }

    capabilities
}

fn capabilities(ua: &str) -> Capabilities {
    if any_submatch_ignore_ascii_case(ua, MOBILE_DEVICE_SNIPPETS) {
        return Capabilities {
            supports_tel_protocol: !any_submatch_ignore_ascii_case(ua, NO_TEL_SUPPORT_SNIPPETS),
            ..Capabilities::MOBILE
        };
    }

    if let Some((snippet, profile)) = DESKTOP_CLASS_PROFILES
        .iter()
        .find(|(snippet, _)| ua.contains(snippet))
    {
        tracing::trace!(snippet, "desktop class device profile");
        return *profile;
    }

    if any_submatch_ignore_ascii_case(ua, BOT_SNIPPETS) {
        return Capabilities::BOT;
    }

    Capabilities::DESKTOP
}
