use super::{Capabilities, DeviceKind, TagSet};
use crate::rules::{browser, device, engine, os};

/// Run all rule cascades on the agent string.
///
/// The device cascade always runs. The operating system, engine
/// and browser cascades are skipped for bots.
pub(super) fn classify(agent: &str) -> (TagSet, Capabilities) {
    let ua = agent.to_lowercase();
    let mut tags = TagSet::new();

    let capabilities = device::classify(&mut tags, &ua);
    if capabilities.device == DeviceKind::Bot {
        tracing::debug!(
            device = %capabilities.device,
            tags = tags.len(),
            "user agent classified as bot",
        );
        return (tags, capabilities);
    }

    let os = os::classify(&mut tags, &ua);
    let engine = engine::classify(&mut tags, &ua);
    let browser = browser::classify(&mut tags, &ua);

    tracing::debug!(
        device = %capabilities.device,
        os,
        engine,
        browser,
        tags = tags.len(),
        "user agent classified",
    );

    (tags, capabilities)
}
