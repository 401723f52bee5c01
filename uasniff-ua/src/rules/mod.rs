//! Ordered rule cascades used to classify a (lower cased) user agent.
//!
//! Every cascade is a static slice of [`Rule`]s, evaluated top to bottom:
//! the first rule whose [`Trigger`] matches runs its [`Action`] and ends the cascade.

use crate::TagSet;
use uasniff_utils::str::{
    any_submatch_ignore_ascii_case, starts_with_ignore_ascii_case, submatch_ignore_ascii_case,
};

pub(crate) mod browser;
pub(crate) mod device;
pub(crate) mod engine;
pub(crate) mod os;

mod version;
pub use version::VersionTags;

/// A single entry in a rule cascade.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pub(crate) when: Trigger,
    pub(crate) then: Action,
}

/// Predicate deciding if a [`Rule`] applies to the user agent.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Trigger {
    Contains(&'static str),
    ContainsAny(&'static [&'static str]),
    StartsWith(&'static str),
    Custom(fn(&str) -> bool),
}

impl Trigger {
    pub(crate) fn matches(self, ua: &str) -> bool {
        match self {
            Self::Contains(snippet) => submatch_ignore_ascii_case(ua, snippet),
            Self::ContainsAny(snippets) => any_submatch_ignore_ascii_case(ua, snippets),
            Self::StartsWith(prefix) => starts_with_ignore_ascii_case(ua, prefix),
            Self::Custom(predicate) => predicate(ua),
        }
    }
}

/// Tags emitted once a [`Rule`] fired.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    /// Emit fixed tags.
    Tags(&'static [&'static str]),
    /// Emit a version hierarchy scanned from the user agent.
    Version(VersionTags),
    /// Emit a version hierarchy, followed by fixed tags.
    VersionWith(VersionTags, &'static [&'static str]),
    Custom(fn(&mut TagSet, &str)),
}

impl Action {
    pub(crate) fn apply(self, tags: &mut TagSet, ua: &str) {
        match self {
            Self::Tags(names) => tags.extend(names.iter().copied()),
            Self::Version(version) => version.emit(tags, ua),
            Self::VersionWith(version, names) => {
                version.emit(tags, ua);
                tags.extend(names.iter().copied());
            }
            Self::Custom(action) => action(tags, ua),
        }
    }
}

/// Run the first matching rule of `rules`, returning its name.
pub(crate) fn apply_first_match(
    cascade: &'static str,
    rules: &'static [Rule],
    tags: &mut TagSet,
    ua: &str,
) -> Option<&'static str> {
    let Some(rule) = rules.iter().find(|rule| rule.when.matches(ua)) else {
        tracing::trace!(cascade, "no rule matched");
        return None;
    };
    tracing::trace!(cascade, rule = rule.name, "rule matched");
    rule.then.apply(tags, ua);
    Some(rule.name)
}

/// Position of the named rule within its cascade.
#[cfg(test)]
pub(crate) fn position(rules: &[Rule], name: &str) -> usize {
    rules
        .iter()
        .position(|rule| rule.name == name)
        .unwrap_or_else(|| panic!("rule {name} not found"))
}
