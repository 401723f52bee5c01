use crate::TagSet;
use smallvec::SmallVec;
use uasniff_utils::str::contains_ignore_ascii_case;

/// Emits a basic tag followed by a hierarchy of version tags,
/// e.g. `Browser-Chrome`, `Browser-Chrome-58`, `Browser-Chrome-58-0`, ...
///
/// The version is the run of ASCII digits and dots that follows
/// the (case insensitive) `marker` in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTags {
    name: &'static str,
    marker: &'static str,
    min_parts: usize,
    digitwise_minor: bool,
}

impl VersionTags {
    /// Create a new [`VersionTags`] emitting at least three version parts.
    #[must_use]
    pub const fn new(name: &'static str, marker: &'static str) -> Self {
        Self {
            name,
            marker,
            min_parts: 3,
            digitwise_minor: false,
        }
    }

    /// Pad the emitted hierarchy with `-0` parts until `min_parts` version tags exist.
    #[must_use]
    pub const fn with_min_parts(self, min_parts: usize) -> Self {
        Self { min_parts, ..self }
    }

    /// Split a two part version digit by digit in its second part,
    /// such that `11.52` is emitted as `11`, `11-5`, `11-5-2`.
    #[must_use]
    pub const fn with_digitwise_minor(self) -> Self {
        Self {
            digitwise_minor: true,
            ..self
        }
    }

    /// Emit the tags found in `source` into `tags`.
    ///
    /// The basic tag is always emitted, the version tags
    /// only if a version could be found after the marker.
    pub fn emit(&self, tags: &mut TagSet, source: &str) {
        tags.insert(self.name);

        let Some(rest) = contains_ignore_ascii_case(source, self.marker)
            .and_then(|pos| source.get(pos + self.marker.len()..))
        else {
            return;
        };

        let rest = rest.trim_start_matches(|c: char| c <= ' ');
        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let version = &rest[..end];

        let mut parts: SmallVec<[&str; 4]> = version.split('.').collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        let Some((major, others)) = parts.split_first() else {
            return;
        };

        let mut specific = format!("{}-{major}", self.name);
        tags.insert(&specific);

        let found = match others {
            [minor] if self.digitwise_minor => {
                for digit in minor.chars() {
                    specific.push('-');
                    specific.push(digit);
                    tags.insert(&specific);
                }
                1 + minor.len()
            }
            _ => {
                for part in others {
                    specific.push('-');
                    specific.push_str(part);
                    tags.insert(&specific);
                }
                parts.len()
            }
        };

        for _ in found..self.min_parts {
            specific.push_str("-0");
            tags.insert(&specific);
        }
    }
}
