//! Fixture files: user agents listed together with the tags
//! they are expected to be classified with.
//!
//! A fixture is a sequence of blocks separated by empty lines.
//! The first line of a block is the agent string, every following
//! line an expected tag. Lines are trimmed and lines starting
//! with `#` are comments.
//!
//! ```text
//! # Googlebot
//! Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)
//! Device-NoPhone
//! Device-Bot
//! ```
//!
//! Expected tags starting with `BrowserLocale-` are accepted but not verified.

use crate::{Classification, TagSet};
use itertools::Itertools;
use std::fmt;

const UNVERIFIED_TAG_PREFIX: &str = "BrowserLocale-";

/// A single user agent of a fixture, with its expected tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureEntry {
    line: usize,
    agent: String,
    expected: TagSet,
}

impl FixtureEntry {
    /// The (1-based) line number of the agent string.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn agent(&self) -> &str {
        &self.agent
    }

    #[must_use]
    pub fn expected(&self) -> &TagSet {
        &self.expected
    }

    /// Compare the tags of `classification` with the expected tags.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureMismatch`] listing the expected tags
    /// which were not found and the found tags which were not expected.
    pub fn verify(&self, classification: &Classification) -> Result<(), FixtureMismatch> {
        let missing: Vec<String> = self
            .expected
            .iter()
            .filter(|tag| !tag.starts_with(UNVERIFIED_TAG_PREFIX) && !classification.has_tag(tag))
            .map(ToOwned::to_owned)
            .collect();
        let unexpected: Vec<String> = classification
            .tags()
            .iter()
            .filter(|tag| !self.expected.contains(tag))
            .map(ToOwned::to_owned)
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(FixtureMismatch {
                line: self.line,
                agent: self.agent.clone(),
                missing,
                unexpected,
            })
        }
    }

    /// Classify the agent string of this entry and verify the result.
    ///
    /// # Errors
    ///
    /// See [`FixtureEntry::verify`].
    pub fn check(&self) -> Result<Classification, FixtureMismatch> {
        let classification = Classification::new(self.agent.as_str());
        self.verify(&classification)?;
        Ok(classification)
    }
}

/// Parse all entries of a fixture.
///
/// # Errors
///
/// Returns a [`FixtureError`] if a block lists the same expected tag twice.
pub fn parse(input: &str) -> Result<Vec<FixtureEntry>, FixtureError> {
    let mut entries = Vec::new();
    let mut current: Option<FixtureEntry> = None;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() {
            entries.extend(current.take());
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if let Some(entry) = current.as_mut() {
            if !entry.expected.insert(line) {
                return Err(FixtureError::DuplicateTag {
                    line: index + 1,
                    agent: entry.agent.clone(),
                    tag: line.to_owned(),
                });
            }
        } else {
            current = Some(FixtureEntry {
                line: index + 1,
                agent: line.to_owned(),
                expected: TagSet::new(),
            });
        }
    }
    entries.extend(current);

    tracing::trace!(entries = entries.len(), "fixture parsed");
    Ok(entries)
}

/// Error returned by [`parse`] for a malformed fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// An expected tag is listed twice for the same agent.
    DuplicateTag {
        line: usize,
        agent: String,
        tag: String,
    },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTag { line, agent, tag } => write!(
                f,
                "line {line}: duplicate expected tag {tag:?} for agent {agent:?}"
            ),
        }
    }
}

impl std::error::Error for FixtureError {}

/// Error returned by [`FixtureEntry::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureMismatch {
    line: usize,
    agent: String,
    missing: Vec<String>,
    unexpected: Vec<String>,
}

impl FixtureMismatch {
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Expected tags which were not found.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Found tags which were not expected.
    #[must_use]
    pub fn unexpected(&self) -> &[String] {
        &self.unexpected
    }
}

impl fmt::Display for FixtureMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: agent {:?}", self.line, self.agent)?;
        if !self.missing.is_empty() {
            write!(f, "; missing: {}", self.missing.iter().join(", "))?;
        }
        if !self.unexpected.is_empty() {
            write!(f, "; unexpected: {}", self.unexpected.iter().join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for FixtureMismatch {}
