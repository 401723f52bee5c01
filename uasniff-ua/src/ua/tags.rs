use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;
use std::fmt;

/// Insertion ordered set of classification tags,
/// e.g. `Browser-Firefox` followed by `Browser-Firefox-3`.
///
/// Adding a tag which is already present is a no-op,
/// and equality does not take insertion order into account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(IndexSet<SmolStr>);

impl TagSet {
    /// Create a new empty [`TagSet`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, returning `false` if it was already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.0.contains(tag) {
            return false;
        }
        self.0.insert(SmolStr::new(tag))
    }

    /// Returns `true` if the given tag is part of this set.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    /// Returns `true` if any tag in this set starts with `prefix`.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.0.iter().any(|tag| tag.starts_with(prefix))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tags in insertion order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

/// Iterator over the tags of a [`TagSet`], in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a>(indexmap::set::Iter<'a, SmolStr>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(SmolStr::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Extend<&'a str> for TagSet {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut tags = Self::new();
        tags.extend(iter);
        tags
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tag) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

impl Serialize for TagSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = <Vec<std::borrow::Cow<'de, str>>>::deserialize(deserializer)?;
        Ok(tags.iter().map(AsRef::as_ref).collect())
    }
}
