//! Preserve-suffix normalisation and matching.
//!
//! A preserve suffix is a string such as `Controller` that survives renaming:
//! `FooController` renamed to `Bar` becomes `BarController`, not `Bar`.
//!
//! # Ordering invariant
//!
//! Suffixes are kept deduplicated and sorted by descending character length
//! so that `ServiceController` is tried before `Controller`. Equal lengths
//! keep their configured order (the sort is stable), which makes the
//! tie-break predictable when two equal-length suffixes could both match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered, normalised set of preserve suffixes.
///
/// Construct with [`PreserveSuffixes::normalize`]; the ordering invariant is
/// established once there and never re-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PreserveSuffixes(Vec<String>);

impl PreserveSuffixes {
    /// An empty list: every name collapses to the bare base name.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Deduplicate, drop empty strings, and sort longest-first (stable).
    pub fn normalize<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.into();
            if suffix.is_empty() || ordered.contains(&suffix) {
                continue;
            }
            ordered.push(suffix);
        }

        // `sort_by_key` is stable, so equal lengths keep insertion order.
        ordered.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        Self(ordered)
    }

    /// First suffix (longest-first) that `candidate` ends with.
    pub fn match_suffix(&self, candidate: &str) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|suffix| candidate.ends_with(suffix))
    }

    /// Byte-level variant of [`Self::match_suffix`] used by the declaration
    /// rewriter, which works on raw file content.
    pub fn match_suffix_bytes(&self, candidate: &[u8]) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|suffix| candidate.ends_with(suffix.as_bytes()))
    }

    /// Build the replacement name: `base_name` plus the matched suffix, if any.
    pub fn apply(&self, old_name: &str, base_name: &str) -> String {
        match self.match_suffix(old_name) {
            Some(suffix) => format!("{base_name}{suffix}"),
            None => base_name.to_owned(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for PreserveSuffixes {
    fn from(suffixes: Vec<String>) -> Self {
        Self::normalize(suffixes)
    }
}

impl From<PreserveSuffixes> for Vec<String> {
    fn from(suffixes: PreserveSuffixes) -> Self {
        suffixes.0
    }
}

impl<S: Into<String>> FromIterator<S> for PreserveSuffixes {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::normalize(iter)
    }
}

impl fmt::Display for PreserveSuffixes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        f.write_str(&self.0.join(", "))
    }
}
