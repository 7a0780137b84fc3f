// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions: culture identifiers, their descriptions and the
//! scope in which a "current culture" lives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Separator between the language and the region subtag (`de-AT`).
pub const CULTURE_SEPARATOR: char = '-';

/// A locale tag such as `en` or `de-AT`.
///
/// The original spelling is kept for display, but equality and hashing are
/// case-insensitive: `DE-de` and `de-DE` are the same culture. The empty
/// identifier is the invariant culture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CultureName(String);

impl CultureName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn invariant() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_invariant(&self) -> bool {
        self.0.is_empty()
    }

    /// Language-only tag without a region (`en`, `zh`).
    pub fn is_neutral(&self) -> bool {
        !self.0.is_empty() && !self.0.contains(CULTURE_SEPARATOR)
    }

    /// Language part of the tag: `de` for `de-AT`, the tag itself when neutral.
    pub fn language(&self) -> &str {
        neutral_prefix(&self.0).unwrap_or(self.0.as_str())
    }

    /// Case-insensitive comparison against a raw tag.
    pub fn matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.0, other)
    }
}

impl PartialEq for CultureName {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for CultureName {}

impl PartialEq<str> for CultureName {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for CultureName {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl Hash for CultureName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl fmt::Display for CultureName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CultureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CultureName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CultureName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Human-facing metadata of a culture, derived once from its database record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureDescription {
    pub identifier: CultureName,
    pub native_name: String,
    pub english_name: String,
}

/// Where the "current culture" of a [`crate::context::CultureContext`] lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CultureContextKind {
    /// One current culture per thread of execution.
    #[default]
    PerThread,
    /// One current culture shared by the whole process (last writer wins).
    ProcessWide,
}

impl CultureContextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerThread => "per_thread",
            Self::ProcessWide => "process_wide",
        }
    }
}

impl fmt::Display for CultureContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Culture tags are ASCII, so ordinal ASCII case folding is sufficient.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}

pub(crate) fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Substring before the first separator, `None` when there is no separator.
pub(crate) fn neutral_prefix(tag: &str) -> Option<&str> {
    tag.find(CULTURE_SEPARATOR).map(|index| &tag[..index])
}
