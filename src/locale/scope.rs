// SPDX-License-Identifier: PMPL-1.0-or-later

//! Culture categories and the filter that selects them from a database.

use crate::error::{LocalizationError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultureKind {
    /// Language only, no region (`de`).
    Neutral,
    /// Language and region (`de-AT`).
    Specific,
    /// Shipped with the locale database.
    Installed,
    /// Added by the application.
    Custom,
    /// Application record overriding a shipped one.
    Replacement,
}

impl CultureKind {
    pub const ALL: [CultureKind; 5] = [
        CultureKind::Neutral,
        CultureKind::Specific,
        CultureKind::Installed,
        CultureKind::Custom,
        CultureKind::Replacement,
    ];

    fn bit(self) -> u8 {
        match self {
            Self::Neutral => 1,
            Self::Specific => 1 << 1,
            Self::Installed => 1 << 2,
            Self::Custom => 1 << 3,
            Self::Replacement => 1 << 4,
        }
    }
}

/// Set of [`CultureKind`]s carried by a database record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<CultureKind>", into = "Vec<CultureKind>")]
pub struct CultureKinds(u8);

impl CultureKinds {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn of(kinds: &[CultureKind]) -> Self {
        kinds.iter().fold(Self::empty(), |set, kind| set.with(*kind))
    }

    pub fn with(self, kind: CultureKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub fn contains(self, kind: CultureKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn intersects(self, other: CultureKinds) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = CultureKind> {
        CultureKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl From<Vec<CultureKind>> for CultureKinds {
    fn from(kinds: Vec<CultureKind>) -> Self {
        Self::of(&kinds)
    }
}

impl From<CultureKinds> for Vec<CultureKind> {
    fn from(kinds: CultureKinds) -> Self {
        kinds.iter().collect()
    }
}

/// Category flags restricting which database cultures are visible.
///
/// A record is admitted when it carries at least one enabled category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CultureScope {
    pub neutral: bool,
    pub specific: bool,
    pub installed: bool,
    pub custom: bool,
    pub replacement: bool,
}

impl Default for CultureScope {
    fn default() -> Self {
        Self::new(true, true, true, false, false)
    }
}

impl CultureScope {
    pub fn new(
        neutral: bool,
        specific: bool,
        installed: bool,
        custom: bool,
        replacement: bool,
    ) -> Self {
        Self {
            neutral,
            specific,
            installed,
            custom,
            replacement,
        }
    }

    /// Every category enabled.
    pub fn all() -> Self {
        Self::new(true, true, true, true, true)
    }

    /// The enabled categories; fails when none is enabled.
    pub fn kinds(&self) -> Result<CultureKinds> {
        let flags = [
            (self.neutral, CultureKind::Neutral),
            (self.specific, CultureKind::Specific),
            (self.installed, CultureKind::Installed),
            (self.custom, CultureKind::Custom),
            (self.replacement, CultureKind::Replacement),
        ];
        let kinds = flags
            .iter()
            .filter(|(enabled, _)| *enabled)
            .fold(CultureKinds::empty(), |set, (_, kind)| set.with(*kind));
        if kinds.is_empty() {
            return Err(LocalizationError::InvalidFilter);
        }
        Ok(kinds)
    }
}
