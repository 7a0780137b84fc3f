// SPDX-License-Identifier: PMPL-1.0-or-later

//! The validated set of cultures an application supports, plus its default.
//!
//! A catalog is built once, at startup, from candidate names resolved
//! against a [`LocaleDatabase`]. Construction is all-or-nothing: any failure
//! returns an error and no catalog exists. Afterwards the catalog is
//! immutable and every query is a pure lookup.

use crate::ambient;
use crate::error::{LocalizationError, Result};
use crate::locale::{CultureScope, LocaleDatabase};
use crate::types::{CultureContextKind, CultureDescription, CultureName};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureCatalog {
    entries: Vec<CultureDescription>,
    default_culture: CultureName,
}

impl CultureCatalog {
    /// Builds a catalog from candidate culture names.
    ///
    /// Candidates are matched case-insensitively against the database
    /// cultures admitted by `scope`. Candidates resolving to the invariant
    /// (empty) culture are skipped. Without `default_culture` the ambient
    /// culture of `kind` is used; it must be one of the resolved entries.
    pub fn build<I, S>(
        candidates: I,
        scope: &CultureScope,
        default_culture: Option<&str>,
        kind: CultureContextKind,
        database: &dyn LocaleDatabase,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            if !names.iter().any(|name| name == candidate) {
                names.push(candidate.to_string());
            }
        }
        if names.is_empty() {
            return Err(LocalizationError::EmptyCatalog);
        }

        let available = database.cultures(scope)?;
        let mut entries: Vec<CultureDescription> = Vec::with_capacity(names.len());
        for name in &names {
            let record = available
                .iter()
                .find(|record| record.name.matches(name))
                .ok_or_else(|| LocalizationError::UnknownCulture(name.clone()))?;
            if record.name.as_str().trim().is_empty() {
                trace!(candidate = %name, "skipping invariant culture");
                continue;
            }
            if entries.iter().any(|entry| entry.identifier == record.name) {
                continue;
            }
            entries.push(record.describe());
        }

        let requested = default_culture
            .map(CultureName::from)
            .unwrap_or_else(|| ambient::ambient_culture(kind));
        let default_culture = entries
            .iter()
            .find(|entry| entry.identifier == requested)
            .map(|entry| entry.identifier.clone())
            .ok_or_else(|| LocalizationError::UnknownDefaultCulture(requested.to_string()))?;

        debug!(
            cultures = entries.len(),
            default = %default_culture,
            context = %kind,
            "built culture catalog"
        );
        Ok(Self {
            entries,
            default_culture,
        })
    }

    /// Builds a catalog supporting every database culture admitted by
    /// `scope`.
    pub fn from_scope(
        scope: &CultureScope,
        default_culture: Option<&str>,
        kind: CultureContextKind,
        database: &dyn LocaleDatabase,
    ) -> Result<Self> {
        let names: Vec<String> = database
            .cultures(scope)?
            .into_iter()
            .map(|record| record.name.to_string())
            .collect();
        Self::build(names, scope, default_culture, kind, database)
    }

    /// Case-insensitive lookup of a supported culture.
    pub fn get_culture(&self, name: &str) -> Option<&CultureDescription> {
        self.entries.iter().find(|entry| entry.identifier.matches(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_culture(name).is_some()
    }

    /// Supported identifiers in catalog order.
    pub fn supported_cultures(&self) -> Vec<CultureName> {
        self.entries
            .iter()
            .map(|entry| entry.identifier.clone())
            .collect()
    }

    pub fn supported_culture_descriptions(&self) -> &[CultureDescription] {
        &self.entries
    }

    pub fn default_culture(&self) -> &CultureName {
        &self.default_culture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::BuiltinLocaleDatabase;

    fn build(names: &[&str], default: Option<&str>) -> Result<CultureCatalog> {
        CultureCatalog::build(
            names.iter().copied(),
            &CultureScope::default(),
            default,
            CultureContextKind::PerThread,
            &BuiltinLocaleDatabase,
        )
    }

    #[test]
    fn empty_candidates_fail() {
        assert_eq!(build(&[], Some("en")), Err(LocalizationError::EmptyCatalog));
    }

    #[test]
    fn invalid_filter_fails() {
        let result = CultureCatalog::build(
            ["en"],
            &CultureScope::new(false, false, false, false, false),
            Some("en"),
            CultureContextKind::PerThread,
            &BuiltinLocaleDatabase,
        );
        assert_eq!(result, Err(LocalizationError::InvalidFilter));
    }

    #[test]
    fn unknown_candidate_fails_with_its_name() {
        assert_eq!(
            build(&["en", "xx-YY"], Some("en")),
            Err(LocalizationError::UnknownCulture("xx-YY".to_string()))
        );
    }

    #[test]
    fn invariant_candidate_is_skipped() {
        let catalog = build(&["", "en"], Some("en")).unwrap();
        assert_eq!(catalog.supported_cultures(), vec![CultureName::from("en")]);
    }

    #[test]
    fn duplicates_collapse_case_insensitively() {
        let catalog = build(&["de", "DE", "de-at", "de-AT"], Some("de")).unwrap();
        let names: Vec<String> = catalog
            .supported_cultures()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["de", "de-AT"]);
    }

    #[test]
    fn default_uses_catalog_spelling() {
        let catalog = build(&["en", "en-US"], Some("EN-us")).unwrap();
        assert_eq!(catalog.default_culture().as_str(), "en-US");
    }

    #[test]
    fn unknown_default_fails() {
        assert_eq!(
            build(&["en"], Some("de")),
            Err(LocalizationError::UnknownDefaultCulture("de".to_string()))
        );
    }

    #[test]
    fn scope_restricts_candidates() {
        let neutral_only = CultureScope::new(true, false, false, false, false);
        let result = CultureCatalog::build(
            ["en", "en-US"],
            &neutral_only,
            Some("en"),
            CultureContextKind::PerThread,
            &BuiltinLocaleDatabase,
        );
        assert_eq!(result, Err(LocalizationError::UnknownCulture("en-US".to_string())));
    }

    #[test]
    fn from_scope_supports_every_admitted_culture() {
        let catalog = CultureCatalog::from_scope(
            &CultureScope::default(),
            Some("de-CH"),
            CultureContextKind::ProcessWide,
            &BuiltinLocaleDatabase,
        )
        .unwrap();
        assert!(catalog.contains("zh-TW"));
        assert!(!catalog.contains(""));
        assert_eq!(
            catalog.supported_cultures().len(),
            BuiltinLocaleDatabase.records().len() - 1
        );
    }
}
