// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization settings and startup wiring.
//!
//! Settings come from a YAML or JSON file. Every field is optional:
//!
//! ```yaml
//! scope: { neutral: true, specific: true, installed: true }
//! default_culture: en-US
//! supported_cultures: [en, en-US, de, de-AT]
//! context: per_thread
//! custom_cultures:
//!   - name: tlh
//!     english_name: Klingon
//!     native_name: tlhIngan Hol
//! ```

use crate::catalog::CultureCatalog;
use crate::context::CultureContext;
use crate::error::Result as LocalizationResult;
use crate::locale::{is_valid_iso639_1, CultureScope, LocaleDatabase, LocaleRecord, StaticLocaleDatabase};
use crate::types::{eq_ignore_case, CultureContextKind, CultureName};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizationSettings {
    pub scope: CultureScope,
    pub default_culture: Option<String>,
    /// Omitted: every culture admitted by `scope` is supported.
    pub supported_cultures: Option<Vec<String>>,
    pub context: CultureContextKind,
    pub custom_cultures: Vec<LocaleRecord>,
}

impl LocalizationSettings {
    /// Reads settings from `path`; `.json` files are JSON, anything else YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading localization settings {}", path.display()))?;
        let settings: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json settings {}", path.display()))?,
            _ => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml settings {}", path.display()))?,
        };
        debug!(path = %path.display(), context = %settings.context, "loaded localization settings");
        Ok(settings)
    }

    /// The builtin database with the configured custom cultures layered in.
    pub fn locale_database(&self) -> StaticLocaleDatabase {
        for record in &self.custom_cultures {
            let language = record.name.language().to_ascii_lowercase();
            if !is_valid_iso639_1(&language) {
                warn!(culture = %record.name, "custom culture has no ISO 639-1 language");
            }
        }
        StaticLocaleDatabase::builtin_with(self.custom_cultures.iter().cloned())
    }

    /// Fills an open `default_culture` from the process culture.
    ///
    /// The process culture is used when `database` offers it under this
    /// scope and supported list, then its language, then `fallback`.
    /// Returns the culture filled in; `None` when a default was configured.
    pub fn default_from_process(
        &mut self,
        database: &dyn LocaleDatabase,
        process: &CultureName,
        fallback: &str,
    ) -> Option<CultureName> {
        if self.default_culture.is_some() {
            return None;
        }
        let chosen = [process.as_str(), process.language()]
            .into_iter()
            .find(|name| !name.is_empty() && self.offers(database, name))
            .map(CultureName::from)
            .unwrap_or_else(|| {
                debug!(process = %process, fallback, "process culture not offered");
                CultureName::from(fallback)
            });
        self.default_culture = Some(chosen.to_string());
        Some(chosen)
    }

    fn offers(&self, database: &dyn LocaleDatabase, name: &str) -> bool {
        let known = database.cultures(&self.scope).is_ok_and(|records| {
            records
                .iter()
                .any(|record| !record.name.is_invariant() && record.name.matches(name))
        });
        known
            && self.supported_cultures.as_ref().is_none_or(|cultures| {
                cultures.iter().any(|culture| eq_ignore_case(culture.trim(), name))
            })
    }

    pub fn build_catalog(&self, database: &dyn LocaleDatabase) -> LocalizationResult<CultureCatalog> {
        let default_culture = self.default_culture.as_deref();
        match &self.supported_cultures {
            Some(cultures) => {
                CultureCatalog::build(cultures, &self.scope, default_culture, self.context, database)
            }
            None => CultureCatalog::from_scope(&self.scope, default_culture, self.context, database),
        }
    }

    /// Builds the catalog and wraps it in a context of the configured kind.
    pub fn build_context(&self, database: &dyn LocaleDatabase) -> LocalizationResult<CultureContext> {
        let catalog = self.build_catalog(database)?;
        Ok(CultureContext::new(catalog, self.context))
    }
}
