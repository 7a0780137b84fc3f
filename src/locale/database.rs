// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale databases: the source of known cultures a catalog is built from.
//!
//! The builtin database is assembled once from the ISO 639 / ISO 3166
//! tables. Applications layer their own records on top with
//! [`StaticLocaleDatabase::builtin_with`].

use super::iso639::{language_name, native_name};
use super::regions::region_name;
use super::scope::{CultureKind, CultureKinds, CultureScope};
use crate::error::Result;
use crate::types::{CultureDescription, CultureName};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const INVARIANT_CULTURE_NAME: &str = "Invariant Language (Invariant Country)";

/// One culture known to a locale database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRecord {
    pub name: CultureName,
    #[serde(default)]
    pub english_name: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(default)]
    pub kinds: CultureKinds,
}

impl LocaleRecord {
    pub fn new(
        name: impl Into<CultureName>,
        english_name: impl Into<String>,
        native_name: impl Into<String>,
        kinds: CultureKinds,
    ) -> Self {
        Self {
            name: name.into(),
            english_name: english_name.into(),
            native_name: native_name.into(),
            kinds,
        }
    }

    pub fn invariant() -> Self {
        Self::new(
            CultureName::invariant(),
            INVARIANT_CULTURE_NAME,
            INVARIANT_CULTURE_NAME,
            CultureKinds::of(&[CultureKind::Neutral, CultureKind::Installed]),
        )
    }

    pub fn describe(&self) -> CultureDescription {
        CultureDescription {
            identifier: self.name.clone(),
            native_name: self.native_name.clone(),
            english_name: self.english_name.clone(),
        }
    }

    /// Fills blank names from the ISO tables and the neutral/specific kind
    /// from the shape of the tag.
    fn completed(mut self) -> Self {
        if self.english_name.is_empty() || self.native_name.is_empty() {
            let (english, native) = derived_names(self.name.as_str());
            if self.english_name.is_empty() {
                self.english_name = english;
            }
            if self.native_name.is_empty() {
                self.native_name = native;
            }
        }
        if !self.name.is_invariant() {
            let shape = if self.name.is_neutral() {
                CultureKind::Neutral
            } else {
                CultureKind::Specific
            };
            self.kinds = self.kinds.with(shape);
        }
        self
    }
}

/// External source of the cultures a process knows about.
pub trait LocaleDatabase: Send + Sync {
    fn records(&self) -> &[LocaleRecord];

    /// Records admitted by `scope`, in database order.
    fn cultures(&self, scope: &CultureScope) -> Result<Vec<&LocaleRecord>> {
        let kinds = scope.kinds()?;
        Ok(self
            .records()
            .iter()
            .filter(|record| record.kinds.intersects(kinds))
            .collect())
    }
}

/// Descriptions of every database culture admitted by `scope`, independent
/// of any catalog.
pub fn system_cultures(
    database: &dyn LocaleDatabase,
    scope: &CultureScope,
) -> Result<Vec<CultureDescription>> {
    Ok(database
        .cultures(scope)?
        .into_iter()
        .map(LocaleRecord::describe)
        .collect())
}

/// The shipped database: invariant culture, neutral languages and their
/// specific regional cultures.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocaleDatabase;

impl LocaleDatabase for BuiltinLocaleDatabase {
    fn records(&self) -> &[LocaleRecord] {
        builtin_records()
    }
}

/// A database owned by the application, usually the builtin records plus
/// custom ones from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticLocaleDatabase {
    records: Vec<LocaleRecord>,
}

impl StaticLocaleDatabase {
    pub fn new(records: impl IntoIterator<Item = LocaleRecord>) -> Self {
        Self {
            records: records.into_iter().map(LocaleRecord::completed).collect(),
        }
    }

    /// Builtin records with `custom` layered on top. A custom record whose
    /// name matches a builtin one replaces it and is flagged as a
    /// replacement; any other custom record is appended and flagged custom.
    pub fn builtin_with(custom: impl IntoIterator<Item = LocaleRecord>) -> Self {
        let mut records = builtin_records().to_vec();
        for record in custom {
            let record = record.completed();
            match records.iter().position(|known| known.name == record.name) {
                Some(index) => {
                    let known = &records[index];
                    let name = known.name.clone();
                    let kinds = known.kinds.with(CultureKind::Replacement);
                    records[index] = LocaleRecord { name, kinds, ..record };
                }
                None => {
                    let kinds = record.kinds.with(CultureKind::Custom);
                    records.push(LocaleRecord { kinds, ..record });
                }
            }
        }
        Self { records }
    }
}

impl LocaleDatabase for StaticLocaleDatabase {
    fn records(&self) -> &[LocaleRecord] {
        &self.records
    }
}

const NEUTRAL_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "sv", "da", "nb", "fi", "pl", "cs", "hu", "el",
    "tr", "ru", "uk", "ja", "zh", "ko",
];

/// Specific cultures with the region name written in the culture's language.
const SPECIFIC_CULTURES: &[(&str, &str)] = &[
    ("en-US", "United States"),
    ("en-GB", "United Kingdom"),
    ("en-AU", "Australia"),
    ("en-CA", "Canada"),
    ("en-IE", "Ireland"),
    ("en-NZ", "New Zealand"),
    ("en-IN", "India"),
    ("de-DE", "Deutschland"),
    ("de-AT", "Österreich"),
    ("de-CH", "Schweiz"),
    ("de-LI", "Liechtenstein"),
    ("de-LU", "Luxemburg"),
    ("fr-FR", "France"),
    ("fr-BE", "Belgique"),
    ("fr-CA", "Canada"),
    ("fr-CH", "Suisse"),
    ("fr-LU", "Luxembourg"),
    ("es-ES", "España"),
    ("es-MX", "México"),
    ("es-AR", "Argentina"),
    ("it-IT", "Italia"),
    ("it-CH", "Svizzera"),
    ("pt-PT", "Portugal"),
    ("pt-BR", "Brasil"),
    ("nl-NL", "Nederland"),
    ("nl-BE", "België"),
    ("sv-SE", "Sverige"),
    ("da-DK", "Danmark"),
    ("nb-NO", "Norge"),
    ("fi-FI", "Suomi"),
    ("pl-PL", "Polska"),
    ("cs-CZ", "Česko"),
    ("hu-HU", "Magyarország"),
    ("el-GR", "Ελλάδα"),
    ("tr-TR", "Türkiye"),
    ("ru-RU", "Россия"),
    ("uk-UA", "Україна"),
    ("ja-JP", "日本"),
    ("zh-CN", "中国"),
    ("zh-TW", "台灣"),
    ("ko-KR", "대한민국"),
];

fn builtin_records() -> &'static [LocaleRecord] {
    static RECORDS: OnceLock<Vec<LocaleRecord>> = OnceLock::new();
    RECORDS.get_or_init(|| {
        let neutral = CultureKinds::of(&[CultureKind::Neutral, CultureKind::Installed]);
        let specific = CultureKinds::of(&[CultureKind::Specific, CultureKind::Installed]);

        let mut records = vec![LocaleRecord::invariant()];
        for language in NEUTRAL_LANGUAGES {
            let (english, native) = derived_names(language);
            records.push(LocaleRecord::new(*language, english, native, neutral));
            for (tag, native_region) in SPECIFIC_CULTURES {
                if CultureName::from(*tag).language() != *language {
                    continue;
                }
                let (english, _) = derived_names(tag);
                let native = format!("{} ({})", native_name(language).unwrap_or(*language), native_region);
                records.push(LocaleRecord::new(*tag, english, native, specific));
            }
        }
        records
    })
}

/// English and native display names for a tag, as far as the tables know
/// them; unknown parts are shown verbatim.
fn derived_names(tag: &str) -> (String, String) {
    let name = CultureName::from(tag);
    let language = name.language().to_ascii_lowercase();
    let english_language = language_name(&language).unwrap_or(name.language());
    let native_language = native_name(&language).unwrap_or(name.language());
    if name.is_neutral() || name.is_invariant() {
        return (english_language.to_string(), native_language.to_string());
    }

    let region = &tag[name.language().len() + 1..];
    let english_region = region_name(&region.to_ascii_uppercase()).unwrap_or(region);
    (
        format!("{} ({})", english_language, english_region),
        format!("{} ({})", native_language, region),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(database: &'a dyn LocaleDatabase, name: &str) -> Option<&'a LocaleRecord> {
        database.records().iter().find(|record| record.name == name)
    }

    #[test]
    fn builtin_contains_invariant_and_regional_cultures() {
        let database = BuiltinLocaleDatabase;
        let invariant = find(&database, "").unwrap();
        assert_eq!(invariant.english_name, INVARIANT_CULTURE_NAME);

        let austria = find(&database, "de-AT").unwrap();
        assert_eq!(austria.english_name, "German (Austria)");
        assert_eq!(austria.native_name, "Deutsch (Österreich)");
        assert!(austria.kinds.contains(CultureKind::Specific));

        let chinese = find(&database, "zh").unwrap();
        assert_eq!(chinese.native_name, "中文");
        assert!(chinese.kinds.contains(CultureKind::Neutral));
    }

    #[test]
    fn scope_selects_by_any_enabled_kind() {
        let database = BuiltinLocaleDatabase;
        let neutral_only = CultureScope::new(true, false, false, false, false);
        let cultures = database.cultures(&neutral_only).unwrap();
        assert!(cultures.iter().all(|record| !record.name.as_str().contains('-')));
        assert!(cultures.iter().any(|record| record.name == "en"));

        let custom_only = CultureScope::new(false, false, false, true, false);
        assert!(database.cultures(&custom_only).unwrap().is_empty());
    }

    #[test]
    fn custom_records_are_layered_on_builtin() {
        let database = StaticLocaleDatabase::builtin_with(vec![
            LocaleRecord::new("tlh", "Klingon", "tlhIngan Hol", CultureKinds::empty()),
            LocaleRecord::new("DE-at", "", "Österreichisch", CultureKinds::empty()),
        ]);

        let klingon = find(&database, "tlh").unwrap();
        assert!(klingon.kinds.contains(CultureKind::Custom));
        assert!(klingon.kinds.contains(CultureKind::Neutral));

        let austria = find(&database, "de-AT").unwrap();
        assert_eq!(austria.native_name, "Österreichisch");
        assert_eq!(austria.english_name, "German (Austria)");
        assert!(austria.kinds.contains(CultureKind::Replacement));
        assert!(austria.kinds.contains(CultureKind::Installed));
        assert_eq!(
            database.records().len(),
            BuiltinLocaleDatabase.records().len() + 1
        );
    }

    #[test]
    fn system_cultures_describe_admitted_records() {
        let descriptions = system_cultures(&BuiltinLocaleDatabase, &CultureScope::default()).unwrap();
        assert_eq!(descriptions.len(), BuiltinLocaleDatabase.records().len());
        assert!(descriptions
            .iter()
            .any(|description| description.english_name == "English (United Kingdom)"));
    }
}
