// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale database module.
//!
//! The catalog never computes which cultures exist; it consumes a
//! [`LocaleDatabase`]. The builtin one is assembled from ISO 639-1 language
//! and ISO 3166-1 region tables and carries the invariant culture (empty
//! identifier) as its placeholder root entry.
//!
//! A [`CultureScope`] restricts a database to the categories an application
//! is interested in; a record is visible when it carries any enabled
//! [`CultureKind`].

mod database;
mod iso639;
mod regions;
mod scope;

pub use database::{
    system_cultures, BuiltinLocaleDatabase, LocaleDatabase, LocaleRecord, StaticLocaleDatabase,
    INVARIANT_CULTURE_NAME,
};
pub use iso639::{is_valid_iso639_1, language_name, native_name};
pub use regions::region_name;
pub use scope::{CultureKind, CultureKinds, CultureScope};
