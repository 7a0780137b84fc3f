// SPDX-License-Identifier: PMPL-1.0-or-later

//! rest-localization: culture catalogs and localized property values for
//! REST-style services.
//!
//! An application declares which cultures it supports ([`CultureCatalog`]),
//! tracks the culture that applies to the running code ([`CultureContext`],
//! [`RequestCulture`]) and resolves per-culture overrides of data fields:
//!
//! 1. **Catalog**: validated, immutable set of supported cultures plus a
//!    default, built from a locale database and a category filter.
//! 2. **Context**: the current culture, per thread or process-wide, or an
//!    explicit per-request value.
//! 3. **Resolution**: a field `P` with a companion `P` + `Localizations` map
//!    is looked up through the fallback chain exact → regional variant →
//!    neutral language → base value.
//! 4. **Mapping**: resolved values are copied onto DTOs.

pub mod ambient;
pub mod catalog;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod locale;
pub mod localizations;
pub mod mapper;
pub mod products;
pub mod resolver;
pub mod settings;
pub mod types;
pub mod value;

pub use catalog::CultureCatalog;
pub use context::{CultureContext, CultureProvider, CultureSource, RequestCulture};
pub use descriptor::{DescriptorCache, Introspect, PropertyDescriptor, PropertyKind, LOCALIZATIONS_SUFFIX};
pub use error::{LocalizationError, Result};
pub use locale::{BuiltinLocaleDatabase, CultureScope, LocaleDatabase, LocaleRecord, StaticLocaleDatabase};
pub use localizations::{LocalizationTable, Localizations};
pub use mapper::LocalizationMapper;
pub use resolver::LocalizationResolver;
pub use settings::LocalizationSettings;
pub use types::{CultureContextKind, CultureDescription, CultureName};
pub use value::{LocalizedValue, Value, ValueKind};
