// SPDX-License-Identifier: PMPL-1.0-or-later

//! Culture-aware lookup of localizable property values.
//!
//! Fallback chain for a requested culture `c` against a companion map `L`:
//!
//! 1. a key equal to `c` (ignoring case);
//! 2. for a bare two-letter `c`, the first key starting with `c`;
//! 3. otherwise the key equal to the language part of `c`;
//! 4. the base value.
//!
//! A matched key whose value is absent stops the chain at the base value.
//! "No localized value" is never an error.

use crate::context::CultureSource;
use crate::descriptor::{localizations_name, DescriptorCache, Introspect, PropertyKind, TypeDescriptors};
use crate::error::{require_name, LocalizationError, Result};
use crate::localizations::Localizations;
use crate::types::{eq_ignore_case, neutral_prefix, starts_with_ignore_case, CULTURE_SEPARATOR};
use crate::value::{LocalizedValue, Value, ValueKind};
use tracing::trace;

/// Length of a bare language tag eligible for the starts-with shortcut.
const NEUTRAL_TAG_LEN: usize = 2;

/// Picks the override for `culture`, `None` meaning "use the base value".
pub(crate) fn select<'a, V>(localizations: &'a Localizations<V>, culture: &str) -> Option<&'a V> {
    if localizations.is_empty() {
        return None;
    }

    if let Some(value) = exact(localizations, culture) {
        trace!(culture, tombstone = value.is_none(), "exact localization match");
        return value;
    }

    let separator = culture.find(CULTURE_SEPARATOR);
    if separator.map_or(true, |index| index == 0) && culture.chars().count() == NEUTRAL_TAG_LEN {
        // Any regional variant will do; ties go to the first inserted key.
        let variant = localizations
            .iter()
            .find(|(key, _)| starts_with_ignore_case(key, culture));
        trace!(culture, found = variant.is_some(), "regional variant lookup");
        return variant.and_then(|(_, value)| value);
    }

    let neutral = neutral_prefix(culture)?;
    let value = exact(localizations, neutral).flatten();
    trace!(culture, neutral, found = value.is_some(), "neutral localization lookup");
    value
}

fn exact<'a, V>(localizations: &'a Localizations<V>, culture: &str) -> Option<Option<&'a V>> {
    localizations
        .iter()
        .find(|(key, _)| !key.is_empty() && eq_ignore_case(key, culture))
        .map(|(_, value)| value)
}

/// Resolves localizable properties against a culture source.
#[derive(Clone, Copy)]
pub struct LocalizationResolver<'s> {
    culture: &'s dyn CultureSource,
    cache: &'s DescriptorCache,
}

impl<'s> LocalizationResolver<'s> {
    /// Resolver using the process-wide descriptor cache.
    pub fn new(culture: &'s dyn CultureSource) -> Self {
        Self::with_cache(culture, DescriptorCache::global())
    }

    pub fn with_cache(culture: &'s dyn CultureSource, cache: &'s DescriptorCache) -> Self {
        Self { culture, cache }
    }

    pub fn cache(&self) -> &'s DescriptorCache {
        self.cache
    }

    /// Localized value of `property`, falling back to the base value.
    ///
    /// Fails when the base property is missing or of another type, and when
    /// the base value itself is absent.
    pub fn resolve<S: Introspect, V: LocalizedValue>(
        &self,
        source: &S,
        property: &str,
        culture: Option<&str>,
    ) -> Result<V> {
        self.resolve_optional(source, property, culture)?
            .ok_or_else(|| LocalizationError::missing_value::<S>(property))
    }

    /// Like [`resolve`](Self::resolve), but an absent base value yields
    /// `None` instead of an error.
    pub fn resolve_optional<S: Introspect, V: LocalizedValue>(
        &self,
        source: &S,
        property: &str,
        culture: Option<&str>,
    ) -> Result<Option<V>> {
        require_name(property, "property_name")?;
        let descriptors = self.cache.describe::<S>();
        let base = descriptors
            .find(property)
            .filter(|base| base.kind() == PropertyKind::Value(V::KIND))
            .ok_or_else(|| LocalizationError::missing_property::<S>(property))?;
        let Some(base_value) = base.get_value(source) else {
            return Ok(None);
        };

        let value = self
            .localized(&descriptors, source, property, V::KIND, culture)?
            .unwrap_or(base_value);
        V::from_value(value)
            .map(Some)
            .ok_or_else(|| LocalizationError::missing_property::<S>(property))
    }

    /// Untyped resolution; the value kind comes from the companion map,
    /// which must exist.
    pub fn resolve_value<S: Introspect>(
        &self,
        source: &S,
        property: &str,
        culture: Option<&str>,
    ) -> Result<Option<Value>> {
        require_name(property, "property_name")?;
        let descriptors = self.cache.describe::<S>();
        let kind = match descriptors
            .find(&localizations_name(property))
            .map(|companion| companion.kind())
        {
            Some(PropertyKind::Localizations(kind)) => kind,
            _ => return Err(LocalizationError::missing_property::<S>(property)),
        };
        let base = descriptors
            .find(property)
            .filter(|base| base.kind() == PropertyKind::Value(kind))
            .ok_or_else(|| LocalizationError::missing_property::<S>(property))?;
        let Some(base_value) = base.get_value(source) else {
            return Ok(None);
        };

        Ok(Some(
            self.localized(&descriptors, source, property, kind, culture)?
                .unwrap_or(base_value),
        ))
    }

    /// Whether `S` declares a companion map for `property`.
    pub fn is_localizable<S: Introspect>(&self, property: &str) -> Result<bool> {
        require_name(property, "property_name")?;
        Ok(self
            .cache
            .describe::<S>()
            .find(&localizations_name(property))
            .is_some_and(|companion| matches!(companion.kind(), PropertyKind::Localizations(_))))
    }

    /// All overrides of `property` in map order; empty when there are none.
    pub fn localizations<S: Introspect>(
        &self,
        source: &S,
        property: &str,
    ) -> Result<Vec<(String, Option<Value>)>> {
        require_name(property, "property_name")?;
        Ok(self
            .cache
            .describe::<S>()
            .find(&localizations_name(property))
            .and_then(|companion| companion.get_localizations(source))
            .map(|table| table.entries())
            .unwrap_or_default())
    }

    /// The culture a call applies: the requested one, or the current UI
    /// culture, trimmed.
    pub fn effective_culture(&self, culture: Option<&str>) -> String {
        match culture {
            Some(culture) => culture.trim().to_string(),
            None => self.culture.current_ui_culture().as_str().trim().to_string(),
        }
    }

    fn localized<S: Introspect>(
        &self,
        descriptors: &TypeDescriptors<S>,
        source: &S,
        property: &str,
        kind: ValueKind,
        culture: Option<&str>,
    ) -> Result<Option<Value>> {
        let Some(companion) = descriptors.find(&localizations_name(property)) else {
            return Ok(None);
        };
        if companion.kind() != PropertyKind::Localizations(kind) {
            return Err(LocalizationError::missing_property::<S>(property));
        }
        let table = match companion.get_localizations(source) {
            Some(table) if !table.is_empty() => table,
            _ => return Ok(None),
        };
        Ok(table.select(&self.effective_culture(culture)))
    }
}

impl std::fmt::Debug for LocalizationResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizationResolver")
            .field("cache", self.cache)
            .finish_non_exhaustive()
    }
}
