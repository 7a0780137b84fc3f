// SPDX-License-Identifier: PMPL-1.0-or-later

//! Companion maps holding per-culture overrides of a base property.
//!
//! A [`Localizations`] keeps its entries in insertion order. Culture keys are
//! unique under case-insensitive comparison; inserting `DE` after `de`
//! replaces the value in place. An entry may be a tombstone (no value), which
//! tells resolution to keep the base value for that culture.

use crate::resolver;
use crate::types::eq_ignore_case;
use crate::value::{LocalizedValue, Value, ValueKind};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, PartialEq)]
pub struct Localizations<V> {
    entries: Vec<(String, Option<V>)>,
}

impl<V> Default for Localizations<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Localizations<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the override for `culture`, returning the previous entry if any.
    ///
    /// A key naming the same culture in another case replaces the earlier
    /// value in place, so the later key wins.
    pub fn insert(&mut self, culture: impl Into<String>, value: V) -> Option<Option<V>> {
        self.put(culture.into(), Some(value))
    }

    /// Records an explicit "no override" entry for `culture`.
    pub fn insert_absent(&mut self, culture: impl Into<String>) -> Option<Option<V>> {
        self.put(culture.into(), None)
    }

    pub fn with(mut self, culture: impl Into<String>, value: V) -> Self {
        self.insert(culture, value);
        self
    }

    pub fn with_absent(mut self, culture: impl Into<String>) -> Self {
        self.insert_absent(culture);
        self
    }

    /// `None` when no key matches, `Some(None)` for a tombstone.
    pub fn get(&self, culture: &str) -> Option<Option<&V>> {
        self.entries
            .iter()
            .find(|(key, _)| eq_ignore_case(key, culture))
            .map(|(_, value)| value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&V>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    pub fn cultures(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    fn put(&mut self, culture: String, value: Option<V>) -> Option<Option<V>> {
        match self
            .entries
            .iter_mut()
            .find(|(key, _)| eq_ignore_case(key, &culture))
        {
            Some(entry) => Some(std::mem::replace(&mut entry.1, value)),
            None => {
                self.entries.push((culture, value));
                None
            }
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Localizations<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut localizations = Self::new();
        for (culture, value) in iter {
            localizations.insert(culture, value);
        }
        localizations
    }
}

/// Type-erased view of a [`Localizations`] map, as handed out by property
/// descriptors.
pub trait LocalizationTable: Send + Sync {
    fn value_kind(&self) -> ValueKind;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Localized value picked for `culture` by the fallback chain.
    /// `None` means the caller keeps the base value.
    fn select(&self, culture: &str) -> Option<Value>;

    fn entries(&self) -> Vec<(String, Option<Value>)>;
}

impl<V: LocalizedValue> LocalizationTable for Localizations<V> {
    fn value_kind(&self) -> ValueKind {
        V::KIND
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn select(&self, culture: &str) -> Option<Value> {
        resolver::select(self, culture)
            .cloned()
            .map(LocalizedValue::into_value)
    }

    fn entries(&self) -> Vec<(String, Option<Value>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone().map(LocalizedValue::into_value)))
            .collect()
    }
}

impl<V: Serialize> Serialize for Localizations<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (culture, value) in &self.entries {
            map.serialize_entry(culture, value)?;
        }
        map.end()
    }
}

struct LocalizationsVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for LocalizationsVisitor<V> {
    type Value = Localizations<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from culture name to localized value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut localizations = Localizations::new();
        while let Some((culture, value)) = access.next_entry::<String, Option<V>>()? {
            localizations.put(culture, value);
        }
        Ok(localizations)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Localizations<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LocalizationsVisitor(PhantomData))
    }
}
