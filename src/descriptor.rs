// SPDX-License-Identifier: PMPL-1.0-or-later

//! Property descriptors and the per-type descriptor cache.
//!
//! A type opts into localization by implementing [`Introspect`]: it lists
//! its public data members as [`PropertyDescriptor`]s, each with typed
//! accessors. A localizable property `P` is a value descriptor named `P`
//! plus a companion descriptor named `P` + [`LOCALIZATIONS_SUFFIX`] that
//! exposes a [`Localizations`] map.
//!
//! [`DescriptorCache`] runs `describe()` at most once per type, no matter how
//! many threads ask for it at the same time. The map lock is only held to
//! find or insert the per-type slot; the slot itself is filled outside it,
//! so populating one type never blocks lookups of other cached types.

use crate::localizations::{LocalizationTable, Localizations};
use crate::types::eq_ignore_case;
use crate::value::{LocalizedValue, Value, ValueKind};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Name suffix of the companion map of a localizable property.
pub const LOCALIZATIONS_SUFFIX: &str = "Localizations";

/// Companion property name for a base property (`Name` → `NameLocalizations`).
pub fn localizations_name(property: &str) -> String {
    format!("{}{}", property, LOCALIZATIONS_SUFFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// A plain data member of the given kind.
    Value(ValueKind),
    /// A culture → value map holding overrides of the given kind.
    Localizations(ValueKind),
}

/// A type whose data members can be introspected.
pub trait Introspect: Sized + 'static {
    /// Public data members in declaration order.
    fn describe() -> Vec<PropertyDescriptor<Self>>;
}

type ValueGetter<T> = Box<dyn Fn(&T) -> Option<Value> + Send + Sync>;
type ValueSetter<T> = Box<dyn Fn(&mut T, Value) -> bool + Send + Sync>;
type TableGetter<T> =
    Box<dyn for<'a> Fn(&'a T) -> Option<&'a dyn LocalizationTable> + Send + Sync>;

enum Accessor<T> {
    Value {
        get: ValueGetter<T>,
        set: Option<ValueSetter<T>>,
    },
    Localizations(TableGetter<T>),
}

/// Introspection handle for one named, typed data member of `T`.
pub struct PropertyDescriptor<T> {
    name: String,
    kind: PropertyKind,
    accessor: Accessor<T>,
}

impl<T: 'static> PropertyDescriptor<T> {
    /// A member that can be read but not assigned.
    pub fn read_only<V: LocalizedValue>(name: &str, get: fn(&T) -> Option<&V>) -> Self {
        Self {
            name: name.to_string(),
            kind: PropertyKind::Value(V::KIND),
            accessor: Accessor::Value {
                get: value_getter(get),
                set: None,
            },
        }
    }

    /// A member that can be read and assigned.
    pub fn read_write<V: LocalizedValue>(
        name: &str,
        get: fn(&T) -> Option<&V>,
        set: fn(&mut T, V),
    ) -> Self {
        let assign: ValueSetter<T> = Box::new(move |target: &mut T, value: Value| {
            match V::from_value(value) {
                Some(value) => {
                    set(target, value);
                    true
                }
                None => false,
            }
        });
        Self {
            name: name.to_string(),
            kind: PropertyKind::Value(V::KIND),
            accessor: Accessor::Value {
                get: value_getter(get),
                set: Some(assign),
            },
        }
    }

    /// The companion map of the base property `property`; the descriptor is
    /// named `property` + [`LOCALIZATIONS_SUFFIX`].
    pub fn localizations<V: LocalizedValue>(
        property: &str,
        get: fn(&T) -> Option<&Localizations<V>>,
    ) -> Self {
        Self {
            name: localizations_name(property),
            kind: PropertyKind::Localizations(V::KIND),
            accessor: Accessor::Localizations(table_getter(move |target: &T| {
                get(target).map(|table| table as &dyn LocalizationTable)
            })),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn value_kind(&self) -> ValueKind {
        match self.kind {
            PropertyKind::Value(kind) | PropertyKind::Localizations(kind) => kind,
        }
    }

    pub fn is_writable(&self) -> bool {
        matches!(self.accessor, Accessor::Value { set: Some(_), .. })
    }

    /// For a companion map descriptor, the name of its base property.
    pub fn base_name(&self) -> Option<&str> {
        match self.kind {
            PropertyKind::Localizations(_) => self.name.strip_suffix(LOCALIZATIONS_SUFFIX),
            PropertyKind::Value(_) => None,
        }
    }

    /// Current value, `None` when absent or when this is a companion map.
    pub fn get_value(&self, target: &T) -> Option<Value> {
        match &self.accessor {
            Accessor::Value { get, .. } => get(target),
            Accessor::Localizations(_) => None,
        }
    }

    /// Assigns `value`; `false` when read-only or of another kind.
    pub fn set_value(&self, target: &mut T, value: Value) -> bool {
        match &self.accessor {
            Accessor::Value { set: Some(set), .. } => set(target, value),
            _ => false,
        }
    }

    pub fn get_localizations<'a>(&self, target: &'a T) -> Option<&'a dyn LocalizationTable> {
        match &self.accessor {
            Accessor::Localizations(get) => get(target),
            Accessor::Value { .. } => None,
        }
    }
}

impl<T> fmt::Debug for PropertyDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

fn value_getter<T: 'static, V: LocalizedValue>(get: fn(&T) -> Option<&V>) -> ValueGetter<T> {
    Box::new(move |target: &T| get(target).cloned().map(LocalizedValue::into_value))
}

fn table_getter<T, F>(get: F) -> TableGetter<T>
where
    F: for<'a> Fn(&'a T) -> Option<&'a dyn LocalizationTable> + Send + Sync + 'static,
{
    Box::new(get)
}

/// All descriptors of one type, with a by-name index.
pub struct TypeDescriptors<T> {
    type_name: &'static str,
    properties: Vec<PropertyDescriptor<T>>,
    index: HashMap<String, usize>,
}

impl<T: Introspect> TypeDescriptors<T> {
    fn introspect() -> Self {
        let properties = T::describe();
        let mut index = HashMap::with_capacity(properties.len());
        for (position, property) in properties.iter().enumerate() {
            index.entry(property.name.clone()).or_insert(position);
        }
        Self {
            type_name: std::any::type_name::<T>(),
            properties,
            index,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyDescriptor<T>> {
        self.properties.iter()
    }

    /// Case-sensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&PropertyDescriptor<T>> {
        self.index.get(name).map(|position| &self.properties[*position])
    }

    pub fn find_ignore_case(&self, name: &str) -> Option<&PropertyDescriptor<T>> {
        self.find(name).or_else(|| {
            self.properties
                .iter()
                .find(|property| eq_ignore_case(&property.name, name))
        })
    }

    /// Companion map descriptors paired with their base property name.
    pub fn localizable(&self) -> impl Iterator<Item = (&str, &PropertyDescriptor<T>)> {
        self.properties
            .iter()
            .filter_map(|property| property.base_name().map(|base| (base, property)))
    }
}

impl<T> fmt::Debug for TypeDescriptors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptors")
            .field("type_name", &self.type_name)
            .field("properties", &self.properties)
            .finish()
    }
}

/// A cached descriptor, kept alive together with its type's descriptor set.
pub struct PropertyRef<T> {
    descriptors: Arc<TypeDescriptors<T>>,
    position: usize,
}

impl<T> Deref for PropertyRef<T> {
    type Target = PropertyDescriptor<T>;

    fn deref(&self) -> &Self::Target {
        &self.descriptors.properties[self.position]
    }
}

impl<T> fmt::Debug for PropertyRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

type Slot = Arc<OnceLock<Arc<dyn Any + Send + Sync>>>;

/// Concurrency-safe cache from a type to its descriptors.
#[derive(Default)]
pub struct DescriptorCache {
    slots: RwLock<HashMap<TypeId, Slot>>,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by default.
    pub fn global() -> &'static DescriptorCache {
        static GLOBAL: OnceLock<DescriptorCache> = OnceLock::new();
        GLOBAL.get_or_init(DescriptorCache::new)
    }

    /// Descriptors of `T`, introspected on first use.
    pub fn describe<T: Introspect>(&self) -> Arc<TypeDescriptors<T>> {
        let slot = self.slot(TypeId::of::<T>());
        let erased = slot.get_or_init(|| {
            let descriptors = TypeDescriptors::<T>::introspect();
            debug!(
                type_name = descriptors.type_name,
                properties = descriptors.len(),
                "introspected type"
            );
            Arc::new(descriptors) as Arc<dyn Any + Send + Sync>
        });
        // Slots are keyed by TypeId, so the downcast always matches.
        Arc::clone(erased)
            .downcast::<TypeDescriptors<T>>()
            .unwrap_or_else(|_| Arc::new(TypeDescriptors::introspect()))
    }

    /// Case-sensitive property lookup on `T`.
    pub fn find_property<T: Introspect>(&self, name: &str) -> Option<PropertyRef<T>> {
        let descriptors = self.describe::<T>();
        let position = *descriptors.index.get(name)?;
        Some(PropertyRef {
            descriptors,
            position,
        })
    }

    /// Number of types introspected (or being introspected) so far.
    pub fn cached_types(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn slot(&self, id: TypeId) -> Slot {
        if let Some(slot) = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return Arc::clone(slot);
        }
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(id).or_default())
    }
}

impl fmt::Debug for DescriptorCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorCache")
            .field("cached_types", &self.cached_types())
            .finish()
    }
}
