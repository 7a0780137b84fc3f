// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tracking the "current culture".
//!
//! A [`CultureContext`] pairs a [`CultureCatalog`] with one current-culture
//! cell whose scope is chosen by [`CultureContextKind`]:
//!
//! - `PerThread`: every thread of execution sees its own value, created on
//!   first read from the thread default culture. Values go away with the
//!   thread or with the context.
//! - `ProcessWide`: one value for the whole process, created on first read
//!   from the process culture. Concurrent `set_current_culture` calls race
//!   and the last writer wins for every reader.
//!
//! Request handlers that must not leak their culture into other requests
//! should not touch either cell. They create a [`RequestCulture`] instead
//! and pass it explicitly to the resolver.

use crate::ambient;
use crate::catalog::CultureCatalog;
use crate::error::{require_name, LocalizationError, Result};
use crate::types::{CultureContextKind, CultureDescription, CultureName};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tracing::debug;

/// Supplies the culture that applies when a caller does not name one.
///
/// This system does not distinguish the formatting culture from the UI
/// culture; both always move together.
pub trait CultureSource: Send + Sync {
    fn current_culture(&self) -> CultureName;

    fn current_ui_culture(&self) -> CultureName {
        self.current_culture()
    }
}

/// Catalog queries plus a mutable current culture.
pub trait CultureProvider: CultureSource {
    fn default_culture_name(&self) -> &CultureName;

    /// Validates `name` against the catalog and makes it current.
    fn set_current_culture(&self, name: &str) -> Result<()>;

    /// Case-insensitive lookup; fails only for a blank name.
    fn get_culture(&self, name: &str) -> Result<Option<&CultureDescription>>;

    fn supported_cultures(&self) -> Vec<CultureName>;

    fn supported_culture_descriptions(&self) -> &[CultureDescription];
}

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// One thread's current culture for one context.
///
/// `owner` dies with the context, so entries left behind on other threads
/// are recognisable and pruned on that thread's next write.
struct ThreadCulture {
    owner: Weak<()>,
    culture: CultureName,
}

thread_local! {
    /// Per-thread current cultures, keyed by context id. Freed at thread exit.
    static THREAD_CULTURES: RefCell<HashMap<u64, ThreadCulture>> = RefCell::new(HashMap::new());
}

#[derive(Debug)]
pub struct CultureContext {
    id: u64,
    catalog: Arc<CultureCatalog>,
    kind: CultureContextKind,
    shared: RwLock<Option<CultureName>>,
    alive: Arc<()>,
}

impl CultureContext {
    pub fn new(catalog: impl Into<Arc<CultureCatalog>>, kind: CultureContextKind) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            catalog: catalog.into(),
            kind,
            shared: RwLock::new(None),
            alive: Arc::new(()),
        }
    }

    pub fn catalog(&self) -> &CultureCatalog {
        &self.catalog
    }

    pub fn kind(&self) -> CultureContextKind {
        self.kind
    }

    /// Builds the explicit culture value for one request.
    ///
    /// A named culture must be in the catalog; without a name the request
    /// inherits the current culture of this context.
    pub fn request_culture(&self, requested: Option<&str>) -> Result<RequestCulture> {
        match requested {
            Some(name) => RequestCulture::new(&self.catalog, name),
            None => Ok(RequestCulture {
                culture: self.current_culture(),
            }),
        }
    }

    fn store(&self, culture: CultureName) {
        match self.kind {
            CultureContextKind::PerThread => THREAD_CULTURES.with(|cultures| {
                self.put_thread_culture(&mut cultures.borrow_mut(), culture);
            }),
            CultureContextKind::ProcessWide => {
                *self.shared.write().unwrap_or_else(PoisonError::into_inner) = Some(culture);
            }
        }
    }

    fn put_thread_culture(&self, cultures: &mut HashMap<u64, ThreadCulture>, culture: CultureName) {
        cultures.retain(|_, entry| entry.owner.strong_count() > 0);
        cultures.insert(
            self.id,
            ThreadCulture {
                owner: Arc::downgrade(&self.alive),
                culture,
            },
        );
    }
}

impl Drop for CultureContext {
    fn drop(&mut self) {
        if self.kind != CultureContextKind::PerThread {
            return;
        }
        // The thread-local is already gone when a context drops during thread exit.
        let _ = THREAD_CULTURES.try_with(|cultures| {
            if let Ok(mut cultures) = cultures.try_borrow_mut() {
                cultures.remove(&self.id);
            }
        });
    }
}

impl CultureSource for CultureContext {
    fn current_culture(&self) -> CultureName {
        match self.kind {
            CultureContextKind::PerThread => THREAD_CULTURES.with(|cultures| {
                let mut cultures = cultures.borrow_mut();
                if let Some(entry) = cultures.get(&self.id) {
                    return entry.culture.clone();
                }
                let culture = ambient::thread_default_culture();
                self.put_thread_culture(&mut cultures, culture.clone());
                culture
            }),
            CultureContextKind::ProcessWide => {
                if let Some(culture) = self
                    .shared
                    .read()
                    .unwrap_or_else(PoisonError::into_inner)
                    .as_ref()
                {
                    return culture.clone();
                }
                self.shared
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_or_insert_with(ambient::process_culture)
                    .clone()
            }
        }
    }
}

impl CultureProvider for CultureContext {
    fn default_culture_name(&self) -> &CultureName {
        self.catalog.default_culture()
    }

    fn set_current_culture(&self, name: &str) -> Result<()> {
        require_name(name, "culture_name")?;
        let name = name.trim();
        let culture = self
            .catalog
            .get_culture(name)
            .map(|description| description.identifier.clone())
            .ok_or_else(|| LocalizationError::UnknownCulture(name.to_string()))?;
        debug!(culture = %culture, context = %self.kind, "current culture changed");
        self.store(culture);
        Ok(())
    }

    fn get_culture(&self, name: &str) -> Result<Option<&CultureDescription>> {
        require_name(name, "culture_name")?;
        Ok(self.catalog.get_culture(name))
    }

    fn supported_cultures(&self) -> Vec<CultureName> {
        self.catalog.supported_cultures()
    }

    fn supported_culture_descriptions(&self) -> &[CultureDescription] {
        self.catalog.supported_culture_descriptions()
    }
}

/// A catalog-validated culture for one logical request.
///
/// Immutable and cheap to clone; hand it to the resolver instead of mutating
/// a shared current culture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCulture {
    culture: CultureName,
}

impl RequestCulture {
    pub fn new(catalog: &CultureCatalog, name: &str) -> Result<Self> {
        require_name(name, "culture_name")?;
        let name = name.trim();
        let description = catalog
            .get_culture(name)
            .ok_or_else(|| LocalizationError::UnknownCulture(name.to_string()))?;
        Ok(Self {
            culture: description.identifier.clone(),
        })
    }

    pub fn culture(&self) -> &CultureName {
        &self.culture
    }
}

impl CultureSource for RequestCulture {
    fn current_culture(&self) -> CultureName {
        self.culture.clone()
    }
}
