// SPDX-License-Identifier: PMPL-1.0-or-later

//! Copies resolved localized values from a source object onto a target,
//! typically a DTO built from the source.

use crate::context::CultureSource;
use crate::descriptor::Introspect;
use crate::error::{require_name, LocalizationError, Result};
use crate::resolver::LocalizationResolver;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
pub struct LocalizationMapper<'s> {
    resolver: LocalizationResolver<'s>,
}

impl<'s> LocalizationMapper<'s> {
    pub fn new(culture: &'s dyn CultureSource) -> Self {
        Self::with_resolver(LocalizationResolver::new(culture))
    }

    pub fn with_resolver(resolver: LocalizationResolver<'s>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &LocalizationResolver<'s> {
        &self.resolver
    }

    /// Writes the localized value of `property` from `source` into the
    /// property of the same name on `target`.
    ///
    /// Nothing is written when the source has no base value or the target has
    /// no such property. A target property that exists but cannot take the
    /// value (read-only, other type) fails with
    /// [`LocalizationError::MissingTargetProperty`].
    pub fn map_one<D: Introspect, S: Introspect>(
        &self,
        target: &mut D,
        source: &S,
        property: &str,
        culture: Option<&str>,
    ) -> Result<()> {
        require_name(property, "property_name")?;
        let culture = self.resolver.effective_culture(culture);
        let Some(value) = self.resolver.resolve_value(source, property, Some(&culture))? else {
            trace!(property, "no base value to map");
            return Ok(());
        };

        let descriptors = self.resolver.cache().describe::<D>();
        let Some(descriptor) = descriptors.find(property) else {
            debug!(property, target = descriptors.type_name(), "target lacks property, skipped");
            return Ok(());
        };
        if descriptor.set_value(target, value) {
            Ok(())
        } else {
            Err(LocalizationError::missing_target::<D>(property))
        }
    }

    /// Maps every localizable property of `source` that `target` also has.
    /// `source` is never modified.
    pub fn map_all<'t, D: Introspect, S: Introspect>(
        &self,
        target: &'t mut D,
        source: &S,
        culture: Option<&str>,
    ) -> Result<&'t mut D> {
        let culture = self.resolver.effective_culture(culture);
        let sources = self.resolver.cache().describe::<S>();
        let targets = self.resolver.cache().describe::<D>();
        for (property, _) in sources.localizable() {
            if targets.find(property).is_none() {
                continue;
            }
            self.map_one(target, source, property, Some(&culture))?;
        }
        Ok(target)
    }
}
