// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error kinds raised by catalog construction, culture changes and
//! property resolution.
//!
//! "No localized value available" is never an error: resolution falls back
//! to the base value. Only structural misconfiguration ends up here.

use thiserror::Error;

/// Result alias for the localization core.
pub type Result<T> = std::result::Result<T, LocalizationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    #[error("missing cultures")]
    EmptyCatalog,

    #[error("missing culture type selection")]
    InvalidFilter,

    #[error("unknown culture {0}")]
    UnknownCulture(String),

    #[error("unknown default culture {0}")]
    UnknownDefaultCulture(String),

    /// A required name argument was blank. Carries the parameter name.
    #[error("invalid argument: {0} must not be blank")]
    InvalidArgument(&'static str),

    #[error("type {type_name} is missing localizable property {property}")]
    MissingLocalizableProperty {
        type_name: &'static str,
        property: String,
    },

    #[error("type {type_name} is missing value of property {property}")]
    MissingBaseValue {
        type_name: &'static str,
        property: String,
    },

    #[error("type {type_name} has no writable property {property} for the localized value")]
    MissingTargetProperty {
        type_name: &'static str,
        property: String,
    },
}

impl LocalizationError {
    pub(crate) fn missing_property<T: ?Sized>(property: &str) -> Self {
        Self::MissingLocalizableProperty {
            type_name: std::any::type_name::<T>(),
            property: property.to_string(),
        }
    }

    pub(crate) fn missing_value<T: ?Sized>(property: &str) -> Self {
        Self::MissingBaseValue {
            type_name: std::any::type_name::<T>(),
            property: property.to_string(),
        }
    }

    pub(crate) fn missing_target<T: ?Sized>(property: &str) -> Self {
        Self::MissingTargetProperty {
            type_name: std::any::type_name::<T>(),
            property: property.to_string(),
        }
    }
}

/// Fails with [`LocalizationError::InvalidArgument`] when `value` is blank.
pub(crate) fn require_name(value: &str, parameter: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(LocalizationError::InvalidArgument(parameter))
    } else {
        Ok(())
    }
}
