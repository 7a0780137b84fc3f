// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ambient cultures: what a context falls back to before a culture is set.
//!
//! - The process ambient culture is detected once from the operating system
//!   (`LANG`, `LC_ALL`, platform APIs) through `sys-locale`.
//! - The thread default culture is what a fresh thread starts with. It is
//!   unset until the application configures it, in which case threads start
//!   in the invariant culture.

use crate::types::{CultureContextKind, CultureName, CULTURE_SEPARATOR};
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

static THREAD_DEFAULT: RwLock<Option<CultureName>> = RwLock::new(None);

/// The culture of the process environment, invariant when undetectable.
pub fn process_culture() -> CultureName {
    static DETECTED: OnceLock<CultureName> = OnceLock::new();
    DETECTED
        .get_or_init(|| {
            let detected = sys_locale::get_locale()
                .map(|raw| normalize_locale(&raw))
                .unwrap_or_else(CultureName::invariant);
            debug!(culture = %detected, "detected process culture");
            detected
        })
        .clone()
}

/// The culture new threads start in.
pub fn thread_default_culture() -> CultureName {
    THREAD_DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(CultureName::invariant)
}

/// Sets (or clears, with `None`) the culture new threads start in.
pub fn set_thread_default_culture(culture: Option<CultureName>) {
    *THREAD_DEFAULT.write().unwrap_or_else(PoisonError::into_inner) = culture;
}

/// Ambient culture for a context kind.
pub fn ambient_culture(kind: CultureContextKind) -> CultureName {
    match kind {
        CultureContextKind::ProcessWide => process_culture(),
        CultureContextKind::PerThread => thread_default_culture(),
    }
}

/// Turns an OS locale string into a culture tag.
///
/// `de_AT.UTF-8@euro` becomes `de-AT`; `C` and `POSIX` are the invariant
/// culture.
pub fn normalize_locale(raw: &str) -> CultureName {
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return CultureName::invariant();
    }
    CultureName::new(base.replace('_', &CULTURE_SEPARATOR.to_string()))
}
