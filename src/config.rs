//! Process-wide default flavor.
//!
//! Operations called with `None` as their flavor resolve it from here. The
//! default starts out as [`RegexFlavor::Re`] and is stored as a raw code, so a
//! bad value is reported when it is used rather than when it is set.
//!
//! Single-writer discipline: set the default once during start-up, before
//! any thread resolves flavors. Reads are lock-protected, but a write racing
//! with other writers or with readers on another thread makes the flavor
//! those readers observe unpredictable. Prefer passing an explicit flavor.

use crate::error::{Error, Result};
use crate::flavor::RegexFlavor;
use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

static DEFAULT_FLAVOR: Lazy<RwLock<Option<i64>>> = Lazy::new(|| RwLock::new(Some(initial_code())));

fn initial_code() -> i64 {
    i64::from(RegexFlavor::Re)
}

/// Currently configured default flavor code, if any.
pub fn default_flavor() -> Option<i64> {
    *DEFAULT_FLAVOR.read().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the default flavor code. `None` unsets it.
pub fn set_default_flavor(value: Option<i64>) {
    *DEFAULT_FLAVOR.write().unwrap_or_else(PoisonError::into_inner) = value;
}

/// Restore the initial default ([`RegexFlavor::Re`]).
pub fn reset_default_flavor() {
    set_default_flavor(Some(initial_code()));
}

pub(crate) fn resolve_default() -> Result<RegexFlavor> {
    match default_flavor() {
        Some(code) => {
            let flavor = RegexFlavor::try_from(code)
                .map_err(|_| Error::InvalidDefault { value: code, valid: RegexFlavor::valid_codes() })?;
            log::trace!("no flavor given, using default {}", flavor);
            Ok(flavor)
        }
        None => Err(Error::NoFlavor),
    }
}
