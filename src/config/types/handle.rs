//! Global config handle for the host tool.
//!
//! Uses `arc-swap` for lock-free reads. The record is installed once at
//! host startup, before the compiler reads any field, and is only read
//! afterwards; no reload path is exposed.

use crate::config::BuildConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<BuildConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(BuildConfig::default()));

/// Get the current configuration.
#[inline]
pub fn cfg() -> Arc<BuildConfig> {
    CONFIG.load_full()
}

/// Install the loaded configuration.
///
/// Call once, before the host starts reading fields.
#[inline]
pub fn init_config(config: BuildConfig) -> Arc<BuildConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
