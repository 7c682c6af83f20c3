//! Production Environment implementation using OS randomness.
//!
//! This module provides `SystemEnv`, the production implementation of the
//! `Environment` trait that draws entropy from the operating system.

use sorteo_core::Environment;

/// Production environment using OS entropy.
///
/// Uses `getrandom`, so draws are unpredictable and not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).unwrap_or_else(|e| {
            // NOTE: This should never fail on supported platforms. With zeros
            // every bounded sample degrades to 0, so draws come out in a fixed
            // order instead of at random; sampling in the core is bounded, so
            // the game keeps going rather than hanging.
            tracing::error!("getrandom failed: {}", e);
            buffer.fill(0);
        });
    }
}
