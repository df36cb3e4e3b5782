//! Centralized error types for the PlugHud core library.
//!
//! Most failures in PlugHud are soft: a probe that yields no data reads as
//! "not plugged in" and a surface that cannot be updated is logged and
//! skipped. The variants here cover the few places where a caller needs a
//! structured error, primarily the desktop command layer.

use serde::Serialize;
use thiserror::Error;

/// Application-wide error type for PlugHud.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum PlugHudError {
    /// The power-source probe could not be constructed or read.
    #[error("Power probe failed: {0}")]
    Probe(String),

    /// The HUD window could not be created or positioned.
    #[error("Window error: {0}")]
    Window(String),

    /// Catch-all for unexpected internal failures.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result alias using [`PlugHudError`].
pub type PlugHudResult<T> = Result<T, PlugHudError>;
