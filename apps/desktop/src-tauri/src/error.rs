//! Error types for Tauri commands.
//!
//! This module provides `CommandError` for Tauri command handlers,
//! with conversions from plughud-core error types.

use plughud_core::PlugHudError;
use serde::Serialize;

/// Structured error type for Tauri commands.
///
/// Provides machine-readable error codes alongside human-readable messages,
/// enabling the frontend to handle errors programmatically.
#[derive(Debug, Serialize)]
pub struct CommandError {
    /// Machine-readable error code (e.g., "probe_failed").
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
}

impl From<PlugHudError> for CommandError {
    fn from(err: PlugHudError) -> Self {
        let code = match &err {
            PlugHudError::Probe(_) => "probe_failed",
            PlugHudError::Window(_) => "window_error",
            PlugHudError::Internal(_) => "internal_error",
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}
