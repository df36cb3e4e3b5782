//! Power event types and the emitter seam.
//!
//! This module provides:
//! - [`EventEmitter`] trait for the power watcher to emit events
//! - [`PowerEvent`] describing power-source transitions
//!
//! The desktop shell implements [`EventEmitter`] to drive the HUD presenter
//! and to forward the event to its webview.

mod emitter;

pub use emitter::{EventEmitter, LoggingEventEmitter, NoopEventEmitter};

use serde::Serialize;

/// Events describing AC power-source transitions.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PowerEvent {
    /// The machine switched between AC and battery power.
    SourceChanged {
        /// True when the machine is now on AC power.
        plugged: bool,
        /// Battery level 0-100 at the time of the change, if known.
        #[serde(rename = "batteryLevel", skip_serializing_if = "Option::is_none")]
        battery_level: Option<u8>,
        /// Unix timestamp in milliseconds.
        timestamp: u64,
    },
}
