//! Power-source observation.
//!
//! This module provides:
//! - [`PowerProbe`] trait and the [`BatteryProbe`] production implementation
//! - [`PowerWatcher`] which polls the probe, detects plug/unplug transitions,
//!   and emits [`PowerEvent`](crate::events::PowerEvent)s

mod probe;
mod watcher;

pub use probe::{BatteryProbe, PowerProbe, PowerReading};
pub use watcher::PowerWatcher;
