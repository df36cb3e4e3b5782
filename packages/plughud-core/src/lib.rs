//! PlugHud Core - shared library for PlugHud.
//!
//! This crate provides the core functionality for PlugHud, a transient
//! heads-up overlay that announces AC power plug/unplug events. It is
//! designed to be used by the Tauri desktop shell and to be fully testable
//! without any windowing system.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`runtime`]: Task spawning abstraction for async runtime independence
//! - [`events`]: Power event types and the emitter seam
//! - [`power`]: Power-source probing and change detection
//! - [`hud`]: The HUD presentation state machine
//! - [`state`]: Configuration with in-code defaults
//! - [`error`]: Centralized error types
//!
//! # Abstraction Traits
//!
//! The crate defines several traits to decouple core logic from
//! platform-specific implementations:
//!
//! - [`TaskSpawner`](runtime::TaskSpawner): Spawning background tasks
//! - [`EventEmitter`](events::EventEmitter): Emitting power events
//! - [`PowerProbe`](power::PowerProbe): Reading the OS power-source state
//! - [`HudSurface`](hud::HudSurface): Mutating the visible HUD window
//!
//! Each trait has a default or logging implementation suitable for headless
//! use. The desktop app provides the Tauri-specific implementations.

#![warn(clippy::all)]

pub mod error;
pub mod events;
pub mod hud;
pub mod power;
pub mod runtime;
pub mod state;
pub mod utils;

// Re-export commonly used types at the crate root
pub use error::{PlugHudError, PlugHudResult};
pub use events::{EventEmitter, LoggingEventEmitter, NoopEventEmitter, PowerEvent};
pub use hud::{HudPresenter, HudSurface};
pub use power::{BatteryProbe, PowerProbe, PowerReading, PowerWatcher};
pub use runtime::{TaskSpawner, TokioSpawner};
pub use state::Config;
pub use utils::now_millis;
