//! Event emitter abstraction for decoupling the watcher from presentation.
//!
//! The power watcher depends on the [`EventEmitter`] trait rather than the
//! HUD presenter directly, enabling testing and alternative front-ends.

use super::PowerEvent;

/// Trait for emitting power events without knowledge of presentation.
///
/// The watcher uses this trait to announce state changes, decoupling it from
/// how the change is shown to the user (HUD window, log line, test recorder).
///
/// # Example
///
/// ```ignore
/// struct MyWatcher {
///     emitter: Arc<dyn EventEmitter>,
/// }
///
/// impl MyWatcher {
///     fn on_change(&self, plugged: bool) {
///         self.emitter.emit_power(PowerEvent::SourceChanged { ... });
///     }
/// }
/// ```
pub trait EventEmitter: Send + Sync {
    /// Emits a power-source event.
    fn emit_power(&self, event: PowerEvent);
}

/// No-op emitter for testing or headless use.
///
/// Events are silently discarded.
pub struct NoopEventEmitter;

impl EventEmitter for NoopEventEmitter {
    fn emit_power(&self, _event: PowerEvent) {
        // No-op
    }
}

/// Logging emitter for debugging and development.
///
/// Logs all events at debug level. Useful for debugging event flow without
/// a window system attached.
pub struct LoggingEventEmitter;

impl EventEmitter for LoggingEventEmitter {
    fn emit_power(&self, event: PowerEvent) {
        tracing::debug!(?event, "power_event");
    }
}
