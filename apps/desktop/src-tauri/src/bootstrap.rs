//! Application bootstrap and dependency wiring.
//!
//! This module contains the composition root - the single place where the
//! core services are instantiated and wired together. This pattern provides:
//!
//! - **Clarity**: All dependency relationships are visible in one place
//! - **Testability**: Easy to swap implementations for testing
//! - **Maintainability**: Service creation logic is isolated from usage

use std::sync::Arc;

use plughud_core::{
    BatteryProbe, Config, EventEmitter, HudPresenter, PowerEvent, PowerProbe, PowerWatcher,
    TokioSpawner,
};
use tauri::WebviewWindow;

use crate::surface::TauriHudSurface;

/// Container for the wired services, managed as Tauri state.
pub struct AppState {
    /// Watches the power source for plug/unplug transitions.
    pub watcher: Arc<PowerWatcher>,
    /// Drives the HUD fade cycle.
    pub presenter: Arc<HudPresenter>,
}

impl AppState {
    /// Stops background work for process exit.
    pub fn shutdown(&self) {
        self.watcher.shutdown();
    }
}

/// Emitter that drives the HUD presenter and mirrors the event to the
/// webview so the frontend can react on its own.
struct HudEventEmitter {
    presenter: Arc<HudPresenter>,
    surface: Arc<TauriHudSurface>,
}

impl EventEmitter for HudEventEmitter {
    fn emit_power(&self, event: PowerEvent) {
        let PowerEvent::SourceChanged { plugged, .. } = &event;
        self.presenter.show(*plugged);
        self.surface.forward_event(&event);
    }
}

/// Bootstraps the application services with their dependencies.
///
/// The wiring order matters - services are created in dependency order:
///
/// 1. The Tauri surface over the HUD window
/// 2. The presenter driving that surface
/// 3. The emitter bridging watcher events to the presenter
/// 4. The watcher itself
///
/// The returned [`AppState`] is managed by Tauri; the caller starts the
/// watcher once the state is in place.
pub fn bootstrap_services(hud_window: WebviewWindow, config: &Config) -> AppState {
    // Tauri's async runtime is Tokio; grab its handle for core task spawning
    let spawner = tauri::async_runtime::block_on(async { TokioSpawner::current() });

    let surface = Arc::new(TauriHudSurface::new(hud_window));
    let presenter = Arc::new(HudPresenter::new(
        surface.clone(),
        spawner.clone(),
        config,
    ));

    let emitter = Arc::new(HudEventEmitter {
        presenter: presenter.clone(),
        surface,
    });

    let probe: Arc<dyn PowerProbe> = Arc::new(BatteryProbe);
    let watcher = Arc::new(PowerWatcher::new(probe, emitter, spawner, config));

    AppState { watcher, presenter }
}
