//! Tauri implementation of the HUD surface.
//!
//! Forwards content and opacity to the HUD webview via Tauri events and
//! toggles window visibility directly. Failures are logged and skipped: a
//! webview that cannot be reached means a missed popup, never a crash.

use plughud_core::{HudSurface, PowerEvent};
use tauri::{Emitter, WebviewWindow};

/// HUD surface backed by the Tauri HUD window.
pub struct TauriHudSurface {
    window: WebviewWindow,
}

impl TauriHudSurface {
    /// Creates a surface over the given (hidden) HUD window.
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }

    /// Emits an event to the HUD webview, logging failures.
    fn emit_to_webview<T: serde::Serialize + Clone>(&self, event_name: &str, payload: T) {
        if let Err(e) = self.window.emit(event_name, payload) {
            log::warn!("[TauriHudSurface] Failed to emit {}: {}", event_name, e);
        }
    }

    /// Mirrors a power event to the webview for the frontend's own use.
    pub fn forward_event(&self, event: &PowerEvent) {
        self.emit_to_webview("power-changed", event.clone());
    }
}

impl HudSurface for TauriHudSurface {
    fn set_content(&self, plugged: bool) {
        #[derive(serde::Serialize, Clone)]
        #[serde(rename_all = "camelCase")]
        struct HudStatePayload {
            plugged: bool,
        }
        self.emit_to_webview("hud-state", HudStatePayload { plugged });
    }

    fn set_opacity(&self, opacity: f64) {
        #[derive(serde::Serialize, Clone)]
        struct HudOpacityPayload {
            value: f64,
        }
        self.emit_to_webview("hud-opacity", HudOpacityPayload { value: opacity });
    }

    fn set_visible(&self, visible: bool) {
        let result = if visible {
            self.window.show()
        } else {
            self.window.hide()
        };
        if let Err(e) = result {
            log::warn!(
                "[TauriHudSurface] Failed to set visibility to {}: {}",
                visible,
                e
            );
        }
    }
}
