//! Tauri command handlers for the HUD webview.

use plughud_core::{PlugHudError, PowerReading};
use tauri::State;

use crate::bootstrap::AppState;
use crate::error::CommandError;

/// Returns the current power reading for the webview.
#[tauri::command]
pub fn get_power_state(state: State<'_, AppState>) -> Result<PowerReading, CommandError> {
    state
        .watcher
        .current_reading()
        .ok_or_else(|| PlugHudError::Probe("no power source data available".to_string()))
        .map_err(CommandError::from)
}

/// Triggers an immediate power re-check outside the poll cadence.
#[tauri::command]
pub fn refresh_power_state(state: State<'_, AppState>) {
    state.watcher.trigger_check();
}

/// Runs one HUD cycle with the given state, without touching the watcher.
/// Handy for checking placement and timings from the devtools console.
#[tauri::command]
pub fn preview_hud(state: State<'_, AppState>, plugged: bool) {
    state.presenter.show(plugged);
}
