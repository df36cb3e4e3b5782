//! HUD window creation and placement.

use plughud_core::{Config, PlugHudError, PlugHudResult};
use tauri::{AppHandle, PhysicalPosition, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

/// Label of the single HUD window.
pub const HUD_WINDOW_LABEL: &str = "hud";

/// Creates the single borderless HUD window.
///
/// The window is transparent, always-on-top, click-through, excluded from
/// the taskbar, never focusable, and starts hidden. It is parked at the
/// bottom-center of the primary monitor like the system volume HUD.
pub fn create_hud_window(app: &AppHandle, config: &Config) -> PlugHudResult<WebviewWindow> {
    let window = WebviewWindowBuilder::new(
        app,
        HUD_WINDOW_LABEL,
        WebviewUrl::App("index.html".into()),
    )
    .title("PlugHud")
    .inner_size(config.window_width, config.window_height)
    .decorations(false)
    .transparent(true)
    .shadow(true)
    .always_on_top(true)
    .skip_taskbar(true)
    .focusable(false)
    .resizable(false)
    .visible(false)
    .build()
    .map_err(|e| PlugHudError::Window(format!("failed to create HUD window: {e}")))?;

    // The HUD must never steal clicks from whatever is underneath it
    window
        .set_ignore_cursor_events(true)
        .map_err(|e| PlugHudError::Window(format!("failed to make HUD click-through: {e}")))?;

    position_bottom_center(&window, config)?;

    Ok(window)
}

/// Parks the window at the bottom-center of the primary monitor.
///
/// If no primary monitor is reported the window keeps its default position;
/// the HUD still works, just not where expected.
fn position_bottom_center(window: &WebviewWindow, config: &Config) -> PlugHudResult<()> {
    let monitor = window
        .primary_monitor()
        .map_err(|e| PlugHudError::Window(format!("failed to query primary monitor: {e}")))?;

    let Some(monitor) = monitor else {
        log::warn!("[HudWindow] No primary monitor reported; keeping default position");
        return Ok(());
    };

    let scale = monitor.scale_factor();
    let screen = monitor.size();
    let origin = monitor.position();

    let width = config.window_width * scale;
    let height = config.window_height * scale;
    let margin = config.bottom_margin * scale;

    let x = origin.x as f64 + (screen.width as f64 - width) / 2.0;
    let y = origin.y as f64 + screen.height as f64 - height - margin;

    window
        .set_position(PhysicalPosition::new(x as i32, y as i32))
        .map_err(|e| PlugHudError::Window(format!("failed to position HUD window: {e}")))?;

    Ok(())
}
