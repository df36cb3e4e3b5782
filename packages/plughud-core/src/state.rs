//! Application configuration.

use serde::{Deserialize, Serialize};

/// Configuration for PlugHud.
///
/// All fields have in-code defaults matching the classic volume-HUD feel.
/// There is no config file, CLI surface, or environment lookup; this struct
/// is the single injection point for timings and geometry, which also makes
/// it the test seam for the presenter and watcher.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    // ─────────────────────────────────────────────────────────────────────────
    // Power watching
    // ─────────────────────────────────────────────────────────────────────────
    /// Interval between power-source probes (milliseconds).
    pub poll_interval_ms: u64,

    /// Wait after a detected change before presenting (milliseconds).
    /// Gives the OS time to settle its power-source metadata.
    pub settle_delay_ms: u64,

    /// Whether the first-ever reading may pop the HUD.
    /// The default preserves "no popup on startup".
    pub announce_initial: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // HUD timings
    // ─────────────────────────────────────────────────────────────────────────
    /// Fade-in duration (milliseconds).
    pub fade_in_ms: u64,

    /// How long the HUD stays fully visible before fading out (milliseconds).
    pub hold_ms: u64,

    /// Fade-out duration (milliseconds).
    pub fade_out_ms: u64,

    /// Opacity animation step interval (milliseconds).
    pub frame_interval_ms: u64,

    // ─────────────────────────────────────────────────────────────────────────
    // HUD geometry
    // ─────────────────────────────────────────────────────────────────────────
    /// HUD window width (logical pixels).
    pub window_width: f64,

    /// HUD window height (logical pixels).
    pub window_height: f64,

    /// Gap between the HUD and the bottom edge of the screen (logical pixels).
    pub bottom_margin: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Power watching
            poll_interval_ms: 1000,
            settle_delay_ms: 100,
            announce_initial: false,

            // HUD timings
            fade_in_ms: 300,
            hold_ms: 1500,
            fade_out_ms: 500,
            frame_interval_ms: 16,

            // HUD geometry
            window_width: 250.0,
            window_height: 250.0,
            bottom_margin: 40.0,
        }
    }
}
