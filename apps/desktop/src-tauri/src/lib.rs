//! PlugHud Desktop - Tauri desktop application.
//!
//! This crate provides the Tauri shell around plughud-core.
//! It handles platform-specific concerns like:
//! - The borderless, always-on-top HUD window
//! - Forwarding HUD mutations to the webview
//! - Accessory activation policy (no Dock icon on macOS)
//! - Application lifecycle

mod bootstrap;
mod commands;
mod error;
mod surface;
mod window;

use tauri::{Manager, RunEvent};
use tauri_plugin_log::{Target, TargetKind};

use crate::commands::{get_power_state, preview_hud, refresh_power_state};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir { file_name: None }),
                    Target::new(TargetKind::Webview),
                ])
                .level(if cfg!(debug_assertions) {
                    log::LevelFilter::Debug
                } else {
                    log::LevelFilter::Info
                })
                .build(),
        )
        .invoke_handler(tauri::generate_handler![
            get_power_state,
            refresh_power_state,
            preview_hud
        ])
        .setup(|app| {
            // Background accessory: no Dock icon, no app-switcher entry.
            // The process lives until the user session ends.
            #[cfg(target_os = "macos")]
            {
                use tauri::ActivationPolicy;
                let _ = app.set_activation_policy(ActivationPolicy::Accessory);
            }

            let config = plughud_core::Config::default();
            let hud_window = window::create_hud_window(app.handle(), &config)?;

            let state = bootstrap::bootstrap_services(hud_window, &config);
            state.watcher.clone().start();
            app.manage(state);

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| {
        if let RunEvent::ExitRequested { .. } = event {
            log::info!("Application exit requested, cleaning up...");
            if let Some(state) = app_handle.try_state::<bootstrap::AppState>() {
                state.shutdown();
                log::info!("Cleanup complete");
            }
        }
    });
}
