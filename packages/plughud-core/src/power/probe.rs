//! Power-source probing using starship-battery.
//!
//! Wraps the system battery manager behind the [`PowerProbe`] trait so the
//! watcher can be tested against scripted readings.

use serde::Serialize;
use starship_battery::{Manager, State};
use tracing::{debug, warn};

/// A snapshot of the machine's power-source state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerReading {
    /// Whether the machine is currently on AC power (plugged in).
    pub on_ac_power: bool,
    /// Battery level 0-100 (`None` if no battery or unknown).
    pub battery_level: Option<u8>,
    /// Whether a battery is currently charging.
    pub charging: bool,
}

/// Trait for reading the OS power-source state.
///
/// Returns `None` when the state cannot be determined. Missing data is not
/// an error; the caller decides how to interpret it.
pub trait PowerProbe: Send + Sync {
    /// Reads the current power-source state.
    fn read(&self) -> Option<PowerReading>;
}

/// Production probe backed by the system battery manager.
///
/// A fresh manager is created per read; enumeration is cheap at the cadence
/// the watcher polls, and it avoids holding OS handles between reads.
pub struct BatteryProbe;

impl PowerProbe for BatteryProbe {
    fn read(&self) -> Option<PowerReading> {
        let manager = match Manager::new() {
            Ok(m) => m,
            Err(e) => {
                warn!("Failed to create battery manager: {}", e);
                return None;
            }
        };

        let batteries: Vec<_> = match manager.batteries() {
            Ok(b) => b.filter_map(|b| b.ok()).collect(),
            Err(e) => {
                warn!("Failed to enumerate batteries: {}", e);
                return None;
            }
        };

        if batteries.is_empty() {
            // No batteries found - a desktop machine runs on mains power
            debug!("No batteries found, assuming desktop on AC power");
            return Some(PowerReading {
                on_ac_power: true,
                battery_level: None,
                charging: false,
            });
        }

        // Use the first battery (primary)
        let battery = &batteries[0];
        let state = battery.state();
        let level = (battery
            .state_of_charge()
            .get::<starship_battery::units::ratio::percent>()) as u8;

        let charging = matches!(state, State::Charging);
        // On AC power if charging, full, or not actively discharging
        let on_ac_power = !matches!(state, State::Discharging | State::Empty);

        debug!(
            "Battery state: level={}%, state={:?}, on_ac={}",
            level, state, on_ac_power
        );

        Some(PowerReading {
            on_ac_power,
            battery_level: Some(level),
            charging,
        })
    }
}
