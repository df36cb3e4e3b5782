//! Power-source change watching.
//!
//! Responsibilities:
//! - Background polling loop over the power probe
//! - Plug/unplug change detection against the last known state
//! - Settle delay before announcing a change
//! - Manual check coordination

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::events::{EventEmitter, PowerEvent};
use crate::power::probe::{PowerProbe, PowerReading};
use crate::runtime::{TaskSpawner, TokioSpawner};
use crate::state::Config;
use crate::utils::now_millis;

/// Watches the power source and emits an event on every plug/unplug.
///
/// The watcher owns the single piece of program state: the last known
/// plugged-in boolean, which is `None` until the first reading. Each check
/// compares the current reading against it and emits only on change, so
/// repeated identical readings are silent.
pub struct PowerWatcher {
    /// Probe for reading the OS power-source state.
    probe: Arc<dyn PowerProbe>,
    /// Event emitter for announcing plug/unplug transitions.
    emitter: Arc<dyn EventEmitter>,
    /// Last known plugged state. `None` before the first reading.
    last_plugged: Mutex<Option<bool>>,
    /// Interval between automatic probe reads.
    poll_interval: Duration,
    /// Wait after a detected change before announcing it.
    settle_delay: Duration,
    /// Whether the first-ever reading may announce.
    announce_initial: bool,
    check_notify: Notify,
    /// Token to signal the background loop to stop.
    cancel_token: CancellationToken,
    spawner: TokioSpawner,
}

impl PowerWatcher {
    /// Creates a new `PowerWatcher`.
    ///
    /// # Arguments
    /// * `probe` - Probe for reading the power-source state
    /// * `emitter` - Event emitter for announcing changes
    /// * `spawner` - Spawner for the background monitoring loop
    /// * `config` - Timing configuration
    pub fn new(
        probe: Arc<dyn PowerProbe>,
        emitter: Arc<dyn EventEmitter>,
        spawner: TokioSpawner,
        config: &Config,
    ) -> Self {
        Self {
            probe,
            emitter,
            last_plugged: Mutex::new(None),
            poll_interval: Duration::from_millis(config.poll_interval_ms.max(1)),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            announce_initial: config.announce_initial,
            check_notify: Notify::new(),
            cancel_token: CancellationToken::new(),
            spawner,
        }
    }

    /// Reads whether the machine is currently on AC power.
    ///
    /// Missing probe data reads as "not plugged in", never as an error.
    pub fn is_plugged_in(&self) -> bool {
        self.probe.read().map(|r| r.on_ac_power).unwrap_or(false)
    }

    /// Returns the full current reading, if the probe has data.
    pub fn current_reading(&self) -> Option<PowerReading> {
        self.probe.read()
    }

    /// Returns the last known plugged state (`None` before the first check).
    pub fn last_plugged(&self) -> Option<bool> {
        *self.last_plugged.lock()
    }

    /// Requests an immediate re-read outside the polling cadence.
    pub fn trigger_check(&self) {
        self.check_notify.notify_one();
    }

    /// Stops the background monitoring loop.
    pub fn shutdown(&self) {
        log::info!("[PowerWatcher] Initiating shutdown");
        self.cancel_token.cancel();
    }

    /// Reads the current state and announces it if it differs from the last
    /// known state.
    ///
    /// The first-ever reading primes the stored state without announcing,
    /// unless `announce_initial` is set. On a change the new state is stored
    /// immediately, then the settle delay elapses before the event fires so
    /// the OS can finish updating its power-source metadata.
    pub async fn check_and_notify(&self) {
        let current = self.is_plugged_in();

        let announce = {
            let mut last = self.last_plugged.lock();
            match *last {
                Some(prev) if prev == current => false,
                Some(_) => {
                    *last = Some(current);
                    true
                }
                None => {
                    *last = Some(current);
                    self.announce_initial
                }
            }
        };

        if !announce {
            log::debug!("[PowerWatcher] State unchanged (plugged={})", current);
            return;
        }

        log::info!(
            "[PowerWatcher] Power source changed: {}",
            if current { "plugged in" } else { "unplugged" }
        );

        // Let the OS settle its power metadata before announcing
        tokio::time::sleep(self.settle_delay).await;

        let battery_level = self.probe.read().and_then(|r| r.battery_level);
        self.emitter.emit_power(PowerEvent::SourceChanged {
            plugged: current,
            battery_level,
            timestamp: now_millis(),
        });
    }

    /// Starts the background power monitor.
    ///
    /// This spawns a task that:
    /// - Primes the last known state from the current reading
    /// - Re-checks on a fixed poll interval
    /// - Responds to manual check requests
    /// - Stops when the cancellation token is triggered
    pub fn start(self: Arc<Self>) {
        let cancel_token = self.cancel_token.clone();
        let spawner = self.spawner.clone();
        spawner.spawn(async move {
            // Prime the stored state so startup does not pop the HUD
            // (unless announce_initial is set).
            self.check_and_notify().await;

            let mut interval = tokio::time::interval(self.poll_interval);
            // The first tick of a fresh interval completes immediately
            interval.tick().await;

            loop {
                let is_manual_check = tokio::select! {
                    _ = cancel_token.cancelled() => {
                        log::info!("[PowerWatcher] Shutting down monitoring loop");
                        break;
                    }
                    _ = interval.tick() => false,
                    _ = self.check_notify.notified() => {
                        log::debug!("[PowerWatcher] Manual check triggered");
                        true
                    }
                };

                // Reset interval after a manual check to push back the next poll
                if is_manual_check {
                    interval.reset();
                }

                self.check_and_notify().await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{self, Duration};

    /// Scripted probe whose reading the test can swap at any time.
    struct FakeProbe {
        reading: Mutex<Option<PowerReading>>,
    }

    impl FakeProbe {
        fn new(plugged: bool) -> Arc<Self> {
            Arc::new(Self {
                reading: Mutex::new(Some(reading(plugged))),
            })
        }

        fn set_plugged(&self, plugged: bool) {
            *self.reading.lock() = Some(reading(plugged));
        }

        fn set_missing(&self) {
            *self.reading.lock() = None;
        }
    }

    impl PowerProbe for FakeProbe {
        fn read(&self) -> Option<PowerReading> {
            self.reading.lock().clone()
        }
    }

    fn reading(plugged: bool) -> PowerReading {
        PowerReading {
            on_ac_power: plugged,
            battery_level: Some(75),
            charging: plugged,
        }
    }

    /// Emitter that records every event it sees.
    struct RecordingEmitter {
        events: Mutex<Vec<PowerEvent>>,
    }

    impl RecordingEmitter {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
            })
        }

        fn plugged_sequence(&self) -> Vec<bool> {
            self.events
                .lock()
                .iter()
                .map(|e| match e {
                    PowerEvent::SourceChanged { plugged, .. } => *plugged,
                })
                .collect()
        }
    }

    impl EventEmitter for RecordingEmitter {
        fn emit_power(&self, event: PowerEvent) {
            self.events.lock().push(event);
        }
    }

    fn test_watcher(
        probe: Arc<FakeProbe>,
        emitter: Arc<RecordingEmitter>,
        config: &Config,
    ) -> Arc<PowerWatcher> {
        Arc::new(PowerWatcher::new(
            probe,
            emitter,
            TokioSpawner::current(),
            config,
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn initial_state_does_not_announce() {
        let probe = FakeProbe::new(true);
        let emitter = RecordingEmitter::new();
        let watcher = test_watcher(probe, emitter.clone(), &Config::default());

        watcher.check_and_notify().await;
        watcher.check_and_notify().await;

        assert_eq!(watcher.last_plugged(), Some(true));
        assert!(emitter.plugged_sequence().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn announce_initial_emits_on_first_check() {
        let probe = FakeProbe::new(true);
        let emitter = RecordingEmitter::new();
        let config = Config {
            announce_initial: true,
            ..Config::default()
        };
        let watcher = test_watcher(probe, emitter.clone(), &config);

        watcher.check_and_notify().await;

        assert_eq!(emitter.plugged_sequence(), vec![true]);
    }

    #[tokio::test(start_paused = true)]
    async fn announces_exactly_once_per_change() {
        let probe = FakeProbe::new(true);
        let emitter = RecordingEmitter::new();
        let watcher = test_watcher(probe.clone(), emitter.clone(), &Config::default());

        // Prime
        watcher.check_and_notify().await;

        probe.set_plugged(false);
        watcher.check_and_notify().await;
        watcher.check_and_notify().await;
        watcher.check_and_notify().await;

        probe.set_plugged(true);
        watcher.check_and_notify().await;

        assert_eq!(emitter.plugged_sequence(), vec![false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_data_reads_as_unplugged() {
        let probe = FakeProbe::new(true);
        let emitter = RecordingEmitter::new();
        let watcher = test_watcher(probe.clone(), emitter.clone(), &Config::default());

        watcher.check_and_notify().await;
        assert!(watcher.is_plugged_in());

        probe.set_missing();
        assert!(!watcher.is_plugged_in());

        watcher.check_and_notify().await;
        assert_eq!(emitter.plugged_sequence(), vec![false]);
    }

    #[tokio::test(start_paused = true)]
    async fn settle_delay_precedes_announcement() {
        let probe = FakeProbe::new(false);
        let emitter = RecordingEmitter::new();
        let watcher = test_watcher(probe.clone(), emitter.clone(), &Config::default());

        watcher.check_and_notify().await;
        probe.set_plugged(true);

        let task = {
            let watcher = watcher.clone();
            tokio::spawn(async move { watcher.check_and_notify().await })
        };
        tokio::task::yield_now().await;

        // Change detected but still inside the settle window
        assert!(emitter.plugged_sequence().is_empty());

        time::advance(Duration::from_millis(100)).await;
        task.await.expect("check task");

        assert_eq!(emitter.plugged_sequence(), vec![true]);
    }

    #[tokio::test(start_paused = true)]
    async fn polling_loop_detects_changes() {
        let probe = FakeProbe::new(true);
        let emitter = RecordingEmitter::new();
        let watcher = test_watcher(probe.clone(), emitter.clone(), &Config::default());

        watcher.clone().start();

        // Let the loop prime and idle through a couple of polls
        time::sleep(Duration::from_millis(2500)).await;
        assert!(emitter.plugged_sequence().is_empty());

        probe.set_plugged(false);
        // One poll interval plus the settle delay
        time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(emitter.plugged_sequence(), vec![false]);

        watcher.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_check_runs_outside_poll_cadence() {
        let probe = FakeProbe::new(true);
        let emitter = RecordingEmitter::new();
        let watcher = test_watcher(probe.clone(), emitter.clone(), &Config::default());

        watcher.clone().start();
        time::sleep(Duration::from_millis(10)).await;

        probe.set_plugged(false);
        watcher.trigger_check();

        // Well under the 1s poll interval: settle delay plus slack
        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(emitter.plugged_sequence(), vec![false]);

        watcher.shutdown();
    }
}
