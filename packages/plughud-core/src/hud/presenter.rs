//! The HUD fade-in / hold / fade-out state machine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::hud::HudSurface;
use crate::runtime::{TaskSpawner, TokioSpawner};
use crate::state::Config;

/// Drives the transient HUD: show content, fade in, hold, fade out, hide.
///
/// There is no queue. Each [`show`](HudPresenter::show) bumps a generation
/// counter; the animation task it spawns re-checks the counter after every
/// timer step and exits silently once superseded. This is the explicit
/// "cancel-if-present, then schedule" policy: overlapping calls collapse
/// into the latest one and only the final state is displayed. A superseded
/// fade may stop mid-flight; the replacing call resets opacity immediately.
pub struct HudPresenter {
    surface: Arc<dyn HudSurface>,
    spawner: TokioSpawner,
    fade_in: Duration,
    hold: Duration,
    fade_out: Duration,
    frame: Duration,
    /// Current animation generation. Tasks tagged with an older value are
    /// superseded and must not touch the surface.
    generation: Arc<AtomicU64>,
}

impl HudPresenter {
    /// Creates a new `HudPresenter` over the given surface.
    pub fn new(surface: Arc<dyn HudSurface>, spawner: TokioSpawner, config: &Config) -> Self {
        Self {
            surface,
            spawner,
            fade_in: Duration::from_millis(config.fade_in_ms),
            hold: Duration::from_millis(config.hold_ms),
            fade_out: Duration::from_millis(config.fade_out_ms),
            frame: Duration::from_millis(config.frame_interval_ms.max(1)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Presents the HUD for the given power state.
    ///
    /// Synchronously swaps the content, zeroes the opacity, and orders the
    /// window in; the fade cycle then runs as a background task. Any
    /// animation or pending hide from a previous call is superseded.
    pub fn show(&self, plugged: bool) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!(
            "[HudPresenter] show(plugged={}) generation={}",
            plugged,
            generation
        );

        self.surface.set_content(plugged);
        self.surface.set_opacity(0.0);
        self.surface.set_visible(true);

        let surface = Arc::clone(&self.surface);
        let current = Arc::clone(&self.generation);
        let (fade_in, hold, fade_out, frame) = (self.fade_in, self.hold, self.fade_out, self.frame);

        self.spawner.spawn(async move {
            if !fade(&surface, &current, generation, frame, fade_in, 0.0, 1.0).await {
                return;
            }

            tokio::time::sleep(hold).await;
            if current.load(Ordering::SeqCst) != generation {
                return;
            }

            if !fade(&surface, &current, generation, frame, fade_out, 1.0, 0.0).await {
                return;
            }

            surface.set_visible(false);
        });
    }
}

/// Steps the surface opacity from `from` to `to` over `duration`.
///
/// Returns `false` if the animation was superseded before completing. The
/// final step always lands exactly on `to`.
async fn fade(
    surface: &Arc<dyn HudSurface>,
    current: &AtomicU64,
    generation: u64,
    frame: Duration,
    duration: Duration,
    from: f64,
    to: f64,
) -> bool {
    let steps = (duration.as_millis() / frame.as_millis()).max(1) as u32;

    for step in 1..=steps {
        tokio::time::sleep(frame).await;
        if current.load(Ordering::SeqCst) != generation {
            return false;
        }
        let t = f64::from(step) / f64::from(steps);
        surface.set_opacity(from + (to - from) * t);
    }

    true
}
