//! HUD presentation.
//!
//! This module provides:
//! - [`HudSurface`] trait abstracting the one HUD window
//! - [`HudPresenter`] which drives the fade-in / hold / fade-out cycle
//!
//! The desktop shell implements [`HudSurface`] on top of its window system;
//! tests implement it with a recording fake.

mod presenter;

pub use presenter::HudPresenter;

/// Trait for mutating the visible HUD window.
///
/// All methods are fire-and-forget: a surface that cannot apply an update
/// logs and skips it rather than failing the presenter. The presenter is the
/// only caller and serializes calls per animation generation.
pub trait HudSurface: Send + Sync {
    /// Swaps the visible content (icon + label) to reflect the power state.
    fn set_content(&self, plugged: bool);

    /// Sets the window opacity, in `0.0..=1.0`.
    fn set_opacity(&self, opacity: f64);

    /// Orders the window in or out.
    fn set_visible(&self, visible: bool);
}
