//! Core page abstraction for the UI page system.
//!
//! [`Page`] defines the lifecycle, rendering, and interaction contract for a
//! screen. The host calls these methods in a well-defined order each frame:
//!
//! 1. **`on_activate`** — once, when the page becomes the active page.
//! 2. **`handle_touch`** — when a touch event targets this page.
//! 3. **`update`** — once per frame to advance internal state.
//! 4. **`draw_page`** — when `is_dirty()` is true.
//! 5. **`on_deactivate`** — once, when navigating away from the page.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{Action, PageId, TouchEvent};

/// Trait that all navigable UI pages must implement.
pub trait Page {
    /// Unique identifier used for navigation and lookup.
    fn id(&self) -> PageId;

    /// Human-readable title (may appear in headers or debug logs).
    fn title(&self) -> &str;

    /// Called once when this page becomes the active page.
    fn on_activate(&mut self) {}

    /// Called once when this page is no longer the active page.
    fn on_deactivate(&mut self) {}

    /// Process a touch event and optionally return an [`Action`].
    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action>;

    /// Advance per-frame state (animations, timers, etc.).
    fn update(&mut self);

    /// Render the entire page to the given display target.
    fn draw_page<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Bounding rectangle of this page (typically the full screen).
    fn bounds(&self) -> Rectangle;

    /// Whether the page has regions that need redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the page to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}
