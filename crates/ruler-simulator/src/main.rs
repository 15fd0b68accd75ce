//! Desktop simulator for the ruler-rs UI.
//!
//! Renders the ruler page in an SDL2 window via `embedded-graphics-simulator`
//! so the view can be exercised without a device.
//!
//! # Key bindings
//!
//! | Key | Action                                        |
//! |-----|-----------------------------------------------|
//! | R   | Rotate the ruler one quarter turn             |
//! | C   | Simulate a configuration change (recreate the |
//! |     | page with flipped orientation, restore state) |
//! | Q   | Quit                                          |
//!
//! Mouse clicks are forwarded as touch events, so clicking the on-screen
//! rotate button works too.
//!
//! The simulated panel density defaults to 160 dpi on both axes and can be
//! overridden with the `RULER_XDPI` / `RULER_YDPI` environment variables,
//! which is handy for checking the per-axis density swap.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use ruler_core::config::RulerConfig;
use ruler_core::display::{DisplayMetrics, Orientation};
use ruler_core::pages::{Page, RulerPage};
use ruler_core::state::{VIEW_STATE_BUF_LEN, ViewState};
use ruler_core::ui::{TouchEvent, TouchPoint};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Simulated panel width in pixels.
const DISPLAY_WIDTH_PX: u32 = 480;

/// Simulated panel height in pixels.
const DISPLAY_HEIGHT_PX: u32 = 320;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Default simulated density on both axes, the common baseline where one
/// inch is exactly 160 pixels.
const DEFAULT_DPI: f32 = 160.0;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

/// Full-screen bounding rectangle.
fn screen_bounds() -> Rectangle {
    Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX))
}

/// Read a dpi override from the environment, falling back to the default.
fn dpi_from_env(var: &str) -> f32 {
    std::env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_DPI)
}

/// Build display metrics from the environment, bailing out on invalid input.
fn simulated_metrics() -> Option<DisplayMetrics> {
    let xdpi = dpi_from_env("RULER_XDPI");
    let ydpi = dpi_from_env("RULER_YDPI");

    match DisplayMetrics::new(xdpi, ydpi, Orientation::Landscape) {
        Ok(metrics) => Some(metrics),
        Err(err) => {
            error!("invalid simulated density: {}", err);
            None
        }
    }
}

/// Recreate the page the way a host framework does on a configuration
/// change: snapshot the view state, tear the page down, build a new one
/// against the new metrics, and restore the snapshot from bytes.
fn recreate_page(page: &RulerPage, display: DisplayMetrics) -> Option<RulerPage> {
    let mut buf = [0u8; VIEW_STATE_BUF_LEN];
    let snapshot = match page.save_state().write_to(&mut buf) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("failed to snapshot view state: {}", err);
            return None;
        }
    };

    let mut fresh = match RulerPage::new(screen_bounds(), RulerConfig::default(), display) {
        Ok(page) => page,
        Err(err) => {
            error!("failed to recreate page: {}", err);
            return None;
        }
    };

    match ViewState::read_from(snapshot) {
        Ok(state) => fresh.restore_state(state),
        Err(err) => info!("no compatible snapshot, using defaults: {}", err),
    }

    Some(fresh)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting ruler-rs simulator");
    info!(
        "Display: {}x{} (scale {}x)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: R=Rotate  C=ConfigChange  Q=Quit");

    let Some(mut metrics) = simulated_metrics() else {
        return;
    };

    // SDL2 display and window
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Ruler Simulator", &output_settings);

    let mut page = match RulerPage::new(screen_bounds(), RulerConfig::default(), metrics) {
        Ok(page) => page,
        Err(err) => {
            error!("failed to create ruler page: {}", err);
            return;
        }
    };

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    if let Err(err) = page.draw_page(&mut display) {
        error!("draw error: {:?}", err);
    }
    page.mark_clean();
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::R => page.rotate(),
                    Keycode::C => {
                        metrics = metrics.with_orientation(metrics.orientation().flipped());
                        info!(
                            "simulating configuration change to {:?}",
                            metrics.orientation()
                        );
                        if let Some(fresh) = recreate_page(&page, metrics) {
                            page = fresh;
                        }
                    }
                    _ => {}
                },

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    let touch = TouchEvent::Press(TouchPoint::new(
                        point.x.max(0) as u16,
                        point.y.max(0) as u16,
                    ));

                    if let Some(action) = page.handle_touch(touch) {
                        info!("touch -> action {:?}", action);
                    }
                }

                _ => {}
            }
        }

        // --- Page update tick ---------------------------------------------
        page.update();

        // --- Render -------------------------------------------------------
        if page.is_dirty() {
            if let Err(err) = page.draw_page(&mut display) {
                error!("draw error: {:?}", err);
            }
            page.mark_clean();
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
