//! The ruler view component.
//!
//! Owns the rotation state and derived unit metrics, and paints the
//! centimeter and inch scales on every draw. Painting is discard-and-redraw:
//! the paper background is filled first, then ticks and labels are stroked
//! on top. All drawing happens in logical coordinates where the ruler axis
//! runs along `x`; a [`RotatedCanvas`] lands the pixels at their rotated
//! positions.

use core::fmt::Write as _;

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::String;
use log::{debug, info, warn};
use thiserror_no_std::Error;

use crate::config::RulerConfig;
use crate::display::DisplayMetrics;
use crate::rotation::{RotationAngle, normalize_degrees};
use crate::state::ViewState;
use crate::ticks::{TickKind, TickRun};
use crate::ui::canvas::RotatedCanvas;
use crate::ui::core::{Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{COLOR_INK, COLOR_PAPER};
use crate::units::UnitMetrics;

/// Unit label drawn next to the centimeter zero tick.
const CENTIMETER_UNIT_LABEL: &str = "cm";

/// Unit label drawn next to the inch zero tick.
const INCH_UNIT_LABEL: &str = "in";

/// Gap between the long tick end and its number label, in pixels.
const LABEL_GAP_PX: i32 = 2;

/// Capacity for a formatted tick number.
const MAX_LABEL_LENGTH: usize = 8;

/// Error types for ruler view construction
#[derive(Debug, Error)]
pub enum ViewError {
    /// The configured rotation does not normalize to a quarter turn.
    #[error("unsupported rotation {degrees}; only quarter turns are drawable")]
    UnsupportedRotation {
        /// The rotation as configured
        degrees: i32,
    },
}

/// Padding between the view bounds and the drawn content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulerPadding {
    /// Top padding in pixels
    pub top: u32,
    /// Right padding in pixels
    pub right: u32,
    /// Bottom padding in pixels
    pub bottom: u32,
    /// Left padding in pixels
    pub left: u32,
}

impl RulerPadding {
    /// Create uniform padding on all sides
    pub const fn uniform(padding: u32) -> Self {
        Self {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        }
    }
}

/// Round a non-negative pixel position to the nearest integer.
fn px(value: f32) -> i32 {
    (value + 0.5) as i32
}

/// The ruler drawing surface.
///
/// Construct with validated [`DisplayMetrics`] and a [`RulerConfig`]; the
/// host drives rotation through [`rotate_quarter_turn`](Self::rotate_quarter_turn)
/// or [`set_rotate_degree`](Self::set_rotate_degree) and persists the
/// rotation across recreation with [`save_state`](Self::save_state) /
/// [`restore_state`](Self::restore_state).
pub struct RulerView {
    bounds: Rectangle,
    config: RulerConfig,
    display: DisplayMetrics,
    rotation: RotationAngle,
    metrics: UnitMetrics,
    padding: RulerPadding,
    dirty: bool,
}

impl RulerView {
    /// Create a ruler view over `bounds`.
    pub fn new(
        bounds: Rectangle,
        config: RulerConfig,
        display: DisplayMetrics,
    ) -> Result<Self, ViewError> {
        let rotation = RotationAngle::from_degrees(config.rotate_degree).ok_or(
            ViewError::UnsupportedRotation {
                degrees: config.rotate_degree,
            },
        )?;

        Ok(Self {
            bounds,
            config,
            display,
            rotation,
            metrics: UnitMetrics::derive(&display, rotation),
            padding: RulerPadding::default(),
            dirty: true,
        })
    }

    /// Set the content padding.
    pub fn with_padding(mut self, padding: RulerPadding) -> Self {
        self.padding = padding;
        self.dirty = true;
        self
    }

    /// Current rotation in normalized degrees.
    pub fn rotate_degree(&self) -> i32 {
        self.rotation.degrees()
    }

    /// Current rotation as a quarter turn.
    pub fn rotation(&self) -> RotationAngle {
        self.rotation
    }

    /// Currently derived unit metrics.
    pub fn unit_metrics(&self) -> &UnitMetrics {
        &self.metrics
    }

    /// Set the rotation in degrees.
    ///
    /// A value that normalizes to the current rotation is a no-op: metrics
    /// are not re-derived and no redraw is scheduled. A value that is not a
    /// quarter turn is ignored with a warning, since the toggle state
    /// machine only ever produces multiples of 90.
    pub fn set_rotate_degree(&mut self, degrees: i32) {
        let normalized = normalize_degrees(degrees);
        if normalized == self.rotation.degrees() {
            return;
        }

        match RotationAngle::from_degrees(normalized) {
            Some(rotation) => {
                self.rotation = rotation;
                self.metrics = UnitMetrics::derive(&self.display, rotation);
                self.dirty = true;
                debug!("ruler rotation set to {} deg", normalized);
            }
            None => warn!("ignoring unsupported ruler rotation {} deg", degrees),
        }
    }

    /// Rotate one quarter turn clockwise (the host toggle action).
    pub fn rotate_quarter_turn(&mut self) {
        self.set_rotate_degree(self.rotation.plus_quarter_turn().degrees());
    }

    /// Replace the display metrics, re-deriving units.
    ///
    /// Hosts call this when the device orientation changes, since pixel
    /// density may differ per axis.
    pub fn set_display_metrics(&mut self, display: DisplayMetrics) {
        self.display = display;
        self.metrics = UnitMetrics::derive(&display, self.rotation);
        self.dirty = true;
        info!("display metrics updated: {:?}", display.orientation());
    }

    /// Capture the view state for persistence across recreation.
    pub fn save_state(&self) -> ViewState {
        ViewState {
            rotate_degree: self.rotation.degrees() as u16,
        }
    }

    /// Restore a previously captured view state.
    ///
    /// Always schedules a redraw; a snapshot carrying an angle that is not a
    /// quarter turn leaves the construction-time rotation in effect.
    pub fn restore_state(&mut self, state: ViewState) {
        match RotationAngle::from_degrees(state.rotate_degree as i32) {
            Some(rotation) => {
                self.rotation = rotation;
                self.metrics = UnitMetrics::derive(&self.display, rotation);
                debug!("restored ruler rotation {} deg", rotation.degrees());
            }
            None => warn!(
                "ignoring snapshot with unsupported rotation {} deg",
                state.rotate_degree
            ),
        }
        self.dirty = true;
    }

    fn tick_length(&self, kind: TickKind) -> f32 {
        match kind {
            TickKind::Long => self.metrics.long_tick,
            TickKind::Medium => self.metrics.medium_tick,
            TickKind::Short => self.metrics.short_tick,
        }
    }

    /// Content length along the ruler axis for a given logical width.
    fn content_length(&self, logical_width: u32) -> f32 {
        logical_width.saturating_sub(self.padding.left + self.padding.right) as f32
    }

    /// Centimeter scale along the top edge of the logical rectangle.
    fn draw_centimeter_scale<T: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut T,
        content_length: f32,
    ) -> Result<(), T::Error> {
        let m = &self.metrics;
        let stroke = PrimitiveStyle::with_stroke(COLOR_INK, 1);
        let number_style = MonoTextStyle::new(m.number_font, COLOR_INK);
        let unit_style = MonoTextStyle::new(m.unit_font, COLOR_INK);
        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let left_aligned = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Top)
            .build();

        let top = self.padding.top as i32;
        let origin = self.padding.left as f32 + m.zero_shift;
        let label_y = top + px(m.long_tick) + LABEL_GAP_PX;

        for tick in TickRun::centimeters(m.one_millimeter, content_length) {
            let x = px(origin + tick.offset);
            let length = px(self.tick_length(tick.kind));

            Line::new(Point::new(x, top), Point::new(x, top + length))
                .into_styled(stroke)
                .draw(target)?;

            if let Some(centimeters) = tick.major {
                let mut label = String::<MAX_LABEL_LENGTH>::new();
                let _ = write!(label, "{}", centimeters);
                Text::with_text_style(&label, Point::new(x, label_y), number_style, centered)
                    .draw(target)?;

                if tick.index == 0 {
                    let unit_x = px(self.padding.left as f32 + m.zero_shift * 1.6 + tick.offset);
                    Text::with_text_style(
                        CENTIMETER_UNIT_LABEL,
                        Point::new(unit_x, label_y),
                        unit_style,
                        left_aligned,
                    )
                    .draw(target)?;
                }
            }
        }

        Ok(())
    }

    /// Inch scale along the bottom edge of the logical rectangle, mirrored
    /// so its ticks grow upward.
    fn draw_inch_scale<T: DrawTarget<Color = Rgb565>>(
        &self,
        target: &mut T,
        logical_height: u32,
        content_length: f32,
    ) -> Result<(), T::Error> {
        let m = &self.metrics;
        let stroke = PrimitiveStyle::with_stroke(COLOR_INK, 1);
        let number_style = MonoTextStyle::new(m.number_font, COLOR_INK);
        let unit_style = MonoTextStyle::new(m.unit_font, COLOR_INK);
        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Bottom)
            .build();
        let left_aligned = TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Bottom)
            .build();

        let base = logical_height as i32 - self.padding.bottom as i32 - 1;
        let origin = self.padding.left as f32 + m.zero_shift;
        let label_y = base - px(m.long_tick) - LABEL_GAP_PX;

        for tick in TickRun::inches(m.one_inch, content_length) {
            let x = px(origin + tick.offset);
            let length = px(self.tick_length(tick.kind));

            Line::new(Point::new(x, base - length), Point::new(x, base))
                .into_styled(stroke)
                .draw(target)?;

            if let Some(inches) = tick.major {
                let mut label = String::<MAX_LABEL_LENGTH>::new();
                let _ = write!(label, "{}", inches);
                Text::with_text_style(&label, Point::new(x, label_y), number_style, centered)
                    .draw(target)?;

                if tick.index == 0 {
                    let unit_x = px(self.padding.left as f32 + m.zero_shift * 1.6 + tick.offset);
                    Text::with_text_style(
                        INCH_UNIT_LABEL,
                        Point::new(unit_x, label_y),
                        unit_style,
                        left_aligned,
                    )
                    .draw(target)?;
                }
            }
        }

        Ok(())
    }
}

impl Drawable for RulerView {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut canvas = RotatedCanvas::new(display, self.bounds, self.rotation);
        let logical = canvas.logical_size();

        // Discard-and-redraw: fill the paper, then stroke everything on top.
        Rectangle::new(Point::zero(), logical)
            .into_styled(PrimitiveStyle::with_fill(COLOR_PAPER))
            .draw(&mut canvas)?;

        let content_length = self.content_length(logical.width);

        if self.config.show_centimeter {
            self.draw_centimeter_scale(&mut canvas, content_length)?;
        }

        if self.config.show_inch {
            self.draw_inch_scale(&mut canvas, logical.height, content_length)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for RulerView {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    // The ruler surface itself is inert; only the host's rotate control
    // mutates it.
    fn handle_touch(&mut self, _event: TouchEvent) -> TouchResult {
        TouchResult::NotHandled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Orientation;
    use crate::state::VIEW_STATE_BUF_LEN;
    use embedded_graphics::mock_display::MockDisplay;

    fn test_view(rotate_degree: i32) -> RulerView {
        let display = DisplayMetrics::new(160.0, 160.0, Orientation::Portrait).unwrap();
        let config = RulerConfig {
            rotate_degree,
            ..RulerConfig::default()
        };
        let bounds = Rectangle::new(Point::zero(), Size::new(320, 480));
        RulerView::new(bounds, config, display).unwrap()
    }

    #[test]
    fn test_new_view_is_dirty() {
        assert!(test_view(0).is_dirty());
    }

    #[test]
    fn test_non_quarter_config_rejected() {
        let display = DisplayMetrics::new(160.0, 160.0, Orientation::Portrait).unwrap();
        let config = RulerConfig {
            rotate_degree: 45,
            ..RulerConfig::default()
        };
        let bounds = Rectangle::new(Point::zero(), Size::new(320, 480));
        assert!(RulerView::new(bounds, config, display).is_err());
    }

    #[test]
    fn test_set_rotation_idempotence_short_circuit() {
        let mut view = test_view(90);
        view.mark_clean();

        view.set_rotate_degree(90);
        assert!(!view.is_dirty());

        // Equivalent modulo 360 is also a no-op.
        view.set_rotate_degree(450);
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_set_rotation_schedules_redraw() {
        let mut view = test_view(0);
        view.mark_clean();
        view.set_rotate_degree(90);
        assert!(view.is_dirty());
        assert_eq!(view.rotate_degree(), 90);
    }

    #[test]
    fn test_quarter_turn_walk() {
        let mut view = test_view(0);
        let mut seen = [0; 4];
        for slot in seen.iter_mut() {
            view.rotate_quarter_turn();
            *slot = view.rotate_degree();
        }
        assert_eq!(seen, [90, 180, 270, 0]);
    }

    #[test]
    fn test_rotation_swaps_density_axis() {
        let display = DisplayMetrics::new(100.0, 200.0, Orientation::Portrait).unwrap();
        let bounds = Rectangle::new(Point::zero(), Size::new(320, 480));
        let mut view = RulerView::new(bounds, RulerConfig::default(), display).unwrap();

        assert_eq!(view.unit_metrics().one_inch, 200.0);
        view.set_rotate_degree(90);
        assert_eq!(view.unit_metrics().one_inch, 100.0);
        view.set_rotate_degree(180);
        assert_eq!(view.unit_metrics().one_inch, 200.0);
    }

    #[test]
    fn test_orientation_change_rederives_metrics() {
        let display = DisplayMetrics::new(100.0, 200.0, Orientation::Portrait).unwrap();
        let bounds = Rectangle::new(Point::zero(), Size::new(320, 480));
        let mut view = RulerView::new(bounds, RulerConfig::default(), display).unwrap();
        view.mark_clean();

        view.set_display_metrics(display.with_orientation(Orientation::Landscape));
        assert_eq!(view.unit_metrics().one_inch, 100.0);
        assert!(view.is_dirty());
    }

    #[test]
    fn test_saved_state_round_trip() {
        let source = test_view(270);
        let mut buf = [0u8; VIEW_STATE_BUF_LEN];
        let bytes = source.save_state().write_to(&mut buf).unwrap();

        let mut fresh = test_view(0);
        fresh.mark_clean();
        fresh.restore_state(ViewState::read_from(bytes).unwrap());

        assert_eq!(fresh.rotate_degree(), 270);
        assert!(fresh.is_dirty());
    }

    #[test]
    fn test_restore_with_bad_angle_keeps_rotation() {
        let mut view = test_view(90);
        view.mark_clean();
        view.restore_state(ViewState { rotate_degree: 45 });
        assert_eq!(view.rotate_degree(), 90);
        // Restore still schedules a redraw.
        assert!(view.is_dirty());
    }

    #[test]
    fn test_draw_paints_paper_and_ticks() {
        // 25.4 dpi makes one millimeter exactly one pixel, keeping the
        // geometry easy to predict on the 64x64 mock display.
        let display = DisplayMetrics::new(25.4, 25.4, Orientation::Portrait).unwrap();
        let bounds = Rectangle::new(Point::zero(), Size::new(64, 48));
        let view = RulerView::new(bounds, RulerConfig::default(), display).unwrap();

        let mut mock = MockDisplay::<Rgb565>::new();
        mock.set_allow_overdraw(true);
        Drawable::draw(&view, &mut mock).unwrap();

        // Zero shift equals the glyph width of the smallest ladder font (4),
        // so the zero tick's top pixel sits at x = 4.
        assert_eq!(mock.get_pixel(Point::new(4, 0)), Some(COLOR_INK));
        // Background between ticks stays paper-colored.
        assert_eq!(mock.get_pixel(Point::new(30, 20)), Some(COLOR_PAPER));
    }
}
