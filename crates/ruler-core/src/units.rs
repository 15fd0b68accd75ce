//! Real-world unit derivation.
//!
//! Converts the panel's dots-per-inch into pixel lengths for one inch, one
//! millimeter, the three tick sizes, and text sizing. The whole record is
//! recomputed whenever rotation or orientation changes, because the axis the
//! ruler runs along (against the physical screen) changes with them and the
//! panel may report different densities per axis.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{
    FONT_4X6, FONT_5X8, FONT_6X10, FONT_6X13, FONT_7X13, FONT_9X15, FONT_9X18, FONT_10X20,
};

use crate::display::{DisplayMetrics, Orientation};
use crate::rotation::RotationAngle;

/// Millimeters per inch.
pub const MM_PER_INCH: f32 = 25.4;

/// Long tick length (whole centimeters), in millimeters.
pub const LONG_TICK_MM: f32 = 5.0;

/// Medium tick length (half centimeters), in millimeters.
pub const MEDIUM_TICK_MM: f32 = 3.5;

/// Short tick length (millimeter subdivisions), in millimeters.
pub const SHORT_TICK_MM: f32 = 2.5;

/// Target height of the numeric labels, in millimeters.
pub const NUMBER_TEXT_MM: f32 = 3.0;

/// Divisor applied to the number size to get the unit-label size.
pub const UNIT_TEXT_RATIO: f32 = 1.25;

/// Mono fonts ordered by glyph height, used to realise a physical text size.
const FONT_LADDER: &[&MonoFont<'static>] = &[
    &FONT_4X6,
    &FONT_5X8,
    &FONT_6X10,
    &FONT_6X13,
    &FONT_7X13,
    &FONT_9X15,
    &FONT_9X18,
    &FONT_10X20,
];

/// The largest ladder font whose glyph height does not exceed `height_px`.
///
/// Falls back to the smallest font for degenerate targets so text is always
/// renderable.
fn font_for_height(height_px: f32) -> &'static MonoFont<'static> {
    let mut chosen = FONT_LADDER[0];
    for font in FONT_LADDER {
        if font.character_size.height as f32 <= height_px {
            chosen = font;
        }
    }
    chosen
}

/// Pixel lengths for real-world units and text, derived from display
/// density, orientation, and rotation.
///
/// Immutable once derived; the view replaces the whole record on any
/// rotation or orientation change.
#[derive(Debug, Clone, Copy)]
pub struct UnitMetrics {
    /// One inch in pixels along the ruler axis.
    pub one_inch: f32,
    /// One millimeter in pixels along the ruler axis.
    pub one_millimeter: f32,
    /// Long tick length in pixels (centimeter marks).
    pub long_tick: f32,
    /// Medium tick length in pixels (half-centimeter marks).
    pub medium_tick: f32,
    /// Short tick length in pixels (millimeter marks).
    pub short_tick: f32,
    /// Font for the numeric labels.
    pub number_font: &'static MonoFont<'static>,
    /// Font for the `cm`/`in` unit labels.
    pub unit_font: &'static MonoFont<'static>,
    /// Width of the `0` glyph; all tick positions shift right by this so the
    /// zero label is not clipped at the edge.
    pub zero_shift: f32,
    /// Glyph height of the numeric label font.
    pub text_height: f32,
}

impl UnitMetrics {
    /// Derive unit metrics for the current rotation.
    ///
    /// The ruler axis runs along the view's logical width. When the canvas
    /// is unrotated (or half-turned) that axis lies along the device's
    /// vertical in portrait and horizontal in landscape; a sideways rotation
    /// swaps the choice. Picking the density of the physical axis the ticks
    /// actually span keeps them true to size.
    pub fn derive(display: &DisplayMetrics, rotation: RotationAngle) -> Self {
        let one_inch = match display.orientation() {
            Orientation::Portrait => {
                if rotation.is_sideways() {
                    display.xdpi()
                } else {
                    display.ydpi()
                }
            }
            Orientation::Landscape => {
                if rotation.is_sideways() {
                    display.ydpi()
                } else {
                    display.xdpi()
                }
            }
        };

        let one_millimeter = one_inch / MM_PER_INCH;

        let number_font = font_for_height(one_millimeter * NUMBER_TEXT_MM);
        let unit_font = font_for_height(one_millimeter * NUMBER_TEXT_MM / UNIT_TEXT_RATIO);

        Self {
            one_inch,
            one_millimeter,
            long_tick: one_millimeter * LONG_TICK_MM,
            medium_tick: one_millimeter * MEDIUM_TICK_MM,
            short_tick: one_millimeter * SHORT_TICK_MM,
            number_font,
            unit_font,
            zero_shift: number_font.character_size.width as f32,
            text_height: number_font.character_size.height as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn baseline_metrics() -> DisplayMetrics {
        DisplayMetrics::new(160.0, 160.0, Orientation::Portrait).unwrap()
    }

    #[test]
    fn test_baseline_density_millimeter() {
        let units = UnitMetrics::derive(&baseline_metrics(), RotationAngle::Deg0);
        assert_eq!(units.one_inch, 160.0);
        assert!(approx_eq(units.one_millimeter, 6.2992));
    }

    #[test]
    fn test_baseline_density_tick_lengths() {
        let units = UnitMetrics::derive(&baseline_metrics(), RotationAngle::Deg0);
        assert!(approx_eq(units.long_tick, 31.496));
        assert!(approx_eq(units.medium_tick, 22.047));
        assert!(approx_eq(units.short_tick, 15.748));
    }

    #[test]
    fn test_axis_selection_portrait() {
        let display = DisplayMetrics::new(100.0, 200.0, Orientation::Portrait).unwrap();
        assert_eq!(
            UnitMetrics::derive(&display, RotationAngle::Deg0).one_inch,
            200.0
        );
        assert_eq!(
            UnitMetrics::derive(&display, RotationAngle::Deg180).one_inch,
            200.0
        );
        assert_eq!(
            UnitMetrics::derive(&display, RotationAngle::Deg90).one_inch,
            100.0
        );
        assert_eq!(
            UnitMetrics::derive(&display, RotationAngle::Deg270).one_inch,
            100.0
        );
    }

    #[test]
    fn test_axis_selection_landscape() {
        let display = DisplayMetrics::new(100.0, 200.0, Orientation::Landscape).unwrap();
        assert_eq!(
            UnitMetrics::derive(&display, RotationAngle::Deg0).one_inch,
            100.0
        );
        assert_eq!(
            UnitMetrics::derive(&display, RotationAngle::Deg90).one_inch,
            200.0
        );
    }

    #[test]
    fn test_font_selection_at_baseline() {
        // 3 mm at 160 dpi is ~18.9 px: tallest fitting font is 9x18.
        let units = UnitMetrics::derive(&baseline_metrics(), RotationAngle::Deg0);
        assert_eq!(units.number_font.character_size.height, 18);
        assert_eq!(units.text_height, 18.0);
        assert_eq!(units.zero_shift, 9.0);
        // Unit label target is ~15.1 px: 9x15 fits.
        assert_eq!(units.unit_font.character_size.height, 15);
    }

    #[test]
    fn test_font_fallback_for_tiny_density() {
        let display = DisplayMetrics::new(10.0, 10.0, Orientation::Portrait).unwrap();
        let units = UnitMetrics::derive(&display, RotationAngle::Deg0);
        // 3 mm at 10 dpi is ~1.2 px, far below every ladder font; the
        // smallest font is still chosen so labels remain renderable.
        assert_eq!(units.number_font.character_size.height, 6);
    }
}
