//! Color definitions for the ruler UI.
//!
//! RGB565 format: red 5 bits, green 6 bits, blue 5 bits. To convert from
//! 8-bit RGB: R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;

/// Ruler paper background - white, like the original
pub const COLOR_PAPER: Rgb565 = Rgb565::new(31, 63, 31);

/// Tick and label ink - black
pub const COLOR_INK: Rgb565 = Rgb565::new(0, 0, 0);

/// Rotate button face - light gray so it reads against the paper
pub const COLOR_BUTTON_FACE: Rgb565 = Rgb565::new(225 >> 3, 228 >> 2, 230 >> 3);

/// Rotate button face while pressed - darkened for touch feedback
pub const COLOR_BUTTON_FACE_PRESSED: Rgb565 = Rgb565::new(180 >> 3, 186 >> 2, 190 >> 3);

/// Rotate button border - medium gray
pub const COLOR_BUTTON_BORDER: Rgb565 = Rgb565::new(120 >> 3, 128 >> 2, 132 >> 3);

/// Rotate button icon strokes - dark gray, close to ink
pub const COLOR_BUTTON_ICON: Rgb565 = Rgb565::new(40 >> 3, 44 >> 2, 46 >> 3);
