//! UI components for the ruler application.

mod rotate_button;
mod ruler;

pub use rotate_button::{ROTATE_BUTTON_SIZE_PX, RotateButton};
pub use ruler::{RulerPadding, RulerView, ViewError};
