//! UI traits, styling, canvas rotation, and components.

pub mod canvas;
pub mod components;
pub mod core;
pub mod styling;

pub use canvas::RotatedCanvas;
pub use components::{RotateButton, RulerView};
pub use self::core::{Action, Drawable, PageId, TouchEvent, TouchPoint, TouchResult, Touchable};
