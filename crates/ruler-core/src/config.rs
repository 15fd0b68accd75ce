use serde::{Deserialize, Serialize};

/// Construction-time configuration for the ruler view.
///
/// The host populates this before constructing the view; the core never
/// reads host-framework attribute APIs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulerConfig {
    /// Draw the centimeter scale along the top edge.
    pub show_centimeter: bool,
    /// Draw the inch scale along the bottom edge.
    pub show_inch: bool,
    /// Initial rotation in degrees. Must normalize to a quarter turn.
    pub rotate_degree: i32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            show_centimeter: true,
            show_inch: true,
            rotate_degree: 0,
        }
    }
}
