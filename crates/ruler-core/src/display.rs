//! Display density metrics supplied by the host.
//!
//! The ruler measures real distance on the physical screen, so it needs the
//! dots-per-inch of the panel along each axis. Some panels report different
//! densities per axis, which is why both are carried and the unit derivation
//! picks one based on orientation and rotation.

use thiserror_no_std::Error;

/// Device orientation as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// The other orientation, used when the host rotates the device.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }
}

/// Error types for display metric validation
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum MetricsError {
    /// A density value is zero, negative, or not finite. A non-positive
    /// density would make the tick loop fail to terminate, so this is
    /// rejected at construction instead.
    #[error("display density must be positive and finite (xdpi: {xdpi}, ydpi: {ydpi})")]
    InvalidDensity {
        /// Horizontal dots per inch as supplied
        xdpi: f32,
        /// Vertical dots per inch as supplied
        ydpi: f32,
    },
}

/// Validated per-axis display density plus current orientation.
///
/// Invariant: both densities are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    xdpi: f32,
    ydpi: f32,
    orientation: Orientation,
}

impl DisplayMetrics {
    /// Create validated display metrics.
    pub fn new(xdpi: f32, ydpi: f32, orientation: Orientation) -> Result<Self, MetricsError> {
        if !(xdpi.is_finite() && ydpi.is_finite()) || xdpi <= 0.0 || ydpi <= 0.0 {
            return Err(MetricsError::InvalidDensity { xdpi, ydpi });
        }

        Ok(Self {
            xdpi,
            ydpi,
            orientation,
        })
    }

    /// Horizontal dots per inch.
    pub fn xdpi(&self) -> f32 {
        self.xdpi
    }

    /// Vertical dots per inch.
    pub fn ydpi(&self) -> f32 {
        self.ydpi
    }

    /// Current device orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The same densities with the orientation flipped, for hosts that
    /// rebuild the view after a device rotation.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}
