//! Rotate control for the ruler.
//!
//! A touch button whose arrow icon spins together with the ruler, so the
//! control always shows the current rotation. The icon is a handful of line
//! segments drawn in logical coordinates and turned through the same
//! [`RotatedCanvas`] the ruler itself uses.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::rotation::RotationAngle;
use crate::ui::canvas::RotatedCanvas;
use crate::ui::core::{Action, Drawable, TouchEvent, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{
    COLOR_BUTTON_BORDER, COLOR_BUTTON_FACE, COLOR_BUTTON_FACE_PRESSED, COLOR_BUTTON_ICON,
};

/// Edge length of the (square) rotate button.
pub const ROTATE_BUTTON_SIZE_PX: u32 = 48;

/// Corner radius of the button face.
const BORDER_RADIUS_PX: u32 = 8;

/// Stroke width of the icon lines.
const ICON_STROKE_PX: u32 = 2;

/// Button state
#[derive(Debug, Clone, Copy, PartialEq)]
enum ButtonState {
    Normal,
    Pressed,
}

/// The rotation toggle button.
///
/// Pressing it yields [`Action::Rotate`]; the owning page applies the
/// rotation and calls [`set_icon_rotation`](Self::set_icon_rotation) so the
/// icon matches the ruler.
pub struct RotateButton {
    bounds: Rectangle,
    state: ButtonState,
    icon_rotation: RotationAngle,
    dirty: bool,
}

impl RotateButton {
    /// Create a rotate button with the given (square) bounds.
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            state: ButtonState::Normal,
            icon_rotation: RotationAngle::Deg0,
            dirty: true,
        }
    }

    /// Spin the icon to the given quarter turn.
    pub fn set_icon_rotation(&mut self, rotation: RotationAngle) {
        if self.icon_rotation != rotation {
            self.icon_rotation = rotation;
            self.dirty = true;
        }
    }

    /// Current icon rotation.
    pub fn icon_rotation(&self) -> RotationAngle {
        self.icon_rotation
    }

    fn face_color(&self) -> Rgb565 {
        match self.state {
            ButtonState::Normal => COLOR_BUTTON_FACE,
            ButtonState::Pressed => COLOR_BUTTON_FACE_PRESSED,
        }
    }

    /// Icon segments in logical coordinates: three sides of an open square
    /// with an arrowhead on the trailing end.
    fn icon_segments(&self) -> [Line; 5] {
        let side = self
            .bounds
            .size
            .width
            .min(self.bounds.size.height) as i32;
        let c = side / 2;
        let r = side / 4;
        let head = r / 2;

        [
            Line::new(Point::new(c - r, c + r), Point::new(c - r, c - r)),
            Line::new(Point::new(c - r, c - r), Point::new(c + r, c - r)),
            Line::new(Point::new(c + r, c - r), Point::new(c + r, c)),
            Line::new(Point::new(c + r, c), Point::new(c + r - head, c - head)),
            Line::new(Point::new(c + r, c), Point::new(c + r + head, c - head)),
        ]
    }
}

impl Drawable for RotateButton {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let corner = Size::new(BORDER_RADIUS_PX, BORDER_RADIUS_PX);
        let face_style = PrimitiveStyle::with_fill(self.face_color());
        let border_style = PrimitiveStyle::with_stroke(COLOR_BUTTON_BORDER, 1);

        RoundedRectangle::with_equal_corners(self.bounds, corner)
            .into_styled(face_style)
            .draw(display)?;
        RoundedRectangle::with_equal_corners(self.bounds, corner)
            .into_styled(border_style)
            .draw(display)?;

        // The icon spins with the ruler by drawing through the same
        // quarter-turn canvas.
        let mut canvas = RotatedCanvas::new(display, self.bounds, self.icon_rotation);
        let icon_style = PrimitiveStyle::with_stroke(COLOR_BUTTON_ICON, ICON_STROKE_PX);
        for segment in self.icon_segments() {
            segment.into_styled(icon_style).draw(&mut canvas)?;
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

impl Touchable for RotateButton {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: TouchEvent) -> TouchResult {
        match event {
            TouchEvent::Press(point) if self.contains_point(point) => {
                self.state = ButtonState::Pressed;
                self.dirty = true;
                TouchResult::Action(Action::Rotate)
            }
            TouchEvent::Drag(point) => {
                let new_state = if self.contains_point(point) {
                    ButtonState::Pressed
                } else {
                    ButtonState::Normal
                };

                if self.state != new_state {
                    self.state = new_state;
                    self.dirty = true;
                }
                TouchResult::Handled
            }
            _ => TouchResult::NotHandled,
        }
    }
}
