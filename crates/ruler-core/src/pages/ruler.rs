//! The ruler host screen.
//!
//! Owns the ruler view and the rotate control, wires the toggle action, and
//! forwards the persistence contract so the host can carry the rotation
//! across view recreation.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_layout::align::{Align, horizontal, vertical};
use log::info;

use crate::config::RulerConfig;
use crate::display::DisplayMetrics;
use crate::pages::page::Page;
use crate::state::ViewState;
use crate::ui::components::{ROTATE_BUTTON_SIZE_PX, RotateButton, RulerView, ViewError};
use crate::ui::core::{Action, Drawable, PageId, TouchEvent, TouchResult, Touchable};

/// Gap between the rotate button and the screen corner, in pixels.
const BUTTON_MARGIN_PX: i32 = 8;

/// Page hosting the ruler view with its rotate control in the corner.
pub struct RulerPage {
    bounds: Rectangle,
    ruler: RulerView,
    button: RotateButton,
    dirty: bool,
}

impl RulerPage {
    /// Create the page over the full screen bounds.
    pub fn new(
        bounds: Rectangle,
        config: RulerConfig,
        display: DisplayMetrics,
    ) -> Result<Self, ViewError> {
        let ruler = RulerView::new(bounds, config, display)?;

        let button_bounds = Rectangle::new(
            Point::zero(),
            Size::new(ROTATE_BUTTON_SIZE_PX, ROTATE_BUTTON_SIZE_PX),
        )
        .align_to(&bounds, horizontal::Right, vertical::Bottom)
        .translate(Point::new(-BUTTON_MARGIN_PX, -BUTTON_MARGIN_PX));

        let mut button = RotateButton::new(button_bounds);
        button.set_icon_rotation(ruler.rotation());

        Ok(Self {
            bounds,
            ruler,
            button,
            dirty: true,
        })
    }

    /// The host toggle action: rotate the ruler one quarter turn clockwise
    /// and spin the button icon to match.
    pub fn rotate(&mut self) {
        self.ruler.rotate_quarter_turn();
        self.button.set_icon_rotation(self.ruler.rotation());
        self.dirty = true;
        info!("ruler rotated to {} deg", self.ruler.rotate_degree());
    }

    /// Current ruler rotation in normalized degrees.
    pub fn rotate_degree(&self) -> i32 {
        self.ruler.rotate_degree()
    }

    /// Capture the view state for persistence.
    pub fn save_state(&self) -> ViewState {
        self.ruler.save_state()
    }

    /// Restore a snapshot captured before recreation.
    pub fn restore_state(&mut self, state: ViewState) {
        self.ruler.restore_state(state);
        self.button.set_icon_rotation(self.ruler.rotation());
        self.dirty = true;
    }

    /// Forward new display metrics after a device orientation change.
    pub fn set_display_metrics(&mut self, display: DisplayMetrics) {
        self.ruler.set_display_metrics(display);
        self.dirty = true;
    }
}

impl Page for RulerPage {
    fn id(&self) -> PageId {
        PageId::Ruler
    }

    fn title(&self) -> &str {
        "Ruler"
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: TouchEvent) -> Option<Action> {
        match self.button.handle_touch(event) {
            TouchResult::Action(Action::Rotate) => {
                self.rotate();
                Some(Action::Rotate)
            }
            TouchResult::Handled | TouchResult::NotHandled => None,
        }
    }

    fn update(&mut self) {}

    fn draw_page<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.ruler.draw(display)?;
        self.button.draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.ruler.is_dirty() || self.button.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.ruler.mark_clean();
        self.button.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.ruler.mark_dirty();
        self.button.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Orientation;
    use crate::ui::core::TouchPoint;

    fn test_page() -> RulerPage {
        let display = DisplayMetrics::new(160.0, 160.0, Orientation::Landscape).unwrap();
        let bounds = Rectangle::new(Point::zero(), Size::new(480, 320));
        RulerPage::new(bounds, RulerConfig::default(), display).unwrap()
    }

    #[test]
    fn test_button_sits_in_bottom_right_corner() {
        let page = test_page();
        let button = Drawable::bounds(&page.button);
        assert_eq!(
            button.top_left,
            Point::new(
                480 - ROTATE_BUTTON_SIZE_PX as i32 - BUTTON_MARGIN_PX,
                320 - ROTATE_BUTTON_SIZE_PX as i32 - BUTTON_MARGIN_PX
            )
        );
    }

    #[test]
    fn test_touch_on_button_rotates() {
        let mut page = test_page();
        page.mark_clean();

        // Center of the rotate button.
        let touch = TouchEvent::Press(TouchPoint::new(448, 288));
        let action = page.handle_touch(touch);

        assert_eq!(action, Some(Action::Rotate));
        assert_eq!(page.rotate_degree(), 90);
        assert!(page.is_dirty());
    }

    #[test]
    fn test_touch_elsewhere_does_nothing() {
        let mut page = test_page();
        page.mark_clean();

        let action = page.handle_touch(TouchEvent::Press(TouchPoint::new(10, 10)));
        assert_eq!(action, None);
        assert_eq!(page.rotate_degree(), 0);
        assert!(!page.is_dirty());
    }

    #[test]
    fn test_four_touches_return_to_zero() {
        let mut page = test_page();
        for _ in 0..4 {
            page.rotate();
        }
        assert_eq!(page.rotate_degree(), 0);
    }

    #[test]
    fn test_restore_syncs_button_icon() {
        let mut page = test_page();
        page.restore_state(ViewState { rotate_degree: 270 });
        assert_eq!(page.rotate_degree(), 270);
        assert_eq!(
            page.button.icon_rotation(),
            crate::rotation::RotationAngle::Deg270
        );
    }
}
