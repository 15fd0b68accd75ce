//! Quarter-turn rotated drawing canvas.
//!
//! [`RotatedCanvas`] wraps a `DrawTarget` and maps every pixel through an
//! exact quarter turn of a view rectangle. Drawing code works in logical
//! (unrotated) coordinates where the ruler axis always runs along `x`; the
//! canvas lands each pixel at its rotated physical position, text glyphs
//! included. For sideways rotations the logical rectangle has the view's
//! width and height swapped, so the mapping is a bijection between the
//! logical and physical rectangles and content stays centered without any
//! translation correction.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::rotation::RotationAngle;

/// `DrawTarget` adapter that rotates all drawing by a quarter turn within a
/// view rectangle. Pixels outside the logical rectangle are clipped.
pub struct RotatedCanvas<'a, D> {
    target: &'a mut D,
    view: Rectangle,
    rotation: RotationAngle,
}

impl<'a, D> RotatedCanvas<'a, D> {
    /// Wrap `target`, rotating within `view` (in target coordinates).
    pub fn new(target: &'a mut D, view: Rectangle, rotation: RotationAngle) -> Self {
        Self {
            target,
            view,
            rotation,
        }
    }

    /// Logical drawing size: the view size, with width and height swapped
    /// for sideways rotations.
    pub fn logical_size(&self) -> Size {
        let size = self.view.size;
        if self.rotation.is_sideways() {
            Size::new(size.height, size.width)
        } else {
            size
        }
    }

}

/// Map a logical point to its physical location relative to the view origin.
/// Returns `None` for points outside the logical rectangle.
fn map_point(rotation: RotationAngle, view_size: Size, p: Point) -> Option<Point> {
    let pw = view_size.width as i32;
    let ph = view_size.height as i32;

    let (lw, lh) = if rotation.is_sideways() {
        (ph, pw)
    } else {
        (pw, ph)
    };

    if p.x < 0 || p.y < 0 || p.x >= lw || p.y >= lh {
        return None;
    }

    let mapped = match rotation {
        RotationAngle::Deg0 => p,
        RotationAngle::Deg90 => Point::new(pw - 1 - p.y, p.x),
        RotationAngle::Deg180 => Point::new(pw - 1 - p.x, ph - 1 - p.y),
        RotationAngle::Deg270 => Point::new(p.y, ph - 1 - p.x),
    };

    Some(mapped)
}

impl<D> OriginDimensions for RotatedCanvas<'_, D> {
    fn size(&self) -> Size {
        self.logical_size()
    }
}

impl<D: DrawTarget> DrawTarget for RotatedCanvas<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let rotation = self.rotation;
        let view_size = self.view.size;
        let origin = self.view.top_left;

        self.target
            .draw_iter(pixels.into_iter().filter_map(|Pixel(p, color)| {
                map_point(rotation, view_size, p).map(|mapped| Pixel(mapped + origin, color))
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const VIEW: Size = Size::new(8, 6);

    fn map(rotation: RotationAngle, p: Point) -> Option<Point> {
        map_point(rotation, VIEW, p)
    }

    #[test]
    fn test_identity_at_zero() {
        assert_eq!(map(RotationAngle::Deg0, Point::new(3, 2)), Some(Point::new(3, 2)));
    }

    #[test]
    fn test_corner_mapping_quarter_turn() {
        // Logical space for 90 degrees is 6x8; its origin lands at the
        // physical top-right corner, and logical x runs down the screen.
        assert_eq!(map(RotationAngle::Deg90, Point::new(0, 0)), Some(Point::new(7, 0)));
        assert_eq!(map(RotationAngle::Deg90, Point::new(5, 0)), Some(Point::new(7, 5)));
        assert_eq!(map(RotationAngle::Deg90, Point::new(0, 7)), Some(Point::new(0, 0)));
        assert_eq!(map(RotationAngle::Deg90, Point::new(5, 7)), Some(Point::new(0, 5)));
        // 270 degrees is the inverse quarter turn.
        assert_eq!(map(RotationAngle::Deg270, Point::new(0, 0)), Some(Point::new(0, 5)));
        assert_eq!(map(RotationAngle::Deg270, Point::new(5, 7)), Some(Point::new(7, 0)));
    }

    #[test]
    fn test_half_turn_is_involution() {
        for x in 0..8 {
            for y in 0..6 {
                let p = Point::new(x, y);
                let once = map(RotationAngle::Deg180, p).unwrap();
                let twice = map(RotationAngle::Deg180, once).unwrap();
                assert_eq!(twice, p);
            }
        }
    }

    #[test]
    fn test_mapping_is_bijective_on_view() {
        for rotation in [
            RotationAngle::Deg0,
            RotationAngle::Deg90,
            RotationAngle::Deg180,
            RotationAngle::Deg270,
        ] {
            let (lw, lh) = if rotation.is_sideways() { (6, 8) } else { (8, 6) };
            let mut seen = HashSet::new();
            for x in 0..lw {
                for y in 0..lh {
                    let mapped = map(rotation, Point::new(x, y)).unwrap();
                    assert!(mapped.x >= 0 && mapped.x < 8, "{:?}", mapped);
                    assert!(mapped.y >= 0 && mapped.y < 6, "{:?}", mapped);
                    assert!(seen.insert(mapped), "duplicate target {:?}", mapped);
                }
            }
            assert_eq!(seen.len(), 48);
        }
    }

    #[test]
    fn test_out_of_bounds_clipped() {
        assert_eq!(map(RotationAngle::Deg0, Point::new(8, 0)), None);
        assert_eq!(map(RotationAngle::Deg0, Point::new(-1, 0)), None);
        // Sideways logical space is 6 wide.
        assert_eq!(map(RotationAngle::Deg90, Point::new(6, 0)), None);
        assert_eq!(map(RotationAngle::Deg90, Point::new(0, 8)), None);
    }
}
