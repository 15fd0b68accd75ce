//! Tick layout for the ruler scales.
//!
//! Pure geometry: a [`TickRun`] lazily yields every tick that fits the
//! available content length, with its pixel offset, size class, and major
//! label. Painting is done elsewhere; this module never touches a display.

/// Size class of a tick mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Major unit mark (whole centimeter / whole inch), carries a label.
    Long,
    /// Halfway mark.
    Medium,
    /// Minor subdivision mark.
    Short,
}

/// One tick of a scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Minor-unit index along the scale (0-based).
    pub index: u32,
    /// Pixel offset from the scale origin (`index * step`).
    pub offset: f32,
    /// Size class of this tick.
    pub kind: TickKind,
    /// For long ticks, the major-unit number to label it with.
    pub major: Option<u32>,
}

/// Bounded iterator over the ticks of one scale.
///
/// Yields ticks at `index * step` for as long as the offset stays strictly
/// inside `length`. A non-positive step yields nothing, so the iteration
/// always terminates even on degenerate input.
#[derive(Debug, Clone)]
pub struct TickRun {
    step: f32,
    length: f32,
    major_every: u32,
    medium_every: u32,
    index: u32,
}

impl TickRun {
    /// Centimeter scale: millimeter steps, long every 10, medium every 5.
    pub fn centimeters(one_millimeter: f32, content_length: f32) -> Self {
        Self {
            step: one_millimeter,
            length: content_length,
            major_every: 10,
            medium_every: 5,
            index: 0,
        }
    }

    /// Inch scale: eighth-inch steps, long every 8, medium every 4.
    pub fn inches(one_inch: f32, content_length: f32) -> Self {
        Self {
            step: one_inch / 8.0,
            length: content_length,
            major_every: 8,
            medium_every: 4,
            index: 0,
        }
    }

    fn kind_for(&self, index: u32) -> TickKind {
        if index % self.major_every == 0 {
            TickKind::Long
        } else if index % self.medium_every == 0 {
            TickKind::Medium
        } else {
            TickKind::Short
        }
    }
}

impl Iterator for TickRun {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.step <= 0.0 {
            return None;
        }

        let offset = self.index as f32 * self.step;
        if offset >= self.length {
            return None;
        }

        let index = self.index;
        self.index += 1;

        let kind = self.kind_for(index);
        let major = match kind {
            TickKind::Long => Some(index / self.major_every),
            _ => None,
        };

        Some(Tick {
            index,
            offset,
            kind,
            major,
        })
    }
}
