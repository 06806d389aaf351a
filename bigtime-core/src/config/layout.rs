//! Screen layout for the 144x168 display
//!
//! Geometry is fixed at build time. The renderer keeps its own copy and
//! the watch refers to regions only by slot index.

use crate::glyph::GlyphSize;
use crate::slots::{slot_glyph_size, SLOT_COUNT};

/// Display width in pixels
pub const SCREEN_WIDTH: u16 = 144;

/// Display height in pixels
pub const SCREEN_HEIGHT: u16 = 168;

/// Screen rectangle (origin and size in pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Digit slot regions: two large rows, then the small seconds pair
pub const SLOT_RECTS: [Rect; SLOT_COUNT] = [
    Rect::new(12, 20, 38, 62),
    Rect::new(50, 20, 38, 62),
    Rect::new(12, 86, 38, 62),
    Rect::new(50, 86, 38, 62),
    Rect::new(107, 22, 12, 20),
    Rect::new(120, 22, 12, 20),
];

/// Date text column
pub const STATUS_RECT: Rect = Rect::new(100, 52, 36, 120);

/// Connection icon
pub const CONNECTION_RECT: Rect = Rect::new(104, 128, 12, 17);

/// Battery icon
pub const BATTERY_RECT: Rect = Rect::new(119, 128, 12, 17);

/// Pixel size of a digit glyph
pub const fn glyph_dimensions(size: GlyphSize) -> (u16, u16) {
    match size {
        GlyphSize::Large => (38, 62),
        GlyphSize::Small => (12, 20),
    }
}

/// Region of a slot, `None` for out-of-range slots
pub fn slot_rect(slot: usize) -> Option<Rect> {
    SLOT_RECTS.get(slot).copied()
}

/// Glyph size and region of a slot
pub fn slot_layout(slot: usize) -> Option<(GlyphSize, Rect)> {
    slot_rect(slot).map(|rect| (slot_glyph_size(slot), rect))
}
