//! Basic geometry types used by the block layout engine.

/// A mutable 2D point in view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewPoint {
    pub x: i32,
    pub y: i32,
}

impl ViewPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Set both coordinates in place.
    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

/// A simple rectangle for layout geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl LayoutRect {
    pub const ZERO: LayoutRect = LayoutRect { x: 0, y: 0, width: 0, height: 0 };

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Size constraints handed down by the hosting layout system.
///
/// Input rows never wrap on available width, so constraints do not alter
/// measured sizes; they are threaded through the recursion for hosts that
/// track bounded viewports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeasureSpec {
    /// Available width in view pixels; 0 means unbounded.
    pub available_width: i32,
    /// Available height in view pixels; 0 means unbounded.
    pub available_height: i32,
}

impl MeasureSpec {
    pub const UNBOUNDED: MeasureSpec = MeasureSpec { available_width: 0, available_height: 0 };
}
