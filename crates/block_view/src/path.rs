//! Outline path: the derived fill-and-stroke geometry of a block.

use crate::geometry::ViewPoint;

/// Fill rule used when rasterising a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRule {
    /// A point is inside if a ray from it crosses the path an odd number of
    /// times. Cutout sub-paths become holes under this rule.
    EvenOdd,
    NonZero,
}

/// One straight-line path command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    MoveTo(ViewPoint),
    LineTo(ViewPoint),
    Close,
}

/// A closed block outline plus zero or more cutout sub-paths.
///
/// Purely derived state: the layout engine rebuilds it whenever the measured
/// block size changes and caches it between rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlinePath {
    fill_rule: FillRule,
    segments: Vec<PathSegment>,
}

impl Default for OutlinePath {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlinePath {
    pub fn new() -> Self {
        Self { fill_rule: FillRule::EvenOdd, segments: Vec::new() }
    }

    /// Drop all segments, keeping the fill rule and the allocation.
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.segments.push(PathSegment::MoveTo(ViewPoint::new(x, y)));
    }

    pub fn line_to(&mut self, x: i32, y: i32) {
        self.segments.push(PathSegment::LineTo(ViewPoint::new(x, y)));
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of disjoint sub-paths (one per `MoveTo`).
    pub fn subpath_count(&self) -> usize {
        self.segments.iter().filter(|s| matches!(s, PathSegment::MoveTo(_))).count()
    }

    /// Target of the most recent `MoveTo`/`LineTo`, if any.
    pub fn current_point(&self) -> Option<ViewPoint> {
        self.segments.iter().rev().find_map(|s| match s {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
            PathSegment::Close => None,
        })
    }
}
