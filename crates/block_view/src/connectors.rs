//! Connector notch geometry and path emission.
//!
//! Each emitter appends straight segments for one connector to an
//! in-progress outline path, anchored at a point on the block perimeter.
//! The caller walks the perimeter clockwise; every emitter leaves the
//! current point back on the edge it started from so the walk can continue
//! with a plain line.

use crate::path::OutlinePath;

/// Distance from a block corner to the near edge of a connector, in view px.
pub const CONNECTOR_OFFSET: i32 = 20;
/// Length of a connector along the block edge it sits on.
pub const CONNECTOR_SIZE_PARALLEL: i32 = 40;
/// Depth of a connector perpendicular to the block edge it sits on.
pub const CONNECTOR_SIZE_PERPENDICULAR: i32 = 20;
/// Minimum width reserved for a statement input row beyond its fields.
pub const STATEMENT_INPUT_MINIMUM_WIDTH: i32 = 40;
/// Vertical margin reserved below a statement input row in external layout.
pub const STATEMENT_INPUT_BOTTOM_HEIGHT: i32 = 20;
/// Minimum width of the hole cut out for an inline value input.
pub const MIN_INLINE_CUTOUT_WIDTH: i32 = CONNECTOR_SIZE_PARALLEL;
/// Minimum height of the hole cut out for an inline value input. The hole
/// must span the socket on its left edge.
pub const MIN_INLINE_CUTOUT_HEIGHT: i32 = CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL;

/// Notch dipping into the top edge. `(x, y)` is the block's top-left corner;
/// the walk continues rightward along the top edge.
pub fn add_previous_connector(path: &mut OutlinePath, x: i32, y: i32) {
    path.line_to(x + CONNECTOR_OFFSET, y);
    path.line_to(x + CONNECTOR_OFFSET, y + CONNECTOR_SIZE_PERPENDICULAR);
    path.line_to(x + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL, y + CONNECTOR_SIZE_PERPENDICULAR);
    path.line_to(x + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL, y);
}

/// Notch protruding below the bottom edge. `(x, y)` is the block's
/// bottom-left corner; segments are emitted right-to-left to match the
/// clockwise walk along the bottom edge.
pub fn add_next_connector(path: &mut OutlinePath, x: i32, y: i32) {
    path.line_to(x + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL, y);
    path.line_to(x + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL, y + CONNECTOR_SIZE_PERPENDICULAR);
    path.line_to(x + CONNECTOR_OFFSET, y + CONNECTOR_SIZE_PERPENDICULAR);
    path.line_to(x + CONNECTOR_OFFSET, y);
}

/// Socket cut into the right edge at an input row. `(x, y)` is the top of
/// the row on the right edge; the walk continues downward.
pub fn add_value_input_connector(path: &mut OutlinePath, x: i32, y: i32) {
    path.line_to(x, y + CONNECTOR_OFFSET);
    path.line_to(x - CONNECTOR_SIZE_PERPENDICULAR, y + CONNECTOR_OFFSET);
    path.line_to(x - CONNECTOR_SIZE_PERPENDICULAR, y + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL);
    path.line_to(x, y + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL);
}

/// Deep cutout wrapping a nested statement chain. `(x, y)` is the top of the
/// statement row on the right edge; `x_offset` is where the cutout's inner
/// edge sits (past the input's field column) and `connector_height` is the
/// connected chain's total height. The inner top edge carries a
/// previous-style notch for the nested chain to latch onto.
pub fn add_statement_input_connector(
    path: &mut OutlinePath,
    x: i32,
    y: i32,
    x_offset: i32,
    connector_height: i32,
) {
    path.line_to(x, y);
    path.line_to(x_offset + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL, y);
    path.line_to(
        x_offset + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL,
        y + CONNECTOR_SIZE_PERPENDICULAR,
    );
    path.line_to(x_offset + CONNECTOR_OFFSET, y + CONNECTOR_SIZE_PERPENDICULAR);
    path.line_to(x_offset + CONNECTOR_OFFSET, y);
    path.line_to(x_offset, y);
    path.line_to(x_offset, y + connector_height);
    path.line_to(x, y + connector_height);
}

/// Tab protruding from the left edge. `(x, y)` is the block's top-left
/// corner; segments are emitted bottom-to-top to match the clockwise walk up
/// the left edge.
pub fn add_output_connector(path: &mut OutlinePath, x: i32, y: i32) {
    path.line_to(x, y + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL);
    path.line_to(x - CONNECTOR_SIZE_PERPENDICULAR, y + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL);
    path.line_to(x - CONNECTOR_SIZE_PERPENDICULAR, y + CONNECTOR_OFFSET);
    path.line_to(x, y + CONNECTOR_OFFSET);
}

/// Closed rectangular sub-path with a value socket on its left edge: the
/// even-odd hole where an inline value child visually sits. `(x, y)` is the
/// hole's top-left corner.
pub fn add_inline_value_cutout(path: &mut OutlinePath, x: i32, y: i32, width: i32, height: i32) {
    path.move_to(x, y);
    path.line_to(x + width, y);
    path.line_to(x + width, y + height);
    path.line_to(x, y + height);
    path.line_to(x, y + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL);
    path.line_to(x - CONNECTOR_SIZE_PERPENDICULAR, y + CONNECTOR_OFFSET + CONNECTOR_SIZE_PARALLEL);
    path.line_to(x - CONNECTOR_SIZE_PERPENDICULAR, y + CONNECTOR_OFFSET);
    path.line_to(x, y + CONNECTOR_OFFSET);
    path.close();
}
