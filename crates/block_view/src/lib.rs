//! # Block layout engine
//!
//! Measures and positions the typed input slots (dummy, value, statement) of
//! a visual-programming block, recursing into nested child blocks, and
//! produces the closed outline path — with even-odd cutouts for inline value
//! inputs — that the hosting view fills and strokes.
//!
//! The engine is synchronous and request-driven: `measure` walks the block
//! subtree depth-first and must complete before `layout`, which must
//! complete before `render`. All derived state (sizes, origins, path) is
//! recomputed from scratch on every measure pass.

use anyhow::Error;
use block_model::{Block, InputKind};
use log::{debug, trace};
use smallvec::SmallVec;
use workspace_helper::WorkspaceHelper;

pub mod connectors;
pub mod geometry;
pub mod input_view;
pub mod path;
pub mod render;

pub use geometry::{LayoutRect, MeasureSpec, ViewPoint};
pub use input_view::InputView;
pub use path::{FillRule, OutlinePath, PathSegment};
pub use render::{Paint, PaintStyle, RenderSurface};

/// Width of the stroked block outline.
const OUTLINE_STROKE_WIDTH: f32 = 1.0;

/// Lays out one block's inputs and builds its outline path.
///
/// Owns one [`InputView`] per input and a parallel list of layout origins;
/// both lists are resynchronised to the block's input count at the start of
/// every measure pass, so the engine survives input-list mutations between
/// passes without being told about them.
pub struct BlockView {
    helper: WorkspaceHelper,

    input_views: Vec<InputView>,
    input_layout_origins: SmallVec<[ViewPoint; 8]>,

    // Snapshot of the block's layout-relevant flags, refreshed every measure pass.
    inputs_inline: bool,
    has_previous: bool,
    has_next: bool,
    has_output: bool,
    fill_color: u32,

    block_view_size: ViewPoint,
    /// Offset of the block body inside the measured area (room for the
    /// output connector tab).
    layout_margin_left: i32,
    /// Vertical offset at which a chained next block anchors.
    next_block_vertical_offset: i32,
    /// Width of the core block body, without connectors or external children.
    block_width: i32,

    view_rect: LayoutRect,
    draw_path: OutlinePath,
    /// Size the cached path was built for; rebuild only when it changes.
    path_built_for: Option<ViewPoint>,
}

impl BlockView {
    pub fn new(helper: WorkspaceHelper) -> Self {
        Self {
            helper,
            input_views: Vec::new(),
            input_layout_origins: SmallVec::new(),
            inputs_inline: false,
            has_previous: false,
            has_next: false,
            has_output: false,
            fill_color: Block::DEFAULT_COLOR,
            block_view_size: ViewPoint::default(),
            layout_margin_left: 0,
            next_block_vertical_offset: 0,
            block_width: 0,
            view_rect: LayoutRect::ZERO,
            draw_path: OutlinePath::new(),
            path_built_for: None,
        }
    }

    /// Measure the block and all nested children, recording per-input layout
    /// origins and rebuilding the outline path if the measured size changed.
    pub fn measure(&mut self, block: &Block, spec: MeasureSpec) -> ViewPoint {
        self.snapshot_block_flags(block);
        self.sync_input_views(block);
        self.adjust_input_layout_origins_list_size();

        if self.inputs_inline {
            self.measure_inline_inputs(block, spec);
        } else {
            self.measure_external_inputs(block, spec);
        }

        // A chained next block anchors at the content height; the notch
        // extrudes below it.
        self.next_block_vertical_offset = self.block_view_size.y;
        if self.has_next {
            self.block_view_size.y += connectors::CONNECTOR_SIZE_PERPENDICULAR;
        }

        if self.has_output {
            self.layout_margin_left = connectors::CONNECTOR_SIZE_PERPENDICULAR;
            self.block_view_size.x += self.layout_margin_left;
        } else {
            self.layout_margin_left = 0;
        }

        if self.path_built_for != Some(self.block_view_size) {
            self.rebuild_draw_path();
            self.path_built_for = Some(self.block_view_size);
        }

        debug!(
            "block measured: size={}x{} inline={} inputs={}",
            self.block_view_size.x,
            self.block_view_size.y,
            self.inputs_inline,
            self.input_views.len()
        );
        self.block_view_size
    }

    /// Position every input box from the origins computed by `measure`.
    ///
    /// Statement rows always hug the block's left margin; in external mode
    /// every row does, since only the stored y matters when children render
    /// beside the block body.
    pub fn layout(&mut self, bounds: LayoutRect) {
        self.view_rect = bounds;
        let x_left = self.layout_margin_left;
        for i in 0..self.input_views.len() {
            let origin = self.input_layout_origins[i];
            let size = self.input_views[i].measured_size();
            let left = match self.input_views[i].kind() {
                InputKind::Statement => x_left,
                InputKind::Dummy | InputKind::Value if !self.inputs_inline => x_left,
                InputKind::Dummy | InputKind::Value => x_left + origin.x,
            };
            self.input_views[i].layout(LayoutRect::new(left, origin.y, size.x, size.y));
        }
    }

    /// Fill and stroke the cached outline path.
    pub fn render(&self, surface: &mut dyn RenderSurface) -> Result<(), Error> {
        surface.draw_path(&self.draw_path, &Paint::fill(self.fill_color))?;
        surface.draw_path(
            &self.draw_path,
            &Paint::stroke(self.helper.outline_color(), OUTLINE_STROKE_WIDTH),
        )?;
        Ok(())
    }

    /// Measure with inline inputs: rows are packed left-to-right, and a
    /// statement input always occupies a row of its own.
    fn measure_inline_inputs(&mut self, block: &Block, spec: MeasureSpec) {
        let mut row_left = 0;
        let mut row_top = 0;
        let mut row_height = 0;
        let mut max_row_width = 0;

        for (i, input) in block.inputs().iter().enumerate() {
            let input_view = &mut self.input_views[i];
            input_view.measure_fields_and_child(input, true, spec);
            let measured = input_view.measure(spec);
            let is_statement = input.kind() == InputKind::Statement;

            if is_statement {
                // Close out the current row; the statement starts its own.
                row_top += row_height;
                row_height = 0;
                row_left = 0;
            }

            self.input_layout_origins[i].set(row_left, row_top);

            row_height = row_height.max(measured.y);
            row_left += measured.x;

            if is_statement {
                // Room for the wrap connector beyond the statement's fields,
                // then close the row again: statements never share a row.
                max_row_width =
                    max_row_width.max(row_left + connectors::STATEMENT_INPUT_MINIMUM_WIDTH);
                row_left = 0;
                row_top += row_height;
                row_height = 0;
            } else {
                max_row_width = max_row_width.max(row_left);
            }
        }

        // Height of the trailing open row; non-zero unless the final input
        // was a statement.
        row_top += row_height;

        self.block_view_size.x = max_row_width.max(self.helper.min_block_width());
        self.block_width = self.block_view_size.x;
        self.block_view_size.y = row_top.max(self.helper.min_block_height());
    }

    /// Measure with external inputs: two passes. The first finds the widest
    /// field row and widest child; the second aligns every non-statement
    /// field column to that width and stacks rows vertically.
    fn measure_external_inputs(&mut self, block: &Block, spec: MeasureSpec) {
        let mut max_row_width = self.helper.min_block_width();
        let mut max_child_width = 0;
        let mut has_value_input = false;

        for (i, input) in block.inputs().iter().enumerate() {
            let input_view = &mut self.input_views[i];
            input_view.measure_fields_and_child(input, false, spec);
            max_row_width = max_row_width.max(input_view.total_field_width());
            max_child_width = max_child_width.max(input_view.total_child_width());
            if input.kind() == InputKind::Value {
                has_value_input = true;
            }
        }

        let mut row_top = 0;
        for (i, input) in block.inputs().iter().enumerate() {
            let input_view = &mut self.input_views[i];
            // No-op for statement rows, which are sized independently.
            input_view.set_field_layout_width(max_row_width);
            let measured = input_view.measure(spec);

            self.input_layout_origins[i].set(0, row_top);

            row_top += measured.y;
            if input.kind() == InputKind::Statement {
                row_top += connectors::STATEMENT_INPUT_BOTTOM_HEIGHT;
            }
        }

        self.block_width = max_row_width;
        if has_value_input {
            self.block_width += connectors::CONNECTOR_SIZE_PERPENDICULAR;
        }

        // The view must fit the block body and the widest external child
        // rendered beside it (the widest single child, not the sum — chained
        // children are the workspace's concern).
        self.block_view_size.x = self.block_width.max(max_row_width + max_child_width);
        self.block_view_size.y = row_top.max(self.helper.min_block_height());
    }

    /// Rebuild the outline path after the measured size changed: one
    /// clockwise perimeter walk plus a cutout sub-path per inline value
    /// input.
    fn rebuild_draw_path(&mut self) {
        self.draw_path.reset();

        let x_left = self.layout_margin_left;
        let x_right = self.block_width + self.layout_margin_left;
        let y_top = 0;
        let y_bottom = self.next_block_vertical_offset;

        // Top edge, including the previous connector.
        self.draw_path.move_to(x_left, y_top);
        if self.has_previous {
            connectors::add_previous_connector(&mut self.draw_path, x_left, y_top);
        }
        self.draw_path.line_to(x_right, y_top);

        // Right edge, including input connectors.
        for i in 0..self.input_views.len() {
            let origin = self.input_layout_origins[i];
            match self.input_views[i].kind() {
                InputKind::Dummy => {}
                InputKind::Value => {
                    // Inline value slots are cut out instead of socketed.
                    if !self.inputs_inline {
                        connectors::add_value_input_connector(
                            &mut self.draw_path,
                            x_right,
                            origin.y,
                        );
                    }
                }
                InputKind::Statement => {
                    let x_offset = x_left + self.input_views[i].total_field_width();
                    let connector_height = self.input_views[i].total_child_height();
                    connectors::add_statement_input_connector(
                        &mut self.draw_path,
                        x_right,
                        origin.y,
                        x_offset,
                        connector_height,
                    );
                }
            }
        }
        self.draw_path.line_to(x_right, y_bottom);

        // Bottom edge, including the next connector.
        if self.has_next {
            connectors::add_next_connector(&mut self.draw_path, x_left, y_bottom);
        }
        self.draw_path.line_to(x_left, y_bottom);

        // Left edge, including the output connector.
        if self.has_output {
            connectors::add_output_connector(&mut self.draw_path, x_left, y_top);
        }
        self.draw_path.line_to(x_left, y_top);
        // Re-trace a short segment so the join at the start renders rounded.
        self.draw_path.line_to(x_left + connectors::CONNECTOR_OFFSET, y_top);

        // Holes for inline value inputs.
        if self.inputs_inline {
            for i in 0..self.input_views.len() {
                if self.input_views[i].kind() == InputKind::Value {
                    let origin = self.input_layout_origins[i];
                    self.input_views[i].add_inline_cutout_to_path(
                        &mut self.draw_path,
                        x_left + origin.x,
                        origin.y,
                    );
                }
            }
        }

        self.draw_path.close();
        trace!("rebuilt outline path: {} segments", self.draw_path.segments().len());
    }

    fn snapshot_block_flags(&mut self, block: &Block) {
        self.inputs_inline = block.inputs_inline();
        self.has_previous = block.has_previous_connection();
        self.has_next = block.has_next_connection();
        self.has_output = block.has_output_connection();
        self.fill_color = block.color();
    }

    /// Grow or shrink the unit list to match the block's input count.
    fn sync_input_views(&mut self, block: &Block) {
        let wanted = block.inputs().len();
        if self.input_views.len() > wanted {
            self.input_views.truncate(wanted);
        }
        while self.input_views.len() < wanted {
            self.input_views.push(InputView::new(self.helper.clone()));
        }
    }

    /// Resynchronise the origin list with the unit list (resize-and-fill).
    fn adjust_input_layout_origins_list_size(&mut self) {
        self.input_layout_origins.resize(self.input_views.len(), ViewPoint::default());
    }

    /// The measured size of this block view, including connector clearances.
    pub fn measured_size(&self) -> ViewPoint {
        self.block_view_size
    }

    /// Width of the core block body, without connectors or external children.
    pub fn block_width(&self) -> i32 {
        self.block_width
    }

    /// Offset of the block body inside the measured area.
    pub fn layout_margin_left(&self) -> i32 {
        self.layout_margin_left
    }

    /// Vertical offset, relative to the top of this view, at which a chained
    /// next block should be anchored.
    pub fn next_block_vertical_offset(&self) -> i32 {
        self.next_block_vertical_offset
    }

    /// The layout unit for the input at `index`. Panics when out of range.
    pub fn input_view(&self, index: usize) -> &InputView {
        &self.input_views[index]
    }

    pub fn input_views(&self) -> &[InputView] {
        &self.input_views
    }

    /// Per-input layout origins, parallel to the input list.
    pub fn layout_origins(&self) -> &[ViewPoint] {
        &self.input_layout_origins
    }

    /// The cached outline path.
    pub fn draw_path(&self) -> &OutlinePath {
        &self.draw_path
    }

    /// The bounds assigned by the last layout pass.
    pub fn view_rect(&self) -> LayoutRect {
        self.view_rect
    }

    /// Fill color snapshotted from the block.
    pub fn fill_color(&self) -> u32 {
        self.fill_color
    }
}
