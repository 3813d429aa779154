//! Layout unit for a single input slot: the field row and the connected
//! child block, measured together.

use block_model::{Input, InputKind};
use log::trace;
use workspace_helper::WorkspaceHelper;

use crate::BlockView;
use crate::connectors::{self, MIN_INLINE_CUTOUT_HEIGHT, MIN_INLINE_CUTOUT_WIDTH};
use crate::geometry::{LayoutRect, MeasureSpec, ViewPoint};
use crate::path::OutlinePath;

/// Measures and positions one input: its field row and, when a child block
/// is connected, that child's whole subtree (via the child's own engine).
///
/// Units are owned 1:1 by the parent block's engine and recreated whenever
/// the block's input list changes size.
pub struct InputView {
    helper: WorkspaceHelper,
    kind: InputKind,
    inputs_inline: bool,

    total_field_width: i32,
    total_field_height: i32,
    /// Forced field-column width for sibling alignment; 0 when unforced.
    field_layout_width: i32,

    child_view: Option<BlockView>,
    total_child_width: i32,
    total_child_height: i32,

    measured_size: ViewPoint,
    view_rect: LayoutRect,
}

impl InputView {
    pub(crate) fn new(helper: WorkspaceHelper) -> Self {
        Self {
            helper,
            kind: InputKind::Dummy,
            inputs_inline: false,
            total_field_width: 0,
            total_field_height: 0,
            field_layout_width: 0,
            child_view: None,
            total_child_width: 0,
            total_child_height: 0,
            measured_size: ViewPoint::default(),
            view_rect: LayoutRect::ZERO,
        }
    }

    /// Measure the field row and, when a child block is connected, run the
    /// child's own measure pass. Records field-row and child metrics; the
    /// unit's own box is finalised later by [`InputView::measure`].
    pub fn measure_fields_and_child(&mut self, input: &Input, inputs_inline: bool, spec: MeasureSpec) {
        self.kind = input.kind();
        self.inputs_inline = inputs_inline;
        self.total_field_width = input.fields().iter().map(|f| f.width()).sum();
        self.total_field_height = input.fields().iter().map(|f| f.height()).max().unwrap_or(0);
        // Cleared every pass; the engine re-forces column widths as needed.
        self.field_layout_width = 0;

        match input.connection() {
            Some(child) => {
                let view =
                    self.child_view.get_or_insert_with(|| BlockView::new(self.helper.clone()));
                let child_size = view.measure(child, spec);
                self.total_child_width = child_size.x;
                self.total_child_height = child_size.y;
            }
            None => {
                self.child_view = None;
                self.total_child_width = 0;
                self.total_child_height = 0;
            }
        }

        trace!(
            "input measured: kind={:?} fields={}x{} child={}x{}",
            self.kind,
            self.total_field_width,
            self.total_field_height,
            self.total_child_width,
            self.total_child_height
        );
    }

    /// Force the rendered field column to `width` so sibling rows align.
    /// Statement rows are never width-aligned and ignore the override.
    pub fn set_field_layout_width(&mut self, width: i32) {
        if self.kind != InputKind::Statement {
            self.field_layout_width = width;
        }
    }

    /// Finalise this unit's measured box from the recorded metrics.
    pub fn measure(&mut self, _spec: MeasureSpec) -> ViewPoint {
        let field_width = self.field_column_width();
        let (width, height) = match self.kind {
            InputKind::Statement => (
                field_width + self.total_child_width,
                self.total_field_height.max(self.total_child_height),
            ),
            InputKind::Value if self.inputs_inline => {
                // The child sits inside the block body; reserve at least the
                // cutout box so the hole always fits in the row.
                let (child_w, child_h) = self.inline_child_box();
                (field_width + child_w, self.total_field_height.max(child_h))
            }
            // Dummy rows, and value rows whose child renders outside the
            // block body: the child's width is reserved at block level.
            InputKind::Dummy | InputKind::Value => {
                (field_width, self.total_field_height.max(self.total_child_height))
            }
        };
        self.measured_size.set(width, height);
        self.measured_size
    }

    /// Record this unit's laid-out box and position the connected child
    /// after the field column.
    pub fn layout(&mut self, rect: LayoutRect) {
        self.view_rect = rect;
        let child_left = rect.x + self.field_column_width();
        if let Some(child) = self.child_view.as_mut() {
            let child_size = child.measured_size();
            child.layout(LayoutRect::new(child_left, rect.y, child_size.x, child_size.y));
        }
    }

    /// Append the even-odd hole for an inline value input. `(x, y)` is the
    /// unit's layout origin, already shifted by the block's left margin.
    pub fn add_inline_cutout_to_path(&self, path: &mut OutlinePath, x: i32, y: i32) {
        let (width, height) = self.inline_child_box();
        connectors::add_inline_value_cutout(path, x + self.field_column_width(), y, width, height);
    }

    /// The effective field-column width: the measured row width, widened to
    /// any forced sibling-alignment width.
    pub fn field_column_width(&self) -> i32 {
        self.total_field_width.max(self.field_layout_width)
    }

    fn inline_child_box(&self) -> (i32, i32) {
        (
            self.total_child_width.max(MIN_INLINE_CUTOUT_WIDTH),
            self.total_child_height.max(MIN_INLINE_CUTOUT_HEIGHT),
        )
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Summed intrinsic width of the field row.
    pub fn total_field_width(&self) -> i32 {
        self.total_field_width
    }

    /// Tallest intrinsic height in the field row.
    pub fn total_field_height(&self) -> i32 {
        self.total_field_height
    }

    /// Measured width of the connected child block (0 when unconnected).
    pub fn total_child_width(&self) -> i32 {
        self.total_child_width
    }

    /// Measured height of the connected child block (0 when unconnected).
    pub fn total_child_height(&self) -> i32 {
        self.total_child_height
    }

    pub fn measured_size(&self) -> ViewPoint {
        self.measured_size
    }

    /// The box assigned by the last layout pass, relative to the block origin.
    pub fn view_rect(&self) -> LayoutRect {
        self.view_rect
    }

    /// The connected child's engine, if a child block is connected.
    pub fn child_view(&self) -> Option<&BlockView> {
        self.child_view.as_ref()
    }
}
