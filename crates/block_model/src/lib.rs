//! Read-only view of the block/input/field data model.
//!
//! The editor's data layer owns block trees; the layout engine only reads
//! this view. A child block is owned by the input that connects it, so a
//! block tree is acyclic by construction and recursive measurement is
//! bounded by tree depth.

/// The kind of an input slot on a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// No connector; the input only renders its fields.
    Dummy,
    /// Accepts a single nested block via an output connector.
    Value,
    /// Accepts a vertical chain of blocks via a notch.
    Statement,
}

/// Atomic renderable content inside an input's field row.
///
/// Fields measure themselves in the editor's widget layer; the model view
/// carries the resulting intrinsic size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    width: i32,
    height: i32,
}

impl Field {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self { name: name.into(), width, height }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Intrinsic measured width, in view pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Intrinsic measured height, in view pixels.
    pub fn height(&self) -> i32 {
        self.height
    }
}

/// One slot on a block: a kind, an ordered field row, and at most one
/// connected child block.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    kind: InputKind,
    fields: Vec<Field>,
    connection: Option<Box<Block>>,
}

impl Input {
    pub fn dummy(fields: Vec<Field>) -> Self {
        Self { kind: InputKind::Dummy, fields, connection: None }
    }

    pub fn value(fields: Vec<Field>) -> Self {
        Self { kind: InputKind::Value, fields, connection: None }
    }

    pub fn statement(fields: Vec<Field>) -> Self {
        Self { kind: InputKind::Statement, fields, connection: None }
    }

    /// Connect a child block to this input. Only meaningful for value and
    /// statement inputs; the data layer enforces connection rules.
    pub fn with_connection(mut self, child: Block) -> Self {
        self.connection = Some(Box::new(child));
        self
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The connected child block, if any.
    pub fn connection(&self) -> Option<&Block> {
        self.connection.as_deref()
    }
}

/// A logical block node: ordered inputs, connection points, and layout flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    inputs: Vec<Input>,
    has_previous: bool,
    has_next: bool,
    has_output: bool,
    inputs_inline: bool,
    color: u32,
}

impl Block {
    /// Default block fill color (ARGB).
    pub const DEFAULT_COLOR: u32 = 0xFF5B_80A5;

    pub fn new(inputs: Vec<Input>) -> Self {
        Self {
            inputs,
            has_previous: false,
            has_next: false,
            has_output: false,
            inputs_inline: false,
            color: Self::DEFAULT_COLOR,
        }
    }

    pub fn with_previous_connection(mut self) -> Self {
        self.has_previous = true;
        self
    }

    pub fn with_next_connection(mut self) -> Self {
        self.has_next = true;
        self
    }

    pub fn with_output_connection(mut self) -> Self {
        self.has_output = true;
        self
    }

    pub fn with_inputs_inline(mut self, inline: bool) -> Self {
        self.inputs_inline = inline;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// The input at `index`. Panics when out of range.
    pub fn input(&self, index: usize) -> &Input {
        &self.inputs[index]
    }

    /// Whether inputs are rendered packed inside the block body rather than
    /// stacked with external children.
    pub fn inputs_inline(&self) -> bool {
        self.inputs_inline
    }

    pub fn has_previous_connection(&self) -> bool {
        self.has_previous
    }

    pub fn has_next_connection(&self) -> bool {
        self.has_next
    }

    pub fn has_output_connection(&self) -> bool {
        self.has_output
    }

    /// Block fill color (ARGB).
    pub fn color(&self) -> u32 {
        self.color
    }
}
