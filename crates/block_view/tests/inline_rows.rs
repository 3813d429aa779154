use block_model::{Block, Field, Input};
use block_view::{BlockView, MeasureSpec, ViewPoint};
use workspace_helper::{WorkspaceConfig, WorkspaceHelper};

fn helper() -> WorkspaceHelper {
    WorkspaceHelper::new(WorkspaceConfig { base_width: 50, base_height: 25, ..WorkspaceConfig::default() })
        .unwrap()
}

/// A field row followed by a statement: the statement takes a row of its
/// own below the fields, and the block reserves wrap-connector room beyond
/// the statement's fields.
#[test]
fn statement_breaks_onto_its_own_row() {
    let _ = env_logger::builder().is_test(true).try_init();

    let block = Block::new(vec![
        Input::dummy(vec![Field::new("label", 40, 20)]),
        Input::statement(vec![Field::new("do", 30, 20)]),
    ])
    .with_inputs_inline(true);

    let mut view = BlockView::new(helper());
    let size = view.measure(&block, MeasureSpec::UNBOUNDED);

    assert_eq!(view.layout_origins()[0], ViewPoint::new(0, 0));
    assert_eq!(view.layout_origins()[1], ViewPoint::new(0, 20));
    // 30 of statement fields + 40 reserved for the wrap connector.
    assert_eq!(size.x, 70);
    assert_eq!(size.y, 40);
}

/// Non-statement inputs pack left-to-right on a shared row; the row is as
/// tall as its tallest member.
#[test]
fn mixed_inputs_pack_one_row() {
    let _ = env_logger::builder().is_test(true).try_init();

    let block = Block::new(vec![
        Input::dummy(vec![Field::new("a", 30, 20)]),
        Input::value(Vec::new()),
        Input::dummy(vec![Field::new("b", 10, 50)]),
    ])
    .with_inputs_inline(true);

    let mut view = BlockView::new(helper());
    let size = view.measure(&block, MeasureSpec::UNBOUNDED);

    assert_eq!(view.layout_origins()[0], ViewPoint::new(0, 0));
    // The empty value input still reserves the minimum cutout box (40x60).
    assert_eq!(view.layout_origins()[1], ViewPoint::new(30, 0));
    assert_eq!(view.layout_origins()[2], ViewPoint::new(70, 0));
    assert_eq!(size.x, 80);
    assert_eq!(size.y, 60);
}

/// A statement as the final input leaves no trailing open row.
#[test]
fn trailing_statement_closes_the_block() {
    let _ = env_logger::builder().is_test(true).try_init();

    let block = Block::new(vec![
        Input::dummy(vec![Field::new("if", 20, 20)]),
        Input::statement(Vec::new()),
    ])
    .with_inputs_inline(true);

    let mut view = BlockView::new(helper());
    let size = view.measure(&block, MeasureSpec::UNBOUNDED);

    // Row 0 is 20 tall, the statement row has no fields and no child.
    assert_eq!(view.layout_origins()[1], ViewPoint::new(0, 20));
    assert_eq!(size.y, 25);
}
