use block_model::{Block, Field, Input};
use block_view::{BlockView, MeasureSpec};
use workspace_helper::{WorkspaceConfig, WorkspaceHelper};

fn helper() -> WorkspaceHelper {
    WorkspaceHelper::new(WorkspaceConfig { base_width: 50, base_height: 25, ..WorkspaceConfig::default() })
        .unwrap()
}

/// A chained next block anchors at the content height; the measured size
/// includes the extruding notch below it.
#[test]
fn next_block_anchors_at_content_height() {
    let _ = env_logger::builder().is_test(true).try_init();

    let block = Block::new(vec![Input::dummy(vec![Field::new("label", 60, 30)])])
        .with_previous_connection()
        .with_next_connection();

    let mut view = BlockView::new(helper());
    let size = view.measure(&block, MeasureSpec::UNBOUNDED);

    assert_eq!(view.next_block_vertical_offset(), 30);
    assert_eq!(size.y, 30 + 20);
}

/// Without a next connection the anchor equals the measured height.
#[test]
fn no_next_connection_adds_no_clearance() {
    let _ = env_logger::builder().is_test(true).try_init();

    let block = Block::new(vec![Input::dummy(vec![Field::new("label", 60, 30)])]);

    let mut view = BlockView::new(helper());
    let size = view.measure(&block, MeasureSpec::UNBOUNDED);

    assert_eq!(view.next_block_vertical_offset(), size.y);
    assert_eq!(size.y, 30);
}
