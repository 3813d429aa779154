use block_model::{Block, Field, Input};
use block_view::{BlockView, MeasureSpec, PathSegment, ViewPoint};
use workspace_helper::{WorkspaceConfig, WorkspaceHelper};

fn helper() -> WorkspaceHelper {
    WorkspaceHelper::new(WorkspaceConfig { base_width: 50, base_height: 25, ..WorkspaceConfig::default() })
        .unwrap()
}

fn line(x: i32, y: i32) -> PathSegment {
    PathSegment::LineTo(ViewPoint::new(x, y))
}

/// The previous connector dips into the top edge right after the top-left
/// corner.
#[test]
fn previous_connector_notches_the_top_edge() {
    let _ = env_logger::builder().is_test(true).try_init();

    let block = Block::new(vec![Input::dummy(vec![Field::new("label", 60, 30)])])
        .with_previous_connection();
    let mut view = BlockView::new(helper());
    view.measure(&block, MeasureSpec::UNBOUNDED);

    let segments = view.draw_path().segments();
    assert_eq!(segments[0], PathSegment::MoveTo(ViewPoint::new(0, 0)));
    assert_eq!(segments[1], line(20, 0));
    assert_eq!(segments[2], line(20, 20));
    assert_eq!(segments[3], line(60, 20));
    assert_eq!(segments[4], line(60, 0));
}

/// The output tab protrudes left of the body; the walk ends with the short
/// top-edge retrace and a close.
#[test]
fn output_connector_protrudes_left_of_the_body() {
    let _ = env_logger::builder().is_test(true).try_init();

    let block = Block::new(vec![Input::dummy(vec![Field::new("label", 60, 30)])])
        .with_output_connection();
    let mut view = BlockView::new(helper());
    let size = view.measure(&block, MeasureSpec::UNBOUNDED);
    assert_eq!(size.x, 80);

    let segments = view.draw_path().segments();
    assert_eq!(segments[0], PathSegment::MoveTo(ViewPoint::new(20, 0)));
    assert!(segments.contains(&line(0, 60)));
    assert!(segments.contains(&line(0, 20)));
    let n = segments.len();
    assert_eq!(segments[n - 2], line(40, 0));
    assert_eq!(segments[n - 1], PathSegment::Close);
}

/// The statement cutout wraps the connected chain: its inner edge sits past
/// the statement's fields and runs the chain's full height.
#[test]
fn statement_cutout_wraps_the_connected_chain() {
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = Block::new(vec![Input::dummy(vec![Field::new("step", 40, 30)])]);
    let block = Block::new(vec![
        Input::dummy(vec![Field::new("repeat", 50, 20)]),
        Input::statement(vec![Field::new("do", 30, 20)]).with_connection(chain),
    ]);
    let mut view = BlockView::new(helper());
    view.measure(&block, MeasureSpec::UNBOUNDED);

    let segments = view.draw_path().segments();
    // Inner edge at x = 30 (the statement's field width), chain height 30.
    assert!(segments.contains(&line(30, 20)));
    assert!(segments.contains(&line(30, 50)));
    assert!(segments.contains(&line(50, 50)));
}

/// Inline value inputs become even-odd holes instead of right-edge sockets;
/// externally they socket the right edge and cut nothing out.
#[test]
fn inline_values_cut_holes_external_values_socket() {
    let _ = env_logger::builder().is_test(true).try_init();

    let inputs = || {
        vec![Input::dummy(vec![Field::new("label", 30, 20)]), Input::value(Vec::new())]
    };
    let mut view = BlockView::new(helper());

    let inline = Block::new(inputs()).with_inputs_inline(true);
    view.measure(&inline, MeasureSpec::UNBOUNDED);
    assert_eq!(view.draw_path().subpath_count(), 2);

    let external = Block::new(inputs());
    view.measure(&external, MeasureSpec::UNBOUNDED);
    assert_eq!(view.draw_path().subpath_count(), 1);
    // Socket floor at depth 20 into the right edge (x_right = 70), below the
    // dummy row at y = 20.
    assert!(view.draw_path().segments().contains(&line(50, 40)));
}

/// The path is rebuilt only when the measured size changes, and the rebuild
/// is deterministic.
#[test]
fn path_rebuilds_on_size_change_only() {
    let _ = env_logger::builder().is_test(true).try_init();

    let narrow = Block::new(vec![Input::dummy(vec![Field::new("a", 60, 30)])]);
    let wide = Block::new(vec![Input::dummy(vec![Field::new("a", 90, 30)])]);
    let mut view = BlockView::new(helper());

    view.measure(&narrow, MeasureSpec::UNBOUNDED);
    let first = view.draw_path().clone();

    view.measure(&wide, MeasureSpec::UNBOUNDED);
    assert_ne!(&first, view.draw_path());

    view.measure(&narrow, MeasureSpec::UNBOUNDED);
    assert_eq!(&first, view.draw_path());
}
