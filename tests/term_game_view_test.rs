use fruit_memory::core::{dispatch, GameState};
use fruit_memory::term::{AnchorY, GameView, Hud, Viewport};
use fruit_memory::types::CellView;

fn row(fb: &fruit_memory::term::FrameBuffer, y: u16) -> String {
    fb.row(y).unwrap().iter().map(|c| c.ch).collect()
}

#[test]
fn term_view_renders_board_frame_at_top() {
    let state = GameState::new(1);
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 6 cells * 4 columns + border = 26 wide, frame starts below 4 header rows.
    let fb = view.render(&state.snapshot(), &Hud::new(), None, Viewport::new(26, 20));

    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 4).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(25, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_matched_cells_show_their_fruit() {
    let mut state = GameState::new(1);
    state.start();
    state.tick(5_000);

    let target = state.round().current_target().unwrap();
    let cells = state.board().positions_of(target);
    let (a, b) = (cells[0], cells[1]);
    state.view_cell(a).unwrap();
    state.view_cell(b).unwrap();
    state.verify_cell(a).unwrap();
    state.verify_cell(b).unwrap();
    assert_eq!(state.cell_view(a), CellView::Matched(target));

    let mut hud = Hud::new();
    dispatch(&mut hud, &state.drain_events());
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&state.snapshot(), &hud, None, Viewport::new(100, 20));

    let size = state.board().size() as usize;
    let left = (100 - 26) / 2;
    let x = left + 1 + (a % size) as u16 * 4;
    let y = 5 + (a / size) as u16;
    let label: String = (x..x + 4).map(|cx| fb.get(cx, y).unwrap().ch).collect();
    assert_eq!(label.trim(), target.short());

    assert!((0..fb.height()).any(|y| row(&fb, y).contains("Match!")));
    assert!((0..fb.height()).any(|y| row(&fb, y).contains("FOUND 1/2")));
}

#[test]
fn term_view_custom_title_and_board_size() {
    let mut state = GameState::new(1);
    let settings = fruit_memory::core::Settings {
        board_size: 8,
        ..fruit_memory::core::Settings::custom_defaults()
    };
    state.apply_custom_settings(settings).unwrap();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&state.snapshot(), &Hud::new(), None, Viewport::new(34, 20));

    assert!(row(&fb, 0).contains("FRUIT MEMORY - CUSTOM"));
    assert_eq!(fb.get(33, 4).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
}
