use blockfall::core::{GameState, ScriptedPieces};
use blockfall::term::{kind_color, AnchorY, FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn started(kinds: &[PieceKind]) -> GameState<ScriptedPieces> {
    let mut state = GameState::with_source(ScriptedPieces::new(kinds.to_vec()));
    state.start();
    state
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_active_piece_at_spawn() {
    let state = started(&[PieceKind::T, PieceKind::I]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(22, 22);
    let fb = view.render(&state.snapshot(), vp);

    // T top row: only column 5 is filled.
    let (px, py) = view.cell_origin(vp, 5, 0);
    assert_eq!(fb.get(px, py).unwrap().style.fg, kind_color(PieceKind::T));
    let (px, py) = view.cell_origin(vp, 4, 0);
    assert_eq!(fb.get(px, py).unwrap().ch, '·');
    for x in 4..7 {
        let (px, py) = view.cell_origin(vp, x, 1);
        assert_eq!(fb.get(px, py).unwrap().ch, '█');
    }
}

#[test]
fn term_view_side_panel_shows_stats() {
    let mut state = started(&[PieceKind::O]);
    state.apply_action(GameAction::HardDrop);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(60, 24));

    assert!(fb.contains_text("SCORE"));
    assert!(fb.contains_text("LEVEL"));
    assert!(fb.contains_text("LINES"));
    assert!(fb.contains_text("NEXT"));
}

#[test]
fn term_view_next_preview_uses_next_color() {
    let state = started(&[PieceKind::T, PieceKind::Z]);
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(60, 24));

    let z = kind_color(PieceKind::Z);
    let z_cells = fb.cells().iter().filter(|c| c.ch == '█' && c.style.fg == z).count();
    // Four minos, two columns each.
    assert_eq!(z_cells, 8);
}

#[test]
fn term_view_pause_overlay() {
    let mut state = started(&[PieceKind::O]);
    state.toggle_pause();
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(40, 24));
    assert!(fb.contains_text("PAUSED"));
}

#[test]
fn term_view_game_over_overlay() {
    let mut state = started(&[PieceKind::O]);
    while !state.game_over() {
        state.apply_action(GameAction::HardDrop);
    }
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(40, 24));
    assert!(fb.contains_text("GAME OVER"));
}

#[test]
fn render_into_reuses_buffer_across_sizes() {
    let snap = GameState::new(3).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    view.render_into(&snap, Viewport::new(30, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 22));
    assert_eq!(fb.cells().len(), 30 * 22);
}

#[test]
fn renderer_emits_only_changes_after_first_frame() {
    let mut state = started(&[PieceKind::O]);
    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let mut renderer = TerminalRenderer::with_writer(Vec::new());
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&state.snapshot(), vp, &mut fb);
    renderer.draw_swap(&mut fb).unwrap();
    let full = renderer.writer().len();

    state.apply_action(GameAction::MoveLeft);
    view.render_into(&state.snapshot(), vp, &mut fb);
    renderer.draw_swap(&mut fb).unwrap();
    let diff = renderer.writer().len() - full;

    assert!(diff > 0);
    assert!(diff < full);
}
