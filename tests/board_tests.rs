//! Board tests

use blockfall::core::{base_shape, Board};
use blockfall::types::{PieceKind, COLS, EMPTY, ROWS};

fn full_row(board: &mut Board, y: i32, id: u8) {
    for x in 0..COLS as i32 {
        board.set(x, y, id);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), COLS);
    assert_eq!(board.height(), ROWS);

    for y in 0..ROWS as i32 {
        for x in 0..COLS as i32 {
            assert_eq!(board.get(x, y), Some(EMPTY), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(COLS as i32, 0), None);
    assert_eq!(board.get(0, ROWS as i32), None);
    assert!(!board.set(0, -1, 1));
    assert!(!board.is_occupied(0, -1));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_set_and_occupied() {
    let mut board = Board::new();
    assert!(board.set(3, 7, PieceKind::L.id()));
    assert!(board.is_occupied(3, 7));
    assert!(!board.is_occupied(4, 7));
    assert_eq!(board.get(3, 7), Some(3));
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();
    for x in 0..COLS as i32 - 1 {
        board.set(x, 19, 1);
    }
    assert!(!board.is_row_full(19));
    board.set(COLS as i32 - 1, 19, 7);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(ROWS));
}

#[test]
fn test_remove_row_keeps_height() {
    let mut board = Board::new();
    full_row(&mut board, 10, 2);
    board.set(5, 9, 6);

    assert!(board.remove_row(10));
    assert_eq!(board.rows().len(), ROWS);
    assert_eq!(board.get(5, 10), Some(6));
    assert!(!board.is_row_full(10));
}

#[test]
fn test_collides_matches_bounds_rules() {
    let mut board = Board::new();
    let i = base_shape(PieceKind::I);

    assert!(!board.collides(&i, 0, 0));
    assert!(!board.collides(&i, 6, 19));
    assert!(board.collides(&i, 7, 0));
    assert!(board.collides(&i, -1, 0));
    assert!(board.collides(&i, 0, 20));
    // Negative rows are fine on their own.
    assert!(!board.collides(&i, 3, -3));

    board.set(2, 0, 1);
    assert!(board.collides(&i, 0, 0));
    assert!(!board.collides(&i, 3, 0));
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::new();
    full_row(&mut board, 0, 4);
    full_row(&mut board, 19, 5);
    board.clear();
    assert_eq!(board, Board::default());
}
