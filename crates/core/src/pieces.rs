//! Pieces module - tetromino shapes and matrix rotation
//!
//! A shape is a small cropped matrix of cell-kind ids. Rotation is a plain
//! clockwise quarter-turn of the matrix (`new[r][c] = old[h - 1 - c][r]`),
//! applied the same way to every kind. There are no per-kind rotation tables.

use crate::types::{PieceKind, COLS, EMPTY};

/// Largest side of any tetromino bounding box
pub const MAX_SIDE: usize = 4;

/// Shape matrix of a piece - at most 4x4, row-major, 0 = empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[u8; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Build a shape from rows of cell-kind ids.
    ///
    /// # Panics
    ///
    /// Panics unless `rows` is a non-empty rectangle no larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(
            (1..=MAX_SIDE).contains(&height) && (1..=MAX_SIDE).contains(&width),
            "shape must be between 1x1 and 4x4"
        );
        assert!(
            rows.iter().all(|r| r.len() == width),
            "shape rows must have equal length"
        );

        let mut cells = [[EMPTY; MAX_SIDE]; MAX_SIDE];
        for (r, row) in rows.iter().enumerate() {
            cells[r][..width].copy_from_slice(row);
        }
        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Cell-kind id at (row, col), 0 when outside the matrix
    pub fn get(&self, r: usize, c: usize) -> u8 {
        if r >= self.height() || c >= self.width() {
            return EMPTY;
        }
        self.cells[r][c]
    }

    /// Occupied cells as `(row, col, id)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        (0..self.height()).flat_map(move |r| {
            (0..self.width()).filter_map(move |c| {
                let id = self.cells[r][c];
                (id != EMPTY).then_some((r, c, id))
            })
        })
    }

    /// One row of the matrix
    pub fn row(&self, r: usize) -> &[u8] {
        &self.cells[r][..self.width()]
    }

    /// Clockwise quarter-turn into a new shape (width and height swap)
    pub fn rotated_cw(&self) -> Self {
        let h = self.height();
        let w = self.width();
        let mut cells = [[EMPTY; MAX_SIDE]; MAX_SIDE];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            width: h as u8,
            height: w as u8,
            cells,
        }
    }
}

/// Canonical spawn shape for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[2, 0, 0], &[2, 2, 2]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 3], &[3, 3, 3]]),
        PieceKind::O => Shape::from_rows(&[&[4, 4], &[4, 4]]),
        PieceKind::S => Shape::from_rows(&[&[0, 5, 5], &[5, 5, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 6, 0], &[6, 6, 6]]),
        PieceKind::Z => Shape::from_rows(&[&[7, 7, 0], &[0, 7, 7]]),
    }
}

/// A piece: its kind (which is also its color id) and current shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl Piece {
    /// Create a piece in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
        }
    }

    /// Cell-kind id written into the board when this piece locks
    pub fn color_id(&self) -> u8 {
        self.kind.id()
    }
}

/// Horizontally centered spawn column for a shape
pub fn spawn_x(shape: &Shape) -> i32 {
    (COLS / 2) as i32 - (shape.width() / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_shapes_use_kind_id() {
        for kind in PieceKind::ALL {
            let shape = base_shape(kind);
            let cells: Vec<_> = shape.cells().collect();
            assert_eq!(cells.len(), 4, "{:?} should have 4 minos", kind);
            assert!(cells.iter().all(|&(_, _, id)| id == kind.id()));
        }
    }

    #[test]
    fn test_rotate_t_piece() {
        let t = base_shape(PieceKind::T);
        let r = t.rotated_cw();
        assert_eq!((r.width(), r.height()), (2, 3));
        assert_eq!(r.row(0), &[6, 0]);
        assert_eq!(r.row(1), &[6, 6]);
        assert_eq!(r.row(2), &[6, 0]);
    }

    #[test]
    fn test_rotate_i_piece_becomes_vertical() {
        let i = base_shape(PieceKind::I).rotated_cw();
        assert_eq!((i.width(), i.height()), (1, 4));
        assert!((0..4).all(|r| i.get(r, 0) == 1));
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_from_rows_rejects_ragged_rows() {
        Shape::from_rows(&[&[1, 1], &[1]]);
    }

    #[test]
    #[should_panic(expected = "between 1x1 and 4x4")]
    fn test_from_rows_rejects_oversized_shape() {
        Shape::from_rows(&[&[1, 1, 1, 1, 1]]);
    }

    #[test]
    fn test_get_outside_matrix_is_empty() {
        let o = base_shape(PieceKind::O);
        assert_eq!(o.get(0, 2), EMPTY);
        assert_eq!(o.get(2, 0), EMPTY);
    }

    #[test]
    fn test_spawn_x_centers_shape() {
        assert_eq!(spawn_x(&base_shape(PieceKind::I)), 3);
        assert_eq!(spawn_x(&base_shape(PieceKind::O)), 4);
        assert_eq!(spawn_x(&base_shape(PieceKind::T)), 4);
    }
}
