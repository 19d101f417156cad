//! Read-only render view of a [`GameState`](crate::GameState).
//!
//! The renderer pulls one of these every frame. Everything is `Copy`, so
//! `snapshot_into` can refresh a long-lived snapshot without allocating.

use crate::pieces::{Piece, Shape};
use crate::types::{PieceKind, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl ActiveSnapshot {
    pub fn new(piece: Piece, x: i32, y: i32) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            x,
            y,
        }
    }

    pub fn color_id(&self) -> u8 {
        self.kind.id()
    }

    /// Absolute board cells covered by the piece as `(x, y, id)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c, id)| (self.x + c as i32, self.y + r as i32, id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; COLS]; ROWS],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub session_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// FNV-1a hash of everything a frame shows.
    ///
    /// Two snapshots that render identically hash identically, which lets the
    /// frontend skip redraws while nothing moves (paused, game over).
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a::new();
        for row in &self.board {
            h.write(row);
        }
        if let Some(active) = self.active {
            h.write(&[active.kind.id()]);
            h.write(&active.x.to_le_bytes());
            h.write(&active.y.to_le_bytes());
            for r in 0..active.shape.height() {
                h.write(active.shape.row(r));
            }
        }
        if let Some(next) = self.next {
            h.write(&[next.kind.id()]);
        }
        h.write(&self.score.to_le_bytes());
        h.write(&self.level.to_le_bytes());
        h.write(&self.lines.to_le_bytes());
        h.write(&[self.paused as u8, self.game_over as u8]);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLS]; ROWS],
            active: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: crate::types::BASE_DROP_MS,
            paused: false,
            game_over: false,
            session_id: 0,
        }
    }
}

struct Fnv1a(u64);

impl Fnv1a {
    fn new() -> Self {
        Self(0xcbf29ce484222325)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(0x00000100000001B3);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}
