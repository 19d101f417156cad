//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, piece source and scoring.
//! It handles gravity timing, piece movement, rotation, locking, line clears,
//! leveling and the game-over transition.
//!
//! A session is primed with two spawns: the first one only fills the `next`
//! slot, the second promotes it to `current`. [`GameState::start`] does both.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{spawn_x, Piece, Shape};
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{drop_interval_for_level, level_up_due, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Pending sound events kept until the frontend drains them
pub const EVENT_CAPACITY: usize = 16;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    /// Board column of the current shape's top-left cell.
    x: i32,
    /// Board row of the current shape's top-left cell.
    y: i32,
    source: R,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_counter_ms: u32,
    /// Monotonic session id (increments on restart).
    session_id: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: PieceSource> GameState<R> {
    /// Create a new, unstarted game drawing pieces from `source`
    pub fn with_source(source: R) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            x: 0,
            y: 0,
            source,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_counter_ms: 0,
            session_id: 0,
            events: ArrayVec::new(),
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game: empty board, then both priming spawns
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.init_board();
        self.spawn_piece();
        self.spawn_piece();
        info!(session = self.session_id, "session started");
    }

    /// Throw the whole session away and start a fresh one.
    ///
    /// The piece source keeps running, so a restarted game does not replay
    /// the previous sequence.
    pub fn restart(&mut self) {
        let session_id = self.session_id.wrapping_add(1);
        self.current = None;
        self.next = None;
        self.x = 0;
        self.y = 0;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_counter_ms = 0;
        self.events.clear();
        self.paused = false;
        self.game_over = false;
        self.started = false;
        self.session_id = session_id;
        self.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The falling piece
    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    /// The queued preview piece
    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    /// Top-left board position of the current shape
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn source(&self) -> &R {
        &self.source
    }

    /// Pause or resume gravity and input handling
    pub fn set_paused(&mut self, paused: bool) {
        if self.game_over || !self.started {
            return;
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.active = self
            .current
            .map(|piece| ActiveSnapshot::new(piece, self.x, self.y));
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.session_id = self.session_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Events emitted since the last drain, oldest first
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand pending events to the audio collaborator
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn push_event(&mut self, event: GameEvent) {
        // Nobody draining (headless play) must not change game logic: drop overflow.
        let _ = self.events.try_push(event);
    }

    /// Fill every cell with the empty id
    pub fn init_board(&mut self) {
        self.board.clear();
    }

    /// Promote `next` to `current` and draw a new `next`.
    ///
    /// Returns true when a piece was placed at its spawn position. Returns
    /// false on the first priming call (nothing to promote) and when the
    /// promoted piece collides, which ends the game without touching the board.
    pub fn spawn_piece(&mut self) -> bool {
        self.current = self.next.take();
        self.next = Some(Piece::new(self.source.next_kind()));

        let Some(piece) = self.current else {
            return false;
        };

        self.x = spawn_x(&piece.shape);
        self.y = 0;

        if self.check_collision(&piece.shape, self.x, self.y) {
            self.game_over = true;
            self.push_event(GameEvent::GameOver);
            info!(
                score = self.score,
                level = self.level,
                lines = self.lines,
                "game over"
            );
            return false;
        }

        debug!(kind = ?piece.kind, x = self.x, "piece spawned");
        true
    }

    /// Collision test against this game's board (see [`Board::collides`])
    pub fn check_collision(&self, shape: &Shape, x: i32, y: i32) -> bool {
        self.board.collides(shape, x, y)
    }

    /// Shift the current piece horizontally; blocked moves change nothing
    pub fn move_piece(&mut self, dx: i32) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        if self.game_over {
            return false;
        }

        if self.check_collision(&piece.shape, self.x + dx, self.y) {
            return false;
        }
        self.x += dx;
        true
    }

    /// Rotate clockwise, trying horizontal kicks in order; first fit wins.
    ///
    /// If no offset fits, shape and position stay as they were.
    pub fn rotate_piece(&mut self) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        if self.game_over {
            return false;
        }

        let rotated = piece.shape.rotated_cw();
        for offset in KICK_OFFSETS {
            if !self.check_collision(&rotated, self.x + offset, self.y) {
                self.x += offset;
                self.current = Some(Piece {
                    shape: rotated,
                    ..piece
                });
                return true;
            }
        }
        false
    }

    /// Gravity / soft drop step.
    ///
    /// Returns true if the piece fell one row. When the row below is blocked
    /// the piece locks (solidify, clear lines, spawn) and false is returned.
    pub fn drop_piece(&mut self) -> bool {
        let Some(piece) = self.current else {
            return false;
        };
        if self.game_over {
            return false;
        }

        if !self.check_collision(&piece.shape, self.x, self.y + 1) {
            self.y += 1;
            return true;
        }

        self.lock_piece(false);
        false
    }

    /// Drop the current piece as far as it goes and lock it.
    ///
    /// Returns the number of rows travelled.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(piece) = self.current else {
            return 0;
        };
        if self.game_over {
            return 0;
        }

        let mut rows = 0u32;
        while !self.check_collision(&piece.shape, self.x, self.y + 1) {
            self.y += 1;
            rows += 1;
        }

        debug!(kind = ?piece.kind, rows, "hard drop");
        self.lock_piece(true);
        rows
    }

    fn lock_piece(&mut self, hard_drop: bool) {
        self.solidify_piece();
        if hard_drop {
            self.push_event(GameEvent::HardDrop);
        }
        self.clear_lines();
        self.spawn_piece();
    }

    /// Write the current piece's color id into the board.
    ///
    /// Cells above the top edge have nowhere to go and are dropped.
    pub fn solidify_piece(&mut self) {
        let Some(piece) = self.current else {
            return;
        };
        let color = piece.color_id();
        for (r, c, _) in piece.shape.cells() {
            self.board.set(self.x + c as i32, self.y + r as i32, color);
        }
        debug!(kind = ?piece.kind, x = self.x, y = self.y, "piece locked");
    }

    /// Remove every full row, score the clear and apply leveling.
    ///
    /// Rows are scanned bottom to top. After a removal the same index is
    /// examined again because the row above has moved into it.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0u32;
        let mut y = ROWS;
        while y > 0 {
            if self.board.is_row_full(y - 1) {
                self.board.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        if cleared == 0 {
            return 0;
        }

        self.score = self.score.saturating_add(line_clear_score(cleared));
        self.lines = self.lines.saturating_add(cleared);
        self.push_event(GameEvent::LineClear { lines: cleared });
        debug!(cleared, score = self.score, lines = self.lines, "lines cleared");

        if level_up_due(self.lines, self.level) {
            self.level += 1;
            self.drop_interval_ms = drop_interval_for_level(self.level);
            self.push_event(GameEvent::LevelUp { level: self.level });
            info!(
                level = self.level,
                drop_interval_ms = self.drop_interval_ms,
                "level up"
            );
        }

        cleared
    }

    /// Row the current piece would lock at if hard-dropped now
    pub fn landing_y(&self) -> Option<i32> {
        let piece = self.current?;
        let mut y = self.y;
        while !self.check_collision(&piece.shape, self.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Apply one player action immediately.
    ///
    /// Returns whether the state changed. A soft drop that locks the piece
    /// counts as a change.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.move_piece(-1),
            GameAction::MoveRight => self.move_piece(1),
            GameAction::SoftDrop => {
                self.drop_piece();
                true
            }
            GameAction::Rotate => self.rotate_piece(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Per-frame update.
    ///
    /// Acts on at most one just-pressed action (highest priority in `input`),
    /// then advances gravity. Gravity fires once the counter exceeds the drop
    /// interval, and the counter restarts from zero (overshoot is discarded).
    /// Returns whether the state changed.
    pub fn tick(&mut self, elapsed_ms: u32, input: ActionSet) -> bool {
        if !self.started || self.paused || self.game_over {
            return false;
        }

        let mut changed = false;
        if let Some(action) = input.first() {
            changed = self.apply_action(action);
            if self.game_over {
                return true;
            }
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.drop_piece();
            self.drop_counter_ms = 0;
            changed = true;
        }

        changed
    }
}
