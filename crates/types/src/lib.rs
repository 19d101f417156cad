//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be
//! shared by the game core, the input layer and the terminal renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Cell-kind ids
//!
//! Every board cell and every shape cell holds a small integer id:
//!
//! | id | meaning |
//! |----|---------|
//! | 0  | empty   |
//! | 1  | I       |
//! | 2  | J       |
//! | 3  | L       |
//! | 4  | O       |
//! | 5  | S       |
//! | 6  | T       |
//! | 7  | Z       |
//!
//! # Gravity
//!
//! Level 1 starts at [`BASE_DROP_MS`]. Each level shortens the interval by
//! [`DROP_STEP_MS`] down to [`MIN_DROP_MS`].
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{ActionSet, GameAction, PieceKind, COLS, ROWS};
//!
//! assert_eq!(PieceKind::O.id(), 4);
//! assert_eq!(PieceKind::from_id(6), Some(PieceKind::T));
//!
//! let mut pressed = ActionSet::empty();
//! pressed.insert(GameAction::HardDrop);
//! pressed.insert(GameAction::MoveRight);
//! assert_eq!(pressed.first(), Some(GameAction::MoveRight));
//!
//! assert_eq!(COLS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const COLS: usize = 10;

/// Board height in cells (20 rows)
pub const ROWS: usize = 20;

/// Cell-kind id of an empty cell
pub const EMPTY: u8 = 0;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 75;

/// Gravity floor, reached at level 13
pub const MIN_DROP_MS: u32 = 150;

/// Lines needed per level (level N ends at N * 10 total lines)
pub const LINES_PER_LEVEL: u32 = 10;

/// Points multiplier for a line clear (`count * LINE_POINTS * count`)
pub const LINE_POINTS: u32 = 10;

/// Starting level of a fresh session
pub const START_LEVEL: u32 = 1;

/// Horizontal offsets tried, in order, when a rotation collides
pub const KICK_OFFSETS: [i32; 5] = [0, -1, 1, -2, 2];


/// The seven tetromino piece kinds
///
/// The discriminant is the cell-kind id written into the board when a piece
/// locks, which doubles as its color index:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    J = 2,
    L = 3,
    O = 4,
    S = 5,
    T = 6,
    Z = 7,
}

impl PieceKind {
    /// All kinds in id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Cell-kind id (1-7)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by cell-kind id
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Player actions consumed by the game core
///
/// Declaration order is the priority order used when several actions are
/// pressed in the same frame: only the first one is acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft = 0,
    /// Move piece one cell right
    MoveRight = 1,
    /// Drop piece one cell down (locks when blocked)
    SoftDrop = 2,
    /// Rotate piece 90° clockwise with horizontal kicks
    Rotate = 3,
    /// Drop piece to the lowest reachable row and lock it
    HardDrop = 4,
}

impl GameAction {
    /// All actions, highest priority first.
    pub const ALL: [GameAction; 5] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of actions pressed during one frame (a bitmask, `Copy`, no allocation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn only(action: GameAction) -> Self {
        Self(action.bit())
    }

    pub fn insert(&mut self, action: GameAction) {
        self.0 |= action.bit();
    }

    pub fn remove(&mut self, action: GameAction) {
        self.0 &= !action.bit();
    }

    pub fn contains(&self, action: GameAction) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Highest-priority action in the set
    pub fn first(&self) -> Option<GameAction> {
        GameAction::ALL.into_iter().find(|a| self.contains(*a))
    }

    pub fn iter(&self) -> impl Iterator<Item = GameAction> + '_ {
        GameAction::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl FromIterator<GameAction> for ActionSet {
    fn from_iter<T: IntoIterator<Item = GameAction>>(iter: T) -> Self {
        let mut set = ActionSet::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// Discrete events emitted by the core for the audio collaborator.
///
/// Game logic never depends on whether anyone consumes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One or more rows were cleared by a lock
    LineClear { lines: u32 },
    /// A hard drop locked the current piece
    HardDrop,
    /// Level threshold crossed; gravity got faster
    LevelUp { level: u32 },
    /// A freshly promoted piece collided at its spawn position
    GameOver,
}

impl GameEvent {
    /// Stable name for logging and sound lookup
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::LineClear { .. } => "line-clear",
            GameEvent::HardDrop => "hard-drop",
            GameEvent::LevelUp { .. } => "level-up",
            GameEvent::GameOver => "game-over",
        }
    }
}
