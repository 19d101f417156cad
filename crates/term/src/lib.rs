//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view renders a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a plain framebuffer, and
//! the renderer flushes only the changed cells to the terminal through
//! crossterm. No widget toolkit, no layout engine. Board cells are drawn
//! 2 columns wide to compensate for the terminal glyph aspect ratio.
//!
//! Sound goes through the terminal too: [`bell::TerminalBell`] rings BEL for
//! game events.

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod throttle;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use bell::{play_events, SoundPlayer, TerminalBell};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::FrameThrottle;
