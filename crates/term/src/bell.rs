//! Sound output for game events.
//!
//! A terminal has exactly one sound: the bell. `TerminalBell` rings it for
//! every game event and can be muted at any time.

use std::io::{self, Write};

use anyhow::Result;
use tracing::warn;

use crate::types::GameEvent;

/// Consumer of the core's sound events.
pub trait SoundPlayer {
    fn play(&mut self, event: GameEvent) -> Result<()>;
}

/// Rings the terminal bell (BEL, 0x07).
pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
    muted: bool,
    /// Ring on hard drops too (on by default).
    ring_on_hard_drop: bool,
    rung: u32,
}

impl TerminalBell<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalBell<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            muted: false,
            ring_on_hard_drop: true,
            rung: 0,
        }
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_hard_drop(mut self, ring: bool) -> Self {
        self.ring_on_hard_drop = ring;
        self
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of times the bell actually rang
    pub fn rung(&self) -> u32 {
        self.rung
    }

    fn audible(&self, event: GameEvent) -> bool {
        match event {
            GameEvent::HardDrop => self.ring_on_hard_drop,
            GameEvent::LineClear { .. } | GameEvent::LevelUp { .. } | GameEvent::GameOver => true,
        }
    }
}

impl<W: Write> SoundPlayer for TerminalBell<W> {
    fn play(&mut self, event: GameEvent) -> Result<()> {
        if self.muted || !self.audible(event) {
            return Ok(());
        }
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        self.rung += 1;
        Ok(())
    }
}

/// Play every event, logging failures instead of returning them.
///
/// Sound output never stops the game. Returns how many events failed.
pub fn play_events<P, I>(player: &mut P, events: I) -> usize
where
    P: SoundPlayer + ?Sized,
    I: IntoIterator<Item = GameEvent>,
{
    let mut failed = 0;
    for event in events {
        if let Err(err) = player.play(event) {
            failed += 1;
            warn!(event = event.name(), error = %err, "sound output failed");
        }
    }
    failed
}
