//! Terminal Blockfall runner (default binary).
//!
//! crossterm for input, a framebuffer-based renderer for output, the
//! terminal bell for sound. Configuration comes from `BLOCKFALL_*`
//! environment variables (see `blockfall::config`).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, error, info};

use blockfall::config::Config;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{Command, KeyTracker};
use blockfall::logging;
use blockfall::term::{play_events, FrameBuffer, FrameThrottle, GameView, TerminalBell, TerminalRenderer, Viewport};

/// Redraw interval while nothing moves (paused, game over).
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.seed_or_clock();
    info!(
        seed,
        frame_ms = config.frame_ms,
        muted = config.muted,
        drop_bell = config.drop_bell,
        "starting"
    );

    let mut game = GameState::new(seed);
    game.start();

    let view = GameView::default();
    let mut tracker = KeyTracker::new();
    let mut bell = TerminalBell::new()
        .muted(config.muted)
        .with_hard_drop(config.drop_bell);
    let mut throttle = FrameThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let clock = Instant::now();
    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let now_ms = clock.elapsed().as_millis() as u64;
                    match tracker.handle_event(key, now_ms) {
                        Some(Command::Quit) => {
                            info!(score = game.score(), "quit");
                            return Ok(());
                        }
                        Some(Command::Pause) => {
                            game.toggle_pause();
                            tracker.reset();
                            debug!(paused = game.paused(), "pause toggled");
                        }
                        Some(Command::Restart) => {
                            game.restart();
                            tracker.reset();
                            info!(session = game.session_id(), "restart");
                        }
                        Some(Command::Play(_)) | None => {}
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed < frame {
            continue;
        }
        last_frame = Instant::now();
        let now_ms = clock.elapsed().as_millis() as u64;

        let pressed = tracker.take_frame(now_ms);
        let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
        game.tick(elapsed_ms, pressed);

        let events = game.drain_events().inspect(|event| debug!(event = event.name(), "game event"));
        play_events(&mut bell, events);

        game.snapshot_into(&mut snap);
        if throttle.should_render(now_ms, snap.fingerprint(), !snap.playable()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
