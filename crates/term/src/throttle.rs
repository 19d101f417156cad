//! Skip redundant frames while nothing on screen moves.

/// Decides per loop iteration whether a new frame is worth drawing.
///
/// While the game is running every frame is drawn. While it is static
/// (paused, game over) a frame is drawn when the snapshot fingerprint changes,
/// plus a slow heartbeat so resizes and overlays still show up.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: Option<u64>,
}

impl FrameThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let due = match self.last_fingerprint {
            None => true,
            Some(_) if !is_static => true,
            Some(last) if last != fingerprint => true,
            Some(_) => now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms,
        };
        if due {
            self.last_render_ms = now_ms;
            self.last_fingerprint = Some(fingerprint);
        }
        due
    }

    /// Force the next call to render (terminal resize).
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}
