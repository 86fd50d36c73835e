use crate::playback_clock::interface::{PlaybackClock, PlaybackPosition};
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Running {
    token: u64,
    started: Instant,
    duration: Duration,
}

/// Presentation time measured against the wall clock.
#[derive(Debug, Default)]
pub struct PlaybackClockSystem {
    running: Mutex<Option<Running>>,
}

impl PlaybackClockSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn position_at(&self, now: Instant) -> Option<PlaybackPosition> {
        let running = (*self.running.lock().ok()?)?;
        let elapsed = now.saturating_duration_since(running.started);

        Some(PlaybackPosition {
            token: running.token,
            elapsed,
            ended: elapsed >= running.duration,
        })
    }
}

impl PlaybackClock for PlaybackClockSystem {
    fn start(&self, token: u64, duration: Duration) {
        if let Ok(mut running) = self.running.lock() {
            *running = Some(Running {
                token,
                started: Instant::now(),
                duration,
            });
        }
    }

    fn stop(&self) {
        if let Ok(mut running) = self.running.lock() {
            *running = None;
        }
    }

    fn stop_if(&self, token: u64) {
        if let Ok(mut running) = self.running.lock() {
            if running.map(|running| running.token) == Some(token) {
                *running = None;
            }
        }
    }

    fn position(&self) -> Option<PlaybackPosition> {
        self.position_at(Instant::now())
    }
}
