use crate::playback_clock::interface::{PlaybackClock, PlaybackPosition};
use std::sync::Mutex;
use std::time::Duration;

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct PlaybackClockFake {
    state: Mutex<Option<(u64, Duration, Duration)>>,
}

impl PlaybackClockFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_elapsed(&self, elapsed: Duration) {
        if let Ok(mut state) = self.state.lock() {
            if let Some((_, current, _)) = state.as_mut() {
                *current = elapsed;
            }
        }
    }
}

impl PlaybackClock for PlaybackClockFake {
    fn start(&self, token: u64, duration: Duration) {
        if let Ok(mut state) = self.state.lock() {
            *state = Some((token, Duration::ZERO, duration));
        }
    }

    fn stop(&self) {
        if let Ok(mut state) = self.state.lock() {
            *state = None;
        }
    }

    fn stop_if(&self, token: u64) {
        if let Ok(mut state) = self.state.lock() {
            if state.map(|(current, _, _)| current) == Some(token) {
                *state = None;
            }
        }
    }

    fn position(&self) -> Option<PlaybackPosition> {
        let (token, elapsed, duration) = (*self.state.lock().ok()?)?;
        Some(PlaybackPosition {
            token,
            elapsed,
            ended: elapsed >= duration,
        })
    }
}
