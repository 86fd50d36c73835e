use std::time::Duration;

/// Where playback currently is. `token` identifies the load that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackPosition {
    pub token: u64,
    pub elapsed: Duration,
    pub ended: bool,
}

pub trait PlaybackClock {
    fn start(&self, token: u64, duration: Duration);
    fn stop(&self);
    /// Stops only if `token` still owns the clock.
    fn stop_if(&self, token: u64);
    /// `None` when nothing is playing.
    fn position(&self) -> Option<PlaybackPosition>;
}
