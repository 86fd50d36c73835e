use crate::device_display::interface::{DeviceDisplay, FrameImage};
use crate::session::core::{LoadId, ModelState, PlaybackState, State};
use std::sync::{Arc, Mutex};

/// Which frame is on screen, so unchanged frames are not rebuilt every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameKey {
    Blank,
    Frame { load_id: LoadId, frame_index: usize },
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    shown: Arc<Mutex<Option<FrameKey>>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self {
            device_display,
            shown: Arc::new(Mutex::new(None)),
        }
    }

    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display
            .lock()
            .map_err(|e| e.to_string())?
            .init()
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;

        device_display.write_line(0, &prediction_line(state))?;
        device_display.write_line(1, &status_line(state))?;

        let key = frame_key(state);
        let mut shown = self.shown.lock().map_err(|e| e.to_string())?;
        if *shown != Some(key) {
            device_display.show_frame(current_frame(state))?;
            *shown = Some(key);
        }

        Ok(())
    }
}

fn prediction_line(state: &State) -> String {
    match &state.playback {
        PlaybackState::Idle => "Select a video".to_string(),
        PlaybackState::Decoding { .. } | PlaybackState::Inferring { .. } => {
            "Analyzing...".to_string()
        }
        PlaybackState::Playing(playback) | PlaybackState::Ended(playback) => playback
            .label
            .map(|label| label.as_str().to_string())
            .unwrap_or_else(|| "Analyzing...".to_string()),
        PlaybackState::Failed { .. } => "No prediction".to_string(),
    }
}

fn status_line(state: &State) -> String {
    match (&state.model, &state.playback) {
        (ModelState::Unavailable, _) => "Model unavailable".to_string(),
        (ModelState::Loading, _) => "Model loading...".to_string(),
        (ModelState::Ready, PlaybackState::Playing(playback))
        | (ModelState::Ready, PlaybackState::Ended(playback)) => playback
            .actual_label()
            .map(|label| format!("Actual: {}", label))
            .unwrap_or_default(),
        (ModelState::Ready, _) => String::new(),
    }
}

fn frame_key(state: &State) -> FrameKey {
    match &state.playback {
        PlaybackState::Playing(playback) | PlaybackState::Ended(playback) => FrameKey::Frame {
            load_id: playback.load_id,
            frame_index: playback.frame_index.unwrap_or(0),
        },
        _ => FrameKey::Blank,
    }
}

fn current_frame(state: &State) -> Option<FrameImage> {
    match &state.playback {
        PlaybackState::Playing(playback) | PlaybackState::Ended(playback) => playback
            .clip
            .frame_image(playback.frame_index.unwrap_or(0)),
        _ => None,
    }
}
