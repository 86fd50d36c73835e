use crate::device_display::interface::{DeviceDisplay, FrameImage};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Remembers what was last drawn; clones share the same screen.
#[derive(Clone, Default)]
pub struct DeviceDisplayFake {
    lines: Arc<Mutex<[String; 2]>>,
    frame: Arc<Mutex<Option<FrameImage>>>,
    frames_shown: Arc<AtomicUsize>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, line: usize) -> String {
        self.lines
            .lock()
            .ok()
            .and_then(|lines| lines.get(line).cloned())
            .unwrap_or_default()
    }

    pub fn frames_shown(&self) -> usize {
        self.frames_shown.load(Ordering::SeqCst)
    }

    pub fn frame(&self) -> Option<FrameImage> {
        self.frame.lock().ok().and_then(|frame| frame.clone())
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        let mut lines = self.lines.lock().map_err(|e| e.to_string())?;
        lines[line as usize] = text.to_string();
        Ok(())
    }

    fn show_frame(&mut self, frame: Option<FrameImage>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames_shown.fetch_add(1, Ordering::SeqCst);
        *self.frame.lock().map_err(|e| e.to_string())? = frame;
        Ok(())
    }
}
