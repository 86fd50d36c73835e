use std::error::Error;

/// One decoded frame ready to draw, packed RGB rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImage {
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>,
}

/// Surface showing the predicted label, a status line and the current frame.
pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a specific line on the display (0-based index)
    /// Returns error if line number is invalid (must be 0 or 1)
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_frame(&mut self, frame: Option<FrameImage>) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn num_lines(&self) -> u8 {
        2
    }
}
