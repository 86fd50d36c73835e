use crate::device_display::interface::FrameImage;
use crate::error::DecodeError;
use tract_onnx::prelude::tract_ndarray::{s, Array4};

/// Raw decoded frames shaped (frames, channels, rows, cols), values 0..=255.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoClip {
    pub pixels: Array4<u8>,
}

impl VideoClip {
    /// Builds a clip from packed rows of interleaved channels, frame after
    /// frame, as ffmpeg writes raw video.
    pub fn from_packed(
        bytes: &[u8],
        rows: usize,
        cols: usize,
        channels: usize,
    ) -> Result<Self, DecodeError> {
        let frame_bytes = rows * cols * channels;
        if frame_bytes == 0 || bytes.len() % frame_bytes != 0 {
            return Err(DecodeError::PartialFrame {
                actual: bytes.len(),
                frame_bytes,
            });
        }

        let frames = bytes.len() / frame_bytes;
        let pixels = Array4::from_shape_fn((frames, channels, rows, cols), |(f, c, y, x)| {
            bytes[f * frame_bytes + (y * cols + x) * channels + c]
        });

        Ok(Self { pixels })
    }

    pub fn frame_count(&self) -> usize {
        self.pixels.shape()[0]
    }

    pub fn frame_image(&self, index: usize) -> Option<FrameImage> {
        if index >= self.frame_count() {
            return None;
        }

        let frame = self.pixels.slice(s![index, .., .., ..]);
        let (channels, rows, cols) = frame.dim();
        let mut rgb = Vec::with_capacity(rows * cols * 3);

        for y in 0..rows {
            for x in 0..cols {
                for c in 0..3 {
                    let channel = if channels >= 3 { c } else { 0 };
                    rgb.push(frame[[channel, y, x]]);
                }
            }
        }

        Some(FrameImage {
            width: cols,
            height: rows,
            rgb,
        })
    }
}
