use crate::video_decoder::video_clip::VideoClip;
use tract_onnx::prelude::tract_ndarray::Array4;

/// Normalized frames, shaped (frames, channels, rows, cols) with values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct VideoTensor {
    pub data: Array4<f32>,
}

impl VideoTensor {
    pub fn frame_count(&self) -> usize {
        self.data.shape()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

pub fn normalize_pixel(value: u8) -> f32 {
    value as f32 / 255.0
}

/// Maps raw channel values from [0, 255] to [0, 1]. Must run exactly once
/// before inference.
pub fn normalize(clip: &VideoClip) -> VideoTensor {
    VideoTensor {
        data: clip.pixels.mapv(normalize_pixel),
    }
}
