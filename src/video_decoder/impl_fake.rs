use crate::config::Config;
use crate::error::DecodeError;
use crate::frame_classifier::label::ShapeLabel;
use crate::library::logger::interface::Logger;
use crate::video_decoder::asset::VideoAsset;
use crate::video_decoder::interface::VideoDecoder;
use crate::video_decoder::video_clip::VideoClip;
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray::Array4;

/// Synthesizes a clip whose brightness ramps from frame to frame.
pub struct VideoDecoderFake {
    frame_count: usize,
    channels: usize,
    rows: usize,
    cols: usize,
    failing: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl VideoDecoderFake {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            frame_count: config.frame_count,
            channels: config.pixel_format.channels(),
            rows: config.frame_rows,
            cols: config.frame_cols,
            failing: false,
            logger: logger.with_namespace("video_decoder").with_namespace("fake"),
        }
    }

    /// Behaves as if no clip exists for any index.
    pub fn failing(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            failing: true,
            ..Self::new(config, logger)
        }
    }
}

impl VideoDecoder for VideoDecoderFake {
    fn decode(&self, asset: &VideoAsset) -> Result<VideoClip, DecodeError> {
        let _ = self.logger.info(&format!("Decoding clip {}", asset.index));

        if self.failing {
            return Err(DecodeError::MissingFile(asset.video_path.clone()));
        }

        let frame_count = self.frame_count.max(1);
        let pixels = Array4::from_shape_fn(
            (frame_count, self.channels, self.rows, self.cols),
            |(f, _, _, _)| ((f * 255) / frame_count) as u8,
        );

        Ok(VideoClip { pixels })
    }

    fn read_labels(&self, asset: &VideoAsset) -> Result<Vec<ShapeLabel>, DecodeError> {
        if self.failing {
            return Err(DecodeError::MissingFile(asset.label_path.clone()));
        }

        Ok((0..self.frame_count)
            .map(|frame| ShapeLabel::ALL[(asset.index + frame) % ShapeLabel::ALL.len()])
            .collect())
    }
}
