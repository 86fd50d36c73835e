use crate::config::{Config, PixelFormat};
use crate::error::DecodeError;
use crate::library::logger::interface::Logger;
use crate::video_decoder::asset::VideoAsset;
use crate::video_decoder::interface::VideoDecoder;
use crate::video_decoder::video_clip::VideoClip;
use std::process::{Command, Stdio};
use std::sync::Arc;

/// Decodes clips by piping raw frames out of an `ffmpeg` process.
pub struct VideoDecoderFfmpeg {
    ffmpeg_path: String,
    frame_count: usize,
    rows: usize,
    cols: usize,
    pixel_format: PixelFormat,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl VideoDecoderFfmpeg {
    pub fn new(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            ffmpeg_path: config.ffmpeg_path.clone(),
            frame_count: config.frame_count,
            rows: config.frame_rows,
            cols: config.frame_cols,
            pixel_format: config.pixel_format,
            logger: logger.with_namespace("video_decoder").with_namespace("ffmpeg"),
        }
    }

    fn command(&self, asset: &VideoAsset) -> Command {
        let mut command = Command::new(&self.ffmpeg_path);
        command
            .arg("-v")
            .arg("error")
            .arg("-i")
            .arg(&asset.video_path)
            .arg("-vf")
            .arg(format!("scale={}:{}", self.cols, self.rows))
            .arg("-frames:v")
            .arg(self.frame_count.to_string())
            .arg("-f")
            .arg("rawvideo")
            .arg("-pix_fmt")
            .arg(self.pixel_format.ffmpeg_name())
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

impl VideoDecoder for VideoDecoderFfmpeg {
    fn decode(&self, asset: &VideoAsset) -> Result<VideoClip, DecodeError> {
        if !asset.video_path.exists() {
            return Err(DecodeError::MissingFile(asset.video_path.clone()));
        }

        let _ = self
            .logger
            .info(&format!("Decoding {}", asset.video_path.display()));

        let output = self.command(asset).output().map_err(DecodeError::Spawn)?;

        if !output.status.success() {
            return Err(DecodeError::Ffmpeg {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let clip = VideoClip::from_packed(
            &output.stdout,
            self.rows,
            self.cols,
            self.pixel_format.channels(),
        )?;

        if clip.frame_count() != self.frame_count {
            return Err(DecodeError::FrameCount {
                expected: self.frame_count,
                actual: clip.frame_count(),
            });
        }

        let _ = self
            .logger
            .info(&format!("Decoded {} frames", clip.frame_count()));

        Ok(clip)
    }
}
