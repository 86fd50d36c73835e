use crate::shape_model::model_config::ModelConfig;
use chrono::Offset;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// For single-channel model exports; select it in `Config::pixel_format`.
    #[allow(dead_code)]
    Gray,
    Rgb,
}

impl PixelFormat {
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb => 3,
        }
    }

    pub fn ffmpeg_name(&self) -> &'static str {
        match self {
            PixelFormat::Gray => "gray",
            PixelFormat::Rgb => "rgb24",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub video_folder: PathBuf,
    pub video_count: usize,
    pub frame_count: usize,
    pub frame_rate: f64,
    pub frame_rows: usize,
    pub frame_cols: usize,
    pub pixel_format: PixelFormat,
    pub poll_rate: Duration,
    pub ffmpeg_path: String,
    pub load_ground_truth: bool,
    pub model: ModelConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Config {
    /// Length of a clip at the configured frame rate.
    pub fn clip_duration(&self, frame_count: usize) -> Duration {
        Duration::from_secs_f64(frame_count as f64 / self.frame_rate)
    }
}

impl Default for Config {
    fn default() -> Self {
        let video_folder = PathBuf::from("DL4JVideoShapesExample");
        let frame_count = 150;
        let frame_rows = 130;
        let frame_cols = 130;
        let pixel_format = PixelFormat::Rgb;

        Self {
            model: ModelConfig {
                onnx_model_path: video_folder.join("videomodel.onnx"),
                input_shape: (frame_count, pixel_format.channels(), frame_rows, frame_cols),
            },
            video_folder,
            video_count: 500,
            frame_count,
            frame_rate: 25.0,
            frame_rows,
            frame_cols,
            pixel_format,
            poll_rate: Duration::from_millis(25),
            ffmpeg_path: "ffmpeg".to_string(),
            load_ground_truth: true,
            logger_timezone: utc(),
        }
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
