use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model artifact not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load model: {0}")]
    Load(String),
    #[error("Model is not loaded")]
    Unavailable,
    #[error("Inference failed: {0}")]
    Inference(String),
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Media file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Failed to run ffmpeg: {0}")]
    Spawn(std::io::Error),
    #[error("ffmpeg exited with {status}: {stderr}")]
    Ffmpeg { status: String, stderr: String },
    #[error("Decoded {actual} bytes, not a whole number of {frame_bytes} byte frames")]
    PartialFrame { actual: usize, frame_bytes: usize },
    #[error("Expected {expected} frames, decoded {actual}")]
    FrameCount { expected: usize, actual: usize },
    #[error("Failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, std::io::Error),
    #[error("Invalid label on line {line}: {reason}")]
    Label { line: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Model unavailable")]
    ModelUnavailable,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Inference failed: {0}")]
    Inference(String),
}

impl From<ModelError> for ClassifyError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Unavailable => ClassifyError::ModelUnavailable,
            ModelError::NotFound(_) | ModelError::Load(_) => ClassifyError::ModelUnavailable,
            ModelError::Inference(message) => ClassifyError::Inference(message),
        }
    }
}

/// Why a video load ended without playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ModelUnavailable,
    MediaDecode,
    Inference,
}

impl From<&ClassifyError> for FailureKind {
    fn from(error: &ClassifyError) -> Self {
        match error {
            ClassifyError::ModelUnavailable => FailureKind::ModelUnavailable,
            ClassifyError::InvalidInput(_) | ClassifyError::Inference(_) => FailureKind::Inference,
        }
    }
}
