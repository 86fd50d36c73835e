use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    /// (frames, channels, rows, cols) of one clip; a batch axis of 1 is prepended.
    pub input_shape: (usize, usize, usize, usize),
}
