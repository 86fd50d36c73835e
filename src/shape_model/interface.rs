use crate::error::ModelError;
use crate::frame_classifier::normalize::VideoTensor;
use tract_onnx::prelude::tract_ndarray::Array2;

pub trait ShapeModel {
    /// Reads the artifact again, replacing whatever was loaded before.
    fn load(&self) -> Result<(), ModelError>;
    fn is_loaded(&self) -> bool;
    /// One forward pass in inference mode. Returns scores shaped (classes, frames).
    fn predict(&self, input: &VideoTensor) -> Result<Array2<f32>, ModelError>;
}
