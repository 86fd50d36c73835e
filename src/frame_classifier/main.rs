use crate::error::{ClassifyError, ModelError};
use crate::frame_classifier::normalize::VideoTensor;
use crate::frame_classifier::prediction_table::PredictionTable;
use crate::library::logger::interface::Logger;
use crate::shape_model::interface::ShapeModel;
use std::sync::Arc;

#[derive(Clone)]
pub struct FrameClassifier {
    model: Arc<dyn ShapeModel + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameClassifier {
    pub fn new(
        model: Arc<dyn ShapeModel + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            model,
            logger: logger.with_namespace("frame_classifier"),
        }
    }

    pub fn reload(&self) -> Result<(), ModelError> {
        self.model.load()
    }

    /// Runs the model once over a whole clip. `input` must already be
    /// normalized.
    pub fn classify(&self, input: &VideoTensor) -> Result<PredictionTable, ClassifyError> {
        if !self.model.is_loaded() {
            return Err(ClassifyError::ModelUnavailable);
        }

        if input.is_empty() {
            return Err(ClassifyError::InvalidInput(format!(
                "empty clip tensor {:?}",
                input.data.shape()
            )));
        }

        let _ = self.logger.info(&format!(
            "Classifying {} frames shaped {:?}",
            input.frame_count(),
            input.data.shape()
        ));

        let scores = self.model.predict(input)?;
        let table = PredictionTable::new(scores)?;

        if table.frame_count() != input.frame_count() {
            return Err(ClassifyError::Inference(format!(
                "model scored {} frames, clip has {}",
                table.frame_count(),
                input.frame_count()
            )));
        }

        Ok(table)
    }
}
