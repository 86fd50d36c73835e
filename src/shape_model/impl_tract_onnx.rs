use crate::error::ModelError;
use crate::frame_classifier::normalize::VideoTensor;
use crate::library::logger::interface::Logger;
use crate::shape_model::interface::ShapeModel;
use crate::shape_model::model_config::ModelConfig;
use std::sync::{Arc, RwLock};
use tract_onnx::prelude::tract_ndarray::{Array2, Axis, Ix2};
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

pub struct ShapeModelTractOnnx {
    config: ModelConfig,
    plan: RwLock<Option<Plan>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ShapeModelTractOnnx {
    pub fn new(config: ModelConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            plan: RwLock::new(None),
            logger: logger.with_namespace("shape_model").with_namespace("tract"),
        }
    }

    fn build_plan(&self) -> TractResult<Plan> {
        let (frames, channels, rows, cols) = self.config.input_shape;

        tract_onnx::onnx()
            .model_for_path(&self.config.onnx_model_path)?
            .with_input_fact(0, f32::fact([1, frames, channels, rows, cols]).into())?
            .into_optimized()?
            .into_runnable()
    }
}

impl ShapeModel for ShapeModelTractOnnx {
    fn load(&self) -> Result<(), ModelError> {
        let path = &self.config.onnx_model_path;
        let _ = self.logger.info(&format!("Loading model from {}", path.display()));

        let built = if path.exists() {
            self.build_plan()
                .map_err(|e| ModelError::Load(e.to_string()))
        } else {
            Err(ModelError::NotFound(path.clone()))
        };

        let mut slot = self
            .plan
            .write()
            .map_err(|e| ModelError::Load(e.to_string()))?;

        // A failed load drops the previous plan too.
        match built {
            Ok(plan) => {
                *slot = Some(plan);
                let _ = self.logger.info("Model loaded");
                Ok(())
            }
            Err(e) => {
                *slot = None;
                Err(e)
            }
        }
    }

    fn is_loaded(&self) -> bool {
        self.plan.read().map(|plan| plan.is_some()).unwrap_or(false)
    }

    fn predict(&self, input: &VideoTensor) -> Result<Array2<f32>, ModelError> {
        let slot = self
            .plan
            .read()
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        let plan = slot.as_ref().ok_or(ModelError::Unavailable)?;

        let batch = input.data.clone().insert_axis(Axis(0)).into_tensor();

        let outputs = plan
            .run(tvec!(batch.into_tvalue()))
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ModelError::Inference("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        // Recurrent output is (batch, classes, frames); drop the batch axis.
        let scores = match output.ndim() {
            3 if output.shape()[0] == 1 => output.index_axis(Axis(0), 0),
            2 => output.view(),
            _ => {
                return Err(ModelError::Inference(format!(
                    "unexpected output shape {:?}",
                    output.shape()
                )))
            }
        };

        scores
            .into_dimensionality::<Ix2>()
            .map(|scores| scores.to_owned())
            .map_err(|e| ModelError::Inference(e.to_string()))
    }
}
