use crate::error::ModelError;
use crate::frame_classifier::label::ShapeLabel;
use crate::frame_classifier::normalize::VideoTensor;
use crate::library::logger::interface::Logger;
use crate::shape_model::interface::ShapeModel;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray::Array2;

pub struct ShapeModelFake {
    logger: Arc<dyn Logger + Send + Sync>,
    scores: Option<Array2<f32>>,
    loadable: AtomicBool,
    loaded: AtomicBool,
    predict_calls: AtomicUsize,
}

impl ShapeModelFake {
    /// Produces random scores sized to whatever clip it is given.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("shape_model").with_namespace("fake"),
            scores: None,
            loadable: AtomicBool::new(true),
            loaded: AtomicBool::new(false),
            predict_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_scores(logger: Arc<dyn Logger + Send + Sync>, scores: Array2<f32>) -> Self {
        Self {
            scores: Some(scores),
            ..Self::new(logger)
        }
    }

    /// A model whose artifact can never be loaded.
    pub fn unloadable(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            loadable: AtomicBool::new(false),
            ..Self::new(logger)
        }
    }

    /// Makes the next `load` succeed or fail, as if the artifact changed on disk.
    pub fn set_loadable(&self, loadable: bool) {
        self.loadable.store(loadable, Ordering::SeqCst);
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    fn random_scores(frame_count: usize) -> Result<Array2<f32>, ModelError> {
        let mut rng = rand::rng();
        let score_dist =
            Uniform::new(0.0f32, 1.0).map_err(|e| ModelError::Inference(e.to_string()))?;

        Ok(Array2::from_shape_fn(
            (ShapeLabel::ALL.len(), frame_count),
            |_| score_dist.sample(&mut rng),
        ))
    }
}

impl ShapeModel for ShapeModelFake {
    fn load(&self) -> Result<(), ModelError> {
        self.logger
            .info("Loading fake model...")
            .map_err(|e| ModelError::Load(e.to_string()))?;

        if !self.loadable.load(Ordering::SeqCst) {
            self.loaded.store(false, Ordering::SeqCst);
            return Err(ModelError::Load("fake model is not loadable".to_string()));
        }

        self.loaded.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    fn predict(&self, input: &VideoTensor) -> Result<Array2<f32>, ModelError> {
        if !self.is_loaded() {
            return Err(ModelError::Unavailable);
        }

        self.predict_calls.fetch_add(1, Ordering::SeqCst);

        match &self.scores {
            Some(scores) => Ok(scores.clone()),
            None => Self::random_scores(input.frame_count()),
        }
    }
}
