use crate::error::ClassifyError;
use crate::frame_classifier::label::ShapeLabel;
use std::time::Duration;
use tract_onnx::prelude::tract_ndarray::{Array2, ArrayView1, Axis};

/// Per-class scores for every frame of one clip: one row per class, one
/// column per frame. Scores are not required to be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTable {
    scores: Array2<f32>,
}

impl PredictionTable {
    pub fn new(scores: Array2<f32>) -> Result<Self, ClassifyError> {
        if scores.nrows() != ShapeLabel::ALL.len() {
            return Err(ClassifyError::Inference(format!(
                "expected {} class rows, got {}",
                ShapeLabel::ALL.len(),
                scores.nrows()
            )));
        }

        Ok(Self { scores })
    }

    pub fn frame_count(&self) -> usize {
        self.scores.ncols()
    }

    pub fn scores_at(&self, frame_index: usize) -> Option<ArrayView1<'_, f32>> {
        if frame_index >= self.frame_count() {
            return None;
        }
        Some(self.scores.index_axis(Axis(1), frame_index))
    }

    /// Label with the greatest score at `frame_index`, or `None` past the last
    /// scored frame.
    pub fn label_for_frame(&self, frame_index: usize) -> Option<ShapeLabel> {
        let scores = self.scores_at(frame_index)?;
        arg_max(scores.iter().copied()).and_then(ShapeLabel::from_index)
    }
}

/// Index of the strictly greatest value; the first index wins ties.
pub fn arg_max(values: impl IntoIterator<Item = f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, value) in values.into_iter().enumerate() {
        let is_greater = match best {
            Some((_, max)) => value > max,
            None => true,
        };
        if is_greater {
            best = Some((index, value));
        }
    }

    best.map(|(index, _)| index)
}

pub fn frame_index_at(elapsed: Duration, frame_rate: f64) -> usize {
    (elapsed.as_secs_f64() * frame_rate).floor() as usize
}
