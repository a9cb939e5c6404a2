//! Mock predictor for testing.
//!
//! Configurable to return queued score sequences or inject backend
//! failures, with call tracking for verifying that the predictor was (or
//! was not) invoked.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{BurnoutPredictor, FeatureFrame, ModelInfo, PredictorError};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockPrediction {
    /// Return this score sequence.
    Scores(Vec<f64>),
    /// Fail with a backend error carrying this message.
    Failure(String),
}

/// Mock prediction backend.
///
/// Responses are consumed in order; once the queue is empty, a neutral
/// mid-range score is returned.
#[derive(Debug, Clone)]
pub struct MockPredictor {
    responses: Arc<Mutex<VecDeque<MockPrediction>>>,
    calls: Arc<Mutex<Vec<FeatureFrame>>>,
}

impl Default for MockPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPredictor {
    /// Creates a mock with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a single-score response.
    pub fn with_score(self, score: f64) -> Self {
        self.with_scores(vec![score])
    }

    /// Queues a full score sequence.
    pub fn with_scores(self, scores: Vec<f64>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockPrediction::Scores(scores));
        self
    }

    /// Queues a backend failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockPrediction::Failure(message.into()));
        self
    }

    /// Number of predict calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Copies of the frames received, in call order.
    pub fn calls(&self) -> Vec<FeatureFrame> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BurnoutPredictor for MockPredictor {
    async fn predict(&self, input: &FeatureFrame) -> Result<Vec<f64>, PredictorError> {
        self.calls.lock().unwrap().push(input.clone());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockPrediction::Scores(scores)) => Ok(scores),
            Some(MockPrediction::Failure(message)) => Err(PredictorError::Backend(message)),
            None => Ok(vec![50.0]),
        }
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo::new("mock", "mock-1", 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_frame() -> FeatureFrame {
        FeatureFrame::single_row(vec!["x".to_string()], vec![1.0]).unwrap()
    }

    #[tokio::test]
    async fn returns_queued_scores_in_order() {
        let mock = MockPredictor::new().with_score(35.0).with_score(90.0);

        assert_eq!(mock.predict(&any_frame()).await.unwrap(), vec![35.0]);
        assert_eq!(mock.predict(&any_frame()).await.unwrap(), vec![90.0]);
    }

    #[tokio::test]
    async fn returns_neutral_score_when_queue_is_empty() {
        let mock = MockPredictor::new();
        assert_eq!(mock.predict(&any_frame()).await.unwrap(), vec![50.0]);
    }

    #[tokio::test]
    async fn injected_failure_surfaces_its_message() {
        let mock = MockPredictor::new().with_failure("model artifact corrupted");
        let err = mock.predict(&any_frame()).await.unwrap_err();
        assert_eq!(
            err,
            PredictorError::Backend("model artifact corrupted".to_string())
        );
    }

    #[tokio::test]
    async fn tracks_received_frames() {
        let mock = MockPredictor::new().with_score(1.0);
        mock.predict(&any_frame()).await.unwrap();

        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0].value_of("x"), Some(1.0));
    }
}
