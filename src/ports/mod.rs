//! Ports - boundary interfaces implemented by adapters.

mod predictor;
mod session_store;

pub use predictor::{BurnoutPredictor, FeatureFrame, ModelInfo, PredictorError};
pub use session_store::{SessionStore, SessionStoreError};
