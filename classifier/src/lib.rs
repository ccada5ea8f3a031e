//! # classifier
//!
//! Image classification seam. [`ImageClassifier`] is the trait handlers
//! depend on; [`HttpInferenceClassifier`] is the production implementation
//! that delegates inference to an HTTP sidecar and pairs the returned
//! probabilities with the ImageNet label table.

use async_trait::async_trait;
use thiserror::Error;

mod http;

pub use http::HttpInferenceClassifier;

/// One ranked prediction: class label plus confidence in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Inference request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Class label table error: {0}")]
    Labels(String),

    #[error("Malformed inference response: {0}")]
    Malformed(String),
}

/// Classifies raw image bytes into ranked (label, confidence) predictions.
///
/// Implementations return at most `top_k` predictions, sorted by confidence
/// descending; fewer when the model has fewer classes.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(
        &self,
        image: &[u8],
        top_k: usize,
    ) -> Result<Vec<Prediction>, ClassifyError>;
}
