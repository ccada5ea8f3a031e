//! HTTP inference backend: posts the base64 image to an inference service and
//! ranks the returned class probabilities against the ImageNet label table.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::info;

use crate::{ClassifyError, ImageClassifier, Prediction};

/// Standard ImageNet class-name list published with the torchvision models.
const DEFAULT_LABELS_URL: &str =
    "https://raw.githubusercontent.com/pytorch/hub/master/imagenet_classes.txt";

/// Classifier backed by an HTTP inference service.
///
/// The label table is fetched once on first use and cached for the process
/// lifetime; concurrent first calls race on the same `OnceCell`, so the fetch
/// runs at most once.
pub struct HttpInferenceClassifier {
    client: Client,
    inference_url: String,
    labels_url: String,
    labels: OnceCell<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    image_data: String,
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    /// Class probabilities, one per label, each in [0, 1].
    predictions: Vec<f32>,
}

impl HttpInferenceClassifier {
    /// Creates a classifier for the given inference endpoint, with the
    /// standard ImageNet label source.
    pub fn new(inference_url: String) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            inference_url,
            labels_url: DEFAULT_LABELS_URL.to_string(),
            labels: OnceCell::new(),
        }
    }

    /// Overrides the label-table source (e.g. a mirror or a local server).
    pub fn with_labels_url(mut self, labels_url: String) -> Self {
        self.labels_url = labels_url;
        self
    }

    /// Returns the cached label table, fetching it on first use.
    async fn labels(&self) -> Result<&Vec<String>, ClassifyError> {
        self.labels
            .get_or_try_init(|| self.fetch_labels())
            .await
    }

    async fn fetch_labels(&self) -> Result<Vec<String>, ClassifyError> {
        let response = self.client.get(&self.labels_url).send().await?;
        if !response.status().is_success() {
            return Err(ClassifyError::Labels(format!(
                "label fetch returned {}",
                response.status()
            )));
        }
        let body = response.text().await?;
        let labels: Vec<String> = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if labels.is_empty() {
            return Err(ClassifyError::Labels(
                "label table is empty".to_string(),
            ));
        }
        info!(count = labels.len(), url = %self.labels_url, "Class label table loaded");
        Ok(labels)
    }
}

/// Pairs probabilities with labels, sorts by confidence descending, and keeps
/// at most `top_k` entries. Confidences are clamped into [0, 1].
fn rank_predictions(probabilities: &[f32], labels: &[String], top_k: usize) -> Vec<Prediction> {
    let mut ranked: Vec<Prediction> = probabilities
        .iter()
        .zip(labels.iter())
        .map(|(p, label)| Prediction {
            label: label.clone(),
            confidence: p.clamp(0.0, 1.0),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_k.min(ranked.len()));
    ranked
}

#[async_trait]
impl ImageClassifier for HttpInferenceClassifier {
    async fn classify(
        &self,
        image: &[u8],
        top_k: usize,
    ) -> Result<Vec<Prediction>, ClassifyError> {
        let labels = self.labels().await?;

        let request = InferenceRequest {
            image_data: BASE64.encode(image),
        };
        let response = self
            .client
            .post(&self.inference_url)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Api { status, body });
        }

        let inference: InferenceResponse = response
            .json()
            .await
            .map_err(|e| ClassifyError::Malformed(e.to_string()))?;

        if inference.predictions.is_empty() {
            return Err(ClassifyError::Malformed(
                "empty prediction vector".to_string(),
            ));
        }

        let ranked = rank_predictions(&inference.predictions, labels, top_k);
        if let Some(top) = ranked.first() {
            info!(
                top_label = %top.label,
                top_confidence = top.confidence,
                returned = ranked.len(),
                "Image classified"
            );
        }
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rank_sorts_descending_and_truncates_to_top_k() {
        let ranked = rank_predictions(
            &[0.02, 0.95, 0.03],
            &labels(&["bird", "cat", "dog"]),
            2,
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "cat");
        assert_eq!(ranked[1].label, "dog");
    }

    #[test]
    fn rank_returns_fewer_when_classes_run_out() {
        let ranked = rank_predictions(&[0.6, 0.4], &labels(&["cat", "dog"]), 5);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn rank_clamps_confidence_into_unit_interval() {
        let ranked = rank_predictions(&[1.2, -0.1], &labels(&["cat", "dog"]), 2);
        assert_eq!(ranked[0].confidence, 1.0);
        assert_eq!(ranked[1].confidence, 0.0);
    }

    #[test]
    fn rank_zip_truncates_on_count_mismatch() {
        // Three probabilities, two labels: the unpaired tail is dropped.
        let ranked = rank_predictions(&[0.5, 0.3, 0.2], &labels(&["cat", "dog"]), 5);
        assert_eq!(ranked.len(), 2);
    }
}
