//! Wire types for the Replicate prediction API.

use derive_getters::Getters;
use lookbook_error::{ProviderError, ProviderErrorKind};
use serde::{Deserialize, Serialize};

/// Terminal and in-flight prediction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl PredictionStatus {
    /// Whether the prediction will make no further progress.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PredictionStatus::Succeeded | PredictionStatus::Failed | PredictionStatus::Canceled
        )
    }
}

/// A prediction record as returned by the API.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct Prediction {
    /// Prediction identifier.
    id: String,
    /// Current status.
    status: PredictionStatus,
    /// Model output, present once the prediction succeeds.
    #[serde(default)]
    output: Option<serde_json::Value>,
    /// Error message, present once the prediction fails.
    #[serde(default)]
    error: Option<String>,
}

impl Prediction {
    /// Extract the first output image URL.
    ///
    /// Replicate models return a bare string, an array of strings, or a
    /// file object carrying a `url` field.
    ///
    /// # Errors
    ///
    /// Returns `ResponseParsing` when no URL can be extracted.
    pub fn output_url(&self) -> Result<String, ProviderError> {
        let output = self.output.as_ref().ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(
                "prediction succeeded without output".into(),
            ))
        })?;
        extract_url(output).ok_or_else(|| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(format!(
                "unexpected output format: {output}"
            )))
        })
    }
}

fn extract_url(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items.first().and_then(extract_url),
        serde_json::Value::Object(map) => map
            .get("url")
            .or_else(|| map.get("href"))
            .and_then(extract_url),
        _ => None,
    }
}

/// Body for creating a prediction.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PredictionRequest<'a> {
    pub version: &'a str,
    pub input: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_output() {
        let prediction: Prediction = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "status": "succeeded",
            "output": "https://replicate.delivery/out.png",
        }))
        .unwrap();
        assert_eq!(
            prediction.output_url().unwrap(),
            "https://replicate.delivery/out.png"
        );
    }

    #[test]
    fn parses_array_output() {
        let prediction: Prediction = serde_json::from_value(serde_json::json!({
            "id": "p2",
            "status": "succeeded",
            "output": ["https://replicate.delivery/a.png", "https://replicate.delivery/b.png"],
        }))
        .unwrap();
        assert_eq!(
            prediction.output_url().unwrap(),
            "https://replicate.delivery/a.png"
        );
    }

    #[test]
    fn parses_file_object_output() {
        let prediction: Prediction = serde_json::from_value(serde_json::json!({
            "id": "p3",
            "status": "succeeded",
            "output": {"url": "https://replicate.delivery/c.png"},
        }))
        .unwrap();
        assert_eq!(
            prediction.output_url().unwrap(),
            "https://replicate.delivery/c.png"
        );
    }

    #[test]
    fn rejects_numeric_output() {
        let prediction: Prediction = serde_json::from_value(serde_json::json!({
            "id": "p4",
            "status": "succeeded",
            "output": 7,
        }))
        .unwrap();
        assert!(prediction.output_url().is_err());
    }

    #[test]
    fn terminal_states() {
        assert!(PredictionStatus::Succeeded.is_terminal());
        assert!(PredictionStatus::Failed.is_terminal());
        assert!(PredictionStatus::Canceled.is_terminal());
        assert!(!PredictionStatus::Starting.is_terminal());
        assert!(!PredictionStatus::Processing.is_terminal());
    }
}
