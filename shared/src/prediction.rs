use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Base64 image data with the data URL prefix already removed.
#[derive(Debug, Clone, PartialEq, Eq, Display, From, Into)]
pub struct ImagePayload(String);

impl ImagePayload {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassifyRequest {
    pub image: String,
}

impl From<ImagePayload> for ClassifyRequest {
    fn from(payload: ImagePayload) -> Self {
        Self { image: payload.into() }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub label: String,
    pub confidence: f64,
}

impl Prediction {
    pub fn display_label(&self) -> String {
        capitalize_label(&self.label)
    }

    /// Confidence scaled to a percentage, not yet rounded.
    pub fn percent(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Percentage rounded to one decimal, ties away from zero.
    pub fn rounded_percent(&self) -> f64 {
        (self.percent() * 10.0).round() / 10.0
    }
}

/// Renders as `Cat: 93.2%`.
impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.1}%", self.display_label(), self.rounded_percent())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassifyResponse {
    pub predictions: Vec<Prediction>,
}

impl ClassifyResponse {
    /// Rejects labels that are blank and confidences outside `[0, 1]`.
    pub fn validate(self) -> Result<Self, SchemaError> {
        for (index, prediction) in self.predictions.iter().enumerate() {
            if prediction.label.trim().is_empty() {
                return Err(SchemaError::EmptyLabel { index });
            }
            let value = prediction.confidence;
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SchemaError::ConfidenceOutOfRange { index, value });
            }
        }
        Ok(self)
    }
}

/// Body the classifier sends back when it refuses a request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    /// Pulls the `error` message out of a response body, if it has one.
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body).ok().map(|body| body.error)
    }
}

/// Either shape the classify endpoint may answer with.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ClassifyReply {
    Predictions(ClassifyResponse),
    Failure(ApiErrorBody),
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed classify response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("classifier rejected the image: {0}")]
    Rejected(String),
    #[error("prediction {index} has an empty label")]
    EmptyLabel { index: usize },
    #[error("prediction {index} has confidence {value} outside [0, 1]")]
    ConfidenceOutOfRange { index: usize, value: f64 },
}

/// Decodes and validates the body of a successful classify call.
pub fn parse_classify_reply(body: &str) -> Result<ClassifyResponse, SchemaError> {
    match serde_json::from_str::<ClassifyReply>(body)? {
        ClassifyReply::Predictions(response) => response.validate(),
        ClassifyReply::Failure(ApiErrorBody { error }) => Err(SchemaError::Rejected(error)),
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
