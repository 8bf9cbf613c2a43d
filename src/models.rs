use serde::{Deserialize, Serialize};

/// Name of the single form field the recognition route reads.
pub const IMAGE_FIELD: &str = "image_base64";

#[derive(Debug, Deserialize)]
pub struct RecognitionRequest {
    // Kept optional so a missing field surfaces as our own 422, not actix's.
    pub image_base64: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Prediction {
    pub prediction: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct WelcomeMessage {
    pub message: &'static str,
}
