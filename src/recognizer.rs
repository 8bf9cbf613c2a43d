use thiserror::Error;

use crate::models::Prediction;

pub const KNOWN_LABEL: &str = "John Doe";
pub const KNOWN_CONFIDENCE: f64 = 0.98;
pub const UNKNOWN_LABEL: &str = "Unknown Person";
pub const UNKNOWN_CONFIDENCE: f64 = 0.60;

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("{0}")]
    Inference(String),
}

/// Turns the raw `image_base64` text of a request into a prediction.
///
/// Handlers only see this trait, so a model-backed implementation (decode,
/// preprocess, run) can replace [`MockRecognizer`] without touching routing
/// or validation.
pub trait Recognizer: Send + Sync {
    fn predict(&self, image_data: &str) -> Result<Prediction, RecognitionError>;
}

/// Substring heuristic: anything mentioning "john", in any casing, is John Doe.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockRecognizer;

impl Recognizer for MockRecognizer {
    fn predict(&self, image_data: &str) -> Result<Prediction, RecognitionError> {
        let (label, confidence) = if image_data.to_lowercase().contains("john") {
            (KNOWN_LABEL, KNOWN_CONFIDENCE)
        } else {
            (UNKNOWN_LABEL, UNKNOWN_CONFIDENCE)
        };

        Ok(Prediction {
            prediction: label.to_string(),
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict(input: &str) -> Prediction {
        MockRecognizer.predict(input).unwrap()
    }

    #[test]
    fn mentions_of_john_in_any_case_are_known() {
        for input in ["john", "JOHN", "XyzJOHNxyz", "photo_of_John.jpg", "aGVsbG8=john"] {
            let result = predict(input);
            assert_eq!(result.prediction, KNOWN_LABEL, "input: {input}");
            assert_eq!(result.confidence, KNOWN_CONFIDENCE);
        }
    }

    #[test]
    fn everything_else_is_unknown() {
        for input in ["xyzxyz", " ", "jon", "j o h n", "aGVsbG8gd29ybGQ="] {
            let result = predict(input);
            assert_eq!(result.prediction, UNKNOWN_LABEL, "input: {input}");
            assert_eq!(result.confidence, UNKNOWN_CONFIDENCE);
        }
    }

    #[test]
    fn same_input_same_answer() {
        assert_eq!(predict("JoHn"), predict("JoHn"));
        assert_eq!(predict("abc"), predict("abc"));
    }
}
