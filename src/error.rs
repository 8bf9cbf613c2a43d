use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::recognizer::RecognitionError;

pub const EMPTY_IMAGE_DETAIL: &str = "O campo 'image_base64' não pode estar vazio.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", EMPTY_IMAGE_DETAIL)]
    EmptyImage,

    #[error("Field required: {0}")]
    MissingField(&'static str),

    #[error("Input should be a valid string: {0}")]
    NotText(&'static str),

    #[error("Invalid form body: {0}")]
    UnreadableForm(String),

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error("Erro ao processar a imagem: {0}")]
    Processing(#[from] RecognitionError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyImage => StatusCode::BAD_REQUEST,
            AppError::MissingField(_) | AppError::NotText(_) | AppError::UnreadableForm(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::MissingField(field) => json!([{
                "type": "missing",
                "loc": ["body", field],
                "msg": "Field required",
            }]),
            AppError::NotText(field) => json!([{
                "type": "string_type",
                "loc": ["body", field],
                "msg": "Input should be a valid string",
            }]),
            other => json!(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::EmptyImage.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::MissingField("image_base64").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::UnreadableForm("Content type error".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            AppError::from(RecognitionError::Inference("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn empty_image_message_is_the_detail() {
        assert_eq!(AppError::EmptyImage.to_string(), EMPTY_IMAGE_DETAIL);
    }

    #[test]
    fn processing_message_carries_cause() {
        let err = AppError::from(RecognitionError::Inference("model offline".into()));
        assert_eq!(err.to_string(), "Erro ao processar a imagem: model offline");
    }
}
