use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::error::AppError;
use crate::form::ImageForm;
use crate::models::WelcomeMessage;
use crate::recognizer::Recognizer;

pub const WELCOME: &str = "Bem-vindo ao Gerenciador de Tarefas";

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Base64 images run far past actix's 16 KiB urlencoded default; the field has no size cap.
    cfg.app_data(web::FormConfig::default().limit(usize::MAX))
        .service(web::resource("/").route(web::get().to(read_root)))
        .service(web::resource("/face-recognize").route(web::post().to(face_recognize)));
}

pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeMessage { message: WELCOME })
}

#[tracing::instrument(
    name = "face_recognize",
    skip(recognizer, form),
    fields(request_id = %Uuid::new_v4())
)]
pub async fn face_recognize(
    recognizer: web::Data<dyn Recognizer>,
    form: ImageForm,
) -> Result<HttpResponse, AppError> {
    let ImageForm(image_base64) = form;

    // Only the exact empty string counts; whitespace goes on to the recognizer.
    if image_base64.is_empty() {
        tracing::warn!("Rejected request with empty image_base64");
        return Err(AppError::EmptyImage);
    }

    let result = recognizer.predict(&image_base64).map_err(|e| {
        tracing::error!(error = %e, "Recognizer failed");
        AppError::from(e)
    })?;

    tracing::info!(
        prediction = %result.prediction,
        confidence = result.confidence,
        input_len = image_base64.len(),
        "Face recognized"
    );

    Ok(HttpResponse::Ok().json(result))
}
