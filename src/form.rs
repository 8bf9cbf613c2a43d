use actix_multipart::Multipart;
use actix_web::{
    dev::Payload,
    error::{PayloadError, UrlencodedError},
    http::header::CONTENT_TYPE,
    web, FromRequest, HttpRequest,
};
use futures_util::{future::LocalBoxFuture, StreamExt};

use crate::error::AppError;
use crate::models::{RecognitionRequest, IMAGE_FIELD};

/// The `image_base64` form field, read from either a urlencoded or a
/// multipart body. Presence is checked here; emptiness is the handler's call.
#[derive(Debug)]
pub struct ImageForm(pub String);

impl FromRequest for ImageForm {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_multipart(req) {
            let multipart = Multipart::new(req.headers(), payload.take());
            return Box::pin(read_multipart(multipart));
        }

        let form = web::Form::<RecognitionRequest>::from_request(req, payload);
        Box::pin(async move {
            let web::Form(request) = form.await.map_err(|e| {
                tracing::debug!(error = %e, "Unreadable urlencoded form");
                match e.as_error::<UrlencodedError>() {
                    Some(UrlencodedError::Overflow { .. })
                    | Some(UrlencodedError::Payload(PayloadError::Overflow)) => {
                        AppError::PayloadTooLarge
                    }
                    _ => AppError::UnreadableForm(e.to_string()),
                }
            })?;

            request
                .image_base64
                .map(ImageForm)
                .ok_or(AppError::MissingField(IMAGE_FIELD))
        })
    }
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn read_multipart(mut payload: Multipart) -> Result<ImageForm, AppError> {
    let mut image = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            tracing::debug!(error = %e, "Unreadable multipart form");
            AppError::UnreadableForm(e.to_string())
        })?;
        // First `image_base64` part wins; later ones are drained like any other field.
        let wanted =
            image.is_none() && field.content_disposition().get_name() == Some(IMAGE_FIELD);

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| {
                tracing::debug!(error = %e, "Multipart field read failed");
                AppError::UnreadableForm(e.to_string())
            })?;
            if wanted {
                data.extend_from_slice(&chunk);
            }
        }

        if wanted {
            image = Some(data);
        }
    }

    let data = image.ok_or(AppError::MissingField(IMAGE_FIELD))?;
    String::from_utf8(data)
        .map(ImageForm)
        .map_err(|_| AppError::NotText(IMAGE_FIELD))
}
