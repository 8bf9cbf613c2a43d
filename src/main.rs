mod error;
mod form;
mod handlers;
mod models;
mod recognizer;
mod settings;
mod telemetry;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use recognizer::{MockRecognizer, Recognizer};
use settings::Settings;

const SERVICE_TITLE: &str = "Gerenciador de Tarefas com Mock de IA";

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    telemetry::init_tracing(&settings.log_level, settings.json_logs);

    // Swap in a model-backed recognizer here; routes only see the trait.
    let recognizer: Arc<dyn Recognizer> = Arc::new(MockRecognizer);
    let recognizer = web::Data::from(recognizer);

    let address = settings.address();
    tracing::info!(service = SERVICE_TITLE, %address, "Server running");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(recognizer.clone())
            .configure(handlers::configure)
    })
    .bind(address)?
    .run()
    .await
}
