// Campus Assistant Service Entry Point
// Loads the embedding model, indexes the knowledge base, and serves the
// chat API plus the embedded front end.
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use campus_assistant::{api, ChatEngine, ServiceConfig};
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting campus assistant service");

    // Load configuration
    dotenv::dotenv().ok();
    let config = ServiceConfig::from_env()?;

    // Model load and index build block; keep them off the runtime threads
    info!("Loading embedding model and indexing knowledge base");
    let engine = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || ChatEngine::new(&config)).await??
    };
    info!(
        topics = engine.topic_count(),
        phrases = engine.index_len(),
        "Knowledge base indexed"
    );

    let engine = web::Data::new(engine);
    let bind_addr = (config.host.clone(), config.port);

    info!("Listening on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(engine.clone())
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(api::configure)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
