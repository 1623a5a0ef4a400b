// HTTP surface - chat endpoints, health check, embedded front end
use crate::engine::ChatEngine;
use crate::errors::{ChatError, ErrorBody};
use actix_web::{error, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub confidence: f32,
    pub processing_time: f64,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

async fn chat(
    engine: web::Data<ChatEngine>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, ChatError> {
    respond(engine, req.into_inner().message).await
}

async fn query(
    engine: web::Data<ChatEngine>,
    req: web::Json<QueryRequest>,
) -> Result<HttpResponse, ChatError> {
    respond(engine, req.into_inner().query).await
}

/// Shared handler body for both chat endpoints. Inference blocks, so the
/// engine call runs on the blocking pool.
async fn respond(engine: web::Data<ChatEngine>, message: String) -> Result<HttpResponse, ChatError> {
    let start = Instant::now();

    if message.trim().is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    info!(message = %message, "received query");

    let engine = engine.into_inner();
    let outcome = web::block(move || engine.answer(&message))
        .await
        .map_err(|e| ChatError::Model(format!("worker pool error: {}", e)))??;

    let processing_time = (start.elapsed().as_secs_f64() * 1000.0).round() / 1000.0;
    info!(
        confidence = outcome.confidence,
        processing_time, "sending response"
    );

    Ok(HttpResponse::Ok().json(ChatResponse {
        response: outcome.response,
        confidence: outcome.confidence,
        processing_time,
        status: "success",
        suggestions: outcome.suggestions,
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "campus-assistant"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Malformed request bodies get the same JSON error envelope as every
/// other failure instead of the framework's plain-text default.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorBody {
        error: "Invalid JSON body".to_string(),
        response: "Please provide a message to process.".to_string(),
        status: "error".to_string(),
    };
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/chat", web::post().to(chat))
        .route("/api/query", web::post().to(query));
}
