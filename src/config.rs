// Service configuration
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,

    // Matching thresholds
    pub similarity_threshold: f32,
    pub suggestion_threshold: f32,
    pub max_suggestions: usize,

    // Where fastembed caches the downloaded ONNX model
    pub model_cache_dir: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,

            similarity_threshold: std::env::var("SIMILARITY_THRESHOLD")
                .unwrap_or_else(|_| "0.6".to_string())
                .parse()?,
            suggestion_threshold: std::env::var("SUGGESTION_THRESHOLD")
                .unwrap_or_else(|_| "0.5".to_string())
                .parse()?,
            max_suggestions: std::env::var("MAX_SUGGESTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,

            model_cache_dir: std::env::var("MODEL_CACHE_DIR").ok(),
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            similarity_threshold: 0.6,
            suggestion_threshold: 0.5,
            max_suggestions: 5,
            model_cache_dir: None,
        }
    }
}
