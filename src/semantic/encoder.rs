// MiniLM sentence encoder backed by fastembed (ONNX)
use super::Embedder;
use crate::errors::{ChatError, ChatResult};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use parking_lot::Mutex;
use std::path::PathBuf;

/// all-MiniLM-L6-v2 output dimension.
pub const EMBEDDING_DIMENSION: usize = 384;

/// Local all-MiniLM-L6-v2 encoder. Loaded once at startup; the model
/// handle sits behind a mutex so one instance serves all workers.
pub struct MiniLmEncoder {
    model: Mutex<TextEmbedding>,
}

impl MiniLmEncoder {
    pub fn load(cache_dir: Option<&str>) -> ChatResult<Self> {
        let mut options =
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false);
        if let Some(dir) = cache_dir {
            options = options.with_cache_dir(PathBuf::from(dir));
        }

        let model = TextEmbedding::try_new(options)
            .map_err(|e| ChatError::Model(format!("failed to load embedding model: {}", e)))?;

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl Embedder for MiniLmEncoder {
    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }

    fn embed(&self, texts: &[String]) -> ChatResult<Vec<Vec<f32>>> {
        let mut model = self.model.lock();
        model
            .embed(texts.to_vec(), None)
            .map_err(|e| ChatError::Model(format!("embedding failed: {}", e)))
    }
}
