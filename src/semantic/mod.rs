// Semantic matching - embedder seam, cosine scoring, phrase index
pub mod encoder;
pub mod index;

pub use encoder::MiniLmEncoder;
pub use index::{PhraseIndex, RankedMatch};

use crate::errors::{ChatError, ChatResult};

/// Sentence embedding backend.
///
/// Production uses the local MiniLM model; tests plug in a deterministic
/// implementation so nothing is downloaded.
pub trait Embedder: Send + Sync {
    fn dimension(&self) -> usize;

    /// Embed a batch of texts, one vector per input, in input order.
    fn embed(&self, texts: &[String]) -> ChatResult<Vec<Vec<f32>>>;

    fn embed_one(&self, text: &str) -> ChatResult<Vec<f32>> {
        let mut vectors = self.embed(&[text.to_string()])?;
        vectors
            .pop()
            .ok_or_else(|| ChatError::Model("embedder returned no vector".to_string()))
    }
}

/// Cosine similarity; zero for mismatched, empty, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}
