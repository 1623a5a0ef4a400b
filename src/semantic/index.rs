// Phrase index - embeddings for every knowledge-base candidate phrase
//
// Built once at startup; queries are ranked against it with a linear
// cosine scan. The record set is small enough that nothing fancier is
// warranted.
use super::{cosine_similarity, Embedder};
use crate::errors::{ChatError, ChatResult};
use crate::kb::{CandidatePhrase, KnowledgeBase};

pub struct PhraseIndex {
    entries: Vec<IndexEntry>,
}

pub struct IndexEntry {
    pub phrase: CandidatePhrase,
    pub vector: Vec<f32>,
}

/// One scored index entry for a query.
#[derive(Clone, Copy)]
pub struct RankedMatch<'a> {
    pub entry: &'a IndexEntry,
    pub score: f32,
}

impl PhraseIndex {
    pub fn build(kb: &KnowledgeBase, embedder: &dyn Embedder) -> ChatResult<Self> {
        let phrases = kb.candidate_phrases();
        let texts: Vec<String> = phrases.iter().map(|p| p.text.clone()).collect();
        let vectors = embedder.embed(&texts)?;

        if vectors.len() != phrases.len() {
            return Err(ChatError::Model(format!(
                "embedder returned {} vectors for {} phrases",
                vectors.len(),
                phrases.len()
            )));
        }

        let dimension = embedder.dimension();
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
            return Err(ChatError::Model(format!(
                "embedder returned a {}-dim vector, expected {}",
                bad.len(),
                dimension
            )));
        }

        let entries = phrases
            .into_iter()
            .zip(vectors)
            .map(|(phrase, vector)| IndexEntry { phrase, vector })
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score every entry against the query vector and return the top
    /// matches, best first.
    pub fn rank(&self, query_vector: &[f32], top_k: usize) -> Vec<RankedMatch<'_>> {
        let mut ranked: Vec<RankedMatch<'_>> = self
            .entries
            .iter()
            .map(|entry| RankedMatch {
                entry,
                score: cosine_similarity(query_vector, &entry.vector),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(top_k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::Embedder;

    /// Deterministic bag-of-words embedder for tests.
    struct HashedEmbedder;

    impl Embedder for HashedEmbedder {
        fn dimension(&self) -> usize {
            64
        }

        fn embed(&self, texts: &[String]) -> ChatResult<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|text| {
                    let mut v = vec![0.0_f32; 64];
                    for word in text
                        .split(|c: char| !c.is_alphanumeric())
                        .filter(|w| !w.is_empty())
                    {
                        let word = word.to_lowercase();
                        let mut h: usize = 0;
                        for b in word.bytes() {
                            h = h.wrapping_mul(31).wrapping_add(b as usize);
                        }
                        v[h % 64] += 1.0;
                    }
                    v
                })
                .collect())
        }
    }

    #[test]
    fn rank_puts_closest_phrase_first() {
        let kb = KnowledgeBase::builtin();
        let embedder = HashedEmbedder;
        let index = PhraseIndex::build(&kb, &embedder).unwrap();
        assert!(!index.is_empty());

        let query = embedder
            .embed_one("state of the art facility housing research labs")
            .unwrap();
        let ranked = index.rank(&query, 5);

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].entry.phrase.topic.name, "Tech Park");
        assert!(ranked[0].score > ranked[4].score);
    }

    #[test]
    fn build_rejects_vectors_of_the_wrong_dimension() {
        /// Claims one dimension, produces another.
        struct MisreportingEmbedder;

        impl Embedder for MisreportingEmbedder {
            fn dimension(&self) -> usize {
                384
            }

            fn embed(&self, texts: &[String]) -> ChatResult<Vec<Vec<f32>>> {
                Ok(texts.iter().map(|_| vec![1.0; 64]).collect())
            }
        }

        let kb = KnowledgeBase::builtin();
        let result = PhraseIndex::build(&kb, &MisreportingEmbedder);
        assert!(matches!(result, Err(ChatError::Model(_))));
    }

    #[test]
    fn rank_handles_top_k_larger_than_index() {
        let kb = KnowledgeBase::builtin();
        let index = PhraseIndex::build(&kb, &HashedEmbedder).unwrap();
        let ranked = index.rank(&vec![0.0; 64], index.len() + 100);
        assert_eq!(ranked.len(), index.len());
    }
}
