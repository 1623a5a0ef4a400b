// Chat engine - the per-request answer pipeline
//
// normalize -> greeting -> intent -> admission routing -> exact mention ->
// embed + rank -> threshold decision -> format. One linear pass, no state
// kept between requests.

pub mod format;

use crate::config::ServiceConfig;
use crate::errors::{ChatError, ChatResult};
use crate::kb::{admissions::AdmissionDesk, Facet, KnowledgeBase, TopicRecord};
use crate::nlu::{self, Intent};
use crate::semantic::{Embedder, MiniLmEncoder, PhraseIndex, RankedMatch};
use std::sync::Arc;
use tracing::debug;

// How many index entries the fallback looks at when collecting
// near-miss topics.
const FALLBACK_CANDIDATES: usize = 10;

const POPULAR_QUESTIONS: &[&str] = &[
    "Tell me about the Kattankulathur Campus",
    "What facilities are available in Tech Park?",
    "How can I contact the admissions office?",
    "What are the hostel facilities?",
    "Where is the Central Library?",
];

/// The formatted outcome of one query.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub response: String,
    pub confidence: f32,
    /// Suggested follow-up questions; only populated on fallback.
    pub suggestions: Vec<String>,
}

pub struct ChatEngine {
    kb: KnowledgeBase,
    index: PhraseIndex,
    embedder: Arc<dyn Embedder>,
    admissions: AdmissionDesk,
    similarity_threshold: f32,
    suggestion_threshold: f32,
    max_suggestions: usize,
}

impl ChatEngine {
    /// Load the MiniLM encoder and index the knowledge base. Blocking;
    /// call from a blocking context.
    pub fn new(config: &ServiceConfig) -> ChatResult<Self> {
        let encoder = MiniLmEncoder::load(config.model_cache_dir.as_deref())?;
        Self::with_embedder(config, Arc::new(encoder))
    }

    /// Build the engine around an arbitrary embedder (tests use this with
    /// a deterministic one).
    pub fn with_embedder(config: &ServiceConfig, embedder: Arc<dyn Embedder>) -> ChatResult<Self> {
        let kb = KnowledgeBase::builtin();
        let index = PhraseIndex::build(&kb, embedder.as_ref())?;
        Ok(Self {
            kb,
            index,
            embedder,
            admissions: AdmissionDesk::new(),
            similarity_threshold: config.similarity_threshold,
            suggestion_threshold: config.suggestion_threshold,
            max_suggestions: config.max_suggestions,
        })
    }

    pub fn topic_count(&self) -> usize {
        self.kb.len()
    }

    pub fn index_len(&self) -> usize {
        self.index.len()
    }

    /// Answer one message. Errors only on empty input or embedder failure;
    /// an unrecognized question is a fallback outcome, not an error.
    pub fn answer(&self, message: &str) -> ChatResult<ChatOutcome> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let analysis = nlu::analyze(message, &self.kb);
        debug!(
            intent = ?analysis.intent,
            mention = analysis.mention.map(|t| t.name),
            "analyzed query"
        );

        match analysis.intent {
            Intent::Greeting => {
                return Ok(ChatOutcome {
                    response: format::greeting(),
                    confidence: 1.0,
                    suggestions: Vec::new(),
                });
            }
            Intent::Admission => {
                return Ok(ChatOutcome {
                    response: self.admissions.answer(&analysis.normalized),
                    confidence: 0.9,
                    suggestions: Vec::new(),
                });
            }
            _ => {}
        }

        // A direct topic mention answers without touching the model.
        if let Some(topic) = analysis.mention {
            let (response, confidence) = match analysis.intent {
                Intent::Navigation => (format::navigation_answer(topic), 1.0),
                Intent::Procedure if !topic.steps.is_empty() => {
                    (format::procedure_answer(topic), 1.0)
                }
                Intent::Location => (format::facet_answer(topic, Facet::Location), 1.0),
                Intent::Facilities => (format::facet_answer(topic, Facet::Facilities), 1.0),
                Intent::Contact => (format::facet_answer(topic, Facet::Contact), 1.0),
                Intent::Description => (format::facet_answer(topic, Facet::Description), 1.0),
                _ => (format::facet_answer(topic, Facet::Description), 0.8),
            };
            return Ok(ChatOutcome {
                response,
                confidence,
                suggestions: Vec::new(),
            });
        }

        // Semantic matching against the phrase index.
        let query_vector = self.embedder.embed_one(&analysis.normalized)?;
        let ranked = self.index.rank(&query_vector, FALLBACK_CANDIDATES);

        if let Some(best) = ranked.first() {
            if best.score >= self.similarity_threshold {
                debug!(
                    topic = best.entry.phrase.topic.name,
                    score = best.score,
                    "semantic match"
                );
                return Ok(ChatOutcome {
                    response: format::facet_answer(best.entry.phrase.topic, best.entry.phrase.facet),
                    confidence: best.score,
                    suggestions: Vec::new(),
                });
            }
        }

        Ok(self.fallback(&ranked))
    }

    /// Build a "did you mean" response from the near-miss topics, or the
    /// fixed popular questions when nothing came close.
    fn fallback(&self, ranked: &[RankedMatch<'_>]) -> ChatOutcome {
        let mut near_topics: Vec<&TopicRecord> = Vec::new();
        for m in ranked {
            if m.score < self.suggestion_threshold {
                continue;
            }
            if !near_topics.iter().any(|t| std::ptr::eq(*t, m.entry.phrase.topic)) {
                near_topics.push(m.entry.phrase.topic);
            }
            if near_topics.len() == 3 {
                break;
            }
        }

        let (message, mut suggestions) = if near_topics.is_empty() {
            (
                "I'm not sure what you're asking about. Here are some things you can ask:",
                POPULAR_QUESTIONS.iter().map(|q| q.to_string()).collect::<Vec<_>>(),
            )
        } else {
            let suggestions: Vec<String> = near_topics
                .iter()
                .flat_map(|topic| {
                    [
                        format!("What is {}?", topic.name),
                        format!("Tell me about {}", topic.name),
                        format!("Where is {} located?", topic.name),
                    ]
                })
                .collect();
            (
                "I'm not quite sure about that. Here are some related questions you might be interested in:",
                suggestions,
            )
        };
        suggestions.truncate(self.max_suggestions);

        ChatOutcome {
            response: format::fallback_answer(message, &suggestions),
            confidence: 0.0,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::Embedder;

    /// Deterministic bag-of-words embedder; shares no state with the
    /// production encoder.
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

    fn engine() -> ChatEngine {
        ChatEngine::with_embedder(&ServiceConfig::default(), Arc::new(HashedEmbedder)).unwrap()
    }

    #[test]
    fn empty_message_is_an_error() {
        let e = engine();
        assert!(matches!(e.answer("   "), Err(ChatError::EmptyMessage)));
    }

    #[test]
    fn greeting_short_circuits() {
        let e = engine();
        let outcome = e.answer("Hello!").unwrap();
        assert!((outcome.confidence - 1.0).abs() < f32::EPSILON);
        assert!(outcome.response.contains("campus assistant"));
    }

    #[test]
    fn known_topic_by_name_returns_its_address() {
        let e = engine();
        let outcome = e.answer("Where is the Tech Park?").unwrap();
        assert!((outcome.confidence - 1.0).abs() < f32::EPSILON);
        assert!(outcome.response.contains("Tech Park is located at"));
        assert!(outcome.response.contains("SRM Nagar"));
    }

    #[test]
    fn mention_without_intent_keywords_describes_the_topic() {
        let e = engine();
        let outcome = e.answer("techpark").unwrap();
        assert!((outcome.confidence - 0.8).abs() < f32::EPSILON);
        assert!(outcome.response.starts_with("Tech Park:"));
    }

    #[test]
    fn navigation_question_answers_with_directions() {
        let e = engine();
        let outcome = e.answer("How do I get to the Tech Park?").unwrap();
        assert!((outcome.confidence - 1.0).abs() < f32::EPSILON);
        assert!(outcome.response.contains("You can reach here by:"));
        assert!(outcome.response.contains("For directions, visit:"));
    }

    #[test]
    fn procedure_question_answers_with_steps() {
        let e = engine();
        let outcome = e.answer("How do I join the hostel?").unwrap();
        assert!((outcome.confidence - 1.0).abs() < f32::EPSILON);
        assert!(outcome.response.contains("1. Submit hostel application"));

        let outcome = e.answer("How do I borrow books from the library?").unwrap();
        assert!(outcome.response.contains("Get your library card"));
    }

    #[test]
    fn admission_query_routes_to_the_desk() {
        let e = engine();
        let outcome = e.answer("How do I apply for admission?").unwrap();
        assert!((outcome.confidence - 0.9).abs() < f32::EPSILON);
        assert!(outcome.response.contains("SRMJEEE"));
    }

    #[test]
    fn semantic_match_answers_without_a_mention() {
        let e = engine();
        // Paraphrase of the Tech Park description; no topic name present
        let outcome = e
            .answer("state of the art facility housing research labs")
            .unwrap();
        assert!(outcome.confidence >= 0.6, "score was {}", outcome.confidence);
        assert!(outcome.response.contains("Tech Park"));
    }

    #[test]
    fn nonsense_query_falls_back_with_suggestions() {
        let e = engine();
        let outcome = e.answer("quux flibbertigibbet zorp").unwrap();
        assert_eq!(outcome.confidence, 0.0);
        assert!(!outcome.suggestions.is_empty());
        assert!(outcome.suggestions.len() <= 5);
        assert!(outcome.response.contains("You might want to try:"));
    }
}
