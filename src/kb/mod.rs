// Knowledge base - static topic records and lookup
//
// The record set is compiled into the binary (records.rs) and immutable at
// runtime. Lookup covers exact names, aliases, and word containment; the
// candidate phrases feed the semantic index built at startup.

pub mod admissions;
mod records;

use crate::nlu;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    Campus,
    Location,
    Program,
    Facility,
}

/// One informational record: a place, program area, or student facility.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRecord {
    pub name: &'static str,
    pub kind: TopicKind,
    pub description: &'static str,
    pub campus: Option<&'static str>,
    pub address: Option<&'static str>,
    pub map_link: Option<&'static str>,
    pub established: Option<&'static str>,
    pub facilities: &'static [&'static str],
    pub degrees: &'static [&'static str],
    pub departments: &'static [&'static str],
    pub contact: Option<&'static str>,
    /// Step-by-step instructions for "how do I ..." questions, where the
    /// topic has a standard procedure (library membership, hostel check-in).
    pub steps: &'static [&'static str],
    pub steps_note: Option<&'static str>,
    pub aliases: &'static [&'static str],
}

/// Which facet of a topic a candidate phrase (and thus an answer) covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Description,
    Location,
    Facilities,
    Contact,
}

/// One entry fed to the semantic index: a representative phrase for a
/// single facet of a single topic.
#[derive(Debug, Clone)]
pub struct CandidatePhrase {
    pub topic: &'static TopicRecord,
    pub facet: Facet,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    topics: &'static [TopicRecord],
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        Self {
            topics: records::TOPICS,
        }
    }

    pub fn topics(&self) -> impl Iterator<Item = &'static TopicRecord> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Case-insensitive lookup by canonical name or alias.
    pub fn get(&self, name: &str) -> Option<&'static TopicRecord> {
        let needle = name.trim().to_lowercase();
        self.topics.iter().find(|t| {
            t.name.to_lowercase() == needle
                || t.aliases.iter().any(|a| a.to_lowercase() == needle)
        })
    }

    /// Find the topic mentioned in a normalized query, if any.
    ///
    /// Multi-word names and aliases match as substrings; single-word ones
    /// must match a whole query word (so "bus" never fires on "business").
    /// The longest matching needle wins.
    pub fn find_topic(&self, normalized_query: &str) -> Option<&'static TopicRecord> {
        let words: Vec<&str> = normalized_query.split_whitespace().collect();

        let mut best: Option<(&'static TopicRecord, usize)> = None;
        for topic in self.topics {
            for needle in std::iter::once(topic.name).chain(topic.aliases.iter().copied()) {
                let needle = nlu::normalize(needle);
                let hit = if needle.contains(' ') {
                    normalized_query.contains(&needle)
                } else {
                    words.iter().any(|w| *w == needle)
                };
                if hit && best.map_or(true, |(_, len)| needle.len() > len) {
                    best = Some((topic, needle.len()));
                }
            }
        }
        best.map(|(topic, _)| topic)
    }

    /// Representative phrases for every topic facet, used to build the
    /// semantic index once at startup.
    pub fn candidate_phrases(&self) -> Vec<CandidatePhrase> {
        let mut phrases = Vec::new();
        for topic in self.topics {
            phrases.push(CandidatePhrase {
                topic,
                facet: Facet::Description,
                text: format!("{}: {}", topic.name, topic.description),
            });
            if !topic.facilities.is_empty() {
                phrases.push(CandidatePhrase {
                    topic,
                    facet: Facet::Facilities,
                    text: format!("{} facilities: {}", topic.name, topic.facilities.join(", ")),
                });
            }
            if let Some(address) = topic.address {
                phrases.push(CandidatePhrase {
                    topic,
                    facet: Facet::Location,
                    text: format!("{} is located at {}", topic.name, address),
                });
            }
            if let Some(contact) = topic.contact {
                phrases.push(CandidatePhrase {
                    topic,
                    facet: Facet::Contact,
                    text: format!("Contact {}: {}", topic.name, contact),
                });
            }
            if !topic.degrees.is_empty() {
                phrases.push(CandidatePhrase {
                    topic,
                    facet: Facet::Description,
                    text: format!("{} degrees offered: {}", topic.name, topic.degrees.join(", ")),
                });
            }
        }
        phrases
    }
}
