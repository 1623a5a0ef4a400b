// Query analysis - normalization, intent classification, mention extraction
//
// Intent detection is deterministic keyword/prefix matching, no model.
// The semantic index handles everything the keywords miss.

use crate::kb::{KnowledgeBase, TopicRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Admission,
    /// "How do I get to X" - directions rather than a bare address.
    Navigation,
    /// "How do I ..." for topics with a standard procedure.
    Procedure,
    Location,
    Facilities,
    Contact,
    Description,
    General,
}

/// Result of analyzing one incoming message.
#[derive(Debug, Clone)]
pub struct QueryAnalysis {
    pub normalized: String,
    pub intent: Intent,
    pub mention: Option<&'static TopicRecord>,
}

/// Lowercase, strip everything but word characters, collapse whitespace.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.ends_with(' ') && !out.is_empty() {
            out.push(' ');
        }
    }
    out.trim_end().to_string()
}

pub fn classify_intent(normalized: &str) -> Intent {
    let q = normalized;

    if starts_with_any(
        q,
        &["hi", "hello", "hey", "greetings", "good morning", "good afternoon", "good evening",
          "how are you", "whats up", "what s up"],
    ) {
        return Intent::Greeting;
    }
    if contains_any(
        q,
        &["admission", "apply", "application", "enroll", "entrance", "srmjeee"],
    ) {
        return Intent::Admission;
    }
    if contains_any(q, &["contact", "email", "phone", "reach out", "get in touch"]) {
        return Intent::Contact;
    }
    if contains_any(q, &["how do i", "how do we", "how can i", "how to", "steps", "procedure"]) {
        if contains_any(q, &["reach", "get to", "direction", "directions"]) {
            return Intent::Navigation;
        }
        return Intent::Procedure;
    }
    if contains_any(
        q,
        &["where", "location", "address", "directions", "map", "get to", "reach", "find"],
    ) {
        return Intent::Location;
    }
    if contains_any(q, &["facilities", "facility", "amenities", "amenity", "available", "have"]) {
        return Intent::Facilities;
    }
    if contains_any(q, &["what is", "tell me about", "describe", "explain", "information about"]) {
        return Intent::Description;
    }

    Intent::General
}

pub fn analyze(message: &str, kb: &KnowledgeBase) -> QueryAnalysis {
    let normalized = normalize(message);
    let intent = classify_intent(&normalized);
    let mention = kb.find_topic(&normalized);
    QueryAnalysis {
        normalized,
        intent,
        mention,
    }
}

fn starts_with_any(text: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| {
        text.starts_with(p)
            && text[p.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric())
    })
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| {
        if n.contains(' ') {
            text.contains(n)
        } else {
            text.split_whitespace().any(|w| w == *n)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Where is   the Tech-Park?!"), "where is the tech park");
        assert_eq!(normalize("  Hello  "), "hello");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn classifies_common_intents() {
        assert_eq!(classify_intent("hello there"), Intent::Greeting);
        assert_eq!(classify_intent("hi"), Intent::Greeting);
        assert_eq!(classify_intent("where is the tech park"), Intent::Location);
        assert_eq!(classify_intent("what facilities are there in tech park"), Intent::Facilities);
        assert_eq!(classify_intent("tell me about the central library"), Intent::Description);
        assert_eq!(classify_intent("how do i apply for admission"), Intent::Admission);
        assert_eq!(classify_intent("email for the hostel office"), Intent::Contact);
        assert_eq!(classify_intent("central library timings"), Intent::General);
    }

    #[test]
    fn how_do_i_questions_split_navigation_from_procedure() {
        assert_eq!(classify_intent("how do i get to the tech park"), Intent::Navigation);
        assert_eq!(classify_intent("how to reach the main campus"), Intent::Navigation);
        assert_eq!(classify_intent("how do i join the hostel"), Intent::Procedure);
        assert_eq!(classify_intent("steps to borrow books from the library"), Intent::Procedure);
        // contact questions stay contact questions even when phrased as "how"
        assert_eq!(classify_intent("how can i contact the admissions office"), Intent::Contact);
    }

    #[test]
    fn find_is_a_location_keyword() {
        assert_eq!(classify_intent("find the central library"), Intent::Location);
    }

    #[test]
    fn greeting_prefixes_do_not_fire_mid_word() {
        // "history" starts with "hi" but is not a greeting
        assert_eq!(classify_intent("history department"), Intent::General);
        // "highway directions" is a location question, not a greeting
        assert_eq!(classify_intent("highway directions to campus"), Intent::Location);
    }

    #[test]
    fn analyze_finds_mentions() {
        let kb = KnowledgeBase::builtin();
        let analysis = analyze("Where is the Tech Park?", &kb);
        assert_eq!(analysis.intent, Intent::Location);
        assert_eq!(analysis.mention.unwrap().name, "Tech Park");

        let analysis = analyze("what is the meaning of life", &kb);
        assert!(analysis.mention.is_none());
    }
}
