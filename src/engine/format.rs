// Answer text formatting per topic facet
use crate::kb::{Facet, TopicRecord};

pub fn greeting() -> String {
    "Hello! I'm the campus assistant. I can help you with:\n\
     - Campus locations and facilities\n\
     - Academic programs and courses\n\
     - Admission procedures\n\
     - Student facilities\n\n\
     What would you like to know about?"
        .to_string()
}

/// Render the answer for one facet of a topic.
pub fn facet_answer(topic: &TopicRecord, facet: Facet) -> String {
    match facet {
        Facet::Location => location_answer(topic),
        Facet::Facilities => facilities_answer(topic),
        Facet::Contact => contact_answer(topic),
        Facet::Description => description_answer(topic),
    }
}

fn location_answer(topic: &TopicRecord) -> String {
    let mut text = match (topic.address, topic.campus) {
        (Some(address), Some(campus)) => format!(
            "{} is located at {}. You can find it in {}.",
            topic.name, address, campus
        ),
        (Some(address), None) => format!("{} is located at {}.", topic.name, address),
        (None, Some(campus)) => format!("{} is in {}.", topic.name, campus),
        // No location data at all: fall back to the description
        (None, None) => return description_answer(topic),
    };
    if let Some(map_link) = topic.map_link {
        text.push_str(&format!("\nHere's a map link: {}", map_link));
    }
    text
}

/// Directions to a place, with the transport options and map link.
pub fn navigation_answer(topic: &TopicRecord) -> String {
    let first = match (topic.address, topic.campus) {
        (Some(address), _) => format!("{} is located at: {}", topic.name, address),
        (None, Some(campus)) => format!("{} is in {}.", topic.name, campus),
        (None, None) => return description_answer(topic),
    };

    let mut lines = vec![
        first,
        "You can reach here by:".to_string(),
        "- Public Transport: Available bus and train services".to_string(),
        "- College Bus: Regular shuttle service from major points".to_string(),
        "- Private Transport: Well-connected by road".to_string(),
    ];
    if let Some(map_link) = topic.map_link {
        lines.push(format!("For directions, visit: {}", map_link));
    }
    lines.join("\n")
}

/// Numbered step list for topics with a standard procedure.
pub fn procedure_answer(topic: &TopicRecord) -> String {
    let steps: Vec<String> = topic
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect();
    let mut text = format!("Here's how to proceed with {}:\n{}", topic.name, steps.join("\n"));
    if let Some(note) = topic.steps_note {
        text.push_str(&format!("\n{}", note));
    }
    text
}

fn facilities_answer(topic: &TopicRecord) -> String {
    if topic.facilities.is_empty() {
        return format!(
            "No facilities information available for {}.\n{}",
            topic.name, topic.description
        );
    }
    format!(
        "{} has the following facilities: {}.\n{}",
        topic.name,
        topic.facilities.join(", "),
        topic.description
    )
}

fn contact_answer(topic: &TopicRecord) -> String {
    match topic.contact {
        Some(contact) => format!("Contact {}: {}\n{}", topic.name, contact, topic.description),
        None => description_answer(topic),
    }
}

fn description_answer(topic: &TopicRecord) -> String {
    let mut text = format!("{}: {}", topic.name, topic.description);
    if !topic.degrees.is_empty() {
        text.push_str(&format!("\nDegrees offered: {}", topic.degrees.join(", ")));
    }
    if !topic.departments.is_empty() {
        text.push_str(&format!("\nDepartments: {}", topic.departments.join(", ")));
    }
    text
}

/// Fallback message plus the suggested questions, rendered the way the
/// chat view expects them.
pub fn fallback_answer(message: &str, suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return message.to_string();
    }
    let list: Vec<String> = suggestions.iter().map(|q| format!("- {}", q)).collect();
    format!("{}\n\nYou might want to try:\n{}", message, list.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kb::KnowledgeBase;

    #[test]
    fn location_answer_includes_address_campus_and_map() {
        let kb = KnowledgeBase::builtin();
        let topic = kb.get("Tech Park").unwrap();
        let text = facet_answer(topic, Facet::Location);
        assert!(text.contains("Tech Park is located at"));
        assert!(text.contains("Kattankulathur Campus"));
        assert!(text.contains("map link"));
    }

    #[test]
    fn location_answer_without_address_uses_campus() {
        let kb = KnowledgeBase::builtin();
        let topic = kb.get("Central Library").unwrap();
        let text = facet_answer(topic, Facet::Location);
        assert!(text.starts_with("Central Library is in Kattankulathur Campus."));
    }

    #[test]
    fn navigation_answer_lists_transport_options_and_map() {
        let kb = KnowledgeBase::builtin();
        let topic = kb.get("Tech Park").unwrap();
        let text = navigation_answer(topic);
        assert!(text.contains("Tech Park is located at:"));
        assert!(text.contains("You can reach here by:"));
        assert!(text.contains("College Bus"));
        assert!(text.contains("For directions, visit:"));
    }

    #[test]
    fn procedure_answer_numbers_the_steps() {
        let kb = KnowledgeBase::builtin();
        let topic = kb.get("Hostels").unwrap();
        let text = procedure_answer(topic);
        assert!(text.contains("1. Submit hostel application"));
        assert!(text.contains("5. Complete check-in formalities"));
        assert!(text.contains("Contact hostel office"));
    }

    #[test]
    fn facilities_answer_joins_the_list() {
        let kb = KnowledgeBase::builtin();
        let topic = kb.get("Hostels").unwrap();
        let text = facet_answer(topic, Facet::Facilities);
        assert!(text.contains("Men's Hostel"));
        assert!(text.contains("Cafeteria"));
    }

    #[test]
    fn description_answer_lists_program_degrees() {
        let kb = KnowledgeBase::builtin();
        let topic = kb.get("Engineering").unwrap();
        let text = facet_answer(topic, Facet::Description);
        assert!(text.contains("B.Tech"));
        assert!(text.contains("Computer Science"));
    }

    #[test]
    fn fallback_renders_suggestion_list() {
        let text = fallback_answer(
            "Not sure.",
            &["What is Tech Park?".to_string(), "Where is the Central Library?".to_string()],
        );
        assert!(text.contains("You might want to try:"));
        assert!(text.contains("- What is Tech Park?"));
    }
}
