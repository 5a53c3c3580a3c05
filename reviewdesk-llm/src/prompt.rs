//! Report prompt construction.

use reviewdesk_core::Note;
use serde::Serialize;

/// Sections the report must contain, in order, with the instruction for each.
pub const REPORT_SECTIONS: [(&str, &str); 4] = [
    (
        "Executive Summary",
        "A high-level overview of the main themes found in the notes.",
    ),
    (
        "Detailed Analysis by Function",
        "Group the insights by \"Category\" (Direction/Function/Core Capability). \
         For each category, list the owners and their specific contributions/issues.",
    ),
    (
        "Key Risks & Opportunities",
        "Identify potential risks or growth opportunities mentioned.",
    ),
    (
        "Action Items",
        "Deduce actionable next steps based on the notes.",
    ),
];

const PREAMBLE: &str = "You are an expert business consultant. \
I have collected a set of raw notes from a business review meeting.\n\
Your task is to analyze these notes and generate a comprehensive, professional Business Review Report.";

const CLOSING: &str = "Tone: Professional, objective, and concise.\nFormat: Clean Markdown.";

/// Wire shape of a note inside the prompt payload.
#[derive(Serialize)]
struct PromptNote<'a> {
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Owner")]
    owner: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Notes")]
    content: &'a str,
}

impl<'a> From<&'a Note> for PromptNote<'a> {
    fn from(note: &'a Note) -> Self {
        Self {
            category: &note.category,
            owner: &note.owner,
            title: &note.title,
            description: &note.description,
            content: &note.content,
        }
    }
}

/// Build the full instruction prompt for a set of notes.
///
/// Notes are embedded as a pretty-printed JSON array so the model sees
/// field names alongside values.
pub fn build_report_prompt(notes: &[Note]) -> serde_json::Result<String> {
    let payload: Vec<PromptNote<'_>> = notes.iter().map(PromptNote::from).collect();
    let data = serde_json::to_string_pretty(&payload)?;

    let sections = REPORT_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, (name, instruction))| format!("{}. **{}**: {}", i + 1, name, instruction))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "{PREAMBLE}\n\nHere is the raw data:\n{data}\n\n\
         Please structure the report as follows using Markdown:\n{sections}\n\n{CLOSING}\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewdesk_core::{NoteId, Timestamp};

    fn note(category: &str, owner: &str, title: &str, description: &str, content: &str) -> Note {
        Note {
            note_id: NoteId::now_v7(),
            category: category.to_string(),
            owner: owner.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            created_at: Timestamp::default(),
        }
    }

    #[test]
    fn test_prompt_embeds_every_field_under_its_key() {
        let notes = vec![note("Engineering", "Jane", "Latency", "checkout", "p99 regressed")];
        let prompt = build_report_prompt(&notes).unwrap();

        assert!(prompt.contains("\"Category\": \"Engineering\""));
        assert!(prompt.contains("\"Owner\": \"Jane\""));
        assert!(prompt.contains("\"Title\": \"Latency\""));
        assert!(prompt.contains("\"Description\": \"checkout\""));
        assert!(prompt.contains("\"Notes\": \"p99 regressed\""));
    }

    #[test]
    fn test_prompt_does_not_leak_ids_or_timestamps() {
        let n = note("Engineering", "Jane", "Latency", "", "p99 regressed");
        let prompt = build_report_prompt(std::slice::from_ref(&n)).unwrap();
        assert!(!prompt.contains(&n.note_id.to_string()));
        assert!(!prompt.contains("created_at"));
    }

    #[test]
    fn test_prompt_lists_sections_in_order() {
        let prompt = build_report_prompt(&[note("A", "b", "c", "", "d")]).unwrap();
        let positions: Vec<usize> = REPORT_SECTIONS
            .iter()
            .map(|(name, _)| prompt.find(&format!("**{}**", name)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.contains("1. **Executive Summary**"));
        assert!(prompt.contains("4. **Action Items**"));
    }

    #[test]
    fn test_prompt_escapes_quotes_in_content() {
        let prompt = build_report_prompt(&[note("A", "b", "c", "", "said \"no\"")]).unwrap();
        assert!(prompt.contains(r#"said \"no\""#));
    }

    #[test]
    fn test_prompt_preserves_note_order() {
        let notes = vec![
            note("Marketing", "Sam", "Launch", "", "delayed two weeks"),
            note("Engineering", "Jane", "Latency", "", "p99 regressed"),
        ];
        let prompt = build_report_prompt(&notes).unwrap();
        assert!(prompt.find("Launch").unwrap() < prompt.find("Latency").unwrap());
    }
}
