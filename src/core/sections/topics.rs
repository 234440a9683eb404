use super::carve;
use crate::core::fields::{clean_text, parse_count};
use crate::core::profile::{profile, LanguageProfile, SectionKind};
use crate::core::section::split_items;
use crate::domain::model::{Diagnostics, Language, SyllabusTopic};

pub fn parse(text: &str, language: Language, diagnostics: &mut Diagnostics) -> Vec<SyllabusTopic> {
    let profile = profile(language);
    let Some(span) = carve(text, profile, SectionKind::Syllabus, diagnostics) else {
        return Vec::new();
    };

    let mut topics = Vec::new();
    for item in items(span, profile) {
        if let Some(topic) = read_topic(&item, profile, Some(&mut *diagnostics)) {
            topics.push(topic);
        }
    }
    topics
}

/// Reads `<hours><unit> <topic>` items; lines without the pattern are skipped.
pub fn extract(span: &str, language: Language) -> Vec<SyllabusTopic> {
    let profile = profile(language);
    items(span, profile)
        .iter()
        .filter_map(|item| read_topic(item, profile, None))
        .collect()
}

fn items(span: &str, profile: &LanguageProfile) -> Vec<String> {
    split_items(span, |line| profile.topic_line.is_match(line))
}

fn read_topic(
    item: &str,
    profile: &LanguageProfile,
    diagnostics: Option<&mut Diagnostics>,
) -> Option<SyllabusTopic> {
    let caps = profile.topic_line.captures(item)?;
    let topic = clean_text(&caps[2]);
    if topic.is_empty() {
        return None;
    }
    let hours = parse_count(&caps[1]).unwrap_or_else(|| {
        if let Some(diagnostics) = diagnostics {
            diagnostics.malformed_numeric("syllabus topic hours", &caps[1]);
        }
        0
    });
    Some(SyllabusTopic { topic, hours })
}
