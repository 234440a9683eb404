//! Template language detection from marker phrases and script evidence.
//!
//! Profiles are tested in a fixed order and the first one with evidence wins;
//! English is the fallback. Armenian goes first because its script cannot be
//! confused with either Latin template.

use crate::core::profile::{profile, LanguageProfile};
use crate::domain::model::Language;

const DETECTION_ORDER: [Language; 2] = [Language::Armenian, Language::French];

/// Letters of a profile's own script needed before the script alone counts as evidence.
const MIN_SCRIPT_LETTERS: usize = 3;

pub fn detect_language(text: &str) -> Language {
    let lower = text.to_lowercase();
    DETECTION_ORDER
        .into_iter()
        .find(|language| has_evidence(profile(*language), text, &lower))
        .unwrap_or_default()
}

fn has_evidence(profile: &LanguageProfile, text: &str, lower: &str) -> bool {
    profile
        .detection_markers
        .iter()
        .any(|marker| lower.contains(marker))
        || profile
            .script
            .as_ref()
            .is_some_and(|script| count_script_letters(text, script) >= MIN_SCRIPT_LETTERS)
}

fn count_script_letters(text: &str, script: &std::ops::RangeInclusive<char>) -> usize {
    text.chars()
        .filter(|c| c.is_alphabetic() && script.contains(c))
        .count()
}
