use super::carve;
use crate::core::fields::clean_text;
use crate::core::profile::{profile, LanguageProfile, SectionKind};
use crate::core::section::split_items;
use crate::domain::model::{Diagnostics, Language, Prerequisite};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Bullets and enumerators that open a list line.
static ITEM_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-–—•▪◦●·*]+|\d{1,2}[.)])\s*").expect("valid item marker regex")
});

/// Commas, semicolons, bullet glyphs, and dashes standing between spaces.
/// A dash inside "problem-solving" is part of the word.
static DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,;•▪◦●·]|\s[-–—]+\s").expect("valid prerequisite delimiter regex")
});

pub fn parse(text: &str, language: Language, diagnostics: &mut Diagnostics) -> Vec<Prerequisite> {
    let profile = profile(language);
    match carve(text, profile, SectionKind::Prerequisites, diagnostics) {
        Some(span) => extract_with(span, profile),
        None => Vec::new(),
    }
}

pub fn extract(span: &str, language: Language) -> Vec<Prerequisite> {
    extract_with(span, profile(language))
}

fn extract_with(span: &str, profile: &LanguageProfile) -> Vec<Prerequisite> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut prerequisites = Vec::new();

    for item in split_items(span, |line| ITEM_MARKER.is_match(line)) {
        let item = ITEM_MARKER.replace(&item, "");
        for piece in DELIMITER.split(&item) {
            let description = clean_text(&ITEM_MARKER.replace(piece.trim(), ""));
            if description.is_empty() || profile.no_prerequisites.is_match(&description) {
                continue;
            }
            if !seen.insert(description.to_lowercase()) {
                continue;
            }
            prerequisites.push(Prerequisite { description });
        }
    }
    prerequisites
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(items: &[Prerequisite]) -> Vec<&str> {
        items.iter().map(|p| p.description.as_str()).collect()
    }

    #[test]
    fn splits_on_every_delimiter_kind() {
        let span = "- Set theory; basic algebra\n• Functions, relations\n- Problem-solving – proofs.";
        assert_eq!(
            descriptions(&extract(span, Language::English)),
            vec!["Set theory", "basic algebra", "Functions", "relations", "Problem-solving", "proofs"]
        );
    }

    #[test]
    fn wrapped_bullet_lines_stay_one_item() {
        let span = "- Elementary calculus of one\n  real variable\n- Linear algebra";
        assert_eq!(
            descriptions(&extract(span, Language::English)),
            vec!["Elementary calculus of one real variable", "Linear algebra"]
        );
    }

    #[test]
    fn none_placeholders_and_duplicates_are_dropped() {
        assert!(extract("None.", Language::English).is_empty());
        assert!(extract("Aucun", Language::French).is_empty());
        let items = extract("Logic\nlogic; LOGIC", Language::English);
        assert_eq!(descriptions(&items), vec!["Logic"]);
    }

    #[test]
    fn reads_the_long_english_heading() {
        let text = "KNOWLEDGE & SKILLS PREREQUISITS\nDiscrete mathematics\nSYLLABUS\n4 h Intro";
        let items = parse(text, Language::English, &mut Diagnostics::new());
        assert_eq!(descriptions(&items), vec!["Discrete mathematics"]);
    }
}
