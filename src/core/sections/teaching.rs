use super::carve;
use crate::core::profile::{profile, LanguageProfile, SectionKind};
use crate::domain::model::{Diagnostics, Language, TeachingMethod};

pub fn parse(text: &str, language: Language, diagnostics: &mut Diagnostics) -> Vec<TeachingMethod> {
    let profile = profile(language);
    match carve(text, profile, SectionKind::TeachingMethods, diagnostics) {
        Some(span) => extract_with(span, profile),
        None => Vec::new(),
    }
}

/// Each vocabulary entry found in the span, once, in vocabulary order.
pub fn extract(span: &str, language: Language) -> Vec<TeachingMethod> {
    extract_with(span, profile(language))
}

fn extract_with(span: &str, profile: &LanguageProfile) -> Vec<TeachingMethod> {
    profile
        .teaching_vocabulary
        .iter()
        .filter(|(_, pattern)| pattern.is_match(span))
        .map(|(kind, _)| TeachingMethod { name: *kind })
        .collect()
}
