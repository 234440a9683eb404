use super::carve;
use crate::core::fields::clean_text;
use crate::core::profile::{profile, LanguageProfile, SectionKind};
use crate::domain::model::{Diagnostics, Language, LearningOutcome, OutcomeCategory};
use std::collections::HashSet;

pub fn parse(text: &str, language: Language, diagnostics: &mut Diagnostics) -> Vec<LearningOutcome> {
    let profile = profile(language);
    match carve(text, profile, SectionKind::LearningOutcomes, diagnostics) {
        Some(span) => extract_with(span, profile),
        None => Vec::new(),
    }
}

/// Reads `<code><separator><description>` entries; a description runs to the
/// next code token.
pub fn extract(span: &str, language: Language) -> Vec<LearningOutcome> {
    extract_with(span, profile(language))
}

fn extract_with(span: &str, profile: &LanguageProfile) -> Vec<LearningOutcome> {
    // Category sub-headings ("A. Knowledge") would otherwise end up glued to
    // the description before them.
    let body = span
        .lines()
        .filter(|line| !profile.outcome_category_heading.is_match(line))
        .collect::<Vec<_>>()
        .join("\n");

    let codes: Vec<(usize, usize, char, &str)> = profile
        .outcome_code
        .captures_iter(&body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let letter = caps.get(1)?.as_str().chars().next()?;
            let digits = caps.get(2)?.as_str();
            Some((whole.start(), whole.end(), letter, digits))
        })
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut outcomes: Vec<LearningOutcome> = Vec::new();
    for (index, (_, end, letter, digits)) in codes.iter().enumerate() {
        let next = codes.get(index + 1).map_or(body.len(), |(start, ..)| *start);
        let description = clean_text(body[*end..next].trim_start_matches(|c: char| {
            c.is_whitespace() || matches!(c, '-' | '–' | '—' | ':' | '.' | ')')
        }));
        if description.is_empty() {
            continue;
        }

        let Some(category) = category_of(profile, *letter) else {
            continue;
        };
        let code = format!("{}{}", letter, digits);
        if !seen.insert(code.clone()) {
            continue;
        }
        outcomes.push(LearningOutcome {
            code,
            category,
            description,
        });
    }
    outcomes
}

/// Latin A–C map to the three categories in every template, next to the
/// profile's own letters.
fn category_of(profile: &LanguageProfile, letter: char) -> Option<OutcomeCategory> {
    profile.outcome_category(letter).or(match letter {
        'A' => Some(OutcomeCategory::Knowledge),
        'B' => Some(OutcomeCategory::AppliedSkills),
        'C' => Some(OutcomeCategory::GeneralSkills),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(outcomes: &[LearningOutcome]) -> Vec<&str> {
        outcomes.iter().map(|o| o.code.as_str()).collect()
    }

    #[test]
    fn two_plain_outcomes() {
        let outcomes = extract("A1 Knows X\nA2 Knows Y", Language::English);
        assert_eq!(codes(&outcomes), vec!["A1", "A2"]);
        assert_eq!(outcomes[0].description, "Knows X");
        assert_eq!(outcomes[1].description, "Knows Y");
        assert_eq!(outcomes[0].category, OutcomeCategory::Knowledge);
    }

    #[test]
    fn category_headings_and_wrapped_descriptions() {
        let span = "A. Knowledge\nA1 - Understands propositional\nlogic.\n\
            B. Skills to apply\nB1.1: Builds truth tables\nC. General skills\nC-1 Works in teams";
        let outcomes = extract(span, Language::English);
        assert_eq!(codes(&outcomes), vec!["A1", "B1.1", "C1"]);
        assert_eq!(outcomes[0].description, "Understands propositional logic");
        assert_eq!(outcomes[1].category, OutcomeCategory::AppliedSkills);
        assert_eq!(outcomes[2].category, OutcomeCategory::GeneralSkills);
        assert_eq!(outcomes[2].description, "Works in teams");
    }

    #[test]
    fn duplicate_codes_keep_the_first_entry() {
        let outcomes = extract("A1 First\nA1 Second\nA2", Language::English);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].description, "First");
    }

    #[test]
    fn armenian_letters_map_to_categories() {
        let outcomes = extract("Ա1 Գիտի տրամաբանություն\nԲ1 Կիրառում է", Language::Armenian);
        assert_eq!(codes(&outcomes), vec!["Ա1", "Բ1"]);
        assert_eq!(outcomes[1].category, OutcomeCategory::AppliedSkills);
    }

    #[test]
    fn missing_section_is_a_gap() {
        let mut diagnostics = Diagnostics::new();
        let outcomes = parse("LOGIC\nA1 Knows X", Language::English, &mut diagnostics);
        assert!(outcomes.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn parse_stops_at_the_next_heading() {
        let text = "LEARNING OUTCOMES\nA1 Knows X\nPREREQUISITES\nA2 not an outcome";
        let outcomes = parse(text, Language::English, &mut Diagnostics::new());
        assert_eq!(codes(&outcomes), vec!["A1"]);
    }

    #[test]
    fn code_like_tokens_in_prose_start_a_new_outcome() {
        let outcomes = extract("A1 Communicates at B2 level in French", Language::English);
        let codes: Vec<&str> = outcomes.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["A1", "B2"]);
        assert_eq!(outcomes[0].description, "Communicates at");
    }
}
