use super::carve;
use crate::core::fields::parse_decimal;
use crate::core::profile::{profile, LanguageProfile, SectionKind, ASSESSMENT_GROUPS};
use crate::core::section::split_items;
use crate::domain::model::{Assessment, AssessmentKind, AssessmentMethod, Diagnostics, Language};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:[.,]\d+)?)\s*(hours?|hrs?|heures?|h|ժամ|ժ|minutes?|mins?|mn)\b")
        .expect("valid duration regex")
});

static WEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3})\s*%").expect("valid weight regex"));

pub fn parse(text: &str, language: Language, diagnostics: &mut Diagnostics) -> Vec<Assessment> {
    let profile = profile(language);
    match carve(text, profile, SectionKind::Assessments, diagnostics) {
        Some(span) => extract_with(span, profile),
        None => Vec::new(),
    }
}

pub fn extract(span: &str, language: Language) -> Vec<Assessment> {
    extract_with(span, profile(language))
}

fn extract_with(span: &str, profile: &LanguageProfile) -> Vec<Assessment> {
    let mut assessments: Vec<Assessment> = Vec::new();

    for item in split_items(span, |line| profile.assessment_phrases.is_match(line)) {
        let phrases: Vec<(usize, AssessmentKind)> = profile
            .assessment_phrases
            .captures_iter(&item)
            .filter_map(|caps| Some((caps.get(0)?.start(), kind_of(&caps)?)))
            .collect();

        let group_based = profile.group_flag.is_match(&item);
        let project_required = profile.project_flag.is_match(&item);
        let presentation_required = profile.presentation_flag.is_match(&item);

        for (index, (start, kind)) in phrases.iter().enumerate() {
            let end = phrases.get(index + 1).map_or(item.len(), |(next, _)| *next);
            let segment = &item[*start..end];
            let found = Assessment {
                kind: *kind,
                method: method_of(profile, segment),
                duration_hours: duration_of(segment),
                weight_percent: weight_of(segment),
                group_based,
                project_required,
                presentation_required,
            };
            merge(&mut assessments, found);
        }
    }
    assessments
}

fn kind_of(caps: &Captures<'_>) -> Option<AssessmentKind> {
    ASSESSMENT_GROUPS
        .iter()
        .find(|(group, _)| caps.name(group).is_some())
        .map(|(_, kind)| *kind)
}

/// The earliest method token in the segment decides.
fn method_of(profile: &LanguageProfile, segment: &str) -> AssessmentMethod {
    let oral = profile.oral_method.find(segment).map(|m| m.start());
    let written = profile.written_method.find(segment).map(|m| m.start());
    match (oral, written) {
        (Some(o), Some(w)) if w < o => AssessmentMethod::Written,
        (Some(_), _) => AssessmentMethod::Oral,
        (None, Some(_)) => AssessmentMethod::Written,
        (None, None) => AssessmentMethod::Unknown,
    }
}

fn duration_of(segment: &str) -> Option<f32> {
    let caps = DURATION.captures(segment)?;
    let value = parse_decimal(&caps[1])?;
    let unit = caps[2].to_lowercase();
    if unit.starts_with("min") || unit == "mn" {
        Some(value / 60.0)
    } else {
        Some(value)
    }
}

fn weight_of(segment: &str) -> Option<u32> {
    WEIGHT
        .captures(segment)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|weight| *weight <= 100)
}

/// Later mentions of an already seen kind only fill in what is still unknown.
fn merge(assessments: &mut Vec<Assessment>, found: Assessment) {
    let Some(existing) = assessments.iter_mut().find(|a| a.kind == found.kind) else {
        assessments.push(found);
        return;
    };
    if existing.method == AssessmentMethod::Unknown {
        existing.method = found.method;
    }
    existing.duration_hours = existing.duration_hours.or(found.duration_hours);
    existing.weight_percent = existing.weight_percent.or(found.weight_percent);
    existing.group_based |= found.group_based;
    existing.project_required |= found.project_required;
    existing.presentation_required |= found.presentation_required;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_kind_method_duration_and_weight() {
        let span = "Ongoing assessment: oral, 30%\nMidterm exam: written, 2 hours, 20%\n\
            Final exam: written test 90 minutes - 50%";
        let assessments = extract(span, Language::English);
        assert_eq!(assessments.len(), 3);

        assert_eq!(assessments[0].kind, AssessmentKind::Ongoing);
        assert_eq!(assessments[0].method, AssessmentMethod::Oral);
        assert_eq!(assessments[0].weight_percent, Some(30));
        assert_eq!(assessments[0].duration_hours, None);

        assert_eq!(assessments[1].kind, AssessmentKind::Midterm);
        assert_eq!(assessments[1].method, AssessmentMethod::Written);
        assert_eq!(assessments[1].duration_hours, Some(2.0));

        assert_eq!(assessments[2].kind, AssessmentKind::FinalExam);
        assert_eq!(assessments[2].duration_hours, Some(1.5));
        assert_eq!(assessments[2].weight_percent, Some(50));
    }

    #[test]
    fn flags_come_from_the_whole_item() {
        let assessments = extract("Group project with a presentation, 40%", Language::English);
        let project = assessments
            .iter()
            .find(|a| a.kind == AssessmentKind::Project)
            .unwrap();
        assert!(project.group_based);
        assert!(project.project_required);
        assert!(project.presentation_required);
        assert_eq!(project.method, AssessmentMethod::Unknown);
        assert!(assessments.iter().any(|a| a.kind == AssessmentKind::Presentation));
    }

    #[test]
    fn repeated_kinds_are_merged() {
        let span = "Final exam 3 h\nFinal exam: oral, 60%";
        let assessments = extract(span, Language::English);
        assert_eq!(assessments.len(), 1);
        assert_eq!(assessments[0].method, AssessmentMethod::Oral);
        assert_eq!(assessments[0].duration_hours, Some(3.0));
        assert_eq!(assessments[0].weight_percent, Some(60));
    }

    #[test]
    fn french_vocabulary() {
        let span = "Contrôle continu : 40 %\nExamen final écrit, 3 heures, 60 %";
        let assessments = extract(span, Language::French);
        assert_eq!(assessments.len(), 2);
        assert_eq!(assessments[0].kind, AssessmentKind::Ongoing);
        assert_eq!(assessments[0].weight_percent, Some(40));
        assert_eq!(assessments[1].kind, AssessmentKind::FinalExam);
        assert_eq!(assessments[1].method, AssessmentMethod::Written);
        assert_eq!(assessments[1].duration_hours, Some(3.0));
    }

    #[test]
    fn armenian_vocabulary() {
        let assessments = extract("Միջանկյալ քննություն՝ գրավոր, 2 ժամ", Language::Armenian);
        assert_eq!(assessments.len(), 1);
        assert_eq!(assessments[0].kind, AssessmentKind::Midterm);
        assert_eq!(assessments[0].method, AssessmentMethod::Written);
        assert_eq!(assessments[0].duration_hours, Some(2.0));
    }

    #[test]
    fn no_known_phrase_means_no_assessment() {
        assert!(extract("Attendance is mandatory", Language::English).is_empty());
    }
}
