//! Course assembly: one pass over the text, fixed unit order.

use crate::core::language::detect_language;
use crate::core::section::normalize_line_endings;
use crate::core::sections::{
    assessments, metadata, outcomes, prerequisites, references, teaching, topics,
};
use crate::domain::model::{Course, Diagnostics, ParseOutcome};

/// Parses raw syllabus text into a [`Course`].
///
/// Never fails: anything the text does not state falls back to empty strings,
/// zeros and empty collections.
pub fn parse(raw: &str) -> Course {
    parse_with_diagnostics(raw).course
}

/// Same as [`parse`], also returning what could not be recognized.
pub fn parse_with_diagnostics(raw: &str) -> ParseOutcome {
    let text = normalize_line_endings(raw);
    let language = detect_language(&text);
    let mut diagnostics = Diagnostics::new();

    let header = metadata::parse(&text, language, &mut diagnostics);
    let learning_outcomes = outcomes::parse(&text, language, &mut diagnostics);
    let assessments = assessments::parse(&text, language, &mut diagnostics);
    let teaching_methods = teaching::parse(&text, language, &mut diagnostics);
    let prerequisites = prerequisites::parse(&text, language, &mut diagnostics);
    let syllabus = topics::parse(&text, language, &mut diagnostics);
    let references = references::parse(&text, language, &mut diagnostics);

    let course = Course {
        title: header.title,
        academic_year: header.academic_year,
        degree: header.degree,
        qualification: header.qualification,
        language,
        professor: header.professor,
        ects: header.ects,
        lecture_hours: header.lecture_hours,
        practical_hours: header.practical_hours,
        lab_hours: header.lab_hours,
        learning_outcomes,
        assessments,
        teaching_methods,
        prerequisites,
        syllabus,
        references,
    };

    ParseOutcome {
        course,
        diagnostics,
    }
}
