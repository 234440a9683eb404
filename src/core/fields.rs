//! Scalar field extraction: pattern, capture group, post-processing.

use crate::domain::model::Diagnostics;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AcademicYear,
    Degree,
    Qualification,
    Professor,
    Ects,
    LectureHours,
    PracticalHours,
    LabHours,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AcademicYear => "academic year",
            Field::Degree => "degree",
            Field::Qualification => "qualification",
            Field::Professor => "professor",
            Field::Ects => "ECTS credits",
            Field::LectureHours => "lecture hours",
            Field::PracticalHours => "practical hours",
            Field::LabHours => "lab hours",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Trim, collapse whitespace, strip trailing punctuation.
    Text,
    /// Decimal number rounded half-up to a non-negative count.
    Rounded,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Count(u32),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Count(count) => count.to_string(),
        }
    }

    pub fn into_count(self) -> u32 {
        match self {
            FieldValue::Count(count) => count,
            FieldValue::Text(_) => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub pattern: Regex,
    pub group: usize,
    pub post: PostProcess,
}

impl FieldRule {
    pub fn text(field: Field, pattern: Regex) -> Self {
        Self {
            field,
            pattern,
            group: 1,
            post: PostProcess::Text,
        }
    }

    pub fn count(field: Field, pattern: Regex) -> Self {
        Self {
            field,
            pattern,
            group: 1,
            post: PostProcess::Rounded,
        }
    }

    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str())
    }
}

/// Runs the rules declared for `field` in order; the first rule that matches wins.
///
/// No match resolves to the field's default (empty text or zero) and records a
/// recognition gap.
pub fn extract_field(
    text: &str,
    rules: &[FieldRule],
    field: Field,
    diagnostics: &mut Diagnostics,
) -> FieldValue {
    let mut post = PostProcess::Text;
    for rule in rules.iter().filter(|rule| rule.field == field) {
        post = rule.post;
        if let Some(raw) = rule.capture(text) {
            return match rule.post {
                PostProcess::Text => FieldValue::Text(clean_text(raw)),
                PostProcess::Rounded => FieldValue::Count(parse_count(raw).unwrap_or_else(|| {
                    diagnostics.malformed_numeric(field.as_str(), raw);
                    0
                })),
            };
        }
    }

    diagnostics.gap(field.as_str(), "no matching label");
    match post {
        PostProcess::Text => FieldValue::Text(String::new()),
        PostProcess::Rounded => FieldValue::Count(0),
    }
}

/// Trims, collapses inner whitespace and strips trailing punctuation.
pub fn clean_text(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(|c: char| {
            matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '-' | '–' | '—' | '·' | '•')
                || c.is_whitespace()
        })
        .to_string()
}

/// Reads `"6"`, `"6.6"` or `"6,6"` and rounds half-up.
///
/// Returns `None` for anything that is not a finite, non-negative number that
/// fits a `u32` after rounding.
pub fn parse_count(token: &str) -> Option<u32> {
    let value: f64 = token.trim().replace(',', ".").parse().ok()?;
    round_half_up(value)
}

pub fn round_half_up(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let rounded = (value + 0.5).floor();
    if rounded > f64::from(u32::MAX) {
        return None;
    }
    Some(rounded as u32)
}

/// Reads a decimal hour quantity without rounding, e.g. `"1,5"` → 1.5.
pub fn parse_decimal(token: &str) -> Option<f32> {
    let value: f32 = token.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
