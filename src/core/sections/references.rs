//! Bibliography entries.
//!
//! An entry needs a four-digit year to count. The author is everything before
//! the first comma and the title the rest, so a title that itself contains a
//! comma loses its first part to the author.

use super::carve;
use crate::core::fields::clean_text;
use crate::core::profile::{profile, LanguageProfile, SectionKind};
use crate::core::section::split_items;
use crate::domain::model::{Diagnostics, Language, Reference, ReferenceKind};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercased author and title plus year.
type EntryKey = (String, String, Option<i32>);

static ENTRY_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[\d{1,3}\]|\d{1,3}[.)]|[-–•*▪])\s*").expect("valid reference marker regex")
});

static ISBN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bISBN(?:-1[03])?\s*:?\s*([0-9][0-9\- ]{8,15}[0-9Xx])")
        .expect("valid isbn regex")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhttps?://[^\s,;]+").expect("valid url regex"));

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(1[5-9]\d{2}|20\d{2})\b").expect("valid year regex"));

/// `Smith, J. (2019). Title` puts the year right after the author.
static PARENTHESIZED_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*(?:1[5-9]\d{2}|20\d{2})[a-z]?\s*\)\s*[.,]?").expect("valid apa year regex")
});

pub fn parse(text: &str, language: Language, diagnostics: &mut Diagnostics) -> Vec<Reference> {
    let profile = profile(language);
    match carve(text, profile, SectionKind::References, diagnostics) {
        Some(span) => extract_with(span, profile),
        None => Vec::new(),
    }
}

pub fn extract(span: &str, language: Language) -> Vec<Reference> {
    extract_with(span, profile(language))
}

fn extract_with(span: &str, profile: &LanguageProfile) -> Vec<Reference> {
    let mut references: Vec<Reference> = Vec::new();
    let mut seen: HashSet<EntryKey> = HashSet::new();
    let mut kind = ReferenceKind::Core;
    let mut block = String::new();

    for line in span.lines() {
        let switch_to = if profile.core_reference_heading.is_match(line) {
            Some(ReferenceKind::Core)
        } else if profile.additional_reference_heading.is_match(line) {
            Some(ReferenceKind::Additional)
        } else {
            None
        };
        match switch_to {
            Some(next) => {
                collect_block(&block, kind, &mut references, &mut seen);
                block.clear();
                kind = next;
            }
            None => {
                block.push_str(line);
                block.push('\n');
            }
        }
    }
    collect_block(&block, kind, &mut references, &mut seen);
    references
}

fn collect_block(
    block: &str,
    kind: ReferenceKind,
    references: &mut Vec<Reference>,
    seen: &mut HashSet<EntryKey>,
) {
    for item in split_items(block, |line| ENTRY_MARKER.is_match(line)) {
        let Some(reference) = read_entry(&item, kind) else {
            continue;
        };
        let key = (
            reference.author.to_lowercase(),
            reference.title.to_lowercase(),
            reference.year,
        );
        if seen.insert(key) {
            references.push(reference);
        }
    }
}

fn read_entry(item: &str, kind: ReferenceKind) -> Option<Reference> {
    let mut entry = ENTRY_MARKER.replace(item.trim(), "").into_owned();

    let isbn = ISBN.captures(&entry).map(|caps| {
        caps[1]
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_uppercase()
    });
    entry = ISBN.replace_all(&entry, "").into_owned();

    let url = URL
        .find(&entry)
        .map(|m| m.as_str().trim_end_matches(['.', ')']).to_string());
    entry = URL.replace_all(&entry, "").into_owned();

    let year_token = YEAR.find(&entry)?.as_str().to_string();
    let year = year_token.parse::<i32>().ok()?;

    let (author, title) = match PARENTHESIZED_YEAR.find(&entry) {
        Some(m) => (clean_text(&entry[..m.start()]), clean_text(&entry[m.end()..])),
        None => match entry.split_once(',') {
            Some((author, rest)) => (clean_text(author), clean_text(&strip_year(rest, &year_token))),
            None => (String::new(), clean_text(&strip_year(&entry, &year_token))),
        },
    };

    Some(Reference {
        kind,
        title,
        author,
        year: Some(year),
        isbn,
        url,
    })
}

/// Drops the year and the empty comma-separated slots it leaves behind.
fn strip_year(text: &str, year: &str) -> String {
    text.replacen(year, "", 1)
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
