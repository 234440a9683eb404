//! The seven structured section parsers.
//!
//! Every unit offers `parse`, which carves its section out of the whole
//! document, and `extract`, which works on an already carved span. A missing
//! section is a recognition gap and yields an empty collection.

pub mod assessments;
pub mod metadata;
pub mod outcomes;
pub mod prerequisites;
pub mod references;
pub mod teaching;
pub mod topics;

use crate::core::profile::{LanguageProfile, SectionKind};
use crate::domain::model::Diagnostics;

fn carve<'a>(
    text: &'a str,
    profile: &LanguageProfile,
    kind: SectionKind,
    diagnostics: &mut Diagnostics,
) -> Option<&'a str> {
    let span = profile.section(text, kind);
    if span.is_none() {
        diagnostics.gap(
            kind.as_str(),
            format!("no {} heading found", profile.language),
        );
    }
    span
}
