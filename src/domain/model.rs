use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Template languages a syllabus can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    French,
    Armenian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Armenian];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Armenian => "Armenian",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregate produced by one parse call.
///
/// Numeric fields are zero when the document does not state them; string
/// fields are empty. Collections keep document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub academic_year: String,
    pub degree: String,
    pub qualification: String,
    pub language: Language,
    pub professor: String,
    pub ects: u32,
    pub lecture_hours: u32,
    pub practical_hours: u32,
    pub lab_hours: u32,
    pub learning_outcomes: Vec<LearningOutcome>,
    pub assessments: Vec<Assessment>,
    pub teaching_methods: Vec<TeachingMethod>,
    pub prerequisites: Vec<Prerequisite>,
    pub syllabus: Vec<SyllabusTopic>,
    pub references: Vec<Reference>,
}

impl Course {
    /// Saturates at `u32::MAX`; each hour field may itself be that large.
    pub fn total_hours(&self) -> u32 {
        self.lecture_hours
            .saturating_add(self.practical_hours)
            .saturating_add(self.lab_hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeCategory {
    Knowledge,
    AppliedSkills,
    GeneralSkills,
}

impl OutcomeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeCategory::Knowledge => "Knowledge",
            OutcomeCategory::AppliedSkills => "Skills to Apply",
            OutcomeCategory::GeneralSkills => "General Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningOutcome {
    pub code: String,
    pub category: OutcomeCategory,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentKind {
    Ongoing,
    Midterm,
    FinalExam,
    Project,
    Presentation,
}

impl AssessmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::Ongoing => "Ongoing",
            AssessmentKind::Midterm => "Midterm",
            AssessmentKind::FinalExam => "Final Exam",
            AssessmentKind::Project => "Project",
            AssessmentKind::Presentation => "Presentation",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentMethod {
    Oral,
    Written,
    #[default]
    Unknown,
}

impl AssessmentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentMethod::Oral => "Oral",
            AssessmentMethod::Written => "Written",
            AssessmentMethod::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub kind: AssessmentKind,
    pub method: AssessmentMethod,
    pub duration_hours: Option<f32>,
    pub weight_percent: Option<u32>,
    pub group_based: bool,
    pub project_required: bool,
    pub presentation_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeachingMethodKind {
    Lectures,
    PracticalWork,
    LaboratoryWork,
    Seminars,
    GroupWork,
    Projects,
    Presentations,
    CaseStudies,
    Discussions,
    ELearning,
}

impl TeachingMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeachingMethodKind::Lectures => "Lectures",
            TeachingMethodKind::PracticalWork => "Practical Work",
            TeachingMethodKind::LaboratoryWork => "Laboratory Work",
            TeachingMethodKind::Seminars => "Seminars",
            TeachingMethodKind::GroupWork => "Group Work",
            TeachingMethodKind::Projects => "Projects",
            TeachingMethodKind::Presentations => "Presentations",
            TeachingMethodKind::CaseStudies => "Case Studies",
            TeachingMethodKind::Discussions => "Discussions",
            TeachingMethodKind::ELearning => "E-learning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingMethod {
    pub name: TeachingMethodKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prerequisite {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusTopic {
    pub topic: String,
    pub hours: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceKind {
    #[default]
    Core,
    Additional,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Core => "Core",
            ReferenceKind::Additional => "Additional",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub isbn: Option<String>,
    pub url: Option<String>,
}

/// Raw text of one document as handed over by a text extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An expected marker, section or field is absent.
    RecognitionGap,
    /// A numeric token could not be turned into a count.
    MalformedNumeric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub subject: String,
    pub detail: String,
}

/// Diagnostics collected while parsing one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(&mut self, subject: &str, detail: impl Into<String>) {
        self.entries.push(Diagnostic {
            kind: DiagnosticKind::RecognitionGap,
            subject: subject.to_string(),
            detail: detail.into(),
        });
    }

    pub fn malformed_numeric(&mut self, subject: &str, token: &str) {
        self.entries.push(Diagnostic {
            kind: DiagnosticKind::MalformedNumeric,
            subject: subject.to_string(),
            detail: format!("could not read '{}' as a count, using 0", token),
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Output of `parse_with_diagnostics`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub course: Course,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub source: String,
    pub course: Course,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub documents: Vec<ParsedDocument>,
}

/// A course after the repository has assigned it an identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedCourse {
    pub id: u64,
    pub source: String,
    pub stored_at: DateTime<Utc>,
    pub course: Course,
}
