//! Per-language marker tables.
//!
//! Everything that differs between the English, French and Armenian syllabus
//! templates lives here as data: detection markers, field patterns, section
//! headings and the closed vocabularies used by the section parsers. Adding a
//! template language means adding one more profile.

use crate::core::fields::{Field, FieldRule};
use crate::core::section::{locate_section, Marker};
use crate::domain::model::{AssessmentKind, Language, OutcomeCategory, TeachingMethodKind};
use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    LearningOutcomes,
    Assessments,
    TeachingMethods,
    Prerequisites,
    Syllabus,
    References,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::LearningOutcomes => "learning outcomes",
            SectionKind::Assessments => "assessments",
            SectionKind::TeachingMethods => "teaching methods",
            SectionKind::Prerequisites => "prerequisites",
            SectionKind::Syllabus => "syllabus topics",
            SectionKind::References => "references",
        }
    }
}

/// Assessment phrase groups, in the order of the named groups in `assessment_phrases`.
pub const ASSESSMENT_GROUPS: [(&str, AssessmentKind); 5] = [
    ("ongoing", AssessmentKind::Ongoing),
    ("midterm", AssessmentKind::Midterm),
    ("final", AssessmentKind::FinalExam),
    ("project", AssessmentKind::Project),
    ("presentation", AssessmentKind::Presentation),
];

#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    /// Lowercase phrases whose presence identifies the template.
    pub detection_markers: &'static [&'static str],
    /// Letters of a script only this language uses.
    pub script: Option<RangeInclusive<char>>,
    /// Lowercase prefixes of header lines that are never the course title.
    pub field_labels: &'static [&'static str],
    pub fields: Vec<FieldRule>,
    pub headings: Vec<(SectionKind, Marker)>,
    /// Capture 1 is the code letter, capture 2 the numeric suffix.
    pub outcome_code: Regex,
    pub outcome_letters: [(char, OutcomeCategory); 3],
    pub outcome_category_heading: Regex,
    pub assessment_phrases: Regex,
    pub oral_method: Regex,
    pub written_method: Regex,
    pub group_flag: Regex,
    pub project_flag: Regex,
    pub presentation_flag: Regex,
    pub teaching_vocabulary: Vec<(TeachingMethodKind, Regex)>,
    pub no_prerequisites: Regex,
    /// Capture 1 is the hour quantity, capture 2 the topic.
    pub topic_line: Regex,
    pub core_reference_heading: Regex,
    pub additional_reference_heading: Regex,
}

impl LanguageProfile {
    pub fn heading(&self, kind: SectionKind) -> Option<&Marker> {
        self.headings
            .iter()
            .find(|(section, _)| *section == kind)
            .map(|(_, marker)| marker)
    }

    /// Span of `kind`, bounded by every other section heading of this language.
    ///
    /// `None` when the section heading does not occur at all.
    pub fn section<'a>(&self, text: &'a str, kind: SectionKind) -> Option<&'a str> {
        let start = self.heading(kind)?;
        if !start.is_found_in(text) {
            return None;
        }
        let ends = self
            .headings
            .iter()
            .filter(|(section, _)| *section != kind)
            .map(|(_, marker)| marker);
        Some(locate_section(text, start, ends))
    }

    /// True for header lines that cannot be a title: field labels, or a bare section heading.
    pub fn is_label_line(&self, line: &str) -> bool {
        let line = line.trim();
        let lower = line.to_lowercase();
        self.field_labels.iter().any(|label| lower.starts_with(label))
            || self.headings.iter().any(|(_, marker)| {
                marker
                    .find_from(line, 0)
                    .is_some_and(|(_, end)| line[end..].trim().is_empty())
            })
    }

    pub fn outcome_category(&self, letter: char) -> Option<OutcomeCategory> {
        self.outcome_letters
            .iter()
            .find(|(candidate, _)| *candidate == letter)
            .map(|(_, category)| *category)
    }
}

static PROFILES: LazyLock<[LanguageProfile; 3]> =
    LazyLock::new(|| [english_profile(), french_profile(), armenian_profile()]);

pub fn profile(language: Language) -> &'static LanguageProfile {
    match language {
        Language::English => &PROFILES[0],
        Language::French => &PROFILES[1],
        Language::Armenian => &PROFILES[2],
    }
}

const NUMBER: &str = r"(\d+(?:[.,]\d+)?)";
const ACADEMIC_YEARS: &str = r"(\d{4}\s*[-–/]\s*\d{4})";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in syllabus pattern must compile")
}

/// Case-insensitive pattern.
fn ci(pattern: &str) -> Regex {
    compile(&format!("(?i){}", pattern))
}

/// A heading at the start of a line, optionally numbered ("3.", "2.1)").
fn heading(alternatives: &str) -> Marker {
    Marker::pattern(compile(&format!(
        r"(?im)^[ \t]*(?:\d{{1,2}}(?:\.\d{{1,2}})*[.)]?[ \t]*)?(?:{})\b[ \t]*:?",
        alternatives
    )))
}

/// A line that consists of nothing but one of `alternatives`.
fn whole_line(alternatives: &str) -> Regex {
    compile(&format!(
        r"(?i)^[ \t]*(?:[A-CԱ-Գ][.)][ \t]*)?(?:{})[ \t]*:?[ \t]*$",
        alternatives
    ))
}

fn label(field: Field, label: &str) -> FieldRule {
    FieldRule::text(field, ci(&format!(r"{}\s*[:՝]?\s*(.+)", label)))
}

fn count(field: Field, pattern: &str) -> FieldRule {
    FieldRule::count(field, ci(pattern))
}

fn assessment_phrases(ongoing: &str, midterm: &str, finals: &str, project: &str, presentation: &str) -> Regex {
    ci(&format!(
        "(?P<ongoing>{})|(?P<midterm>{})|(?P<final>{})|(?P<project>{})|(?P<presentation>{})",
        ongoing, midterm, finals, project, presentation
    ))
}

fn topic_line(units: &str) -> Regex {
    ci(&format!(
        r"^(?:(?:\d{{1,2}}[.)]|[-–•*▪])\s+)?(\d{{1,3}}(?:[.,]\d+)?)\s*(?:{})\.?(?:\s*[-–:]\s*|\s+)(\S.*)$",
        units
    ))
}

/// Hours written with the French abbreviations; all three templates use them.
fn abbreviated_hours() -> Vec<FieldRule> {
    vec![
        count(Field::LectureHours, &format!(r"\bCM\b\s*[:՝]?\s*{}", NUMBER)),
        count(Field::PracticalHours, &format!(r"\bTD\b\s*[:՝]?\s*{}", NUMBER)),
        count(Field::LabHours, &format!(r"\bTPS?\b\s*[:՝]?\s*{}", NUMBER)),
    ]
}

fn english_profile() -> LanguageProfile {
    let mut fields = vec![
        FieldRule::text(
            Field::AcademicYear,
            ci(&format!(r"\bACADEMIC\s+YEAR\b\s*:?\s*{}", ACADEMIC_YEARS)),
        ),
        label(Field::Degree, r"\bDegree\b"),
        label(Field::Qualification, r"\bQualification\b"),
        label(Field::Professor, r"\b(?:Professors?|Lecturers?|Instructors?)\b(?:\(s\))?"),
        count(Field::Ects, &format!(r"\bECTS\b(?:\s+credits?)?\s*[:՝]?\s*{}", NUMBER)),
        count(Field::Ects, &format!(r"{}\s*ECTS\b", NUMBER)),
    ];
    fields.extend(abbreviated_hours());
    fields.extend([
        count(Field::LectureHours, &format!(r"\bLectures?\s*[:՝]?\s*{}\s*(?:hours?|hrs?|h)\b", NUMBER)),
        count(
            Field::PracticalHours,
            &format!(r"\b(?:Practical(?:\s+(?:work|classes))?|Tutorials?|Seminars?)\s*:?\s*{}\s*(?:hours?|hrs?|h)\b", NUMBER),
        ),
        count(
            Field::LabHours,
            &format!(r"\bLab(?:oratory)?s?(?:\s+(?:work|sessions))?\s*:?\s*{}\s*(?:hours?|hrs?|h)\b", NUMBER),
        ),
    ]);

    LanguageProfile {
        language: Language::English,
        detection_markers: &["academic year", "learning outcomes", "teaching methods"],
        script: None,
        field_labels: &[
            "academic year", "degree", "qualification", "professor", "lecturer", "instructor",
            "ects", "credits", "university", "faculty", "department", "cm ", "td ", "tp ", "tps ",
        ],
        fields,
        headings: vec![
            (
                SectionKind::LearningOutcomes,
                heading(r"(?:INTENDED\s+)?LEARNING\s+OUTCOMES?|COURSE\s+OUTCOMES"),
            ),
            (
                SectionKind::Assessments,
                heading(r"ASSESSMENTS?(?:\s+(?:METHODS|AND\s+GRADING|&\s+GRADING))?|EVALUATION|GRADING"),
            ),
            (
                SectionKind::TeachingMethods,
                heading(r"TEACHING\s+(?:AND\s+LEARNING\s+)?METHODS|TEACHING\s+METHODOLOGY|METHODS\s+OF\s+TEACHING"),
            ),
            (
                SectionKind::Prerequisites,
                heading(r"KNOWLEDGE\s*(?:&|AND)\s*SKILLS\s+PRE-?REQUISITE?S|PRE-?REQUISITE?S"),
            ),
            (
                SectionKind::Syllabus,
                heading(r"COURSE\s+(?:CONTENT|OUTLINE|SCHEDULE)|SYLLABUS|TOPICS"),
            ),
            (
                SectionKind::References,
                heading(r"REFERENCES|BIBLIOGRAPHY|(?:RECOMMENDED\s+|REQUIRED\s+)?(?:LITERATURE|READINGS?)"),
            ),
        ],
        outcome_code: compile(r"(?:^|\s)([A-C])[ \-]?(\d{1,2}(?:\.\d{1,2})*)\b"),
        outcome_letters: [
            ('A', OutcomeCategory::Knowledge),
            ('B', OutcomeCategory::AppliedSkills),
            ('C', OutcomeCategory::GeneralSkills),
        ],
        outcome_category_heading: whole_line(
            r"knowledge(?:\s+and\s+understanding)?|skills\s+to\s+apply|applied\s+skills|practical\s+skills|general\s+skills|transferable\s+skills",
        ),
        assessment_phrases: assessment_phrases(
            r"ongoing\s+(?:assessment|evaluation|control)|continuous\s+(?:assessment|evaluation)|current\s+(?:assessment|control)",
            r"mid-?term(?:\s+(?:exam(?:ination)?|test))?|intermediate\s+(?:exam(?:ination)?|test)",
            r"final\s+(?:exam(?:ination)?|test|assessment)",
            r"(?:course\s+|group\s+|individual\s+)?projects?\b",
            r"presentations?\b|oral\s+defen[cs]e",
        ),
        oral_method: ci(r"\boral(?:ly)?\b"),
        written_method: ci(r"\b(?:written|in\s+writing)\b"),
        group_flag: ci(r"\b(?:group|team)s?\b"),
        project_flag: ci(r"\bprojects?\b"),
        presentation_flag: ci(r"\bpresentations?\b|\bdefen[cs]e\b"),
        teaching_vocabulary: vec![
            (TeachingMethodKind::Lectures, ci(r"\blectures?\b|\bex-cathedra\b|\bCM\b")),
            (
                TeachingMethodKind::PracticalWork,
                ci(r"\bpractical\s+(?:work|classes|sessions|exercises)\b|\btutorials?\b|\bexercise\s+sessions?\b|\bTD\b"),
            ),
            (
                TeachingMethodKind::LaboratoryWork,
                ci(r"\blab(?:oratory)?\s+(?:work|sessions?|classes)\b|\blabs\b|\bTPS?\b"),
            ),
            (TeachingMethodKind::Seminars, ci(r"\bseminars?\b")),
            (TeachingMethodKind::GroupWork, ci(r"\bgroup\s+(?:work|activities)\b|\bteam\s?work\b")),
            (TeachingMethodKind::Projects, ci(r"\bprojects?\b")),
            (TeachingMethodKind::Presentations, ci(r"\bpresentations?\b")),
            (TeachingMethodKind::CaseStudies, ci(r"\bcase\s+stud(?:y|ies)\b")),
            (TeachingMethodKind::Discussions, ci(r"\bdiscussions?\b|\bdebates?\b")),
            (TeachingMethodKind::ELearning, ci(r"\be-learning\b|\bonline\b|\bmoodle\b")),
        ],
        no_prerequisites: whole_line(r"none|n/?a|no\s+prerequisites?|not\s+required|nothing"),
        topic_line: topic_line(r"hours?|hrs?|h"),
        core_reference_heading: whole_line(
            r"(?:core|main|required|basic|mandatory|compulsory)(?:\s+(?:references|literature|readings?|sources|bibliography))?",
        ),
        additional_reference_heading: whole_line(
            r"(?:additional|supplementary|further|optional|recommended)(?:\s+(?:references|literature|readings?|sources|bibliography))?",
        ),
    }
}

fn french_profile() -> LanguageProfile {
    let mut fields = vec![
        FieldRule::text(
            Field::AcademicYear,
            ci(&format!(
                r"\bANN[ÉE]E\s+(?:ACAD[ÉE]MIQUE|UNIVERSITAIRE)\s*:?\s*{}",
                ACADEMIC_YEARS
            )),
        ),
        label(Field::Degree, r"\b(?:Dipl[ôo]me|Niveau)\b"),
        label(Field::Qualification, r"\bQualification\b"),
        label(
            Field::Professor,
            r"\b(?:Enseignante?s?|Professeure?s?|Responsable(?:\s+du\s+cours)?)\b(?:\(s\))?",
        ),
        count(Field::Ects, &format!(r"\b(?:ECTS|Cr[ée]dits?(?:\s+ECTS)?)\s*[:՝]?\s*{}", NUMBER)),
        count(Field::Ects, &format!(r"{}\s*(?:ECTS|cr[ée]dits?)\b", NUMBER)),
    ];
    fields.extend(abbreviated_hours());
    fields.extend([
        count(Field::LectureHours, &format!(r"\bCours\s+magistra(?:l|ux)\s*[:՝]?\s*{}", NUMBER)),
        count(Field::PracticalHours, &format!(r"\bTravaux\s+dirig[ée]s\s*[:՝]?\s*{}", NUMBER)),
        count(Field::LabHours, &format!(r"\bTravaux\s+pratiques\s*[:՝]?\s*{}", NUMBER)),
    ]);

    LanguageProfile {
        language: Language::French,
        detection_markers: &[
            "année académique",
            "annee academique",
            "année universitaire",
            "acquis d'apprentissage",
            "acquis d’apprentissage",
            "modalités d'évaluation",
            "modalités d’évaluation",
            "méthodes pédagogiques",
            "méthodes d'enseignement",
            "méthodes d’enseignement",
            "prérequis",
            "pré-requis",
            "bibliographie",
            "enseignant",
            "diplôme",
        ],
        script: None,
        field_labels: &[
            "année", "annee", "diplôme", "diplome", "niveau", "qualification", "enseignant",
            "professeur", "responsable", "ects", "crédits", "credits", "université", "universite",
            "faculté", "faculte", "cm ", "td ", "tp ", "tps ",
        ],
        fields,
        headings: vec![
            (
                SectionKind::LearningOutcomes,
                heading(
                    r"ACQUIS\s+D['’]APPRENTISSAGE|R[ÉE]SULTATS\s+D['’]APPRENTISSAGE(?:\s+ATTENDUS)?|COMP[ÉE]TENCES\s+VIS[ÉE]ES|OBJECTIFS\s+D['’]APPRENTISSAGE",
                ),
            ),
            (
                SectionKind::Assessments,
                heading(r"MODALIT[ÉE]S\s+D['’][ÉE]VALUATION|[ÉE]VALUATION|CONTR[ÔO]LE\s+DES\s+CONNAISSANCES"),
            ),
            (
                SectionKind::TeachingMethods,
                heading(r"M[ÉE]THODES\s+(?:D['’]ENSEIGNEMENT|P[ÉE]DAGOGIQUES)|APPROCHE\s+P[ÉE]DAGOGIQUE"),
            ),
            (
                SectionKind::Prerequisites,
                heading(r"PR[ÉE]-?REQUIS|CONNAISSANCES\s+PR[ÉE]ALABLES"),
            ),
            (
                SectionKind::Syllabus,
                heading(r"CONTENU\s+DU\s+COURS|PLAN\s+DU\s+COURS|PROGRAMME(?:\s+DU\s+COURS)?"),
            ),
            (
                SectionKind::References,
                heading(r"BIBLIOGRAPHIE|R[ÉE]F[ÉE]RENCES(?:\s+BIBLIOGRAPHIQUES)?|OUVRAGES\s+DE\s+R[ÉE]F[ÉE]RENCE"),
            ),
        ],
        outcome_code: compile(r"(?:^|\s)([A-C])[ \-]?(\d{1,2}(?:\.\d{1,2})*)\b"),
        outcome_letters: [
            ('A', OutcomeCategory::Knowledge),
            ('B', OutcomeCategory::AppliedSkills),
            ('C', OutcomeCategory::GeneralSkills),
        ],
        outcome_category_heading: whole_line(
            r"connaissances|savoirs?|savoir-faire|aptitudes|comp[ée]tences\s+(?:g[ée]n[ée]rales|transversales)",
        ),
        assessment_phrases: assessment_phrases(
            r"contr[ôo]le\s+continu|[ée]valuation\s+continue",
            r"(?:examen\s+)?partiel|examen\s+interm[ée]diaire|contr[ôo]le\s+interm[ée]diaire",
            r"examen\s+(?:final|terminal)|contr[ôo]le\s+final",
            r"projets?\b",
            r"expos[ée]s?\b|soutenance|pr[ée]sentations?\b",
        ),
        oral_method: ci(r"\borale?s?\b"),
        written_method: ci(r"\b[ée]crite?s?\b"),
        group_flag: ci(r"\bgroupes?\b|\b[ée]quipes?\b"),
        project_flag: ci(r"\bprojets?\b"),
        presentation_flag: ci(r"\bexpos[ée]s?\b|\bsoutenance\b|\bpr[ée]sentations?\b"),
        teaching_vocabulary: vec![
            (TeachingMethodKind::Lectures, ci(r"\bcours\s+magistra(?:l|ux)\b|\bCM\b")),
            (TeachingMethodKind::PracticalWork, ci(r"\btravaux\s+dirig[ée]s\b|\bTD\b|\bexercices\b")),
            (TeachingMethodKind::LaboratoryWork, ci(r"\btravaux\s+pratiques\b|\bTPS?\b|\blaboratoire\b")),
            (TeachingMethodKind::Seminars, ci(r"\bs[ée]minaires?\b")),
            (
                TeachingMethodKind::GroupWork,
                ci(r"\btravail\s+(?:en\s+)?(?:groupe|[ée]quipe)\b|\btravaux\s+de\s+groupe\b"),
            ),
            (TeachingMethodKind::Projects, ci(r"\bprojets?\b")),
            (TeachingMethodKind::Presentations, ci(r"\bexpos[ée]s?\b|\bpr[ée]sentations?\b")),
            (TeachingMethodKind::CaseStudies, ci(r"\b[ée]tudes?\s+de\s+cas\b")),
            (TeachingMethodKind::Discussions, ci(r"\bdiscussions?\b|\bd[ée]bats?\b")),
            (TeachingMethodKind::ELearning, ci(r"\ben\s+ligne\b|\be-learning\b|\bmoodle\b")),
        ],
        no_prerequisites: whole_line(r"aucune?|n[ée]ant|pas\s+de\s+pr[ée]requis"),
        topic_line: topic_line(r"heures?|h"),
        core_reference_heading: whole_line(
            r"(?:(?:bibliographie|r[ée]f[ée]rences|ouvrages|lectures)\s+)?(?:principale?s?|obligatoires?|de\s+base|essentielle?s?)",
        ),
        additional_reference_heading: whole_line(
            r"(?:(?:bibliographie|r[ée]f[ée]rences|ouvrages|lectures)\s+)?(?:compl[ée]mentaires?|suppl[ée]mentaires?|conseill[ée]e?s?|recommand[ée]e?s?)",
        ),
    }
}

fn armenian_profile() -> LanguageProfile {
    let mut fields = vec![
        FieldRule::text(
            Field::AcademicYear,
            ci(&format!(r"ՈՒՍՈՒՄՆԱԿԱՆ\s+ՏԱՐԻ\s*[:՝]?\s*{}", ACADEMIC_YEARS)),
        ),
        FieldRule::text(
            Field::AcademicYear,
            ci(&format!(r"\bACADEMIC\s+YEAR\b\s*:?\s*{}", ACADEMIC_YEARS)),
        ),
        label(Field::Degree, r"ԿՐԹԱԿԱՆ\s+ԱՍՏԻՃԱՆ"),
        label(Field::Qualification, r"ՈՐԱԿԱՎՈՐՈՒՄ"),
        label(Field::Professor, r"\bԴԱՍԱԽՈՍ(?:ՆԵՐ)?\b"),
        count(Field::Ects, &format!(r"\b(?:ECTS|ԿՐԵԴԻՏ(?:ՆԵՐ)?)\b\s*[:՝]?\s*{}", NUMBER)),
        count(Field::Ects, &format!(r"{}\s*(?:ECTS|կրեդիտ)", NUMBER)),
    ];
    fields.extend(abbreviated_hours());
    fields.extend([
        count(Field::LectureHours, &format!(r"ԴԱՍԱԽՈՍՈՒԹՅՈՒՆ(?:ՆԵՐ)?\s*[:՝]?\s*{}", NUMBER)),
        count(Field::PracticalHours, &format!(r"ԳՈՐԾՆԱԿԱՆ(?:\s+[^\d\s]+)?\s*[:՝]?\s*{}", NUMBER)),
        count(Field::LabHours, &format!(r"ԼԱԲՈՐԱՏՈՐ(?:\s+[^\d\s]+)?\s*[:՝]?\s*{}", NUMBER)),
    ]);

    LanguageProfile {
        language: Language::Armenian,
        detection_markers: &[
            "ուսումնական տարի",
            "դասախոս",
            "գրականություն",
            "կրեդիտ",
            "դասընթաց",
        ],
        script: Some('\u{0531}'..='\u{058F}'),
        field_labels: &[
            "ուսումնական տարի", "կրթական աստիճան", "որակավորում", "դասախոս", "կրեդիտ",
            "համալսարան", "ֆակուլտետ", "academic year", "ects", "cm ", "td ", "tp ", "tps ",
        ],
        fields,
        headings: vec![
            (
                SectionKind::LearningOutcomes,
                heading(r"ՈՒՍՈՒՄՆԱՌՈՒԹՅԱՆ\s+ԱՐԴՅՈՒՆՔՆԵՐ|ԿՐԹԱԿԱՆ\s+ԱՐԴՅՈՒՆՔՆԵՐ|ԱԿՆԿԱԼՎՈՂ\s+ԱՐԴՅՈՒՆՔՆԵՐ"),
            ),
            (
                SectionKind::Assessments,
                heading(r"ԳՆԱՀԱՏՄԱՆ\s+[^\s:]+|ԳՆԱՀԱՏՈՒՄ"),
            ),
            (
                SectionKind::TeachingMethods,
                heading(r"ԴԱՍԱՎԱՆԴՄԱՆ\s+[^\s:]+"),
            ),
            (
                SectionKind::Prerequisites,
                heading(r"ՆԱԽԱՊԱՅՄԱՆՆԵՐ|ՆԱԽՆԱԿԱՆ\s+ԳԻՏԵԼԻՔՆԵՐ|ԱՆՀՐԱԺԵՇՏ\s+ԳԻՏԵԼԻՔՆԵՐ"),
            ),
            (
                SectionKind::Syllabus,
                heading(r"ԴԱՍԸՆԹԱՑԻ\s+(?:ԲՈՎԱՆԴԱԿՈՒԹՅՈՒՆ|ԾՐԱԳԻՐ)|ԹԵՄԱՆԵՐ"),
            ),
            (
                SectionKind::References,
                heading(r"ԳՐԱԿԱՆՈՒԹՅԱՆ\s+ՑԱՆԿ|ՕԳՏԱԳՈՐԾՎՈՂ\s+ԳՐԱԿԱՆՈՒԹՅՈՒՆ|ԳՐԱԿԱՆՈՒԹՅՈՒՆ"),
            ),
        ],
        outcome_code: compile(r"(?:^|\s)([A-CԱ-Գ])[ \-]?(\d{1,2}(?:\.\d{1,2})*)\b"),
        outcome_letters: [
            ('Ա', OutcomeCategory::Knowledge),
            ('Բ', OutcomeCategory::AppliedSkills),
            ('Գ', OutcomeCategory::GeneralSkills),
        ],
        outcome_category_heading: whole_line(
            r"գիտելիքներ?|կիրառական\s+հմտություններ|ընդհանուր\s+(?:հմտություններ|կարողություններ)|հմտություններ",
        ),
        assessment_phrases: assessment_phrases(
            r"ընթացիկ(?:\s+(?:գնահատում|ստուգում|քննություն))?",
            r"միջանկյալ(?:\s+(?:քննություն|ստուգում))?",
            r"(?:եզրափակիչ|ամփոփիչ)(?:\s+քննություն)?",
            r"նախագ[^\s,.;:]*",
            r"ներկայացում|շնորհանդես",
        ),
        oral_method: ci(r"բանավոր"),
        written_method: ci(r"գրավոր"),
        group_flag: ci(r"խմբային"),
        project_flag: ci(r"նախագ"),
        presentation_flag: ci(r"ներկայաց|շնորհանդես"),
        teaching_vocabulary: vec![
            (TeachingMethodKind::Lectures, ci(r"դասախոսություն")),
            (TeachingMethodKind::PracticalWork, ci(r"գործնական")),
            (TeachingMethodKind::LaboratoryWork, ci(r"լաբորատոր")),
            (TeachingMethodKind::Seminars, ci(r"սեմինար")),
            (TeachingMethodKind::GroupWork, ci(r"խմբային\s+աշխատանք")),
            (TeachingMethodKind::Projects, ci(r"նախագ")),
            (TeachingMethodKind::Presentations, ci(r"ներկայացում|շնորհանդես")),
            (TeachingMethodKind::CaseStudies, ci(r"դեպքերի\s+(?:ուսումնասիրություն|վերլուծություն)")),
            (TeachingMethodKind::Discussions, ci(r"քննարկում|բանավեճ")),
            (TeachingMethodKind::ELearning, ci(r"առցանց|էլեկտրոնային\s+ուսուցում|moodle")),
        ],
        no_prerequisites: whole_line(r"չկան|չի\s+պահանջվում|չունի"),
        topic_line: topic_line(r"ժամ|ժ|hours?|h"),
        core_reference_heading: whole_line(r"հիմնական(?:\s+գրականություն)?"),
        additional_reference_heading: whole_line(r"լրացուցիչ(?:\s+գրականություն)?"),
    }
}
