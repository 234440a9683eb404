use syllabus_etl::domain::model::{
    AssessmentKind, AssessmentMethod, OutcomeCategory, ReferenceKind, TeachingMethodKind,
};
use syllabus_etl::{detect_language, locate_section, parse, parse_with_diagnostics, Course, Language};
use syllabus_etl::core::section::Marker;

const ENGLISH: &str = "\
ACADEMIC YEAR 2024-2025
MATHEMATICAL LOGIC
Degree: Bachelor
Qualification: Applied Mathematics
Lecturer: Dr. A. Hakobyan
ECTS 5.5
CM 30 h. TD 15 h. TPS 0 h.

1. LEARNING OUTCOMES
A. Knowledge
A1 - Knows the syntax and semantics of
propositional logic
A2 - Knows normal forms
B. Skills to apply
B1 - Builds truth tables
C. General skills
C1 - Argues rigorously

2. ASSESSMENT
Ongoing assessment: written quizzes, 20%
Midterm exam: written, 1.5 hours, 30%
Final exam: oral, 50%

3. TEACHING METHODS
Lectures, tutorials and group work. Course material on Moodle.

4. KNOWLEDGE & SKILLS PREREQUISITS
- Set theory; elementary algebra
- None

5. COURSE CONTENT
1. 6 h Propositional logic
2. 8 h Predicate logic
3. 4 h Normal forms and
resolution

6. REFERENCES
Core literature
[1] Mendelson, Introduction to Mathematical Logic, 2015, ISBN 978-1-4822-3772-6
Additional literature
[2] Enderton, A Mathematical Introduction to Logic, 2001
[3] Smith, Logic notes
";

const FRENCH: &str = "\
ANNÉE ACADÉMIQUE 2024-2025
LOGIQUE MATHÉMATIQUE
Diplôme : Licence
Enseignant : M. Dupont
Crédits ECTS : 5
CM 24 h TD 12 h
ACQUIS D'APPRENTISSAGE
A1 Connaître la logique des propositions
C1 Travailler en équipe
MODALITÉS D'ÉVALUATION
Contrôle continu : 40 %
Examen final écrit, 3 heures, 60 %
MÉTHODES PÉDAGOGIQUES
Cours magistraux et travaux dirigés
PRÉREQUIS
Aucun
PROGRAMME DU COURS
4 h Propositions
6 h Prédicats
BIBLIOGRAPHIE
Dupont, Logique, 2015
";

const ARMENIAN: &str = "\
ՏՐԱՄԱԲԱՆՈՒԹՅՈՒՆ
ՈՒՍՈՒՄՆԱԿԱՆ ՏԱՐԻ 2024-2025
Դասախոս՝ Ա. Պետրոսյան
ԿՐԵԴԻՏ 4
ՈՒՍՈՒՄՆԱՌՈՒԹՅԱՆ ԱՐԴՅՈՒՆՔՆԵՐ
Ա1 Գիտի տրամաբանության հիմունքները
Բ1 Կառուցում է ճշմարտության աղյուսակներ
ԳՆԱՀԱՏՄԱՆ ՁԵՎԵՐ
Միջանկյալ քննություն՝ գրավոր, 2 ժամ
ԴԱՍԱՎԱՆԴՄԱՆ ՄԵԹՈԴՆԵՐ
Դասախոսություններ, գործնական աշխատանքներ
ՆԱԽԱՊԱՅՄԱՆՆԵՐ
Բազմությունների տեսություն
ԴԱՍԸՆԹԱՑԻ ԲՈՎԱՆԴԱԿՈՒԹՅՈՒՆ
4 ժամ Բազմություններ
ԳՐԱԿԱՆՈՒԹՅՈՒՆ
1. Պետրոսյան, Տրամաբանություն, 2018
";

#[test]
fn test_english_syllabus() {
    let course = parse(ENGLISH);

    assert_eq!(course.language, Language::English);
    assert_eq!(course.title, "MATHEMATICAL LOGIC");
    assert_eq!(course.academic_year, "2024-2025");
    assert_eq!(course.degree, "Bachelor");
    assert_eq!(course.qualification, "Applied Mathematics");
    assert_eq!(course.professor, "Dr. A. Hakobyan");
    assert_eq!(course.ects, 6);
    assert_eq!(course.lecture_hours, 30);
    assert_eq!(course.practical_hours, 15);
    assert_eq!(course.lab_hours, 0);

    let codes: Vec<&str> = course.learning_outcomes.iter().map(|o| o.code.as_str()).collect();
    assert_eq!(codes, vec!["A1", "A2", "B1", "C1"]);
    assert_eq!(
        course.learning_outcomes[0].description,
        "Knows the syntax and semantics of propositional logic"
    );
    assert_eq!(course.learning_outcomes[3].category, OutcomeCategory::GeneralSkills);

    assert_eq!(course.assessments.len(), 3);
    let midterm = &course.assessments[1];
    assert_eq!(midterm.kind, AssessmentKind::Midterm);
    assert_eq!(midterm.method, AssessmentMethod::Written);
    assert_eq!(midterm.duration_hours, Some(1.5));
    assert_eq!(midterm.weight_percent, Some(30));
    assert_eq!(course.assessments[2].method, AssessmentMethod::Oral);

    let methods: Vec<TeachingMethodKind> = course.teaching_methods.iter().map(|m| m.name).collect();
    assert_eq!(
        methods,
        vec![
            TeachingMethodKind::Lectures,
            TeachingMethodKind::PracticalWork,
            TeachingMethodKind::GroupWork,
            TeachingMethodKind::ELearning,
        ]
    );

    let prerequisites: Vec<&str> = course
        .prerequisites
        .iter()
        .map(|p| p.description.as_str())
        .collect();
    assert_eq!(prerequisites, vec!["Set theory", "elementary algebra"]);

    assert_eq!(course.syllabus.len(), 3);
    assert_eq!(course.syllabus[2].topic, "Normal forms and resolution");
    assert_eq!(course.syllabus.iter().map(|t| t.hours).sum::<u32>(), 18);

    assert_eq!(course.references.len(), 2);
    assert_eq!(course.references[0].kind, ReferenceKind::Core);
    assert_eq!(course.references[0].isbn.as_deref(), Some("9781482237726"));
    assert_eq!(course.references[1].kind, ReferenceKind::Additional);
    assert_eq!(course.references[1].author, "Enderton");
    assert_eq!(course.references[1].year, Some(2001));
}

#[test]
fn test_french_syllabus() {
    let course = parse(FRENCH);

    assert_eq!(course.language, Language::French);
    assert_eq!(course.title, "LOGIQUE MATHÉMATIQUE");
    assert_eq!(course.degree, "Licence");
    assert_eq!(course.professor, "M. Dupont");
    assert_eq!(course.ects, 5);
    assert_eq!(course.total_hours(), 36);
    assert_eq!(course.learning_outcomes.len(), 2);
    assert_eq!(course.assessments.len(), 2);
    assert_eq!(course.assessments[1].kind, AssessmentKind::FinalExam);
    assert_eq!(course.assessments[1].duration_hours, Some(3.0));
    assert_eq!(course.teaching_methods.len(), 2);
    assert!(course.prerequisites.is_empty());
    assert_eq!(course.syllabus[1].topic, "Prédicats");
    assert_eq!(course.references[0].title, "Logique");
}

#[test]
fn test_armenian_syllabus() {
    let outcome = parse_with_diagnostics(ARMENIAN);
    let course = outcome.course;

    assert_eq!(course.language, Language::Armenian);
    assert_eq!(course.title, "ՏՐԱՄԱԲԱՆՈՒԹՅՈՒՆ");
    assert_eq!(course.academic_year, "2024-2025");
    assert_eq!(course.professor, "Ա. Պետրոսյան");
    assert_eq!(course.ects, 4);
    assert_eq!(course.learning_outcomes.len(), 2);
    assert_eq!(course.learning_outcomes[1].category, OutcomeCategory::AppliedSkills);
    assert_eq!(course.assessments[0].kind, AssessmentKind::Midterm);
    assert_eq!(course.assessments[0].method, AssessmentMethod::Written);
    assert_eq!(course.teaching_methods.len(), 2);
    assert_eq!(course.prerequisites[0].description, "Բազմությունների տեսություն");
    assert_eq!(course.syllabus[0].hours, 4);
    assert_eq!(course.references[0].year, Some(2018));
    assert!(!outcome.diagnostics.is_empty());
}

#[test]
fn test_language_priority() {
    assert_eq!(detect_language(""), Language::English);
    assert_eq!(detect_language(FRENCH), Language::French);
    let mixed = format!("{}\nԳրականություն", FRENCH);
    assert_eq!(detect_language(&mixed), Language::Armenian);
}

#[test]
fn test_locator_earliest_end_marker() {
    let section = locate_section(
        "START abc END1 def END2",
        &Marker::literal("START"),
        &[Marker::literal("END2"), Marker::literal("END1")],
    );
    assert_eq!(section, " abc ");
}

#[test]
fn test_parse_is_total_and_idempotent() {
    assert_eq!(parse(""), Course::default());
    for sample in [ENGLISH, FRENCH, ARMENIAN, "\u{feff}\r\n\t\u{a0}", "ECTS 99999999999"] {
        assert_eq!(parse(sample), parse(sample));
    }
    assert_eq!(parse("ECTS 99999999999").ects, 0);
}
