use crate::core::fields::{clean_text, extract_field, Field};
use crate::core::profile::{profile, LanguageProfile};
use crate::domain::model::{Diagnostics, Language};

/// Header scalars of a syllabus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub academic_year: String,
    pub degree: String,
    pub qualification: String,
    pub professor: String,
    pub ects: u32,
    pub lecture_hours: u32,
    pub practical_hours: u32,
    pub lab_hours: u32,
}

pub fn parse(text: &str, language: Language, diagnostics: &mut Diagnostics) -> Metadata {
    let profile = profile(language);
    let rules = &profile.fields;
    let mut text_field = |field| extract_field(text, rules, field, diagnostics).into_text();

    let academic_year = text_field(Field::AcademicYear);
    let degree = text_field(Field::Degree);
    let qualification = text_field(Field::Qualification);
    let professor = text_field(Field::Professor);

    let mut count_field = |field| extract_field(text, rules, field, diagnostics).into_count();
    let ects = count_field(Field::Ects);
    let lecture_hours = count_field(Field::LectureHours);
    let practical_hours = count_field(Field::PracticalHours);
    let lab_hours = count_field(Field::LabHours);

    let title = extract_title(text, profile);
    if title.is_empty() {
        diagnostics.gap("title", "no line outside the header labels");
    }

    Metadata {
        title,
        academic_year,
        degree,
        qualification,
        professor,
        ects,
        lecture_hours,
        practical_hours,
        lab_hours,
    }
}

/// First non-blank line that is not a header label or a bare section heading.
pub fn extract_title(text: &str, profile: &LanguageProfile) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !profile.is_label_line(line))
        .map(clean_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH_HEADER: &str = "ACADEMIC YEAR 2024-2025\n\
        LOGIC\n\
        Degree Bachelor\n\
        Qualification Computer Science.\n\
        Professor Dr. A. Hakobyan\n\
        ECTS 6.6\n\
        CM 18 h. TD 12 h. TPS 6 h.";

    #[test]
    fn reads_every_english_header_field() {
        let mut diagnostics = Diagnostics::new();
        let meta = parse(ENGLISH_HEADER, Language::English, &mut diagnostics);
        assert_eq!(meta.title, "LOGIC");
        assert_eq!(meta.academic_year, "2024-2025");
        assert_eq!(meta.degree, "Bachelor");
        assert_eq!(meta.qualification, "Computer Science");
        assert_eq!(meta.professor, "Dr. A. Hakobyan");
        assert_eq!(meta.ects, 7);
        assert_eq!(meta.lecture_hours, 18);
        assert_eq!(meta.practical_hours, 12);
        assert_eq!(meta.lab_hours, 6);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn ects_label_without_digits_is_zero() {
        let mut diagnostics = Diagnostics::new();
        let meta = parse("ECTS", Language::English, &mut diagnostics);
        assert_eq!(meta.ects, 0);
        assert_eq!(meta.title, "");
    }

    #[test]
    fn reads_french_labels() {
        let text = "ALGÈBRE LINÉAIRE\nANNÉE ACADÉMIQUE 2023-2024\nDiplôme : Licence\n\
            Enseignant : M. Dupont\nCrédits ECTS : 5\nCM 24 h TD 24 h";
        let mut diagnostics = Diagnostics::new();
        let meta = parse(text, Language::French, &mut diagnostics);
        assert_eq!(meta.title, "ALGÈBRE LINÉAIRE");
        assert_eq!(meta.academic_year, "2023-2024");
        assert_eq!(meta.degree, "Licence");
        assert_eq!(meta.professor, "M. Dupont");
        assert_eq!(meta.ects, 5);
        assert_eq!(meta.lecture_hours, 24);
        assert_eq!(meta.practical_hours, 24);
        assert_eq!(meta.lab_hours, 0);
    }

    #[test]
    fn reads_armenian_labels() {
        let text = "ՏՐԱՄԱԲԱՆՈՒԹՅՈՒՆ\nՈՒՍՈՒՄՆԱԿԱՆ ՏԱՐԻ 2024-2025\nԴասախոս՝ Ա. Պետրոսյան\n\
            ԿՐԵԴԻՏ 4\nԴասախոսություն 32";
        let mut diagnostics = Diagnostics::new();
        let meta = parse(text, Language::Armenian, &mut diagnostics);
        assert_eq!(meta.title, "ՏՐԱՄԱԲԱՆՈՒԹՅՈՒՆ");
        assert_eq!(meta.academic_year, "2024-2025");
        assert_eq!(meta.professor, "Ա. Պետրոսյան");
        assert_eq!(meta.ects, 4);
        assert_eq!(meta.lecture_hours, 32);
    }

    #[test]
    fn armenian_separator_before_numbers() {
        let text = "ՏՐԱՄԱԲԱՆՈՒԹՅՈՒՆ\nԴասախոս՝ Ա. Պետրոսյան\nԿՐԵԴԻՏ՝ 4\n\
            Դասախոսություն՝ 32\nԳործնական՝ 16";
        let mut diagnostics = Diagnostics::new();
        let meta = parse(text, Language::Armenian, &mut diagnostics);
        assert_eq!(meta.professor, "Ա. Պետրոսյան");
        assert_eq!(meta.ects, 4);
        assert_eq!(meta.lecture_hours, 32);
        assert_eq!(meta.practical_hours, 16);
    }
}
