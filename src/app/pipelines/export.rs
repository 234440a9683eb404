//! Output rendering: JSON document, per-entity CSV tables, ZIP bundle.

use crate::domain::model::PersistedCourse;
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

/// A named output file, relative to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl OutputFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

pub fn json_document(courses: &[PersistedCourse]) -> Result<OutputFile> {
    Ok(OutputFile::new("courses.json", serde_json::to_vec_pretty(courses)?))
}

/// One table per entity. Child rows are numbered across all courses and
/// point back through `course_id`.
pub fn csv_tables(courses: &[PersistedCourse]) -> Result<Vec<OutputFile>> {
    let course_rows = courses.iter().map(|p| {
        let c = &p.course;
        vec![
            p.id.to_string(),
            p.source.clone(),
            c.title.clone(),
            c.academic_year.clone(),
            c.degree.clone(),
            c.qualification.clone(),
            c.language.to_string(),
            c.professor.clone(),
            c.ects.to_string(),
            c.lecture_hours.to_string(),
            c.practical_hours.to_string(),
            c.lab_hours.to_string(),
            c.total_hours().to_string(),
            p.stored_at.to_rfc3339(),
        ]
    });

    let outcomes = child_rows(courses, |p| {
        p.course
            .learning_outcomes
            .iter()
            .map(|o| vec![o.code.clone(), o.category.as_str().to_string(), o.description.clone()])
            .collect()
    });
    let assessments = child_rows(courses, |p| {
        p.course
            .assessments
            .iter()
            .map(|a| {
                vec![
                    a.kind.as_str().to_string(),
                    a.method.as_str().to_string(),
                    optional(a.duration_hours),
                    optional(a.weight_percent),
                    a.group_based.to_string(),
                    a.project_required.to_string(),
                    a.presentation_required.to_string(),
                ]
            })
            .collect()
    });
    let methods = child_rows(courses, |p| {
        p.course
            .teaching_methods
            .iter()
            .map(|m| vec![m.name.as_str().to_string()])
            .collect()
    });
    let prerequisites = child_rows(courses, |p| {
        p.course
            .prerequisites
            .iter()
            .map(|r| vec![r.description.clone()])
            .collect()
    });
    let syllabus = child_rows(courses, |p| {
        p.course
            .syllabus
            .iter()
            .map(|t| vec![t.topic.clone(), t.hours.to_string()])
            .collect()
    });
    let references = child_rows(courses, |p| {
        p.course
            .references
            .iter()
            .map(|r| {
                vec![
                    r.kind.as_str().to_string(),
                    r.title.clone(),
                    r.author.clone(),
                    optional(r.year),
                    r.isbn.clone().unwrap_or_default(),
                    r.url.clone().unwrap_or_default(),
                ]
            })
            .collect()
    });

    Ok(vec![
        table(
            "courses.csv",
            &[
                "id", "source", "title", "academic_year", "degree", "qualification", "language",
                "professor", "ects", "lecture_hours", "practical_hours", "lab_hours",
                "total_hours", "stored_at",
            ],
            course_rows,
        )?,
        table(
            "learning_outcomes.csv",
            &["id", "course_id", "code", "category", "description"],
            outcomes,
        )?,
        table(
            "assessments.csv",
            &[
                "id", "course_id", "type", "method", "duration_hours", "weight_percent",
                "group_based", "project_required", "presentation_required",
            ],
            assessments,
        )?,
        table("teaching_methods.csv", &["id", "course_id", "method"], methods)?,
        table("prerequisites.csv", &["id", "course_id", "description"], prerequisites)?,
        table("syllabus.csv", &["id", "course_id", "topic", "hours"], syllabus)?,
        table(
            "references.csv",
            &["id", "course_id", "type", "title", "author", "year", "isbn", "url"],
            references,
        )?,
    ])
}

pub fn zip_bundle(files: &[OutputFile]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for file in files {
        zip.start_file::<_, ()>(file.name.as_str(), FileOptions::default())?;
        zip.write_all(&file.data)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn child_rows(
    courses: &[PersistedCourse],
    rows_of: impl Fn(&PersistedCourse) -> Vec<Vec<String>>,
) -> Vec<Vec<String>> {
    courses
        .iter()
        .flat_map(|course| {
            rows_of(course)
                .into_iter()
                .map(move |row| (course.id, row))
        })
        .enumerate()
        .map(|(index, (course_id, row))| {
            let mut full = vec![(index + 1).to_string(), course_id.to_string()];
            full.extend(row);
            full
        })
        .collect()
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn table(
    name: &str,
    headers: &[&str],
    rows: impl IntoIterator<Item = Vec<String>>,
) -> Result<OutputFile> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(headers)?;
        for row in rows {
            writer.write_record(&row)?;
        }
        writer.flush()?;
    }
    Ok(OutputFile::new(name, buffer))
}
