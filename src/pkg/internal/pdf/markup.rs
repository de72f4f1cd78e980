use askama::Template;

use crate::pkg::internal::adaptors::resumes::spec::ResumeDoc;
use crate::prelude::Result;

/// The printable resume document. Every optional section is emitted only
/// when its data is non-empty, in a fixed order; askama escaping applies
/// to all user content.
#[derive(Template)]
#[template(path = "resume_pdf.html")]
pub struct ResumeMarkup<'a> {
    pub resume: &'a ResumeDoc,
}

pub fn render(resume: &ResumeDoc) -> Result<String> {
    Ok(ResumeMarkup { resume }.render()?)
}

/// Download filename per the export contract:
/// `{firstName}_{lastName}_Resume.pdf`.
///
/// Names land inside a quoted Content-Disposition value, so quotes,
/// backslashes and control characters are replaced with underscores.
pub fn export_filename(resume: &ResumeDoc) -> String {
    format!(
        "{}_{}_Resume.pdf",
        header_safe(&resume.personal_info.first_name),
        header_safe(&resume.personal_info.last_name)
    )
}

fn header_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_control() || c == '"' || c == '\\' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::resumes::spec::{
        Award, Education, Experience, PersonalInfo, Project,
    };

    fn header_only_doc() -> ResumeDoc {
        ResumeDoc {
            personal_info: PersonalInfo {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "j@x.com".into(),
                phone: "123".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn header_only_resume_has_no_optional_sections() {
        let html = render(&header_only_doc()).unwrap();
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("j@x.com"));
        for section in [
            "Professional Summary",
            "Professional Experience",
            "Education",
            "Skills",
            "Projects",
            "Certifications",
            "Awards",
        ] {
            assert!(!html.contains(section), "unexpected section: {section}");
        }
    }

    #[test]
    fn populated_sections_appear_in_fixed_order() {
        let mut doc = header_only_doc();
        doc.summary = Some("Seasoned engineer.".into());
        doc.experience.push(Experience {
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "2020-01".into(),
            current: true,
            description: "Built things".into(),
            achievements: vec!["Shipped v1".into()],
            ..Default::default()
        });
        doc.education.push(Education {
            institution: "MIT".into(),
            degree: "BSc".into(),
            field_of_study: "CS".into(),
            start_date: "2016-09".into(),
            end_date: Some("2020-06".into()),
            gpa: Some("3.9".into()),
            ..Default::default()
        });
        doc.skills.technical = vec!["Rust".into(), "Postgres".into()];
        doc.projects.push(Project {
            name: "resumekit".into(),
            description: "Resume service".into(),
            technologies: vec!["axum".into()],
            ..Default::default()
        });
        doc.awards.push(Award {
            title: "Top Performer".into(),
            issuer: "Acme".into(),
            date: "2023".into(),
            ..Default::default()
        });

        let html = render(&doc).unwrap();
        let positions: Vec<usize> = [
            "Professional Summary",
            "Professional Experience",
            "Education",
            "Skills",
            "Projects",
            "Awards",
        ]
        .iter()
        .map(|s| html.find(s).unwrap_or_else(|| panic!("missing section: {s}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!html.contains("Certifications"));
        assert!(html.contains("Present"));
        assert!(html.contains("GPA: 3.9"));
    }

    #[test]
    fn user_content_is_escaped() {
        let mut doc = header_only_doc();
        doc.summary = Some("<script>alert('x')</script>".into());
        let html = render(&doc).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&#60;script&#62;"));
    }

    #[test]
    fn filename_joins_names_with_underscores() {
        assert_eq!(export_filename(&header_only_doc()), "Jane_Doe_Resume.pdf");
    }

    #[test]
    fn filename_replaces_header_breaking_characters() {
        let mut doc = header_only_doc();
        doc.personal_info.first_name = "Ja\"ne".into();
        doc.personal_info.last_name = "Do\ne\\".into();
        assert_eq!(export_filename(&doc), "Ja_ne_Do_e__Resume.pdf");
    }
}
