use axum::http::StatusCode;
use standard_error::{Interpolate, StandardError, Status};

use super::spec::ResumeDoc;
use crate::prelude::Result;

/// Collects the paths of all required fields that are empty. An empty
/// result means the document may be persisted.
pub fn missing_fields(doc: &ResumeDoc) -> Vec<String> {
    let mut missing = Vec::new();
    let mut require = |path: String, value: &str| {
        if value.trim().is_empty() {
            missing.push(path);
        }
    };

    require("personalInfo.firstName".into(), &doc.personal_info.first_name);
    require("personalInfo.lastName".into(), &doc.personal_info.last_name);
    require("personalInfo.email".into(), &doc.personal_info.email);
    require("personalInfo.phone".into(), &doc.personal_info.phone);

    for (i, exp) in doc.experience.iter().enumerate() {
        require(format!("experience[{i}].company"), &exp.company);
        require(format!("experience[{i}].position"), &exp.position);
        require(format!("experience[{i}].startDate"), &exp.start_date);
    }
    for (i, edu) in doc.education.iter().enumerate() {
        require(format!("education[{i}].institution"), &edu.institution);
        require(format!("education[{i}].degree"), &edu.degree);
        require(format!("education[{i}].startDate"), &edu.start_date);
    }
    for (i, project) in doc.projects.iter().enumerate() {
        require(format!("projects[{i}].name"), &project.name);
        require(format!("projects[{i}].description"), &project.description);
    }
    for (i, cert) in doc.certifications.iter().enumerate() {
        require(format!("certifications[{i}].name"), &cert.name);
        require(format!("certifications[{i}].issuer"), &cert.issuer);
        require(format!("certifications[{i}].date"), &cert.date);
    }
    for (i, award) in doc.awards.iter().enumerate() {
        require(format!("awards[{i}].title"), &award.title);
        require(format!("awards[{i}].issuer"), &award.issuer);
        require(format!("awards[{i}].date"), &award.date);
    }

    missing
}

pub fn ensure_valid(doc: &ResumeDoc) -> Result<()> {
    let missing = missing_fields(doc);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StandardError::new("ERR-RESUME-002")
            .code(StatusCode::BAD_REQUEST)
            .interpolate_err(missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::resumes::spec::{
        Award, Certification, Experience, PersonalInfo,
    };

    fn minimal_doc() -> ResumeDoc {
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
    fn minimal_personal_info_is_valid() {
        assert!(missing_fields(&minimal_doc()).is_empty());
        assert!(ensure_valid(&minimal_doc()).is_ok());
    }

    #[test]
    fn empty_document_reports_personal_info_paths() {
        let missing = missing_fields(&ResumeDoc::default());
        assert_eq!(
            missing,
            vec![
                "personalInfo.firstName",
                "personalInfo.lastName",
                "personalInfo.email",
                "personalInfo.phone",
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut doc = minimal_doc();
        doc.personal_info.phone = "   ".into();
        assert_eq!(missing_fields(&doc), vec!["personalInfo.phone"]);
    }

    #[test]
    fn list_entries_are_checked_by_index() {
        let mut doc = minimal_doc();
        doc.experience.push(Experience {
            company: "Acme".into(),
            position: "".into(),
            start_date: "2020-01".into(),
            ..Default::default()
        });
        doc.certifications.push(Certification {
            name: "AWS SAA".into(),
            issuer: "".into(),
            date: "2023-05".into(),
            ..Default::default()
        });
        doc.awards.push(Award {
            title: "Top Performer".into(),
            issuer: "Acme".into(),
            date: "".into(),
            ..Default::default()
        });
        assert_eq!(
            missing_fields(&doc),
            vec![
                "experience[0].position",
                "certifications[0].issuer",
                "awards[0].date",
            ]
        );
    }

    #[test]
    fn invalid_document_maps_to_bad_request() {
        let err = ensure_valid(&ResumeDoc::default()).unwrap_err();
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("personalInfo.firstName"));
    }
}
