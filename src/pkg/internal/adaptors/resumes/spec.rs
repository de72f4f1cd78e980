use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

fn default_template() -> String {
    "modern".into()
}

fn default_theme() -> String {
    "blue".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.languages.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Award {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The resume document as it travels over the wire and as it is stored
/// in the `document` jsonb column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDoc {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for ResumeDoc {
    fn default() -> Self {
        ResumeDoc {
            personal_info: PersonalInfo::default(),
            summary: None,
            experience: Vec::new(),
            education: Vec::new(),
            skills: Skills::default(),
            projects: Vec::new(),
            certifications: Vec::new(),
            awards: Vec::new(),
            template: default_template(),
            theme: default_theme(),
        }
    }
}

impl ResumeDoc {
    /// A `current` position has no end date; drop whatever the builder sent.
    pub fn normalized(mut self) -> Self {
        for exp in &mut self.experience {
            if exp.current {
                exp.end_date = None;
            }
        }
        for edu in &mut self.education {
            if edu.current {
                edu.end_date = None;
            }
        }
        self
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeEntry {
    pub id: Uuid,
    pub document: Json<ResumeDoc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// API representation: the stored document flattened beside its identity
/// and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub document: ResumeDoc,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeEntry> for ResumeRecord {
    fn from(entry: ResumeEntry) -> Self {
        ResumeRecord {
            id: entry.id,
            document: entry.document.0,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_presentation_selectors() {
        let doc: ResumeDoc = serde_json::from_str(
            r#"{"personalInfo":{"firstName":"Jane","lastName":"Doe","email":"j@x.com","phone":"123"}}"#,
        )
        .unwrap();
        assert_eq!(doc.template, "modern");
        assert_eq!(doc.theme, "blue");
        assert!(doc.experience.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.summary.is_none());
    }

    #[test]
    fn camel_case_round_trip() {
        let doc: ResumeDoc = serde_json::from_str(
            r#"{
                "personalInfo":{"firstName":"Jane","lastName":"Doe","email":"j@x.com","phone":"123"},
                "experience":[{"company":"Acme","position":"Engineer","startDate":"2020-01","current":true}],
                "education":[{"institution":"MIT","degree":"BSc","fieldOfStudy":"CS","startDate":"2016-09","endDate":"2020-06"}]
            }"#,
        )
        .unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["personalInfo"]["firstName"], "Jane");
        assert_eq!(value["experience"][0]["startDate"], "2020-01");
        assert_eq!(value["education"][0]["fieldOfStudy"], "CS");
    }

    #[test]
    fn normalize_drops_end_date_of_current_entries() {
        let mut doc = ResumeDoc::default();
        doc.experience.push(Experience {
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "2020-01".into(),
            end_date: Some("2021-01".into()),
            current: true,
            ..Default::default()
        });
        doc.education.push(Education {
            institution: "MIT".into(),
            degree: "BSc".into(),
            start_date: "2016-09".into(),
            end_date: Some("2020-06".into()),
            current: false,
            ..Default::default()
        });
        let doc = doc.normalized();
        assert_eq!(doc.experience[0].end_date, None);
        assert_eq!(doc.education[0].end_date, Some("2020-06".into()));
    }

    #[test]
    fn record_flattens_document_fields() {
        let record = ResumeRecord {
            id: Uuid::nil(),
            document: ResumeDoc::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("document").is_none());
    }
}
