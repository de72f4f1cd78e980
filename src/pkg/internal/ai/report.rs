use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marks whether a response came back in the requested structure or was
/// rebuilt from unstructured model output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Full,
    Degraded,
}

fn degraded_score() -> u32 {
    75
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    #[serde(default = "degraded_score")]
    pub overall_score: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub suggestions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub confidence: Confidence,
}

impl SuggestionReport {
    pub fn degraded(raw: String) -> Self {
        let mut suggestions = BTreeMap::new();
        suggestions.insert("general".to_string(), vec![raw]);
        SuggestionReport {
            overall_score: degraded_score(),
            summary: "AI analysis completed".to_string(),
            suggestions,
            keywords: Vec::new(),
            strengths: Vec::new(),
            improvements: Vec::new(),
            confidence: Confidence::Degraded,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSet {
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub industry_keywords: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub general: Vec<String>,
    #[serde(default)]
    pub confidence: Confidence,
}

impl KeywordSet {
    pub fn degraded(raw: String) -> Self {
        KeywordSet {
            general: vec![raw],
            confidence: Confidence::Degraded,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImprovementSet {
    #[serde(default)]
    pub improved: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub confidence: Confidence,
}

impl ImprovementSet {
    pub fn degraded(raw: String) -> Self {
        ImprovementSet {
            improved: vec![raw],
            tips: Vec::new(),
            confidence: Confidence::Degraded,
        }
    }
}
