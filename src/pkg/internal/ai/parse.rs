use serde::de::DeserializeOwned;

/// Outcome of interpreting free-form model text. Unparseable output is a
/// value, not an error: callers fold `Degraded` into a stable response
/// shape instead of surfacing a parse failure.
#[derive(Debug)]
pub enum ModelOutput<T> {
    Structured(T),
    Degraded(String),
}

/// Models wrap JSON in markdown fences often enough that stripping them
/// first is worth it before giving up on the structured path.
fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> ModelOutput<T> {
    match serde_json::from_str::<T>(strip_fences(raw)) {
        Ok(parsed) => ModelOutput::Structured(parsed),
        Err(_) => ModelOutput::Degraded(raw.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::ai::report::{Confidence, ImprovementSet, SuggestionReport};

    #[test]
    fn valid_json_comes_back_structured() {
        let raw = r#"{"improved": ["Led a team of five"], "tips": ["quantify impact"]}"#;
        match parse_structured::<ImprovementSet>(raw) {
            ModelOutput::Structured(set) => {
                assert_eq!(set.improved, vec!["Led a team of five"]);
                assert_eq!(set.tips, vec!["quantify impact"]);
                assert_eq!(set.confidence, Confidence::Full);
            }
            ModelOutput::Degraded(_) => panic!("expected structured output"),
        }
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let raw = "```json\n{\"improved\": [\"Shipped the release\"]}\n```";
        assert!(matches!(
            parse_structured::<ImprovementSet>(raw),
            ModelOutput::Structured(_)
        ));
    }

    #[test]
    fn prose_degrades_with_the_raw_text() {
        let raw = "Here are some thoughts on your resume...";
        match parse_structured::<SuggestionReport>(raw) {
            ModelOutput::Degraded(text) => assert_eq!(text, raw),
            ModelOutput::Structured(_) => panic!("expected degraded output"),
        }
    }

    #[test]
    fn degraded_report_keeps_the_contract() {
        let report = SuggestionReport::degraded("free-form advice".into());
        assert_eq!(report.overall_score, 75);
        assert_eq!(report.summary, "AI analysis completed");
        assert_eq!(report.suggestions["general"], vec!["free-form advice"]);
        assert_eq!(report.confidence, Confidence::Degraded);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["confidence"], "degraded");
        assert_eq!(value["overallScore"], 75);
    }

    #[test]
    fn structured_report_fields_pass_through_unchanged() {
        let raw = r#"{
            "overallScore": 85,
            "summary": "Solid resume",
            "suggestions": {"experience": ["quantify outcomes"]},
            "keywords": ["rust"],
            "strengths": ["clear history"],
            "improvements": ["add metrics"]
        }"#;
        match parse_structured::<SuggestionReport>(raw) {
            ModelOutput::Structured(report) => {
                assert_eq!(report.overall_score, 85);
                assert_eq!(report.summary, "Solid resume");
                assert_eq!(report.suggestions["experience"], vec!["quantify outcomes"]);
                assert_eq!(report.confidence, Confidence::Full);
            }
            ModelOutput::Degraded(_) => panic!("expected structured output"),
        }
    }
}
