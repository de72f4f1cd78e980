use std::sync::Arc;

use ai::{
    chat_completions::{ChatCompletion, ChatCompletionMessage, ChatCompletionRequestBuilder},
    clients::openai::Client,
};
use serde_json::Value;
use standard_error::{Interpolate, StandardError};

use super::parse::{parse_structured, ModelOutput};
use super::report::{ImprovementSet, KeywordSet, SuggestionReport};
use crate::{conf::settings, prelude::Result};

#[async_trait::async_trait]
pub trait AdvisorOps {
    async fn resume_suggestions(
        &self,
        resume: &Value,
        target_role: Option<&str>,
        industry: Option<&str>,
    ) -> Result<SuggestionReport>;

    async fn industry_keywords(
        &self,
        industry: Option<&str>,
        role: Option<&str>,
    ) -> Result<KeywordSet>;

    async fn improve_section(
        &self,
        section: &str,
        content: &str,
        context: Option<&str>,
    ) -> Result<ImprovementSet>;
}

#[async_trait::async_trait]
impl AdvisorOps for Arc<Client> {
    async fn resume_suggestions(
        &self,
        resume: &Value,
        target_role: Option<&str>,
        industry: Option<&str>,
    ) -> Result<SuggestionReport> {
        let prompt = format!(
            r#"As a professional resume expert, analyze the following resume and provide specific, actionable suggestions for improvement.

Resume Data:
{}

Target Role: {}
Industry: {}

Please provide suggestions in the following categories:
1. Professional Summary - How to make it more compelling and targeted
2. Experience Section - How to better highlight achievements and impact
3. Skills Section - Missing skills or better organization
4. Overall Structure - Formatting and organization improvements
5. Content Optimization - Keywords and industry-specific terms

Format your response as a JSON object with the following structure:
{{
  "overallScore": 85,
  "summary": "Brief overall assessment",
  "suggestions": {{
    "professionalSummary": ["suggestion1", "suggestion2"],
    "experience": ["suggestion1", "suggestion2"],
    "skills": ["suggestion1", "suggestion2"],
    "structure": ["suggestion1", "suggestion2"],
    "content": ["suggestion1", "suggestion2"]
  }},
  "keywords": ["keyword1", "keyword2", "keyword3"],
  "strengths": ["strength1", "strength2"],
  "improvements": ["improvement1", "improvement2"]
}}

Return ONLY valid JSON, no markdown code blocks or explanations.
Provide practical, specific suggestions that the user can immediately implement."#,
            serde_json::to_string_pretty(resume)?,
            target_role.unwrap_or("Not specified"),
            industry.unwrap_or("Not specified"),
        );
        let text = complete(self, prompt).await?;
        Ok(match parse_structured::<SuggestionReport>(&text) {
            ModelOutput::Structured(report) => report,
            ModelOutput::Degraded(raw) => SuggestionReport::degraded(raw),
        })
    }

    async fn industry_keywords(
        &self,
        industry: Option<&str>,
        role: Option<&str>,
    ) -> Result<KeywordSet> {
        let prompt = format!(
            r#"Generate a list of important keywords and skills for the following:
Industry: {}
Role: {}

Provide the response as a JSON object with the following structure:
{{
  "technicalSkills": ["skill1", "skill2", "skill3"],
  "softSkills": ["skill1", "skill2", "skill3"],
  "industryKeywords": ["keyword1", "keyword2", "keyword3"],
  "tools": ["tool1", "tool2", "tool3"],
  "certifications": ["cert1", "cert2", "cert3"]
}}

Return ONLY valid JSON, no markdown code blocks or explanations.
Focus on current, in-demand skills and keywords that would make a resume stand out."#,
            industry.unwrap_or("General"),
            role.unwrap_or("General"),
        );
        let text = complete(self, prompt).await?;
        Ok(match parse_structured::<KeywordSet>(&text) {
            ModelOutput::Structured(keywords) => keywords,
            ModelOutput::Degraded(raw) => KeywordSet::degraded(raw),
        })
    }

    async fn improve_section(
        &self,
        section: &str,
        content: &str,
        context: Option<&str>,
    ) -> Result<ImprovementSet> {
        let prompt = format!(
            r#"Improve the following {} section of a resume:

Current Content:
{}

Context: {}

Please provide 3-5 improved versions that are:
1. More impactful and results-oriented
2. Better formatted
3. More professional
4. Include relevant keywords
5. Quantify achievements where possible

Return the response as JSON, with no markdown code blocks or explanations:
{{
  "improved": ["version1", "version2", "version3"],
  "tips": ["tip1", "tip2", "tip3"]
}}"#,
            section,
            content,
            context.unwrap_or("General improvement"),
        );
        let text = complete(self, prompt).await?;
        Ok(match parse_structured::<ImprovementSet>(&text) {
            ModelOutput::Structured(improvements) => improvements,
            ModelOutput::Degraded(raw) => ImprovementSet::degraded(raw),
        })
    }
}

/// One blocking round trip to the configured model endpoint. Transport or
/// quota failures surface here as errors, unlike the parse-fallback path.
async fn complete(client: &Client, prompt: String) -> Result<String> {
    let request = ChatCompletionRequestBuilder::default()
        .model(&settings.ai_model)
        .messages(vec![ChatCompletionMessage::User(prompt.into())])
        .build()
        .map_err(|e| StandardError::new("ERR-AI-001").interpolate_err(e.to_string()))?;
    let response = client
        .chat_completions(&request)
        .await
        .map_err(|e| StandardError::new("ERR-AI-002").interpolate_err(e.to_string()))?;
    let content = response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .ok_or_else(|| StandardError::new("ERR-AI-003"))?;
    Ok(content)
}
