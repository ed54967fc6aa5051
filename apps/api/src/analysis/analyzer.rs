//! Pluggable analysis backend over the external model.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, so the backend can be
//! swapped without touching the endpoint or handler code.

use async_trait::async_trait;

use crate::analysis::models::ResumeAnalysis;
use crate::analysis::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<ResumeAnalysis, AppError>;
}

/// Default backend: one Chat Completions call through the shared LLM client.
pub struct LlmResumeAnalyzer {
    llm: LlmClient,
}

impl LlmResumeAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<ResumeAnalysis, AppError> {
        let job_block = match job_description {
            Some(jd) if !jd.trim().is_empty() => format!("Job Description: {jd}"),
            _ => String::new(),
        };

        let prompt = ANALYZE_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{job_description}", &job_block);

        self.llm
            .call_json::<ResumeAnalysis>(&prompt, ANALYZE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))
    }
}
