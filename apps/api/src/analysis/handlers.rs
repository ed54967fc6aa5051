use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::analysis::models::ResumeAnalysis;
use crate::errors::AppError;
use crate::extract::{extract_text, DocumentFormat};
use crate::keywords::matcher::{JobMatchReport, KeywordReport};
use crate::state::AppState;

/// Uploads larger than this are rejected outright.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Extracted text shorter than this (trimmed) is treated as a failed upload;
/// image-only scans land here.
const MIN_EXTRACTED_CHARS: usize = 50;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub message: String,
    pub filename: String,
    pub analysis: ResumeAnalysis,
    pub keyword_report: KeywordReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobMatchReport>,
}

/// POST /api/upload
///
/// Multipart form: a `file` part (PDF or DOCX) and an optional
/// `job_description` text part. Pipeline: validate, extract, keyword scan,
/// optional job match, external analysis, merged response.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut file_bytes: Option<Bytes> = None;
    let mut filename: Option<String> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Upload(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Upload(e.to_string()))?,
                );
            }
            Some("job_description") => {
                job_description = field
                    .text()
                    .await
                    .map_err(|e| AppError::Upload(e.to_string()))?;
            }
            _ => {}
        }
    }

    let bytes =
        file_bytes.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    let filename = match filename {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::Validation("No file selected".to_string())),
    };
    let format = DocumentFormat::from_filename(&filename)
        .ok_or_else(|| AppError::Validation("Only PDF and DOCX allowed".to_string()))?;
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File exceeds the 5 MB limit".to_string(),
        ));
    }

    let resume_text = extract_text(&bytes, format);
    if resume_text.trim().len() < MIN_EXTRACTED_CHARS {
        return Err(AppError::Validation(
            "Could not extract text from resume".to_string(),
        ));
    }

    info!(
        "Extracted {} chars from {} ({})",
        resume_text.len(),
        filename,
        format.as_str()
    );

    let keyword_report = state.matcher.scan(&resume_text);
    let job_match = state
        .matcher
        .match_against_job(&keyword_report, &job_description);

    let job_description_opt = {
        let trimmed = job_description.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    };
    let analysis = state
        .analyzer
        .analyze(&resume_text, job_description_opt)
        .await?;

    Ok(Json(AnalyzeResponse {
        message: "Analysis complete".to_string(),
        filename,
        analysis,
        keyword_report,
        job_match,
    }))
}

/// GET /api/history
///
/// Analyses are not persisted (uploads are processed in memory and
/// discarded), so history is always empty; the route exists because the
/// frontend polls it.
pub async fn handle_history() -> Json<Value> {
    Json(json!({ "analyses": [] }))
}
