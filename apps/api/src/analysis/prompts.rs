// All LLM prompt constants for the analysis module.

/// System prompt for resume analysis. Enforces JSON-only output.
pub const ANALYZE_SYSTEM: &str =
    "You are an expert resume reviewer. Always respond with valid JSON only, no markdown.";

/// Resume analysis prompt template.
/// Replace `{resume_text}` and `{job_description}` before sending;
/// `{job_description}` becomes an empty string when none was supplied.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze this resume and provide feedback.

Resume:
{resume_text}

{job_description}

Return ONLY valid JSON with these keys:
{
    "overall_score": <0-100>,
    "summary": {"score": <0-100>, "status": "good/needs_work/critical", "feedback": "<feedback>"},
    "experience": {"score": <0-100>, "status": "good/needs_work/critical", "feedback": "<feedback>"},
    "skills": {"score": <0-100>, "status": "good/needs_work/critical", "feedback": "<feedback>"},
    "education": {"score": <0-100>, "status": "good/needs_work/critical", "feedback": "<feedback>"},
    "ats_score": <0-100>,
    "key_improvements": ["improvement 1", "improvement 2", "improvement 3"]
}"#;
