//! Typed shape of the external model's resume verdict.

use serde::{Deserialize, Serialize};

/// Qualitative rating the model assigns each resume section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Good,
    NeedsWork,
    Critical,
}

/// Per-section feedback block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionFeedback {
    pub score: u32,
    pub status: SectionStatus,
    pub feedback: String,
}

/// Full scored feedback for one resume, as returned by the model.
/// The prompt pins this schema; `call_json` deserializes straight into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub overall_score: u32,
    pub summary: SectionFeedback,
    pub experience: SectionFeedback,
    pub skills: SectionFeedback,
    pub education: SectionFeedback,
    pub ats_score: u32,
    pub key_improvements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_analysis_deserializes_from_model_output() {
        let json = r#"{
            "overall_score": 78,
            "summary": {"score": 85, "status": "good", "feedback": "Clear and concise."},
            "experience": {"score": 72, "status": "needs_work", "feedback": "Quantify outcomes."},
            "skills": {"score": 65, "status": "critical", "feedback": "List concrete tools."},
            "education": {"score": 80, "status": "good", "feedback": "Fine as is."},
            "ats_score": 70,
            "key_improvements": ["Add metrics", "Name cloud providers", "Trim summary"]
        }"#;

        let analysis: ResumeAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_score, 78);
        assert_eq!(analysis.summary.status, SectionStatus::Good);
        assert_eq!(analysis.experience.status, SectionStatus::NeedsWork);
        assert_eq!(analysis.skills.status, SectionStatus::Critical);
        assert_eq!(analysis.key_improvements.len(), 3);
    }

    #[test]
    fn test_section_status_serializes_snake_case() {
        let json = serde_json::to_string(&SectionStatus::NeedsWork).unwrap();
        assert_eq!(json, r#""needs_work""#);
    }
}
