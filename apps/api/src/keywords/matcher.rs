//! Keyword Matcher: scans text for canonical vocabulary terms and compares a
//! resume's skill set against a job description.
//!
//! Matching is whole-word and case-insensitive. A whole-word occurrence is a
//! substring bounded by non-alphanumeric characters or string edges on both
//! sides, so "Go" never matches inside "Golang" or "Google", while symbol
//! keywords like "C++" still match next to punctuation. Rust's regex engine
//! has no lookaround and `\b` misbehaves next to symbol characters, so the
//! patterns spell the edge classes out and only `is_match` is consulted.

use std::collections::HashSet;

use anyhow::Result;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::keywords::vocabulary::KeywordVocabulary;

/// Inventory of recognized terms in one document.
/// Both lists are deduplicated, lexicographically sorted, and carry canonical
/// vocabulary casing regardless of the casing found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub technical_skills: Vec<String>,
    pub action_verbs: Vec<String>,
    pub total_count: usize,
}

/// Resume-vs-job comparison. Only produced when a job description was
/// supplied; `match_percentage` is 0 when the job text yields no recognized
/// keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatchReport {
    pub match_percentage: u32,
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

struct CompiledKeyword {
    canonical: String,
    pattern: regex::Regex,
}

/// Whole-word scanner over the fixed vocabulary. Compiled once at startup;
/// both operations are pure functions of their inputs.
pub struct KeywordMatcher {
    skills: Vec<CompiledKeyword>,
    verbs: Vec<CompiledKeyword>,
}

impl KeywordMatcher {
    pub fn new(vocabulary: &KeywordVocabulary) -> Result<Self> {
        let skills = vocabulary
            .technical_keywords()
            .map(compile_keyword)
            .collect::<Result<Vec<_>>>()?;
        let verbs = vocabulary
            .action_verbs()
            .iter()
            .copied()
            .map(compile_keyword)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { skills, verbs })
    }

    /// Scans `text` for every canonical keyword and action verb.
    pub fn scan(&self, text: &str) -> KeywordReport {
        let technical_skills = find_matches(&self.skills, text);
        let action_verbs = find_matches(&self.verbs, text);
        let total_count = technical_skills.len() + action_verbs.len();

        KeywordReport {
            technical_skills,
            action_verbs,
            total_count,
        }
    }

    /// Compares a resume's technical-skill set against a job description.
    ///
    /// Returns `None` when no job description was supplied. Job keywords come
    /// from the technical vocabulary only; action verbs never participate.
    /// The percentage uses truncating integer division.
    pub fn match_against_job(
        &self,
        report: &KeywordReport,
        job_text: &str,
    ) -> Option<JobMatchReport> {
        if job_text.trim().is_empty() {
            return None;
        }

        let job_keywords = find_matches(&self.skills, job_text);
        if job_keywords.is_empty() {
            return Some(JobMatchReport {
                match_percentage: 0,
                matching_keywords: Vec::new(),
                missing_keywords: Vec::new(),
            });
        }

        let resume_skills: HashSet<String> = report
            .technical_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let total = job_keywords.len();
        let (matching_keywords, missing_keywords): (Vec<String>, Vec<String>) = job_keywords
            .into_iter()
            .partition(|k| resume_skills.contains(&k.to_lowercase()));

        let match_percentage = (100 * matching_keywords.len() / total) as u32;

        Some(JobMatchReport {
            match_percentage,
            matching_keywords,
            missing_keywords,
        })
    }
}

fn compile_keyword(canonical: &str) -> Result<CompiledKeyword> {
    // Escaped literally, so symbol characters in the keyword never act as
    // pattern syntax.
    let pattern = format!(
        r"(?:^|[^A-Za-z0-9]){}(?:[^A-Za-z0-9]|$)",
        regex::escape(canonical)
    );
    let pattern = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

    Ok(CompiledKeyword {
        canonical: canonical.to_string(),
        pattern,
    })
}

fn find_matches(keywords: &[CompiledKeyword], text: &str) -> Vec<String> {
    let mut found: Vec<String> = keywords
        .iter()
        .filter(|k| k.pattern.is_match(text))
        .map(|k| k.canonical.clone())
        .collect();
    found.sort();
    found.dedup();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> KeywordMatcher {
        KeywordMatcher::new(&KeywordVocabulary::builtin()).unwrap()
    }

    #[test]
    fn test_whole_word_match_finds_go_and_django() {
        let report = matcher().scan("I used Go and Django");
        assert!(report.technical_skills.contains(&"Go".to_string()));
        assert!(report.technical_skills.contains(&"Django".to_string()));
    }

    #[test]
    fn test_no_match_inside_longer_words() {
        let report = matcher().scan("Golang googler");
        assert!(
            !report.technical_skills.contains(&"Go".to_string()),
            "Go must not match inside Golang or googler"
        );
    }

    #[test]
    fn test_symbol_keywords_match_literally() {
        let report = matcher().scan("Experience in C++ and C#");
        assert!(report.technical_skills.contains(&"C++".to_string()));
        assert!(report.technical_skills.contains(&"C#".to_string()));
    }

    #[test]
    fn test_symbol_keywords_respect_boundaries() {
        // The suffix "17" is alphanumeric, so "C++" is not bounded here.
        let report = matcher().scan("worked with C++17 internals");
        assert!(!report.technical_skills.contains(&"C++".to_string()));

        let report = matcher().scan("built CI/CD pipelines");
        assert!(report.technical_skills.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_canonical_casing_in_output() {
        let report = matcher().scan("python and DOCKER and KuBeRnEtEs");
        assert_eq!(
            report.technical_skills,
            vec!["Docker", "Kubernetes", "Python"]
        );
    }

    #[test]
    fn test_results_sorted_and_deduplicated() {
        let report = matcher().scan("Python python PYTHON, Docker docker");
        assert_eq!(report.technical_skills, vec!["Docker", "Python"]);
        assert_eq!(report.total_count, 2);
    }

    #[test]
    fn test_total_count_is_sum_of_both_sets() {
        let report = matcher().scan("Developed services in Rust and Python");
        assert_eq!(
            report.total_count,
            report.technical_skills.len() + report.action_verbs.len()
        );
        assert_eq!(report.action_verbs, vec!["Developed"]);
    }

    #[test]
    fn test_scan_empty_text_yields_empty_report() {
        let report = matcher().scan("");
        assert!(report.technical_skills.is_empty());
        assert!(report.action_verbs.is_empty());
        assert_eq!(report.total_count, 0);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let m = matcher();
        let text = "Led the migration of a Django API to Kubernetes";
        assert_eq!(m.scan(text), m.scan(text));
    }

    #[test]
    fn test_action_verbs_match_case_insensitively() {
        let report = matcher().scan("led a team; developed tooling");
        assert_eq!(report.action_verbs, vec!["Developed", "Led"]);
    }

    #[test]
    fn test_resume_and_job_description_end_to_end() {
        let m = matcher();
        let report =
            m.scan("Developed a REST API using Python and Docker, led the migration to AWS.");
        assert_eq!(
            report.technical_skills,
            vec!["API", "AWS", "Docker", "Python", "REST"]
        );
        assert_eq!(report.action_verbs, vec!["Developed", "Led"]);
        assert_eq!(report.total_count, 7);

        let job_match = m
            .match_against_job(&report, "Looking for a Python and Kubernetes expert")
            .unwrap();
        assert_eq!(job_match.matching_keywords, vec!["Python"]);
        assert_eq!(job_match.missing_keywords, vec!["Kubernetes"]);
        assert_eq!(job_match.match_percentage, 50);
    }

    #[test]
    fn test_empty_job_description_returns_none() {
        let m = matcher();
        let report = m.scan("Python");
        assert!(m.match_against_job(&report, "").is_none());
        assert!(m.match_against_job(&report, "   \n ").is_none());
    }

    #[test]
    fn test_job_with_no_recognized_keywords_yields_zero_report() {
        let m = matcher();
        let report = m.scan("Python");
        let job_match = m
            .match_against_job(&report, "blah blah no tech terms")
            .unwrap();
        assert_eq!(job_match.match_percentage, 0);
        assert!(job_match.matching_keywords.is_empty());
        assert!(job_match.missing_keywords.is_empty());
    }

    #[test]
    fn test_match_percentage_truncates() {
        let m = matcher();
        let report = m.scan("I know Python");
        let job_match = m
            .match_against_job(&report, "Python, Kubernetes and Terraform required")
            .unwrap();
        // 1 of 3 matched; 33.33 truncates to 33
        assert_eq!(job_match.match_percentage, 33);
        assert_eq!(job_match.matching_keywords, vec!["Python"]);
        assert_eq!(job_match.missing_keywords, vec!["Kubernetes", "Terraform"]);
    }

    #[test]
    fn test_action_verbs_never_count_toward_job_match() {
        let m = matcher();
        // Resume mentions "Developed" (a verb) but no technical skills.
        let report = m.scan("Developed things");
        let job_match = m
            .match_against_job(&report, "Developed Python applications")
            .unwrap();
        // "Developed" in the job text is not a technical keyword, so the job
        // side only yields "Python", and the resume has nothing to match it.
        assert_eq!(job_match.matching_keywords, Vec::<String>::new());
        assert_eq!(job_match.missing_keywords, vec!["Python"]);
        assert_eq!(job_match.match_percentage, 0);
    }

    #[test]
    fn test_multi_word_keyword_matches_across_spaces() {
        let report = matcher().scan("applied machine learning to ranking");
        assert!(report
            .technical_skills
            .contains(&"Machine Learning".to_string()));
    }
}
