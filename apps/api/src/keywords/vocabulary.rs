//! The fixed keyword vocabulary: canonical technical terms by category, plus
//! the action-verb list scanned independently of them.
//!
//! Canonical casing is what reports carry, regardless of the casing found in
//! source text. Keywords may contain symbol characters ("C++", "CI/CD"); the
//! matcher escapes them before pattern use.

/// Technical keywords, grouped by category. Categories exist only to keep
/// this table reviewable; reports flatten them.
const TECHNICAL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "C++", "C#", "Go", "Java", "JavaScript", "Kotlin", "PHP", "Python", "Ruby", "Rust",
            "Scala", "SQL", "Swift", "TypeScript",
        ],
    ),
    (
        "frameworks",
        &[
            "Angular", "Django", "Express", "FastAPI", "Flask", "Laravel", "Next.js", "Node.js",
            "Rails", "React", "Spring", "Vue",
        ],
    ),
    (
        "tools",
        &[
            "AWS", "Azure", "CI/CD", "Docker", "GCP", "Git", "GitHub", "Jenkins", "Kafka",
            "Kubernetes", "Linux", "MongoDB", "MySQL", "PostgreSQL", "Redis", "Terraform",
        ],
    ),
    (
        "concepts",
        &[
            "Agile", "API", "DevOps", "GraphQL", "Machine Learning", "Microservices", "OOP",
            "REST", "Scrum", "TDD",
        ],
    ),
];

const ACTION_VERBS: &[&str] = &[
    "Achieved",
    "Architected",
    "Automated",
    "Built",
    "Created",
    "Delivered",
    "Deployed",
    "Designed",
    "Developed",
    "Implemented",
    "Improved",
    "Launched",
    "Led",
    "Maintained",
    "Managed",
    "Migrated",
    "Optimized",
    "Reduced",
    "Spearheaded",
    "Streamlined",
];

/// Immutable keyword vocabulary, constructed once at startup and passed
/// explicitly into the matcher.
#[derive(Debug, Clone)]
pub struct KeywordVocabulary {
    categories: &'static [(&'static str, &'static [&'static str])],
    action_verbs: &'static [&'static str],
}

impl KeywordVocabulary {
    /// The built-in vocabulary shipped with the service.
    pub fn builtin() -> Self {
        Self {
            categories: TECHNICAL_KEYWORDS,
            action_verbs: ACTION_VERBS,
        }
    }

    /// All technical keywords across every category, in table order.
    pub fn technical_keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories
            .iter()
            .flat_map(|(_, keywords)| keywords.iter().copied())
    }

    pub fn technical_keyword_count(&self) -> usize {
        self.categories.iter().map(|(_, k)| k.len()).sum()
    }

    pub fn action_verbs(&self) -> &'static [&'static str] {
        self.action_verbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_vocabulary_covers_symbol_keywords() {
        let vocab = KeywordVocabulary::builtin();
        let keywords: Vec<&str> = vocab.technical_keywords().collect();
        assert!(keywords.contains(&"C++"));
        assert!(keywords.contains(&"C#"));
        assert!(keywords.contains(&"CI/CD"));
    }

    #[test]
    fn test_no_duplicate_canonical_keywords_across_categories() {
        let vocab = KeywordVocabulary::builtin();
        let mut seen = HashSet::new();
        for keyword in vocab.technical_keywords() {
            assert!(
                seen.insert(keyword.to_lowercase()),
                "duplicate keyword across categories: {keyword}"
            );
        }
    }

    #[test]
    fn test_action_verbs_are_distinct_from_technical_keywords() {
        let vocab = KeywordVocabulary::builtin();
        let technical: HashSet<String> = vocab
            .technical_keywords()
            .map(|k| k.to_lowercase())
            .collect();
        for verb in vocab.action_verbs() {
            assert!(
                !technical.contains(&verb.to_lowercase()),
                "verb {verb} collides with a technical keyword"
            );
        }
    }
}
