use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities, most severe first. Reporting iterates in this order.
    pub const DESCENDING: [Severity; 5] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
        Severity::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Detection rule category. A closed set so the matcher and aggregator cannot
/// silently mishandle an unrecognized category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Secret,
    Vulnerability,
    Compliance,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Secret,
        Category::Vulnerability,
        Category::Compliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Secret => "secret",
            Category::Vulnerability => "vulnerability",
            Category::Compliance => "compliance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detection rule: a set of line patterns plus remediation metadata.
/// Rules are built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub patterns: Vec<Regex>,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub cwe: Option<&'static str>,
    pub owasp: Option<&'static str>,
}

impl Rule {
    pub fn matches(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }
}

/// One reported occurrence of a rule matching a location in source.
/// Immutable once created; `line` is 1-based and absent for findings that do
/// not point at a specific line (dependency advisories).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub description: String,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owasp: Option<String>,
}

impl Finding {
    pub fn from_rule(rule: &Rule, file: &str, line: usize) -> Self {
        Self {
            severity: rule.severity,
            category: rule.category,
            file: file.to_string(),
            line: Some(line),
            description: rule.description.to_string(),
            recommendation: rule.recommendation.to_string(),
            cwe: rule.cwe.map(str::to_string),
            owasp: rule.owasp.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Critical.as_str(), "critical");
        assert_eq!(Severity::Info.as_str(), "info");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::High), "HIGH");
        assert_eq!(format!("{}", Severity::Medium), "MEDIUM");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Secret.as_str(), "secret");
        assert_eq!(Category::Vulnerability.as_str(), "vulnerability");
        assert_eq!(Category::Compliance.as_str(), "compliance");
    }

    #[test]
    fn test_rule_matches_any_pattern() {
        let rule = Rule {
            id: "T-001",
            name: "Test rule",
            category: Category::Secret,
            severity: Severity::High,
            patterns: vec![
                Regex::new("foo").unwrap(),
                Regex::new("bar").unwrap(),
            ],
            description: "test",
            recommendation: "test",
            cwe: None,
            owasp: None,
        };
        assert!(rule.matches("let x = bar;"));
        assert!(!rule.matches("let x = baz;"));
    }

    #[test]
    fn test_finding_from_rule_carries_metadata() {
        let rule = Rule {
            id: "T-002",
            name: "Test rule",
            category: Category::Compliance,
            severity: Severity::Low,
            patterns: vec![],
            description: "desc",
            recommendation: "rec",
            cwe: Some("CWE-798"),
            owasp: Some("A07:2021 Identification and Authentication Failures"),
        };
        let finding = Finding::from_rule(&rule, "src/app.js", 12);
        assert_eq!(finding.severity, Severity::Low);
        assert_eq!(finding.category, Category::Compliance);
        assert_eq!(finding.file, "src/app.js");
        assert_eq!(finding.line, Some(12));
        assert_eq!(finding.cwe.as_deref(), Some("CWE-798"));
    }

    #[test]
    fn test_finding_serializes_without_absent_fields() {
        let finding = Finding {
            severity: Severity::High,
            category: Category::Vulnerability,
            file: "package.json".to_string(),
            line: None,
            description: "desc".to_string(),
            recommendation: "rec".to_string(),
            cwe: None,
            owasp: None,
        };
        let json = serde_json::to_string(&finding).unwrap();
        assert!(!json.contains("line"));
        assert!(!json.contains("cwe"));
        assert!(!json.contains("owasp"));
    }
}
