use crate::rules::types::{Category, Rule, Severity};
use regex::Regex;

pub fn rules() -> Vec<Rule> {
    vec![cp_001(), cp_002(), cp_003()]
}

fn cp_001() -> Rule {
    Rule {
        id: "CP-001",
        name: "Hardcoded credentials",
        category: Category::Compliance,
        severity: Severity::High,
        patterns: vec![
            Regex::new(r#"(?i)\b(password|passwd|pwd)\b\s*[:=]\s*["'][^"']+["']"#)
                .expect("CP-001: invalid regex"),
        ],
        description: "Hardcoded credential assignment",
        recommendation: "Load credentials from the environment or a secrets manager",
        cwe: Some("CWE-798"),
        owasp: Some("A07:2021 Identification and Authentication Failures"),
    }
}

fn cp_002() -> Rule {
    Rule {
        id: "CP-002",
        name: "Silent exception handling",
        category: Category::Compliance,
        severity: Severity::Low,
        patterns: vec![
            Regex::new(r"catch\s*(\([^)]*\))?\s*\{\s*\}").expect("CP-002: invalid regex"),
            Regex::new(r"except[^:]*:\s*pass\b").expect("CP-002: invalid regex"),
        ],
        description: "Exception swallowed without logging",
        recommendation: "Log the error or rethrow it; silent handlers hide security events",
        cwe: Some("CWE-778"),
        owasp: Some("A09:2021 Security Logging and Monitoring Failures"),
    }
}

fn cp_003() -> Rule {
    Rule {
        id: "CP-003",
        name: "Insecure direct object reference",
        category: Category::Compliance,
        severity: Severity::Medium,
        patterns: vec![
            Regex::new(r"(?i)\b(findById|findByPk|findOne)\s*\(\s*req\.(params|query|body)")
                .expect("CP-003: invalid regex"),
            Regex::new(r#"(?i)\bwhere\s*\(\s*["']?id["']?\s*[,:]\s*req\.(params|query|body)"#)
                .expect("CP-003: invalid regex"),
        ],
        description: "Database lookup keyed directly on a request parameter",
        recommendation: "Check the caller's authorization before resolving the referenced object",
        cwe: Some("CWE-639"),
        owasp: Some("A01:2021 Broken Access Control"),
    }
}
