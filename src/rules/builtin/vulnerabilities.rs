use crate::rules::types::{Category, Rule, Severity};
use regex::Regex;

pub fn rules() -> Vec<Rule> {
    vec![vn_001(), vn_002(), vn_003(), vn_004(), vn_005()]
}

fn vn_001() -> Rule {
    Rule {
        id: "VN-001",
        name: "SQL Injection Risk",
        category: Category::Vulnerability,
        severity: Severity::Critical,
        patterns: vec![
            // Template-literal interpolation inside a query string
            Regex::new(r"(?i)\b(select|insert|update|delete|drop)\b[^;]*\$\{")
                .expect("VN-001: invalid regex"),
            // String concatenation adjacent to query keywords
            Regex::new(r#"(?i)\b(select|insert|update|delete)\b[^;]*["']\s*\+"#)
                .expect("VN-001: invalid regex"),
            Regex::new(r#"(?i)(query|execute)\s*\(\s*["'][^"']*["']\s*\+"#)
                .expect("VN-001: invalid regex"),
        ],
        description: "SQL Injection Risk: query built with string interpolation or concatenation",
        recommendation: "Use parameterized queries or prepared statements",
        cwe: Some("CWE-89"),
        owasp: Some("A03:2021 Injection"),
    }
}

fn vn_002() -> Rule {
    Rule {
        id: "VN-002",
        name: "XSS Risk",
        category: Category::Vulnerability,
        severity: Severity::High,
        patterns: vec![
            Regex::new(r"document\.write(ln)?\s*\(").expect("VN-002: invalid regex"),
            Regex::new(r"\.innerHTML\s*=").expect("VN-002: invalid regex"),
            Regex::new(r"\.outerHTML\s*=").expect("VN-002: invalid regex"),
            Regex::new(r"dangerouslySetInnerHTML").expect("VN-002: invalid regex"),
        ],
        description: "XSS Risk: direct HTML injection sink",
        recommendation: "Escape untrusted data or use safe DOM APIs such as textContent",
        cwe: Some("CWE-79"),
        owasp: Some("A03:2021 Injection"),
    }
}

fn vn_003() -> Rule {
    Rule {
        id: "VN-003",
        name: "Command Injection Risk",
        category: Category::Vulnerability,
        severity: Severity::High,
        patterns: vec![
            Regex::new(r"\b(execSync|spawnSync|child_process)\b").expect("VN-003: invalid regex"),
            Regex::new(r"(?i)\b(system|popen|shell_exec)\s*\(").expect("VN-003: invalid regex"),
            Regex::new(r"\bexec\s*\(\s*[^)]*(\$\{|\+)").expect("VN-003: invalid regex"),
        ],
        description: "Command Injection Risk: shell execution with dynamic input",
        recommendation: "Avoid shelling out with untrusted input; pass arguments as an array",
        cwe: Some("CWE-78"),
        owasp: Some("A03:2021 Injection"),
    }
}

fn vn_004() -> Rule {
    Rule {
        id: "VN-004",
        name: "Path Traversal",
        category: Category::Vulnerability,
        severity: Severity::Medium,
        patterns: vec![
            Regex::new(r"(\.\.[/\\]){2,}").expect("VN-004: invalid regex"),
            Regex::new(r"(?i)\.\.%2f").expect("VN-004: invalid regex"),
        ],
        description: "Path Traversal: parent-directory escape sequence",
        recommendation: "Canonicalize paths and validate them against an allowed base directory",
        cwe: Some("CWE-22"),
        owasp: Some("A01:2021 Broken Access Control"),
    }
}

fn vn_005() -> Rule {
    Rule {
        id: "VN-005",
        name: "Weak Cryptography",
        category: Category::Vulnerability,
        severity: Severity::Medium,
        patterns: vec![
            Regex::new(r"(?i)\b(md5|sha1)\s*\(").expect("VN-005: invalid regex"),
            Regex::new(r#"(?i)createHash\s*\(\s*["'](md5|sha1)["']"#)
                .expect("VN-005: invalid regex"),
            Regex::new(r#"(?i)getInstance\s*\(\s*["'](md5|sha-?1|des|rc4)["']"#)
                .expect("VN-005: invalid regex"),
            Regex::new(r"(?i)\b(des-ede3|des-cbc|rc4)\b").expect("VN-005: invalid regex"),
        ],
        description: "Weak Cryptography: broken or deprecated primitive",
        recommendation: "Use SHA-256 or stronger for hashing and AES-GCM for encryption",
        cwe: Some("CWE-327"),
        owasp: Some("A02:2021 Cryptographic Failures"),
    }
}
