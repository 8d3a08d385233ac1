#[cfg(test)]
pub mod fixtures {
    use crate::aggregate::{ScanResult, aggregate};
    use crate::rules::types::{Category, Finding, Severity};
    use std::time::Duration;

    pub fn create_finding(
        severity: Severity,
        category: Category,
        file: &str,
        line: Option<usize>,
    ) -> Finding {
        Finding {
            severity,
            category,
            file: file.to_string(),
            line,
            description: "test finding".to_string(),
            recommendation: "test recommendation".to_string(),
            cwe: None,
            owasp: None,
        }
    }

    pub fn create_test_result(findings: Vec<Finding>) -> ScanResult {
        aggregate(vec![findings], 2, Duration::from_millis(12), false)
    }
}
