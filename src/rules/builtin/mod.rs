mod compliance;
mod secrets;
mod vulnerabilities;

use crate::rules::types::{Category, Rule};
use std::sync::LazyLock;

static SECRET_RULES: LazyLock<Vec<Rule>> = LazyLock::new(secrets::rules);
static VULNERABILITY_RULES: LazyLock<Vec<Rule>> = LazyLock::new(vulnerabilities::rules);
static COMPLIANCE_RULES: LazyLock<Vec<Rule>> = LazyLock::new(compliance::rules);

/// The frozen catalog for one category. Compiled on first access, shared
/// read-only across scan phases.
pub fn rules_for(category: Category) -> &'static [Rule] {
    match category {
        Category::Secret => &SECRET_RULES,
        Category::Vulnerability => &VULNERABILITY_RULES,
        Category::Compliance => &COMPLIANCE_RULES,
    }
}

pub fn all_rules() -> impl Iterator<Item = &'static Rule> {
    Category::ALL.iter().flat_map(|c| rules_for(*c).iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rule_ids_are_unique() {
        let mut seen = HashSet::new();
        for rule in all_rules() {
            assert!(seen.insert(rule.id), "duplicate rule id {}", rule.id);
        }
    }

    #[test]
    fn test_every_category_has_rules() {
        for category in Category::ALL {
            assert!(
                !rules_for(category).is_empty(),
                "no rules for {}",
                category
            );
        }
    }

    #[test]
    fn test_rules_carry_their_category() {
        for category in Category::ALL {
            for rule in rules_for(category) {
                assert_eq!(rule.category, category, "{} misfiled", rule.id);
            }
        }
    }

    #[test]
    fn test_every_rule_has_patterns_and_remediation() {
        for rule in all_rules() {
            assert!(!rule.patterns.is_empty(), "{} has no patterns", rule.id);
            assert!(!rule.recommendation.is_empty());
            assert!(!rule.description.is_empty());
        }
    }
}
