//! Format detection for raw CNV text.
//!
//! Applies an ordered sequence of compiled rules against the full text of a
//! candidate file. Rules are tried in order and the first match wins, so rule
//! order encodes priority. Detection is stateless: each call reads immutable
//! rule data and immutable input, producing a fresh result with no side
//! effects, and is safe to invoke concurrently across inputs.

use crate::constants::{DATA_GROUP, HEADER_GROUP};
use crate::error::{Error, Result};
use crate::rule::CompiledRule;
use std::collections::HashMap;
use tracing::debug;

/// Outcome of a successful detection: the winning rule's identity plus the
/// exact substring captured for each named region.
///
/// Owned by the caller; carries no reference back into the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatMatch {
    rule_id: String,
    regions: HashMap<String, String>,
}

impl FormatMatch {
    /// Identity of the winning rule.
    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    /// The captured header block.
    pub fn header(&self) -> Option<&str> {
        self.region(HEADER_GROUP)
    }

    /// The captured data block.
    pub fn data(&self) -> Option<&str> {
        self.region(DATA_GROUP)
    }

    /// Substring captured for an arbitrary named region.
    pub fn region(&self, name: &str) -> Option<&str> {
        self.regions.get(name).map(String::as_str)
    }

    /// All captured regions by name.
    pub fn regions(&self) -> &HashMap<String, String> {
        &self.regions
    }
}

/// Try each rule in order against the raw text, returning the first match.
///
/// Each grammar is applied as an unanchored search, so a rule may match a
/// contiguous subregion of a file with leading noise (instrument banner
/// lines) it does not model.
///
/// # Errors
/// Returns `Error::NoRuleMatched` when every rule has been tried without a
/// match. An empty rule sequence fails with the same condition: absence of
/// rules and absence of a fitting rule are behaviorally identical.
pub fn detect(raw_text: &str, rules: &[CompiledRule]) -> Result<FormatMatch> {
    for compiled in rules {
        let Some(caps) = compiled.grammar.search(raw_text) else {
            continue;
        };

        let mut regions = HashMap::new();
        for name in compiled.grammar.group_names() {
            if let Some(m) = caps.name(name) {
                regions.insert(name.to_string(), m.as_str().to_string());
            }
        }

        debug!(
            "rule '{}' matched ({} named regions)",
            compiled.rule.id,
            regions.len()
        );
        return Ok(FormatMatch {
            rule_id: compiled.rule.id.clone(),
            regions,
        });
    }

    Err(Error::NoRuleMatched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Grammar, Rule, RuleDefinition};

    fn compiled(id: &str, header: &str, data: &str, sep: Option<&str>) -> CompiledRule {
        let rule = Rule {
            id: id.to_string(),
            definition: RuleDefinition {
                header: header.to_string(),
                data: data.to_string(),
                sep: sep.map(str::to_string),
            },
        };
        let grammar = Grammar::compile(&rule).unwrap();
        CompiledRule { rule, grammar }
    }

    #[test]
    fn test_capture_fidelity_without_separator() {
        let rules = vec![compiled("cnv01", r"(?:H\d)+", r"D\d", None)];

        let result = detect("H1H2D1D2D3", &rules).unwrap();
        assert_eq!(result.rule_id(), "cnv01");
        assert_eq!(result.header(), Some("H1H2"));
        assert_eq!(result.data(), Some("D1D2D3"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Both grammars match the same input; the lower-ordered rule must win
        let overlapping = |id: &str| compiled(id, r"(?:H\d)+", r"D\d", None);
        let rules = vec![overlapping("cnv01"), overlapping("cnv02")];

        let result = detect("H1D1", &rules).unwrap();
        assert_eq!(result.rule_id(), "cnv01");

        let reversed = vec![overlapping("cnv02"), overlapping("cnv01")];
        let result = detect("H1D1", &reversed).unwrap();
        assert_eq!(result.rule_id(), "cnv02");
    }

    #[test]
    fn test_exhaustion_is_no_rule_matched() {
        let rules = vec![
            compiled("cnv01", r"(?:X\d)+", r"Y\d", None),
            compiled("cnv02", r"(?:P\d)+", r"Q\d", None),
        ];

        let result = detect("nothing matches this", &rules);
        assert!(matches!(result, Err(Error::NoRuleMatched)));
    }

    #[test]
    fn test_empty_rule_set_is_the_same_failure() {
        // Absence of rules collapses to the same condition as exhaustion
        let result = detect("H1D1", &[]);
        assert!(matches!(result, Err(Error::NoRuleMatched)));
    }

    #[test]
    fn test_separator_mode_isolates_regions() {
        // Separator token is absent from both regions' alphabets
        let rules = vec![compiled(
            "cnv01",
            r"(?P<header>[a-z]+)",
            r"(?P<data>[0-9]+)",
            Some(r"\|\|"),
        )];

        let result = detect("xyzzy||12345", &rules).unwrap();
        assert_eq!(result.header(), Some("xyzzy"));
        assert_eq!(result.data(), Some("12345"));
    }

    #[test]
    fn test_search_tolerates_leading_noise() {
        let rules = vec![compiled("cnv01", r"(?:H\d)+", r"D\d", None)];

        let result = detect("instrument banner garbage H1H2D1D2", &rules).unwrap();
        assert_eq!(result.header(), Some("H1H2"));
        assert_eq!(result.data(), Some("D1D2"));
    }

    #[test]
    fn test_extra_named_groups_are_captured() {
        let rules = vec![compiled("cnv01", r"(?P<ver>V\d)(?:H\d)+", r"D\d", None)];

        let result = detect("V2H1D1", &rules).unwrap();
        assert_eq!(result.region("ver"), Some("V2"));
        assert_eq!(result.header(), Some("V2H1"));
    }

    #[test]
    fn test_detection_is_deterministic() {
        let rules = vec![
            compiled("cnv01", r"(?:H\d)+", r"D\d", None),
            compiled("cnv02", r"(?:[A-Z]\d)+", r"D\d", None),
        ];

        let first = detect("H1H2D1D2", &rules).unwrap();
        let second = detect("H1H2D1D2", &rules).unwrap();
        assert_eq!(first, second);
    }
}
