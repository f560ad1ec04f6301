//! Grammar compilation for parsing rules.

use crate::constants::{DATA_GROUP, HEADER_GROUP};
use crate::error::{Error, Result};
use crate::rule::Rule;
use regex::{Captures, Regex, RegexBuilder};

/// Compiled matching form of a rule's pattern text.
///
/// Built once per rule at repository load time, so the named-region invariant
/// is enforced before any detection runs.
#[derive(Debug, Clone)]
pub struct Grammar {
    pattern: String,
    regex: Regex,
}

impl Grammar {
    /// Compile a rule into its matching grammar.
    ///
    /// With an explicit separator, the header, separator and data patterns are
    /// concatenated verbatim into one linear grammar; the rule text itself
    /// must expose the named regions in this mode. Without one, the header
    /// pattern and the data pattern (made repeatable) are wrapped in the
    /// `header` and `data` capture groups.
    ///
    /// # Errors
    /// Returns `Error::MalformedRule` if the pattern does not compile or the
    /// compiled grammar does not expose both named regions. A rule that fails
    /// here is a defect in the rule, never a condition to skip silently.
    pub fn compile(rule: &Rule) -> Result<Self> {
        let definition = &rule.definition;
        let pattern = match &definition.sep {
            Some(sep) => format!("{}{}{}", definition.header, sep, definition.data),
            None => format!(
                "(?P<{HEADER_GROUP}>{})(?P<{DATA_GROUP}>(?:{})+)",
                definition.header, definition.data
            ),
        };

        // Extended syntax: whitespace and `#` comments in the pattern text are
        // insignificant, enabling multi-line rule authoring.
        let regex = RegexBuilder::new(&pattern)
            .ignore_whitespace(true)
            .build()
            .map_err(|e| {
                Error::malformed_rule(&rule.id, format!("pattern does not compile: {e}"))
            })?;

        for group in [HEADER_GROUP, DATA_GROUP] {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(Error::malformed_rule(
                    &rule.id,
                    format!("compiled grammar does not expose a '{group}' capture group"),
                ));
            }
        }

        Ok(Self { pattern, regex })
    }

    /// Apply the grammar as an unanchored search against raw input.
    ///
    /// A rule may match a contiguous subregion of a larger file that includes
    /// leading noise it does not itself model.
    pub fn search<'t>(&self, raw_text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(raw_text)
    }

    /// Named capture groups the compiled grammar exposes.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.regex.capture_names().flatten()
    }

    /// The assembled pattern text, as handed to the regex compiler.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleDefinition;

    fn rule(id: &str, header: &str, data: &str, sep: Option<&str>) -> Rule {
        Rule {
            id: id.to_string(),
            definition: RuleDefinition {
                header: header.to_string(),
                data: data.to_string(),
                sep: sep.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_compile_wraps_named_groups_without_separator() {
        let grammar = Grammar::compile(&rule("r1", r"(?:H\d)+", r"D\d", None)).unwrap();
        let names: Vec<&str> = grammar.group_names().collect();
        assert!(names.contains(&"header"));
        assert!(names.contains(&"data"));
    }

    #[test]
    fn test_compile_separator_mode_uses_rule_groups() {
        let grammar = Grammar::compile(&rule(
            "r2",
            r"(?P<header>[a-z]+)",
            r"(?P<data>\d+)",
            Some(r"\|\|"),
        ))
        .unwrap();

        let caps = grammar.search("abc||123").unwrap();
        assert_eq!(caps.name("header").unwrap().as_str(), "abc");
        assert_eq!(caps.name("data").unwrap().as_str(), "123");
    }

    #[test]
    fn test_separator_mode_without_named_groups_is_malformed() {
        let result = Grammar::compile(&rule("r3", "[a-z]+", r"\d+", Some(r"\|\|")));
        assert!(matches!(result, Err(Error::MalformedRule { .. })));
    }

    #[test]
    fn test_invalid_pattern_is_malformed() {
        let result = Grammar::compile(&rule("r4", "(", r"D\d", None));
        match result {
            Err(Error::MalformedRule { rule, .. }) => assert_eq!(rule, "r4"),
            other => panic!("expected MalformedRule, got {other:?}"),
        }
    }

    #[test]
    fn test_verbose_syntax_ignores_whitespace_and_comments() {
        let header = "(?:\n    H \\d    # header token\n)+\n";
        let data = "D \\d    # data token\n";
        let grammar = Grammar::compile(&rule("r5", header, data, None)).unwrap();

        let caps = grammar.search("H1H2D1D2").unwrap();
        assert_eq!(caps.name("header").unwrap().as_str(), "H1H2");
        assert_eq!(caps.name("data").unwrap().as_str(), "D1D2");
    }

    #[test]
    fn test_data_pattern_made_repeatable() {
        let grammar = Grammar::compile(&rule("r6", r"(?:H\d)+", r"D\d", None)).unwrap();
        let caps = grammar.search("H1D1D2D3").unwrap();
        assert_eq!(caps.name("data").unwrap().as_str(), "D1D2D3");
    }
}
