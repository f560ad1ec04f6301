//! Rule discovery, ordering and loading.
//!
//! Rules live as JSON files in a bundled rules directory. Discovery selects
//! names with the `cnv` prefix and `.json` suffix, skips the companion
//! `refnames.json` reference file, and sorts the survivors by name in byte
//! order. That sorted name sequence IS the detection priority order: rule
//! authors encode priority through naming (`cnv01` before `cnv02`).

use crate::config::default_rules_dir;
use crate::constants::{REFERENCE_NAMES_FILE, RULE_FILE_SUFFIX, is_rule_file_name};
use crate::error::{Error, Result};
use crate::rule::{Grammar, Rule, RuleDefinition};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A rule paired with its compiled grammar, built once at load time.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    pub grammar: Grammar,
}

/// Ordered, immutable collection of compiled parsing rules.
#[derive(Debug)]
pub struct RuleRepository {
    rules: Vec<CompiledRule>,
}

static BUNDLED: OnceCell<RuleRepository> = OnceCell::new();

impl RuleRepository {
    /// Load and compile every rule in `rules_dir`.
    ///
    /// Any malformed rule aborts the whole load: a partially loaded rule set
    /// would silently misclassify inputs the missing rule owns, which is
    /// worse than a visible failure.
    ///
    /// # Errors
    /// * `Error::RuleSourceUnavailable` if the directory cannot be opened
    /// * `Error::MalformedRule` if any rule fails to parse or compile
    pub fn load(rules_dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(rules_dir)
            .map_err(|e| Error::rule_source_unavailable(rules_dir, e))?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::rule_source_unavailable(rules_dir, e))?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_rule_file_name(&name) {
                names.push(name);
            }
        }

        // Byte-order sort, stable across platforms and locales.
        names.sort_unstable();

        let mut rules = Vec::with_capacity(names.len());
        for name in &names {
            let path = rules_dir.join(name);
            let id = name
                .strip_suffix(RULE_FILE_SUFFIX)
                .unwrap_or(name)
                .to_string();

            let raw = fs::read_to_string(&path).map_err(|e| {
                Error::io(format!("failed to read rule file {}", path.display()), e)
            })?;
            let definition: RuleDefinition = serde_json::from_str(&raw)
                .map_err(|e| Error::malformed_rule(&id, format!("invalid rule record: {e}")))?;

            let rule = Rule {
                id: id.clone(),
                definition,
            };
            let grammar = Grammar::compile(&rule)?;
            debug!("loaded rule '{}' from {}", id, path.display());

            rules.push(CompiledRule { rule, grammar });
        }

        debug!(
            "rule repository ready: {} rules from {}",
            rules.len(),
            rules_dir.display()
        );
        Ok(Self { rules })
    }

    /// Process-wide repository built from the bundled rules directory.
    ///
    /// Loaded on first use and treated as immutable afterwards.
    pub fn bundled() -> Result<&'static Self> {
        BUNDLED.get_or_try_init(|| Self::load(&default_rules_dir()))
    }

    /// Rules in detection priority order.
    pub fn list_rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Number of loaded rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the repository holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run detection with this repository's rules.
    pub fn detect(&self, raw_text: &str) -> Result<crate::detector::FormatMatch> {
        crate::detector::detect(raw_text, &self.rules)
    }
}

/// Load the companion `refnames.json` short-name map.
///
/// Maps CNV channel short names (e.g. `t090C`) to descriptive names for
/// downstream field-level parsing. This file is never a parsing rule.
pub fn load_reference_names(rules_dir: &Path) -> Result<HashMap<String, String>> {
    let path = rules_dir.join(REFERENCE_NAMES_FILE);
    let raw = fs::read_to_string(&path)
        .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;
    serde_json::from_str(&raw)
        .map_err(|e| Error::configuration(format!("invalid {REFERENCE_NAMES_FILE}: {e}")))
}
