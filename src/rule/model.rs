//! Rule record definitions.

use serde::Deserialize;

/// Declarative grammar definition as stored in a rule JSON file.
///
/// The pattern fields use extended regex syntax: insignificant whitespace and
/// `#` comments keep multi-line rule authoring readable. A record missing
/// `header` or `data` fails deserialization, which aborts the whole
/// repository load.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    /// Pattern describing the header region's grammar
    pub header: String,

    /// Pattern describing the (possibly repeating) data region's grammar
    pub data: String,

    /// Optional pattern separating header from data. When present, the rule
    /// text itself must expose the `header` and `data` named groups; when
    /// absent, the repository wraps the two patterns in those groups.
    #[serde(default)]
    pub sep: Option<String>,
}

/// A rule definition together with the identifier derived from its file name.
///
/// The identifier (e.g. `cnv01`) is used only for ordering and diagnostics;
/// lexicographic order of identifiers is the detection priority order.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub definition: RuleDefinition,
}
