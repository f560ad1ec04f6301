//! Parsing rules: declarative CNV grammar definitions and their compiled forms.
//!
//! A rule is a JSON record bundled with the crate. The repository discovers,
//! orders and deserializes the rule files; each rule is compiled once at load
//! time into its matching grammar, so a defective rule surfaces immediately
//! rather than at detection time.

mod grammar;
mod model;
mod repository;

pub use grammar::Grammar;
pub use model::{Rule, RuleDefinition};
pub use repository::{CompiledRule, RuleRepository, load_reference_names};
