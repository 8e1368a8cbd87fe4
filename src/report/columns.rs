//! Canonical report fields and the declarative column-matching rules.
//!
//! Field reports from different operators name the same columns differently
//! ("Net BO", "NET B.O.", "Net diff. BO", "W/C %", ...). Matching is one
//! ordered rule table instead of per-script guesses: a column label matches a
//! rule when it contains every `all` token, at least one `any` token (when
//! the list is non-empty), and none of the `none` tokens, case-insensitively.
//! The built-in table can be replaced by `data/column_rules.yaml`.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLUMN_RULES_PATH: &str = "data/column_rules.yaml";

/// Canonical fields of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    WellName,
    ProductionZone,
    TotalProduction,
    NetDiff,
    WaterCut,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::WellName,
        Field::ProductionZone,
        Field::TotalProduction,
        Field::NetDiff,
        Field::WaterCut,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::WellName => "well_name",
            Field::ProductionZone => "production_zone",
            Field::TotalProduction => "total_production",
            Field::NetDiff => "net_diff",
            Field::WaterCut => "water_cut",
        }
    }

    /// Locating fails when a required field has no matching column.
    pub fn is_required(self) -> bool {
        matches!(self, Field::WellName | Field::NetDiff)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One matching rule: tokens are matched as case-insensitive substrings of
/// the column label.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnRule {
    pub field: Field,
    #[serde(default)]
    pub all: Vec<String>,
    #[serde(default)]
    pub any: Vec<String>,
    #[serde(default)]
    pub none: Vec<String>,
}

impl ColumnRule {
    fn matches(&self, label_lower: &str) -> bool {
        if !self.all.iter().all(|t| label_lower.contains(t.as_str())) {
            return false;
        }
        if !self.any.is_empty() && !self.any.iter().any(|t| label_lower.contains(t.as_str())) {
            return false;
        }
        self.none.iter().all(|t| !label_lower.contains(t.as_str()))
    }
}

/// Ordered rule table. Earlier rules for the same field take precedence.
#[derive(Debug, Clone)]
pub struct ColumnRules {
    rules: Vec<ColumnRule>,
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    fields: Vec<ColumnRule>,
}

impl ColumnRules {
    pub fn builtin() -> Self {
        fn tokens(raw: &[&str]) -> Vec<String> {
            raw.iter().map(|t| t.to_string()).collect()
        }
        let rule = |field, all: &[&str], any: &[&str], none: &[&str]| ColumnRule {
            field,
            all: tokens(all),
            any: tokens(any),
            none: tokens(none),
        };
        Self {
            rules: vec![
                rule(Field::WellName, &[], &["well"], &[]),
                rule(Field::ProductionZone, &[], &["zone", "formation"], &[]),
                rule(Field::TotalProduction, &["net", "bo"], &[], &["diff"]),
                rule(Field::NetDiff, &["net", "diff"], &[], &[]),
                rule(Field::WaterCut, &[], &["w/c", "wc", "%"], &[]),
            ],
        }
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        let parsed: RulesFile = serde_yaml::from_str(raw)?;
        let rules = parsed
            .fields
            .into_iter()
            .map(|rule| ColumnRule {
                field: rule.field,
                all: lowercase(rule.all),
                any: lowercase(rule.any),
                none: lowercase(rule.none),
            })
            .collect();
        Ok(Self { rules })
    }

    /// Load rules from a YAML file, falling back to the built-in table when
    /// the file is missing or unreadable. A malformed file is reported on
    /// stderr rather than aborting the run.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let Ok(raw) = fs::read_to_string(path) else {
            return Self::builtin();
        };
        match Self::from_yaml(&raw) {
            Ok(rules) => rules,
            Err(err) => {
                eprintln!(
                    "column rules: could not parse '{}': {err}; using built-in rules",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    /// Whether `label` names the column for `field` under this table.
    pub fn label_matches(&self, field: Field, label: &str) -> bool {
        let label_lower = label.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .any(|rule| rule.matches(&label_lower))
    }
}

fn lowercase(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().map(|t| t.trim().to_lowercase()).collect()
}
