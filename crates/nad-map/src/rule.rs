//! Crosswalk rule types.

use serde::{Deserialize, Serialize};

use nad_model::FieldValue;

/// How a rule turns the source value into the target value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Derivation {
    /// Copy the value unchanged.
    #[default]
    Copy,
    /// Parse as a whole number; anything else becomes null.
    Integer,
    /// Normalize to a code string (`49035`, `49035.0` and `"49035"` agree).
    Code,
    /// Caller-supplied conversion. Not serializable.
    #[serde(skip)]
    Custom(fn(&FieldValue) -> FieldValue),
}

impl Derivation {
    pub fn apply(self, value: &FieldValue) -> FieldValue {
        match self {
            Self::Copy => value.clone(),
            Self::Integer => value.as_i64().into(),
            Self::Code => value.as_code().into(),
            Self::Custom(derive) => derive(value),
        }
    }
}

/// Maps the first present source field onto one target field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrosswalkRule {
    /// Source field names in priority order.
    pub sources: Vec<String>,
    pub target: String,
    #[serde(default)]
    pub derivation: Derivation,
}

impl CrosswalkRule {
    /// Identity copy from `source` to `target`.
    pub fn rename(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            sources: vec![source.into()],
            target: target.into(),
            derivation: Derivation::Copy,
        }
    }

    /// Add a fallback source consulted when the earlier ones are absent.
    pub fn or_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn derive(mut self, derivation: Derivation) -> Self {
        self.derivation = derivation;
        self
    }
}
