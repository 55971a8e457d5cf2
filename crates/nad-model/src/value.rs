//! Field values carried by address records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field value.
///
/// Upstream sources type the same column inconsistently (a FIPS code may
/// arrive as `"49035"` or `49035`), so comparisons that treat a value as a
/// code go through [`FieldValue::as_code`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Integer(i64),
    Double(f64),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for null and for text that is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(value) => value.trim().is_empty(),
            Self::Integer(_) | Self::Double(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Non-blank text with surrounding whitespace removed.
    pub fn as_trimmed(&self) -> Option<&str> {
        self.as_str()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Normalized string form used when the value is treated as a code.
    ///
    /// Text is trimmed, integers render in decimal and integral doubles render
    /// without a fractional part. Blank values have no code.
    pub fn as_code(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(value) => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Self::Integer(value) => Some(value.to_string()),
            Self::Double(value) => {
                if !value.is_finite() {
                    None
                } else if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                    Some((*value as i64).to_string())
                } else {
                    Some(value.to_string())
                }
            }
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Double(value) if value.fract() == 0.0 && value.is_finite() => {
                Some(*value as i64)
            }
            Self::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Double(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
            Self::Null => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
