//! Domain code tables.
//!
//! A [`DomainTable`] maps the finite set of codes a jurisdiction may emit for
//! one semantic domain onto the canonical NAD value:
//!
//! ```text
//! street_type:  ST   -> STREET
//! direction:    N    -> NORTH
//! county_fips:  49035 -> SALT LAKE
//! ```
//!
//! Keys are case-sensitive. Unknown codes translate to `None`; callers treat
//! that as the canonical representation of "unmapped".

use std::collections::{BTreeMap, BTreeSet};

use nad_model::{DomainKind, FieldValue, NadError, Result};

/// Immutable code -> canonical value table for one domain.
#[derive(Debug, Clone)]
pub struct DomainTable {
    kind: DomainKind,
    entries: BTreeMap<String, String>,
    /// Set of canonical values, for recognizing already-translated input.
    canonical: BTreeSet<String>,
}

impl DomainTable {
    /// Build a table, rejecting duplicate codes.
    pub fn new<I, K, V>(kind: DomainKind, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (code, value) in pairs {
            let code = code.into();
            if entries.contains_key(&code) {
                return Err(NadError::DuplicateDomainCode {
                    table: kind.as_str().to_string(),
                    code,
                });
            }
            entries.insert(code, value.into());
        }
        let canonical = entries.values().cloned().collect();
        Ok(Self {
            kind,
            entries,
            canonical,
        })
    }

    pub fn kind(&self) -> DomainKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a code. Surrounding whitespace is ignored, case is not.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code.trim()).map(String::as_str)
    }

    /// Translate a field value, comparing numeric values as normalized strings.
    pub fn translate(&self, value: &FieldValue) -> Option<&str> {
        value.as_code().and_then(|code| self.get(&code))
    }

    /// Whether `value` is already one of this table's canonical outputs.
    pub fn is_canonical(&self, value: &str) -> bool {
        self.canonical.contains(value.trim())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, value)| (code.as_str(), value.as_str()))
    }
}

/// The set of domain tables loaded for a run.
///
/// Built once at startup and shared by reference; there is no way to mutate
/// or register tables after construction.
#[derive(Debug, Clone)]
pub struct DomainCodec {
    tables: BTreeMap<DomainKind, DomainTable>,
}

impl DomainCodec {
    pub fn new(tables: impl IntoIterator<Item = DomainTable>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|table| (table.kind(), table))
                .collect(),
        }
    }

    pub fn table(&self, kind: DomainKind) -> Option<&DomainTable> {
        self.tables.get(&kind)
    }

    /// Translate a value through the table for `kind`.
    ///
    /// A missing table behaves like an empty one.
    pub fn translate(&self, kind: DomainKind, value: &FieldValue) -> Option<&str> {
        self.table(kind).and_then(|table| table.translate(value))
    }

    /// Translate a raw code string.
    pub fn translate_code(&self, kind: DomainKind, code: &str) -> Option<&str> {
        self.table(kind).and_then(|table| table.get(code))
    }

    /// Canonical form of `value`: its translation, or the value itself when it
    /// is already canonical.
    pub fn canonical(&self, kind: DomainKind, value: &FieldValue) -> Option<String> {
        let table = self.table(kind)?;
        if let Some(translated) = table.translate(value) {
            return Some(translated.to_string());
        }
        value
            .as_code()
            .filter(|code| table.is_canonical(code))
    }

    pub fn tables(&self) -> impl Iterator<Item = &DomainTable> {
        self.tables.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directions() -> DomainTable {
        DomainTable::new(DomainKind::Direction, [("N", "NORTH"), ("S", "SOUTH")])
            .expect("build table")
    }

    #[test]
    fn rejects_duplicate_codes() {
        let err = DomainTable::new(DomainKind::Direction, [("N", "NORTH"), ("N", "NORD")])
            .unwrap_err();
        assert!(matches!(err, NadError::DuplicateDomainCode { .. }));
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let table = directions();
        assert_eq!(table.get("N"), Some("NORTH"));
        assert_eq!(table.get(" N "), Some("NORTH"));
        assert_eq!(table.get("n"), None);
    }

    #[test]
    fn canonical_keeps_translated_values() {
        let codec = DomainCodec::new([directions()]);
        let kind = DomainKind::Direction;
        assert_eq!(codec.canonical(kind, &"N".into()), Some("NORTH".into()));
        assert_eq!(codec.canonical(kind, &"NORTH".into()), Some("NORTH".into()));
        assert_eq!(codec.canonical(kind, &"X".into()), None);
        assert_eq!(codec.canonical(DomainKind::CountyFips, &"N".into()), None);
    }
}
