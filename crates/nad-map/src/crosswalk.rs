//! Schema projection from jurisdiction records to NAD records.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;

use serde::Serialize;
use tracing::warn;

use nad_model::{AddressRecord, FieldValue};

use crate::error::MappingError;
use crate::rule::CrosswalkRule;

/// A rule whose sources and target were all absent on some records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaMismatch {
    pub target: String,
    pub sources: Vec<String>,
    /// Number of records the rule resolved to null for.
    pub records: usize,
}

/// Result of projecting a whole record set.
#[derive(Debug, Clone)]
pub struct CrosswalkOutcome {
    pub records: Vec<AddressRecord>,
    pub schema_mismatches: Vec<SchemaMismatch>,
}

/// Ordered, validated set of crosswalk rules.
#[derive(Debug, Clone)]
pub struct FieldCrosswalk {
    rules: Vec<CrosswalkRule>,
}

impl FieldCrosswalk {
    /// Validate rules: names must be non-empty and targets unique.
    pub fn new(rules: Vec<CrosswalkRule>) -> Result<Self, MappingError> {
        let mut targets = BTreeSet::new();
        for rule in &rules {
            let target = rule.target.trim();
            if target.is_empty() || rule.sources.iter().any(|s| s.trim().is_empty()) {
                return Err(MappingError::EmptyFieldName {
                    target: rule.target.clone(),
                });
            }
            if rule.sources.is_empty() {
                return Err(MappingError::NoSources(rule.target.clone()));
            }
            if !targets.insert(target) {
                return Err(MappingError::DuplicateTarget(rule.target.clone()));
            }
        }
        Ok(Self { rules })
    }

    /// Parse a JSON array of rules.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, MappingError> {
        let rules: Vec<CrosswalkRule> = serde_json::from_reader(reader)
            .map_err(|e| MappingError::InvalidRules(e.to_string()))?;
        Self::new(rules)
    }

    pub fn rules(&self) -> &[CrosswalkRule] {
        &self.rules
    }

    /// Target field names in rule order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.target.as_str())
    }

    /// Project one record. Fields without a rule are dropped; id and geometry
    /// carry over.
    pub fn project(&self, source: &AddressRecord) -> AddressRecord {
        self.project_tracking(source, |_| {})
    }

    /// Project every record, collecting one [`SchemaMismatch`] per rule that
    /// resolved to null because none of its fields existed.
    pub fn project_all(&self, records: &[AddressRecord]) -> CrosswalkOutcome {
        let mut misses: BTreeMap<usize, usize> = BTreeMap::new();
        let projected: Vec<AddressRecord> = records
            .iter()
            .map(|record| {
                self.project_tracking(record, |rule_idx| {
                    *misses.entry(rule_idx).or_default() += 1;
                })
            })
            .collect();

        let schema_mismatches = misses
            .into_iter()
            .map(|(idx, count)| {
                let rule = &self.rules[idx];
                warn!(
                    target_field = %rule.target,
                    sources = ?rule.sources,
                    records = count,
                    "crosswalk source field missing, target set to null"
                );
                SchemaMismatch {
                    target: rule.target.clone(),
                    sources: rule.sources.clone(),
                    records: count,
                }
            })
            .collect();

        CrosswalkOutcome {
            records: projected,
            schema_mismatches,
        }
    }

    fn project_tracking(
        &self,
        source: &AddressRecord,
        mut on_missing: impl FnMut(usize),
    ) -> AddressRecord {
        let mut out = AddressRecord::new(source.id);
        out.geometry = source.geometry;
        for (idx, rule) in self.rules.iter().enumerate() {
            // An already-projected record carries its target through.
            let field = rule
                .sources
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(rule.target.as_str()))
                .find(|name| source.contains(name));
            let value = match field {
                Some(name) => rule.derivation.apply(source.get(name)),
                None => {
                    on_missing(idx);
                    FieldValue::Null
                }
            };
            out.set(&rule.target, value);
        }
        out
    }
}
