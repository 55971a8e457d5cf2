//! Composite street name decomposition.
//!
//! Source street names often embed a highway-style prefix: `OLD HIGHWAY 89`,
//! `US 6`, `SR 201`. NAD carries that prefix in `St_PreTyp` and the remainder
//! in `St_Name`.

use nad_model::{AddressRecord, fields};
use serde::{Deserialize, Serialize};

/// Recognized prefixes in match-priority order, longest token sequence first.
///
/// `OLD US HWY 40` must resolve to `OLD US HWY` before the single-token `US`
/// rule gets a chance to match.
pub const STREET_PREFIXES: &[&[&str]] = &[
    &["OLD", "US", "HWY"],
    &["OLD", "HIGHWAY"],
    &["OLD", "HWY"],
    &["HIGHWAY"],
    &["HWY"],
    &["US"],
    &["SR"],
];

/// Result of splitting a street name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreetNameComponents {
    pub pre_type: Option<String>,
    pub bare_name: String,
}

impl StreetNameComponents {
    fn unchanged(name: &str) -> Self {
        Self {
            pre_type: None,
            bare_name: name.to_string(),
        }
    }
}

/// Split `full_street_name` into a recognized pre-type and the bare name.
///
/// Tokens compare ASCII case-insensitively and the returned pre-type is the
/// canonical upper-case spelling. A prefix only matches when at least one
/// token follows it. Chained prefixes (`US HIGHWAY 89`) are taken together
/// as one pre-type, so the bare name never starts with a strippable prefix
/// and decomposing it again returns it unchanged. Without a match the input
/// is returned unchanged.
pub fn decompose(full_street_name: Option<&str>) -> StreetNameComponents {
    let Some(name) = full_street_name else {
        return StreetNameComponents::default();
    };

    let mut matched: Vec<&str> = Vec::new();
    let mut rest = name;
    while let Some((prefix, tail)) = match_prefix(rest) {
        matched.extend_from_slice(prefix);
        rest = tail;
    }
    if matched.is_empty() {
        return StreetNameComponents::unchanged(name);
    }
    StreetNameComponents {
        pre_type: Some(matched.join(" ")),
        bare_name: rest.to_string(),
    }
}

/// First prefix in priority order that leads `name`, with the remainder.
fn match_prefix(name: &str) -> Option<(&'static [&'static str], &str)> {
    STREET_PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix_tokens(name, prefix).map(|rest| (*prefix, rest)))
}

/// Decompose `St_Name` into `St_PreTyp` and the bare `St_Name`.
///
/// Records that already carry a pre-type are left alone, so running the
/// stage twice never strips a second prefix. Returns the number of records
/// split.
pub fn decompose_street_names(records: &mut [AddressRecord]) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        if !record.get(fields::ST_PRE_TYP).is_blank() {
            continue;
        }
        let parts = decompose(record.get(fields::ST_NAME).as_str());
        let Some(pre_type) = parts.pre_type else {
            continue;
        };
        record.set(fields::ST_PRE_TYP, pre_type);
        record.set(fields::ST_NAME, parts.bare_name);
        changed += 1;
    }
    changed
}

/// Remainder of `name` after `tokens`, or `None` if the tokens do not lead
/// the name or nothing follows them.
fn strip_prefix_tokens<'a>(name: &'a str, tokens: &[&str]) -> Option<&'a str> {
    let mut rest = name.trim_start();
    for token in tokens {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(end);
        if !word.eq_ignore_ascii_case(token) {
            return None;
        }
        rest = tail.trim_start();
    }
    let rest = rest.trim_end();
    (!rest.is_empty()).then_some(rest)
}
