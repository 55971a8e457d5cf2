//! House number filter.

use tracing::warn;

use nad_model::{AddressRecord, FieldValue, RecordId};

/// Records that passed the filter, and the ids of those that did not.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub valid: Vec<AddressRecord>,
    pub excluded_ids: Vec<RecordId>,
}

/// Whether `value` is a plain non-negative decimal house number.
///
/// Text must be non-empty ASCII digits (leading zeros allowed, no sign or
/// whitespace) that fit an `i64`, so `Add_Number` can always hold it.
/// Integers must be non-negative. Everything else is rejected.
pub fn is_house_number(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(text) => {
            !text.is_empty()
                && text.bytes().all(|b| b.is_ascii_digit())
                && text.parse::<i64>().is_ok()
        }
        FieldValue::Integer(number) => *number >= 0,
        FieldValue::Null | FieldValue::Double(_) => false,
    }
}

/// Drop records whose `field` is not a house number, keeping input order.
pub fn filter_records(records: Vec<AddressRecord>, field: &str) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    for record in records {
        if is_house_number(record.get(field)) {
            outcome.valid.push(record);
        } else {
            outcome.excluded_ids.push(record.id);
        }
    }
    if !outcome.excluded_ids.is_empty() {
        warn!(
            field,
            excluded = outcome.excluded_ids.len(),
            kept = outcome.valid.len(),
            "records without a numeric house number excluded"
        );
    }
    outcome
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn excludes_non_numeric_and_keeps_order() {
        let records = ["12", "12B", "", "0045"]
            .iter()
            .zip(1u64..)
            .map(|(value, id)| AddressRecord::new(id).with_field("AddNum", *value))
            .collect();
        let outcome = filter_records(records, "AddNum");

        let kept: Vec<_> = outcome.valid.iter().map(|r| r.text("AddNum")).collect();
        assert_eq!(kept, vec![Some("12"), Some("0045")]);
        assert_eq!(outcome.excluded_ids, vec![RecordId::new(2), RecordId::new(3)]);
    }

    #[test]
    fn typed_values() {
        assert!(is_house_number(&FieldValue::Integer(0)));
        assert!(!is_house_number(&FieldValue::Integer(-4)));
        assert!(!is_house_number(&FieldValue::Double(12.0)));
        assert!(!is_house_number(&FieldValue::Null));
        assert!(!is_house_number(&FieldValue::from(" 12")));
        assert!(!is_house_number(&FieldValue::from("１２")));
    }

    #[test]
    fn digit_strings_beyond_i64_are_excluded() {
        assert!(is_house_number(&FieldValue::from("9223372036854775807")));
        assert!(!is_house_number(&FieldValue::from("9223372036854775808")));
        assert!(!is_house_number(&FieldValue::from("123456789012345678901234")));
    }

    proptest! {
        #[test]
        fn digit_strings_always_pass(digits in "[0-9]{1,8}") {
            prop_assert!(is_house_number(&FieldValue::from(digits)));
        }

        #[test]
        fn anything_with_a_non_digit_fails(prefix in "[0-9]{0,4}", bad in "[^0-9]", suffix in "[0-9]{0,4}") {
            let value = format!("{prefix}{bad}{suffix}");
            prop_assert!(!is_house_number(&FieldValue::from(value)));
        }

        #[test]
        fn filter_partitions_input(values in proptest::collection::vec("[0-9A-Z ]{0,4}", 0..20)) {
            let records: Vec<_> = values
                .iter()
                .zip(0u64..)
                .map(|(value, id)| AddressRecord::new(id).with_field("AddNum", value.as_str()))
                .collect();
            let total = records.len();
            let outcome = filter_records(records, "AddNum");
            prop_assert_eq!(outcome.valid.len() + outcome.excluded_ids.len(), total);
            let ids: Vec<u64> = outcome.valid.iter().map(|r| r.id.get()).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            prop_assert_eq!(ids, sorted);
        }
    }
}
