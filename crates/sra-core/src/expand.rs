//! Nested-collection expansion
//!
//! Explodes one nested collection into one row per element, carrying the
//! parent organisation id forward. Parents with an empty collection
//! contribute no rows, and zero contributing parents is a valid outcome:
//! the caller still gets an (empty) result with its schema intact. Output
//! order is parent iteration order, then element order within a parent;
//! nothing more is promised.

use crate::organisation::{Office, Organisation};

/// One row per scalar element of the selected collection
pub fn expand_scalar<'a>(
    parents: &'a [Organisation],
    nested: impl Fn(&'a Organisation) -> &'a [String],
) -> Vec<(i64, &'a str)> {
    let mut rows = Vec::new();
    for org in parents {
        for value in nested(org) {
            rows.push((org.firm.id, value.as_str()));
        }
    }
    rows
}

/// One row per office, with every office field preserved
pub fn expand_offices(parents: &[Organisation]) -> Vec<(i64, &Office)> {
    let mut rows = Vec::new();
    for org in parents {
        for office in &org.offices {
            rows.push((org.firm.id, office));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organisation::parse_organisations;
    use serde_json::json;

    fn fixture() -> Vec<Organisation> {
        parse_organisations(json!({
            "Organisations": [
                { "Id": 1, "WorkArea": ["a", "b"], "Offices": [{ "OfficeId": 10 }] },
                { "Id": 2 },
                { "Id": 3, "WorkArea": ["c"], "Offices": [{ "OfficeId": 30 }, { "OfficeId": 31 }] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_expand_scalar_preserves_parent_then_element_order() {
        let parents = fixture();
        let rows = expand_scalar(&parents, |o| o.work_area.as_slice());
        assert_eq!(rows, vec![(1, "a"), (1, "b"), (3, "c")]);
    }

    #[test]
    fn test_empty_collection_contributes_no_rows() {
        let parents = fixture();
        let rows = expand_scalar(&parents, |o| o.trading_names.as_slice());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_expand_offices() {
        let parents = fixture();
        let rows = expand_offices(&parents);
        let ids: Vec<(i64, Option<i64>)> =
            rows.iter().map(|(id, o)| (*id, o.office_id)).collect();
        assert_eq!(ids, vec![(1, Some(10)), (3, Some(30)), (3, Some(31))]);
    }

    #[test]
    fn test_zero_parents_yield_zero_rows() {
        let parents: Vec<Organisation> = Vec::new();
        assert!(expand_scalar(&parents, |o| o.work_area.as_slice()).is_empty());
        assert!(expand_offices(&parents).is_empty());
    }
}
