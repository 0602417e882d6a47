//! Pure predicate helpers the list handlers compose. Filters AND together
//! and are insensitive to application order; an absent or empty parameter
//! is always a no-op, never "match nothing".

/// Sentinel value meaning "no filter" on equality parameters.
pub const ALL: &str = "all";

/// Case-insensitive substring search across a set of string fields.
/// A record matches when ANY field contains the query.
pub fn matches_search(query: Option<&str>, fields: &[&str]) -> bool {
    match query {
        None => true,
        Some(q) if q.is_empty() => true,
        Some(q) => {
            let needle = q.to_lowercase();
            fields.iter().any(|f| f.to_lowercase().contains(&needle))
        }
    }
}

/// Equality filter honoring the `"all"` sentinel.
pub fn eq_filter(param: Option<&str>, actual: &str) -> bool {
    match param {
        None => true,
        Some(p) if p.is_empty() || p == ALL => true,
        Some(p) => p == actual,
    }
}

/// Exact foreign-key match; absent means no-op.
pub fn fk_filter(param: Option<&str>, actual: &str) -> bool {
    match param {
        None => true,
        Some(p) if p.is_empty() => true,
        Some(p) => p == actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_and_any_field() {
        assert!(matches_search(Some("RAJ"), &["Rajesh", "Kumar"]));
        assert!(matches_search(Some("kumar"), &["Rajesh", "Kumar"]));
        assert!(matches_search(Some("emp0"), &["Rajesh", "EMP002"]));
        assert!(!matches_search(Some("priya"), &["Rajesh", "Kumar"]));
    }

    #[test]
    fn empty_search_is_a_noop() {
        assert!(matches_search(None, &["anything"]));
        assert!(matches_search(Some(""), &["anything"]));
    }

    #[test]
    fn all_sentinel_matches_everything() {
        assert!(eq_filter(Some(ALL), "Engineering"));
        assert!(eq_filter(Some(ALL), "all"));
        assert!(eq_filter(None, "Engineering"));
        assert!(eq_filter(Some(""), "Engineering"));
        assert!(eq_filter(Some("Engineering"), "Engineering"));
        assert!(!eq_filter(Some("Sales"), "Engineering"));
    }

    #[test]
    fn fk_filter_is_exact() {
        assert!(fk_filter(Some("EMP004"), "EMP004"));
        assert!(!fk_filter(Some("EMP004"), "EMP005"));
        assert!(fk_filter(None, "EMP005"));
        assert!(fk_filter(Some(""), "EMP005"));
    }

    #[test]
    fn composition_is_order_insensitive() {
        let rows = [
            ("EMP001", "Engineering", "Active"),
            ("EMP002", "Engineering", "Inactive"),
            ("EMP003", "Sales", "Active"),
        ];

        let ab: Vec<_> = rows
            .iter()
            .filter(|(_, dept, _)| eq_filter(Some("Engineering"), dept))
            .filter(|(_, _, status)| eq_filter(Some("Active"), status))
            .collect();
        let ba: Vec<_> = rows
            .iter()
            .filter(|(_, _, status)| eq_filter(Some("Active"), status))
            .filter(|(_, dept, _)| eq_filter(Some("Engineering"), dept))
            .collect();

        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 1);
        assert_eq!(ab[0].0, "EMP001");
    }
}
