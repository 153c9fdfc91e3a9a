//! PostgREST query construction
//!
//! Unit tests for the builder and filter rendering.

#[cfg(test)]
mod tests {
    use crate::query::{FilterOperator, QueryBuilder, QueryFilter, SortOrder};

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    // ========================================
    // Filter rendering
    // ========================================

    #[test]
    fn test_eq_filter_renders_postgrest_pair() {
        let filter = QueryFilter::eq("grupo", 2);
        assert_eq!(filter.to_pair(), pair("grupo", "eq.2"));
    }

    #[test]
    fn test_eq_filter_accepts_string_values() {
        let filter = QueryFilter::eq("id", "a1b2-c3");
        assert_eq!(filter.to_pair(), pair("id", "eq.a1b2-c3"));
    }

    #[test]
    fn test_is_filter_renders_boolean() {
        assert_eq!(
            QueryFilter::is("precursor", true).to_pair(),
            pair("precursor", "is.true")
        );
        assert_eq!(
            QueryFilter::is("animo", false).to_pair(),
            pair("animo", "is.false")
        );
    }

    #[test]
    fn test_ilike_contains_is_unanchored_both_ends() {
        let filter = QueryFilter::ilike_contains("nombre", "ana");
        assert_eq!(filter.to_pair(), pair("nombre", "ilike.*ana*"));
    }

    #[test]
    fn test_ilike_contains_empty_term_matches_everything() {
        let filter = QueryFilter::ilike_contains("nombre", "");
        assert_eq!(filter.to_pair(), pair("nombre", "ilike.**"));
    }

    #[test]
    fn test_operator_params() {
        assert_eq!(FilterOperator::Eq.as_param(), "eq");
        assert_eq!(FilterOperator::Is.as_param(), "is");
        assert_eq!(FilterOperator::ILike.as_param(), "ilike");
    }

    // ========================================
    // Builder output
    // ========================================

    #[test]
    fn test_builder_emits_stable_pair_order() {
        let pairs = QueryBuilder::new()
            .select("*")
            .filter(QueryFilter::eq("grupo", 1))
            .order_by("nombre", SortOrder::Asc)
            .build();

        assert_eq!(
            pairs,
            vec![
                pair("select", "*"),
                pair("grupo", "eq.1"),
                pair("order", "nombre.asc"),
            ]
        );
    }

    #[test]
    fn test_builder_empty_produces_no_pairs() {
        assert!(QueryBuilder::new().build().is_empty());
    }

    #[test]
    fn test_builder_joins_multiple_orderings() {
        let pairs = QueryBuilder::new()
            .order_by("grupo", SortOrder::Asc)
            .order_by("nombre", SortOrder::Desc)
            .build();
        assert_eq!(pairs, vec![pair("order", "grupo.asc,nombre.desc")]);
    }

    #[test]
    fn test_builder_limit() {
        let pairs = QueryBuilder::new().limit(1).build();
        assert_eq!(pairs, vec![pair("limit", "1")]);
    }

    #[test]
    fn test_builder_multiple_filters_preserved_in_order() {
        let pairs = QueryBuilder::new()
            .filter(QueryFilter::eq("grupo", 3))
            .filter(QueryFilter::is("precursor", true))
            .build();
        assert_eq!(
            pairs,
            vec![pair("grupo", "eq.3"), pair("precursor", "is.true")]
        );
    }
}
