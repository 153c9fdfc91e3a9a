//! PostgREST query construction
//!
//! Filter conditions for the `publicadores` query API.

use std::fmt;

/// Filter operators supported by this layer
///
/// A deliberate subset of PostgREST's operators: the remote contract only
/// requires equality and case-insensitive substring matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// `eq` — equality
    Eq,
    /// `is` — boolean/null comparison
    Is,
    /// `ilike` — case-insensitive pattern match
    ILike,
}

impl FilterOperator {
    pub fn as_param(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Is => "is",
            FilterOperator::ILike => "ilike",
        }
    }
}

/// Single filter condition on one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl QueryFilter {
    /// Create a filter condition
    pub fn condition(field: &str, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value: value.into(),
        }
    }

    /// Equality condition
    pub fn eq(field: &str, value: impl fmt::Display) -> Self {
        Self::condition(field, FilterOperator::Eq, value.to_string())
    }

    /// Boolean condition (`is.true` / `is.false`)
    pub fn is(field: &str, value: bool) -> Self {
        Self::condition(field, FilterOperator::Is, value.to_string())
    }

    /// Case-insensitive substring match, unanchored at both ends.
    ///
    /// PostgREST uses `*` as the wildcard and translates it to SQL `%`.
    pub fn ilike_contains(field: &str, term: &str) -> Self {
        Self::condition(field, FilterOperator::ILike, format!("*{term}*"))
    }

    /// Render as a PostgREST query pair, e.g. `("grupo", "eq.2")`
    pub fn to_pair(&self) -> (String, String) {
        (
            self.field.clone(),
            format!("{}.{}", self.operator.as_param(), self.value),
        )
    }
}
