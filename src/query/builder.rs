//! PostgREST query construction
//!
//! Builder assembling filters and ordering into query-string pairs.

use crate::query::filter::QueryFilter;
use crate::query::ordering::SortOrder;

/// Builder for PostgREST query parameters.
///
/// Produces the `(key, value)` pairs appended to the table URL; the
/// transport is responsible for percent-encoding them.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pub(crate) select: Option<String>,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<u32>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column projection (`select=`); defaults to all columns
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    /// Add a filter condition (combined with AND by the remote)
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    /// Limit the number of returned rows
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the query pairs in a stable order: select, filters, order, limit
    pub fn build(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.conditions.len() + 3);

        if let Some(select) = &self.select {
            pairs.push(("select".to_string(), select.clone()));
        }

        for condition in &self.conditions {
            pairs.push(condition.to_pair());
        }

        if !self.order_by.is_empty() {
            let order = self
                .order_by
                .iter()
                .map(|(field, order)| format!("{}.{}", field, order.as_param()))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_string(), order));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}
