//! PostgREST query construction
//!
//! This module builds the query-string pairs understood by the PostgREST
//! endpoint: equality and boolean filters, case-insensitive substring
//! matching, and ordering.

pub mod builder;
pub mod filter;
pub mod ordering;

mod tests;

pub use builder::QueryBuilder;
pub use filter::{FilterOperator, QueryFilter};
pub use ordering::SortOrder;
