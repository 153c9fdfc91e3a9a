//! Convenience re-exports for common publistore usage
//!
//! # Example
//!
//! ```rust
//! use publistore::prelude::*;
//!
//! // Now you have access to all the common publistore types and traits
//! ```

// Core store and models
pub use crate::errors::PublistoreError;
pub use crate::model::{Estadisticas, NewPublicador, Publicador, PublicadorChanges};
pub use crate::store::{PublicadorStore, TABLE};

// Query building
pub use crate::query::{QueryBuilder, QueryFilter, SortOrder};

// Transport seam
pub use crate::transport::{HttpTransport, PostgrestRequest, PostgrestTransport, TransportError};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, SupabaseConfig};

// Common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
