//! # Publistore
//!
//! Async data-access client for a congregation publisher registry hosted on
//! Supabase, talking to the `publicadores` table through the PostgREST
//! query API. Authorization is enforced remotely by row-level security; this
//! layer is a pure pass-through with uniform log-and-propagate error
//! handling.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use publistore::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let store = PublicadorStore::connect(&config.supabase)?;
//!
//!     let publicadores = store.list_all().await?;
//!     println!("{} publicadores", publicadores.len());
//!
//!     let nuevo = NewPublicador {
//!         nombre: "Ana María".to_string(),
//!         numero: "12".to_string(),
//!         grupo: 1,
//!         precursor: true,
//!         animo: false,
//!     };
//!     let creado = store.create(nuevo).await?;
//!     println!("created {}", creado.id);
//!
//!     let stats = store.estadisticas().await?;
//!     println!("{} precursores of {}", stats.precursores, stats.total);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod model;
pub mod prelude;
pub mod query;
pub mod schema;
pub mod store;
pub mod transport;

// Re-export the main public types for convenience
pub use errors::PublistoreError;
pub use model::{Estadisticas, NewPublicador, Publicador, PublicadorChanges};
pub use query::{QueryBuilder, QueryFilter, SortOrder};
pub use store::{PublicadorStore, TABLE};
pub use transport::{HttpTransport, PostgrestRequest, PostgrestTransport, TransportError};

// Re-export centralized config
pub use config::{AppConfig, ConfigError, SupabaseConfig};

// Re-export external dependencies used in public API
pub use async_trait;
pub use serde_json;
