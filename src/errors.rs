//! Error types for the publistore crate
//!
//! Every store operation fails with exactly one error kind at this layer:
//! the remote query failed. The transport error that caused it is preserved
//! as the source; richer classification is left to the caller.

use crate::transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublistoreError {
    #[error("remote query failed in `{operation}`: {source}")]
    RemoteQuery {
        operation: &'static str,
        #[source]
        source: TransportError,
    },
}

impl PublistoreError {
    /// Name of the store operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            Self::RemoteQuery { operation, .. } => operation,
        }
    }
}
