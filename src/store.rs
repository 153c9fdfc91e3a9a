//! Publisher record store
//!
//! `PublicadorStore` translates application intents (list, filter, search,
//! create, update, delete, summarize) into PostgREST requests against the
//! `publicadores` table. Every operation is a single stateless exchange: on
//! remote failure it logs a message naming the operation and re-raises the
//! error unchanged. No retry, no local recovery.

use crate::debug_log;
use crate::errors::PublistoreError;
use crate::model::{Estadisticas, NewPublicador, Publicador, PublicadorChanges};
use crate::query::{QueryBuilder, QueryFilter, SortOrder};
use crate::transport::{PostgrestRequest, PostgrestTransport, TransportError};
use serde_json::Value;
use std::sync::Arc;

/// Name of the remote table this store is bound to
pub const TABLE: &str = "publicadores";

/// Data-access client for publisher records.
///
/// Holds a shared transport handle and nothing else; concurrent calls share
/// no mutable state and interleave arbitrarily (last writer wins on a given
/// `id`). Authorization is enforced remotely by row-level security.
pub struct PublicadorStore<T: PostgrestTransport> {
    transport: Arc<T>,
}

impl<T: PostgrestTransport> Clone for PublicadorStore<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: PostgrestTransport> std::fmt::Debug for PublicadorStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicadorStore")
            .field("table", &TABLE)
            .finish()
    }
}

impl<T: PostgrestTransport> PublicadorStore<T> {
    /// Create a store over the given transport
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// List all publisher records, ordered by `nombre` ascending
    pub async fn list_all(&self) -> Result<Vec<Publicador>, PublistoreError> {
        const OPERATION: &str = "list_all";
        let query = QueryBuilder::new()
            .select("*")
            .order_by("nombre", SortOrder::Asc);
        let value = self
            .execute(OPERATION, PostgrestRequest::get(TABLE).with_query(query.build()))
            .await?;
        self.decode_rows(OPERATION, value)
    }

    /// List publisher records belonging to one group, ordered by `nombre`
    pub async fn list_by_grupo(&self, grupo: i32) -> Result<Vec<Publicador>, PublistoreError> {
        const OPERATION: &str = "list_by_grupo";
        let query = QueryBuilder::new()
            .select("*")
            .filter(QueryFilter::eq("grupo", grupo))
            .order_by("nombre", SortOrder::Asc);
        let value = self
            .execute(OPERATION, PostgrestRequest::get(TABLE).with_query(query.build()))
            .await?;
        self.decode_rows(OPERATION, value)
    }

    /// List publisher records flagged as precursors, ordered by `nombre`
    pub async fn list_precursores(&self) -> Result<Vec<Publicador>, PublistoreError> {
        const OPERATION: &str = "list_precursores";
        let query = QueryBuilder::new()
            .select("*")
            .filter(QueryFilter::is("precursor", true))
            .order_by("nombre", SortOrder::Asc);
        let value = self
            .execute(OPERATION, PostgrestRequest::get(TABLE).with_query(query.build()))
            .await?;
        self.decode_rows(OPERATION, value)
    }

    /// Search publisher records whose `nombre` contains `term`,
    /// case-insensitively and unanchored at both ends
    pub async fn search(&self, term: &str) -> Result<Vec<Publicador>, PublistoreError> {
        const OPERATION: &str = "search";
        let query = QueryBuilder::new()
            .select("*")
            .filter(QueryFilter::ilike_contains("nombre", term))
            .order_by("nombre", SortOrder::Asc);
        let value = self
            .execute(OPERATION, PostgrestRequest::get(TABLE).with_query(query.build()))
            .await?;
        self.decode_rows(OPERATION, value)
    }

    /// Create a publisher record; the remote store assigns its `id`.
    ///
    /// Exactly the five fields of [`NewPublicador`] are submitted.
    pub async fn create(&self, nuevo: NewPublicador) -> Result<Publicador, PublistoreError> {
        const OPERATION: &str = "create";
        let body = self.encode(OPERATION, &[nuevo])?;
        let request = PostgrestRequest::post(TABLE, body)
            .with_query(QueryBuilder::new().select("*").build())
            .with_prefer("return=representation");
        let value = self.execute(OPERATION, request).await?;
        self.decode_row(OPERATION, value)
    }

    /// Apply a partial update to the record with the given `id`.
    ///
    /// No optimistic-concurrency check: the last writer wins.
    pub async fn update(
        &self,
        id: &str,
        cambios: PublicadorChanges,
    ) -> Result<Publicador, PublistoreError> {
        const OPERATION: &str = "update";
        let body = self.encode(OPERATION, &cambios)?;
        let query = QueryBuilder::new().select("*").filter(QueryFilter::eq("id", id));
        let request = PostgrestRequest::patch(TABLE, body)
            .with_query(query.build())
            .with_prefer("return=representation");
        let value = self.execute(OPERATION, request).await?;
        self.decode_row(OPERATION, value)
    }

    /// Delete the record with the given `id`.
    ///
    /// "Not found" is not distinguished from other failures; both surface
    /// as the same error kind.
    pub async fn delete(&self, id: &str) -> Result<bool, PublistoreError> {
        const OPERATION: &str = "delete";
        let query = QueryBuilder::new().filter(QueryFilter::eq("id", id));
        self.execute(OPERATION, PostgrestRequest::delete(TABLE).with_query(query.build()))
            .await?;
        Ok(true)
    }

    /// Fetch the full record set and aggregate it locally.
    ///
    /// Recomputed in full on every call; fine for a congregation-sized
    /// table, not for anything larger.
    pub async fn estadisticas(&self) -> Result<Estadisticas, PublistoreError> {
        const OPERATION: &str = "estadisticas";
        let query = QueryBuilder::new().select("*");
        let value = self
            .execute(OPERATION, PostgrestRequest::get(TABLE).with_query(query.build()))
            .await?;
        let publicadores = self.decode_rows(OPERATION, value)?;

        let mut stats = Estadisticas {
            total: publicadores.len() as u64,
            ..Estadisticas::default()
        };
        for publicador in &publicadores {
            if publicador.precursor {
                stats.precursores += 1;
            }
            if publicador.animo {
                stats.con_animo += 1;
            }
            *stats.por_grupo.entry(publicador.grupo).or_insert(0) += 1;
        }

        Ok(stats)
    }

    /// Run one request through the transport with uniform error handling:
    /// log a message naming the operation, then propagate.
    async fn execute(
        &self,
        operation: &'static str,
        request: PostgrestRequest,
    ) -> Result<Value, PublistoreError> {
        debug_log!(
            "[{}] {} {} ({} query pairs)",
            operation,
            request.method.as_str(),
            request.table,
            request.query.len()
        );
        match self.transport.execute(request).await {
            Ok(value) => Ok(value),
            Err(source) => Err(self.fail(operation, source)),
        }
    }

    fn fail(&self, operation: &'static str, source: TransportError) -> PublistoreError {
        tracing::error!(operation, error = %source, "remote query failed");
        PublistoreError::RemoteQuery { operation, source }
    }

    fn encode<S: serde::Serialize>(
        &self,
        operation: &'static str,
        payload: &S,
    ) -> Result<Value, PublistoreError> {
        serde_json::to_value(payload)
            .map_err(|err| self.fail(operation, TransportError::Decode(err)))
    }

    fn decode_rows(
        &self,
        operation: &'static str,
        value: Value,
    ) -> Result<Vec<Publicador>, PublistoreError> {
        serde_json::from_value(value)
            .map_err(|err| self.fail(operation, TransportError::Decode(err)))
    }

    /// Decode a `return=representation` response and take its single row
    fn decode_row(
        &self,
        operation: &'static str,
        value: Value,
    ) -> Result<Publicador, PublistoreError> {
        self.decode_rows(operation, value)?
            .into_iter()
            .next()
            .ok_or_else(|| self.fail(operation, TransportError::NoRows))
    }
}

impl PublicadorStore<crate::transport::HttpTransport> {
    /// Create a store connected to the configured Supabase project
    pub fn connect(config: &config::SupabaseConfig) -> Result<Self, TransportError> {
        Ok(Self::new(crate::transport::HttpTransport::new(config)?))
    }
}
