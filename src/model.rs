//! Publisher record models
//!
//! Field names match the remote `publicadores` columns exactly, so the
//! structs serialize straight into PostgREST request bodies and back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A publisher record as stored in the remote `publicadores` table.
///
/// `id` is assigned by the remote store on creation and is immutable.
/// `creado_por` and the timestamps are maintained server-side; this layer
/// never submits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publicador {
    pub id: String,
    pub nombre: String,
    pub numero: String,
    pub grupo: i32,
    pub precursor: bool,
    pub animo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creado_por: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a publisher record.
///
/// This is the fixed projection submitted on insert: exactly these five
/// fields, nothing else. The remote store assigns the `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPublicador {
    pub nombre: String,
    pub numero: String,
    pub grupo: i32,
    pub precursor: bool,
    pub animo: bool,
}

/// Partial update for a publisher record.
///
/// Only populated fields are serialized, so an update replaces exactly the
/// fields the caller set and leaves the rest untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicadorChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precursor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animo: Option<bool>,
}

impl PublicadorChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre = Some(nombre.into());
        self
    }

    pub fn numero(mut self, numero: impl Into<String>) -> Self {
        self.numero = Some(numero.into());
        self
    }

    pub fn grupo(mut self, grupo: i32) -> Self {
        self.grupo = Some(grupo);
        self
    }

    pub fn precursor(mut self, precursor: bool) -> Self {
        self.precursor = Some(precursor);
        self
    }

    pub fn animo(mut self, animo: bool) -> Self {
        self.animo = Some(animo);
        self
    }

    /// True when no field is populated
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.numero.is_none()
            && self.grupo.is_none()
            && self.precursor.is_none()
            && self.animo.is_none()
    }
}

/// Aggregate statistics over the full publisher set.
///
/// Computed locally over a full fetch; serialized camelCase to match what
/// the frontend consumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estadisticas {
    pub total: u64,
    pub precursores: u64,
    pub con_animo: u64,
    pub por_grupo: BTreeMap<i32, u64>,
}
