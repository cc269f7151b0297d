use thiserror::Error;

use crate::entity::EntityKind;

/// The one way a store operation can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A single-item lookup found nothing under the requested id.
    #[error("could not find {kind} with id {id}")]
    NotFound { kind: EntityKind, id: String },
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type StoreResult<V> = Result<V, StoreError>;
