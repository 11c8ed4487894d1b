// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for audit operations
//!
//! Recoverable per-entity conditions (unresolvable containment, missing slab
//! thickness, unenclosable sample points) are handled inside the checks and
//! never surface here. These variants cover structural input errors only: a
//! check that cannot run must fail the invocation rather than report a
//! falsely clean result.

use crate::EntityId;
use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors that can occur during an audit run
#[derive(Error, Debug)]
pub enum CheckError {
    /// Requested storey name is not in the registry
    #[error("Storey '{0}' not found in the model")]
    StoreyNotFound(String),

    /// Model contains no storeys to check against
    #[error("Model contains no building storeys")]
    EmptyModel,

    /// Whole-model bounding box is undefined or degenerate
    #[error("Model bounding box is undefined")]
    UndefinedBox,

    /// Geometry conversion failure for an entity
    #[error("Geometry error for entity {entity}: {message}")]
    Geometry { entity: EntityId, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl CheckError {
    /// Create a new geometry error
    pub fn geometry(entity: EntityId, msg: impl Into<String>) -> Self {
        CheckError::Geometry {
            entity,
            message: msg.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        CheckError::Other(msg.into())
    }
}
