// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Audit Model - Trait definitions and shared types for model auditing
//!
//! This crate provides the core abstractions for auditing IFC (Industry
//! Foundation Classes) building models against a rule set. It defines the
//! narrow seam through which the audit checks consume a loaded model, plus
//! the shared record types flowing between checks and report drivers.
//!
//! # Architecture
//!
//! - [`ModelAccess`] - read-only view of a loaded building model
//! - [`BoundingBox`] / [`Point3`] - the only geometric representation the
//!   checks work with
//! - [`Storey`] / [`StoreyInfo`] - vertical structure records
//! - [`Finding`] / [`FindingLog`] - non-conformance records and the
//!   dual-sink accumulator owned by the report driver
//!
//! # Example
//!
//! ```ignore
//! use ifc_audit_model::{FindingLog, ModelAccess};
//!
//! let mut log = FindingLog::new();
//! log.extend(run_some_check(model)?);
//! assert_eq!(log.rows().len(), log.findings().len());
//! ```

pub mod access;
pub mod error;
pub mod findings;
pub mod geometry;
pub mod properties;
pub mod spatial;
pub mod types;

// Re-export all public types
pub use access::*;
pub use error::*;
pub use findings::*;
pub use geometry::*;
pub use properties::*;
pub use spatial::*;
pub use types::*;
