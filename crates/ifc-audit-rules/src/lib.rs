// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # ifc-audit-rules
//!
//! The audit checkers. The spatial validation engine consists of the
//! floor-assignment checker and the space-coverage detector, both operating
//! on a [`StoreyRegistry`] of elevation-ordered vertical bands and querying
//! geometry exclusively through the [`SpatialIndex`] trait. The `rules`
//! module carries the table-driven element, property and attribute checks.
//!
//! ## Usage
//!
//! ```no_run
//! use ifc_audit_model::{FindingLog, ModelAccess};
//! use ifc_audit_rules::{check_floor_assignment, check_space_coverage};
//! use ifc_audit_rules::{AabbIndex, StoreyRegistry};
//!
//! fn audit(model: &dyn ModelAccess) -> ifc_audit_model::Result<FindingLog> {
//!     let index = AabbIndex::from_model(model);
//!     let model_box = model
//!         .all_elements()
//!         .iter()
//!         .filter_map(|e| model.bounding_box(e.id))
//!         .fold(ifc_audit_model::BoundingBox::empty(), |mut acc, bb| {
//!             acc.merge(&bb);
//!             acc
//!         });
//!     let registry = StoreyRegistry::build(&model.storeys(), &model_box)?;
//!
//!     let mut log = FindingLog::new();
//!     for storey in registry.iter().map(|s| s.name.clone()).collect::<Vec<_>>() {
//!         log.extend(check_floor_assignment(model, &index, &model_box, &registry, &storey)?);
//!         log.extend(check_space_coverage(model, &index, &model_box, &registry, &storey)?);
//!     }
//!     Ok(log)
//! }
//! ```

pub mod cluster;
pub mod coverage;
pub mod floor;
pub mod index;
pub mod rules;
pub mod storeys;

#[cfg(test)]
pub(crate) mod testutil;

pub use cluster::DisjointSet;
pub use coverage::check_space_coverage;
pub use floor::check_floor_assignment;
pub use index::{AabbIndex, SpatialIndex};
pub use rules::{check_attribute, check_element_presence, check_property, RuleRow};
pub use storeys::StoreyRegistry;
