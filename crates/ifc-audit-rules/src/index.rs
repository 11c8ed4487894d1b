// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial index adapter
//!
//! The checks query the model's geometry through [`SpatialIndex`] only.
//! [`AabbIndex`] is the bundled adapter: a flat scan over per-entity
//! bounding boxes, built once per validation run and immutable afterwards.
//! Backends with a real acceleration structure can implement the trait
//! directly.

use ifc_audit_model::{BoundingBox, EntityId, ModelAccess, Point3};

/// Point and range queries over the model's solids
///
/// Determinism requirement: repeated queries with identical arguments return
/// the same entity list within one run.
pub trait SpatialIndex: Send + Sync {
    /// All entities whose geometry contains or is pierced by `p`
    fn query_point(&self, p: &Point3) -> Vec<EntityId>;

    /// All entities intersecting `region`
    ///
    /// # Arguments
    /// * `region` - The axis-aligned query region
    /// * `completely_within` - Restrict to entities fully contained in the
    ///   region instead of merely intersecting it
    fn query_box(&self, region: &BoundingBox, completely_within: bool) -> Vec<EntityId>;
}

/// Bounding-box index over every element with geometry
pub struct AabbIndex {
    /// Entries sorted by entity id so query results are deterministic
    entries: Vec<(EntityId, BoundingBox)>,
}

impl AabbIndex {
    /// Build the index from a model
    ///
    /// Every element with a resolvable bounding box is indexed, spatial
    /// structure entities (spaces) included.
    pub fn from_model(model: &dyn ModelAccess) -> Self {
        let mut entries: Vec<(EntityId, BoundingBox)> = model
            .all_elements()
            .into_iter()
            .filter_map(|e| model.bounding_box(e.id).map(|bb| (e.id, bb)))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        Self { entries }
    }

    /// Build the index from explicit entries
    pub fn from_entries(mut entries: Vec<(EntityId, BoundingBox)>) -> Self {
        entries.sort_by_key(|(id, _)| *id);
        Self { entries }
    }

    /// Number of indexed entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SpatialIndex for AabbIndex {
    fn query_point(&self, p: &Point3) -> Vec<EntityId> {
        self.entries
            .iter()
            .filter(|(_, bb)| bb.contains_point(p))
            .map(|(id, _)| *id)
            .collect()
    }

    fn query_box(&self, region: &BoundingBox, completely_within: bool) -> Vec<EntityId> {
        if region.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|(_, bb)| {
                if completely_within {
                    region.contains_box(bb)
                } else {
                    region.intersects(bb)
                }
            })
            .map(|(id, _)| *id)
            .collect()
    }
}
