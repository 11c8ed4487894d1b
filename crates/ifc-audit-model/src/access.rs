// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model access trait - the audit engine's view of a loaded building model
//!
//! The checks never parse IFC themselves; a backend (parser, database,
//! in-memory fixture) implements [`ModelAccess`] and the engine consumes the
//! model exclusively through it. Implementations are expected to be fully
//! loaded and immutable for the duration of a validation run.

use crate::{BoundingBox, Element, EntityId, IfcType, PropertySet, StoreyInfo};

/// Read-only access to a loaded building model
///
/// # Example
///
/// ```ignore
/// use ifc_audit_model::{ModelAccess, IfcType};
///
/// fn count_walls(model: &dyn ModelAccess) -> usize {
///     model.elements_of_type(&IfcType::IfcWall).len()
/// }
/// ```
pub trait ModelAccess: Send + Sync {
    /// Get all elements of a specific type
    ///
    /// # Arguments
    /// * `ifc_type` - The IFC type to filter by
    ///
    /// # Returns
    /// All matching elements, in ascending entity-id order
    fn elements_of_type(&self, ifc_type: &IfcType) -> Vec<Element>;

    /// Look up a single element by ID
    fn element(&self, id: EntityId) -> Option<Element>;

    /// Get every element in the model, in ascending entity-id order
    ///
    /// Spatial structure entities are included; the spatial index adapter is
    /// built over this enumeration once per validation run.
    fn all_elements(&self) -> Vec<Element>;

    /// Get the axis-aligned bounding box of an element's solids
    ///
    /// The box is the union over all solids of the entity, in model
    /// coordinates (meters). `None` when the entity has no geometry.
    fn bounding_box(&self, id: EntityId) -> Option<BoundingBox>;

    /// Get the storey an element is directly contained in
    ///
    /// Follows the direct spatial containment relation only. `None` when the
    /// containment chain cannot be resolved; such elements cannot be judged
    /// misplaced and are skipped by the checks.
    fn containing_storey(&self, id: EntityId) -> Option<EntityId>;

    /// Get the storey an element reaches through the aggregation chain
    ///
    /// Furnishing elements are commonly contained in a space that is in turn
    /// aggregated into a storey; this resolves that indirect path.
    fn aggregated_storey(&self, id: EntityId) -> Option<EntityId> {
        self.containing_storey(id)
    }

    /// Get the swept-solid depth of a slab
    ///
    /// `None` when the element is not a slab or carries no extrusion depth.
    fn slab_thickness(&self, id: EntityId) -> Option<f64>;

    /// Enumerate all building storeys (unsorted)
    fn storeys(&self) -> Vec<StoreyInfo>;

    /// Get all property sets associated with an element
    fn property_sets(&self, id: EntityId) -> Vec<PropertySet>;

    /// Resolve a dotted attribute path on an element
    ///
    /// E.g. `"Name"` or `"OwnerHistory.OwningUser.ThePerson.FamilyName"`.
    /// Returns the value formatted as a string, `None` when any segment of
    /// the path is absent or null.
    fn attribute(&self, id: EntityId, path: &str) -> Option<String>;

    /// Get a specific property by name across all property sets
    fn property(&self, id: EntityId, name: &str) -> Option<crate::Property> {
        self.property_sets(id)
            .into_iter()
            .flat_map(|pset| pset.properties)
            .find(|p| p.name == name)
    }

    /// Check whether an element carries a geometric representation
    fn has_geometry(&self, id: EntityId) -> bool {
        self.element(id).map(|e| e.has_geometry).unwrap_or(false)
    }
}
