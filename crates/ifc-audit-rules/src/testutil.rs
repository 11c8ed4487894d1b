// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory model fixture for the check tests

use ifc_audit_model::{
    BoundingBox, Element, EntityId, IfcType, ModelAccess, Point3, PropertySet, StoreyInfo,
};
use rustc_hash::FxHashMap;

/// A hand-assembled model implementing [`ModelAccess`]
#[derive(Default)]
pub struct MemoryModel {
    elements: FxHashMap<EntityId, Element>,
    boxes: FxHashMap<EntityId, BoundingBox>,
    contained_in: FxHashMap<EntityId, EntityId>,
    aggregated_in: FxHashMap<EntityId, EntityId>,
    slab_depths: FxHashMap<EntityId, f64>,
    storeys: Vec<StoreyInfo>,
    psets: FxHashMap<EntityId, Vec<PropertySet>>,
    attributes: FxHashMap<(EntityId, String), String>,
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_storey(&mut self, id: u32, name: &str, elevation: f64) -> EntityId {
        let id = EntityId(id);
        self.storeys
            .push(StoreyInfo::new(id, format!("guid-{}", id.0), name, elevation));
        self.elements.insert(
            id,
            Element::new(id, format!("guid-{}", id.0), IfcType::IfcBuildingStorey),
        );
        id
    }

    /// Add an element with a box, contained in a storey
    pub fn add_boxed(
        &mut self,
        id: u32,
        ifc_type: IfcType,
        min: (f64, f64, f64),
        max: (f64, f64, f64),
        storey: Option<EntityId>,
    ) -> EntityId {
        let id = EntityId(id);
        self.elements.insert(
            id,
            Element::new(id, format!("guid-{}", id.0), ifc_type).with_geometry(true),
        );
        self.boxes.insert(
            id,
            BoundingBox::from_corners(
                Point3::new(min.0, min.1, min.2),
                Point3::new(max.0, max.1, max.2),
            ),
        );
        if let Some(storey) = storey {
            self.contained_in.insert(id, storey);
        }
        id
    }

    pub fn set_aggregation(&mut self, id: EntityId, storey: EntityId) {
        self.aggregated_in.insert(id, storey);
    }

    pub fn set_slab_depth(&mut self, id: EntityId, depth: f64) {
        self.slab_depths.insert(id, depth);
    }

    pub fn add_pset(&mut self, id: EntityId, pset: PropertySet) {
        self.psets.entry(id).or_default().push(pset);
    }

    pub fn set_attribute(&mut self, id: EntityId, path: &str, value: &str) {
        self.attributes.insert((id, path.to_string()), value.to_string());
    }

    /// Union of all element boxes, the whole-model box
    pub fn model_box(&self) -> BoundingBox {
        let mut bb = BoundingBox::empty();
        for b in self.boxes.values() {
            bb.merge(b);
        }
        bb
    }
}

impl ModelAccess for MemoryModel {
    fn elements_of_type(&self, ifc_type: &IfcType) -> Vec<Element> {
        let mut out: Vec<Element> = self
            .elements
            .values()
            .filter(|e| e.ifc_type == *ifc_type)
            .cloned()
            .collect();
        out.sort_by_key(|e| e.id);
        out
    }

    fn element(&self, id: EntityId) -> Option<Element> {
        self.elements.get(&id).cloned()
    }

    fn all_elements(&self) -> Vec<Element> {
        let mut out: Vec<Element> = self.elements.values().cloned().collect();
        out.sort_by_key(|e| e.id);
        out
    }

    fn bounding_box(&self, id: EntityId) -> Option<BoundingBox> {
        self.boxes.get(&id).copied()
    }

    fn containing_storey(&self, id: EntityId) -> Option<EntityId> {
        self.contained_in.get(&id).copied()
    }

    fn aggregated_storey(&self, id: EntityId) -> Option<EntityId> {
        self.aggregated_in
            .get(&id)
            .copied()
            .or_else(|| self.containing_storey(id))
    }

    fn slab_thickness(&self, id: EntityId) -> Option<f64> {
        self.slab_depths.get(&id).copied()
    }

    fn storeys(&self) -> Vec<StoreyInfo> {
        self.storeys.clone()
    }

    fn property_sets(&self, id: EntityId) -> Vec<PropertySet> {
        self.psets.get(&id).cloned().unwrap_or_default()
    }

    fn attribute(&self, id: EntityId, path: &str) -> Option<String> {
        self.attributes.get(&(id, path.to_string())).cloned()
    }
}
