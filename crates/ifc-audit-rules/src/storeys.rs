// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storey registry
//!
//! Orders the model's storeys by elevation and derives the vertical band of
//! each: `min_z` is the storey's own elevation, `max_z` the next storey's
//! elevation, and the topmost storey closes at the whole-model box top. The
//! bands partition the model's vertical extent contiguously.

use ifc_audit_model::{BoundingBox, CheckError, Result, Storey, StoreyInfo};
use rustc_hash::FxHashMap;

/// Elevation-ordered storey bands, built once per validation run
#[derive(Clone, Debug)]
pub struct StoreyRegistry {
    storeys: Vec<Storey>,
    by_name: FxHashMap<String, usize>,
}

impl StoreyRegistry {
    /// Build the registry from the model's storeys and its bounding box
    ///
    /// # Errors
    /// [`CheckError::EmptyModel`] when the model has no storeys,
    /// [`CheckError::UndefinedBox`] when the model box is degenerate.
    pub fn build(infos: &[StoreyInfo], model_box: &BoundingBox) -> Result<Self> {
        if infos.is_empty() {
            return Err(CheckError::EmptyModel);
        }
        if model_box.is_empty() {
            return Err(CheckError::UndefinedBox);
        }

        let mut sorted: Vec<&StoreyInfo> = infos.iter().collect();
        sorted.sort_by(|a, b| a.elevation.total_cmp(&b.elevation));

        let mut storeys = Vec::with_capacity(sorted.len());
        let mut by_name = FxHashMap::default();
        for (index, info) in sorted.iter().enumerate() {
            let max_z = match sorted.get(index + 1) {
                Some(next) => next.elevation,
                None => model_box.max.z,
            };
            by_name.insert(info.name.clone(), index);
            storeys.push(Storey {
                name: info.name.clone(),
                id: info.id,
                global_id: info.global_id.clone(),
                min_z: info.elevation,
                max_z,
                index,
            });
        }

        Ok(Self { storeys, by_name })
    }

    /// Look up a storey by name
    ///
    /// # Errors
    /// [`CheckError::StoreyNotFound`] — fatal by design: a check invoked for
    /// an unknown storey must fail rather than report a clean result.
    pub fn get(&self, name: &str) -> Result<&Storey> {
        self.by_name
            .get(name)
            .map(|&i| &self.storeys[i])
            .ok_or_else(|| CheckError::StoreyNotFound(name.to_string()))
    }

    /// The storey immediately above, if any
    pub fn above(&self, storey: &Storey) -> Option<&Storey> {
        self.storeys.get(storey.index + 1)
    }

    /// Iterate storeys bottom-up
    pub fn iter(&self) -> impl Iterator<Item = &Storey> {
        self.storeys.iter()
    }

    /// Number of storeys
    pub fn len(&self) -> usize {
        self.storeys.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.storeys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ifc_audit_model::{EntityId, Point3};

    fn model_box(max_z: f64) -> BoundingBox {
        BoundingBox::from_corners(Point3::new(0.0, 0.0, -1.25), Point3::new(20.0, 15.0, max_z))
    }

    fn three_storeys() -> Vec<StoreyInfo> {
        vec![
            StoreyInfo::new(EntityId(20), "guid-l1", "Level 1", 0.0),
            StoreyInfo::new(EntityId(10), "guid-fdn", "T/FDN", -1.25),
            StoreyInfo::new(EntityId(30), "guid-l2", "Level 2", 3.0),
        ]
    }

    #[test]
    fn test_bands_partition_vertical_extent() {
        let registry = StoreyRegistry::build(&three_storeys(), &model_box(6.5)).unwrap();
        let bands: Vec<&Storey> = registry.iter().collect();
        assert_eq!(bands.len(), 3);
        // Contiguous: each band closes where the next one opens.
        for pair in bands.windows(2) {
            assert_relative_eq!(pair[0].max_z, pair[1].min_z);
            assert_eq!(pair[0].index + 1, pair[1].index);
        }
        // Topmost band closes at the model box top.
        assert_relative_eq!(bands[2].max_z, 6.5);
        assert_eq!(bands[0].name, "T/FDN");
        assert_eq!(bands[2].name, "Level 2");
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = StoreyRegistry::build(&three_storeys(), &model_box(6.5)).unwrap();
        let l1 = registry.get("Level 1").unwrap();
        assert_eq!(l1.id, EntityId(20));
        assert_relative_eq!(l1.min_z, 0.0);
        assert_relative_eq!(l1.max_z, 3.0);
    }

    #[test]
    fn test_unknown_storey_is_fatal() {
        let registry = StoreyRegistry::build(&three_storeys(), &model_box(6.5)).unwrap();
        assert!(matches!(
            registry.get("Level 9"),
            Err(CheckError::StoreyNotFound(_))
        ));
    }

    #[test]
    fn test_above_walks_the_order() {
        let registry = StoreyRegistry::build(&three_storeys(), &model_box(6.5)).unwrap();
        let fdn = registry.get("T/FDN").unwrap();
        let l1 = registry.above(fdn).unwrap();
        assert_eq!(l1.name, "Level 1");
        let l2 = registry.above(l1).unwrap();
        assert!(registry.above(l2).is_none());
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(matches!(
            StoreyRegistry::build(&[], &model_box(6.5)),
            Err(CheckError::EmptyModel)
        ));
        assert!(matches!(
            StoreyRegistry::build(&three_storeys(), &BoundingBox::empty()),
            Err(CheckError::UndefinedBox)
        ));
    }
}
