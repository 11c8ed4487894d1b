// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storey records for the vertical structure of a building model

use crate::{EntityId, GlobalId};
use serde::{Deserialize, Serialize};

/// Building storey as enumerated by the model access layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreyInfo {
    /// Entity ID
    pub id: EntityId,
    /// GlobalId (GUID)
    pub global_id: GlobalId,
    /// Storey name
    pub name: String,
    /// Elevation in meters
    pub elevation: f64,
}

impl StoreyInfo {
    /// Create new storey info
    pub fn new(
        id: EntityId,
        global_id: impl Into<GlobalId>,
        name: impl Into<String>,
        elevation: f64,
    ) -> Self {
        Self {
            id,
            global_id: global_id.into(),
            name: name.into(),
            elevation,
        }
    }
}

/// A storey with its derived vertical band
///
/// Bands partition the model's vertical extent into contiguous,
/// non-overlapping slices ordered by `index`: `min_z` is the storey's own
/// elevation, `max_z` the next storey's elevation (the whole-model box top
/// for the topmost storey).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Storey {
    /// Storey name
    pub name: String,
    /// Entity ID
    pub id: EntityId,
    /// GlobalId (GUID)
    pub global_id: GlobalId,
    /// Band lower bound (own elevation)
    pub min_z: f64,
    /// Band upper bound (next storey's elevation, or model top)
    pub max_z: f64,
    /// Position in the elevation-sorted order, bottom first
    pub index: usize,
}

impl Storey {
    /// Band height
    pub fn height(&self) -> f64 {
        self.max_z - self.min_z
    }
}
