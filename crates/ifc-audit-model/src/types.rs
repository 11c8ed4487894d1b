// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for audited IFC entities
//!
//! Only the entity types the audit rules classify are enumerated; anything
//! else is carried through as [`IfcType::Unknown`] with its original name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe entity identifier
///
/// Wraps the raw IFC entity ID (e.g., #123 becomes EntityId(123))
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, Default)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl From<EntityId> for u32 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// IFC GlobalId (22-character base64-encoded GUID)
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct GlobalId(pub String);

impl GlobalId {
    /// Create a new GlobalId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        GlobalId(id.into())
    }

    /// Get the raw string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GlobalId {
    fn from(s: &str) -> Self {
        GlobalId(s.to_string())
    }
}

/// IFC entity type enumeration
///
/// Covers the entity types the audit checks branch on. Unknown types are
/// captured with their original string representation.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IfcType {
    // Spatial structure
    IfcProject,
    IfcSite,
    IfcBuilding,
    IfcBuildingStorey,
    IfcSpace,

    // Building elements
    IfcWall,
    IfcWallStandardCase,
    IfcCurtainWall,
    IfcSlab,
    IfcRoof,
    IfcBeam,
    IfcColumn,
    IfcDoor,
    IfcWindow,
    IfcStair,
    IfcStairFlight,
    IfcRailing,
    IfcCovering,
    IfcBuildingElementProxy,

    // Furnishing
    IfcFurnishingElement,
    IfcFurniture,

    // Distribution (MEP)
    IfcDistributionElement,
    IfcFlowTerminal,

    // Openings
    IfcOpeningElement,

    /// Unknown type - stores the original type name string
    Unknown(String),
}

impl FromStr for IfcType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl IfcType {
    /// Parse a type name string into an IfcType
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "IFCPROJECT" => IfcType::IfcProject,
            "IFCSITE" => IfcType::IfcSite,
            "IFCBUILDING" => IfcType::IfcBuilding,
            "IFCBUILDINGSTOREY" => IfcType::IfcBuildingStorey,
            "IFCSPACE" => IfcType::IfcSpace,
            "IFCWALL" => IfcType::IfcWall,
            "IFCWALLSTANDARDCASE" => IfcType::IfcWallStandardCase,
            "IFCCURTAINWALL" => IfcType::IfcCurtainWall,
            "IFCSLAB" => IfcType::IfcSlab,
            "IFCROOF" => IfcType::IfcRoof,
            "IFCBEAM" => IfcType::IfcBeam,
            "IFCCOLUMN" => IfcType::IfcColumn,
            "IFCDOOR" => IfcType::IfcDoor,
            "IFCWINDOW" => IfcType::IfcWindow,
            "IFCSTAIR" => IfcType::IfcStair,
            "IFCSTAIRFLIGHT" => IfcType::IfcStairFlight,
            "IFCRAILING" => IfcType::IfcRailing,
            "IFCCOVERING" => IfcType::IfcCovering,
            "IFCBUILDINGELEMENTPROXY" => IfcType::IfcBuildingElementProxy,
            "IFCFURNISHINGELEMENT" => IfcType::IfcFurnishingElement,
            "IFCFURNITURE" => IfcType::IfcFurniture,
            "IFCDISTRIBUTIONELEMENT" => IfcType::IfcDistributionElement,
            "IFCFLOWTERMINAL" => IfcType::IfcFlowTerminal,
            "IFCOPENINGELEMENT" => IfcType::IfcOpeningElement,
            _ => IfcType::Unknown(s.to_string()),
        }
    }

    /// Get the type name as a string
    pub fn name(&self) -> &str {
        match self {
            IfcType::IfcProject => "IFCPROJECT",
            IfcType::IfcSite => "IFCSITE",
            IfcType::IfcBuilding => "IFCBUILDING",
            IfcType::IfcBuildingStorey => "IFCBUILDINGSTOREY",
            IfcType::IfcSpace => "IFCSPACE",
            IfcType::IfcWall => "IFCWALL",
            IfcType::IfcWallStandardCase => "IFCWALLSTANDARDCASE",
            IfcType::IfcCurtainWall => "IFCCURTAINWALL",
            IfcType::IfcSlab => "IFCSLAB",
            IfcType::IfcRoof => "IFCROOF",
            IfcType::IfcBeam => "IFCBEAM",
            IfcType::IfcColumn => "IFCCOLUMN",
            IfcType::IfcDoor => "IFCDOOR",
            IfcType::IfcWindow => "IFCWINDOW",
            IfcType::IfcStair => "IFCSTAIR",
            IfcType::IfcStairFlight => "IFCSTAIRFLIGHT",
            IfcType::IfcRailing => "IFCRAILING",
            IfcType::IfcCovering => "IFCCOVERING",
            IfcType::IfcBuildingElementProxy => "IFCBUILDINGELEMENTPROXY",
            IfcType::IfcFurnishingElement => "IFCFURNISHINGELEMENT",
            IfcType::IfcFurniture => "IFCFURNITURE",
            IfcType::IfcDistributionElement => "IFCDISTRIBUTIONELEMENT",
            IfcType::IfcFlowTerminal => "IFCFLOWTERMINAL",
            IfcType::IfcOpeningElement => "IFCOPENINGELEMENT",
            IfcType::Unknown(s) => s,
        }
    }

    /// Check if this type represents a building element with potential geometry
    pub fn has_geometry(&self) -> bool {
        matches!(
            self,
            IfcType::IfcWall
                | IfcType::IfcWallStandardCase
                | IfcType::IfcCurtainWall
                | IfcType::IfcSlab
                | IfcType::IfcRoof
                | IfcType::IfcBeam
                | IfcType::IfcColumn
                | IfcType::IfcDoor
                | IfcType::IfcWindow
                | IfcType::IfcStair
                | IfcType::IfcStairFlight
                | IfcType::IfcRailing
                | IfcType::IfcCovering
                | IfcType::IfcBuildingElementProxy
                | IfcType::IfcFurnishingElement
                | IfcType::IfcFurniture
                | IfcType::IfcDistributionElement
                | IfcType::IfcFlowTerminal
                | IfcType::IfcOpeningElement
        )
    }

    /// Check if this type is a spatial structure element
    pub fn is_spatial(&self) -> bool {
        matches!(
            self,
            IfcType::IfcProject
                | IfcType::IfcSite
                | IfcType::IfcBuilding
                | IfcType::IfcBuildingStorey
                | IfcType::IfcSpace
        )
    }

    /// Check if this type is a wall variant
    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            IfcType::IfcWall | IfcType::IfcWallStandardCase | IfcType::IfcCurtainWall
        )
    }

    /// Check if this type is a declared space region
    pub fn is_space(&self) -> bool {
        matches!(self, IfcType::IfcSpace)
    }

    /// Check if this type is a slab
    pub fn is_slab(&self) -> bool {
        matches!(self, IfcType::IfcSlab)
    }

    /// Check if this type is furnishing (containment resolves via aggregation)
    pub fn is_furnishing(&self) -> bool {
        matches!(self, IfcType::IfcFurnishingElement | IfcType::IfcFurniture)
    }
}

impl Default for IfcType {
    fn default() -> Self {
        IfcType::Unknown(String::new())
    }
}

impl fmt::Display for IfcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A decoded model element as consumed by the audit checks
///
/// The model access layer produces these; the checks never see raw IFC
/// attribute lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Entity ID
    pub id: EntityId,
    /// GlobalId (GUID)
    pub global_id: GlobalId,
    /// Entity type
    pub ifc_type: IfcType,
    /// ObjectType attribute, falls back to the type name when absent
    pub object_type: String,
    /// Whether the entity carries a geometric representation
    pub has_geometry: bool,
}

impl Element {
    /// Create a new element record
    pub fn new(id: EntityId, global_id: impl Into<GlobalId>, ifc_type: IfcType) -> Self {
        let object_type = ifc_type.name().to_string();
        Self {
            id,
            global_id: global_id.into(),
            ifc_type,
            object_type,
            has_geometry: false,
        }
    }

    /// Set the ObjectType label
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = object_type.into();
        self
    }

    /// Set the has_geometry flag
    pub fn with_geometry(mut self, has_geometry: bool) -> Self {
        self.has_geometry = has_geometry;
        self
    }
}

impl From<String> for GlobalId {
    fn from(s: String) -> Self {
        GlobalId(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(IfcType::parse("IfcWall"), IfcType::IfcWall);
        assert_eq!(IfcType::parse("IFCSPACE"), IfcType::IfcSpace);
        assert_eq!(IfcType::parse("ifcslab"), IfcType::IfcSlab);
    }

    #[test]
    fn test_parse_unknown_keeps_name() {
        let t = IfcType::parse("IfcSensor");
        assert_eq!(t, IfcType::Unknown("IfcSensor".to_string()));
        assert_eq!(t.name(), "IfcSensor");
    }

    #[test]
    fn test_wall_predicate_covers_variants() {
        assert!(IfcType::IfcWall.is_wall());
        assert!(IfcType::IfcWallStandardCase.is_wall());
        assert!(!IfcType::IfcSlab.is_wall());
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(42).to_string(), "#42");
    }
}
