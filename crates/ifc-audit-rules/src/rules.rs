// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Table-driven element, property and attribute checks
//!
//! Each [`RuleRow`] describes one check over all elements of an IFC type:
//! bare rows assert the type occurs in the model at all, rows with a
//! property name assert the property exists and (optionally) matches a
//! literal value, and rows with an attribute path compare the attribute
//! numerically under a relation operator.

use ifc_audit_model::{Finding, IfcType, ModelAccess, Relation};
use serde::{Deserialize, Serialize};

/// One row of a rule table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleRow {
    /// IFC type name the row applies to, e.g. `IFCWALL`
    pub element: String,
    /// Property to look up across the element's property sets
    #[serde(default)]
    pub property_name: String,
    /// Attribute path, dot-separated for nested attributes
    #[serde(default)]
    pub attribute: String,
    /// Relation operator token for attribute comparison
    #[serde(default)]
    pub relation: String,
    /// Expected value, literal for properties and numeric for attributes
    #[serde(default)]
    pub value: String,
}

impl RuleRow {
    /// A presence-only row for an IFC type
    pub fn presence(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            ..Self::default()
        }
    }
}

/// Check that at least one element of the row's type exists
///
/// Applies to presence-only rows; rows naming a property or attribute are
/// handled by the dedicated checks and skipped here.
pub fn check_element_presence(row: &RuleRow, model: &dyn ModelAccess) -> Vec<Finding> {
    if !row.property_name.is_empty() || !row.attribute.is_empty() {
        return Vec::new();
    }
    let ifc_type = IfcType::parse(&row.element);
    if model.elements_of_type(&ifc_type).is_empty() {
        vec![Finding::new(
            row.element.clone(),
            "",
            format!("checking for {}", row.element),
            "elements don't exist",
        )]
    } else {
        Vec::new()
    }
}

/// Check a named property on every element of the row's type
///
/// Flags a missing property, an empty property value, and (when the row
/// carries an expected value) a mismatching one.
pub fn check_property(row: &RuleRow, model: &dyn ModelAccess) -> Vec<Finding> {
    if row.property_name.is_empty() {
        return Vec::new();
    }
    let ifc_type = IfcType::parse(&row.element);
    let title = format!("checking the properties {}", row.property_name);
    let mut findings = Vec::new();
    for element in model.elements_of_type(&ifc_type) {
        let comment = match model.property(element.id, &row.property_name) {
            None => Some("the property is not specified"),
            Some(p) if p.value.is_empty() => Some("the value of property failed"),
            Some(p) if !row.value.is_empty() && p.value != row.value => {
                Some("incorrect value of property")
            }
            Some(_) => None,
        };
        if let Some(comment) = comment {
            findings.push(
                Finding::new(row.element.clone(), element.global_id.clone(), title.clone(), comment)
                    .with_offending(vec![element.id]),
            );
        }
    }
    findings
}

/// Check an attribute on every element of the row's type
///
/// Flags a missing attribute. When the row carries a relation and an
/// expected value, the attribute is compared numerically; non-numeric
/// values and unknown relation tokens leave the element unflagged.
pub fn check_attribute(row: &RuleRow, model: &dyn ModelAccess) -> Vec<Finding> {
    if row.attribute.is_empty() {
        return Vec::new();
    }
    let ifc_type = IfcType::parse(&row.element);
    let title = format!("checking the attributes {} in {}", row.attribute, row.element);
    let mut findings = Vec::new();
    for element in model.elements_of_type(&ifc_type) {
        let comment = match model.attribute(element.id, &row.attribute) {
            None => Some("the attribute is not specified"),
            Some(actual) if !row.value.is_empty() => {
                let parsed = (
                    actual.parse::<f64>(),
                    row.value.parse::<f64>(),
                    Relation::parse(&row.relation),
                );
                match parsed {
                    (Ok(lhs), Ok(rhs), Some(relation)) if !relation.eval(lhs, rhs) => {
                        Some("incorrect value of attribute")
                    }
                    _ => None,
                }
            }
            Some(_) => None,
        };
        if let Some(comment) = comment {
            findings.push(
                Finding::new(row.element.clone(), element.global_id.clone(), title.clone(), comment)
                    .with_offending(vec![element.id]),
            );
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemoryModel;
    use ifc_audit_model::{EntityId, Property, PropertySet};

    fn wall_model() -> MemoryModel {
        let mut model = MemoryModel::new();
        let l1 = model.add_storey(100, "Level 1", 0.0);
        model.add_boxed(1, IfcType::IfcWall, (0.0, 0.0, 0.0), (4.0, 0.2, 3.0), Some(l1));
        model.add_boxed(2, IfcType::IfcWall, (0.0, 2.0, 0.0), (4.0, 2.2, 3.0), Some(l1));
        model
    }

    fn pset(name: &str, prop: &str, value: &str) -> PropertySet {
        let mut set = PropertySet::new(name);
        set.add(Property::new(prop, value));
        set
    }

    #[test]
    fn test_presence_flags_absent_type() {
        let model = wall_model();
        let present = check_element_presence(&RuleRow::presence("IFCWALL"), &model);
        assert!(present.is_empty());

        let absent = check_element_presence(&RuleRow::presence("IFCDOOR"), &model);
        assert_eq!(absent.len(), 1);
        assert_eq!(absent[0].title, "checking for IFCDOOR");
        assert_eq!(absent[0].comment, "elements don't exist");
        assert!(absent[0].global_id.as_str().is_empty());
    }

    #[test]
    fn test_presence_skips_property_rows() {
        let model = wall_model();
        let row = RuleRow {
            element: "IFCDOOR".into(),
            property_name: "IsExternal".into(),
            ..RuleRow::default()
        };
        assert!(check_element_presence(&row, &model).is_empty());
    }

    #[test]
    fn test_property_missing_empty_and_mismatching() {
        let mut model = wall_model();
        model.add_pset(EntityId(1), pset("Pset_WallCommon", "IsExternal", "TRUE"));
        // Wall 2 has the pset but an empty value.
        model.add_pset(EntityId(2), pset("Pset_WallCommon", "IsExternal", ""));

        let row = RuleRow {
            element: "IFCWALL".into(),
            property_name: "IsExternal".into(),
            ..RuleRow::default()
        };
        let findings = check_property(&row, &model);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].offending, vec![EntityId(2)]);
        assert_eq!(findings[0].comment, "the value of property failed");

        // With an expected value, wall 1 mismatches when it reads FALSE.
        let strict = RuleRow {
            value: "FALSE".into(),
            ..row
        };
        let findings = check_property(&strict, &model);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].offending, vec![EntityId(1)]);
        assert_eq!(findings[0].comment, "incorrect value of property");
    }

    #[test]
    fn test_property_absent_everywhere() {
        let model = wall_model();
        let row = RuleRow {
            element: "IFCWALL".into(),
            property_name: "FireRating".into(),
            ..RuleRow::default()
        };
        let findings = check_property(&row, &model);
        assert_eq!(findings.len(), 2);
        assert!(findings
            .iter()
            .all(|f| f.comment == "the property is not specified"));
    }

    #[test]
    fn test_attribute_relation_comparison() {
        let mut model = wall_model();
        model.set_attribute(EntityId(1), "Tag", "250");
        model.set_attribute(EntityId(2), "Tag", "120");

        let row = RuleRow {
            element: "IFCWALL".into(),
            attribute: "Tag".into(),
            relation: ">".into(),
            value: "200".into(),
            ..RuleRow::default()
        };
        let findings = check_attribute(&row, &model);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].offending, vec![EntityId(2)]);
        assert_eq!(findings[0].comment, "incorrect value of attribute");
        assert_eq!(findings[0].title, "checking the attributes Tag in IFCWALL");
    }

    #[test]
    fn test_attribute_missing_is_flagged() {
        let mut model = wall_model();
        model.set_attribute(EntityId(1), "Tag", "250");

        let row = RuleRow {
            element: "IFCWALL".into(),
            attribute: "Tag".into(),
            ..RuleRow::default()
        };
        let findings = check_attribute(&row, &model);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].offending, vec![EntityId(2)]);
        assert_eq!(findings[0].comment, "the attribute is not specified");
    }

    #[test]
    fn test_attribute_non_numeric_value_is_not_flagged() {
        let mut model = wall_model();
        model.set_attribute(EntityId(1), "Name", "North wall");
        model.set_attribute(EntityId(2), "Name", "South wall");

        let row = RuleRow {
            element: "IFCWALL".into(),
            attribute: "Name".into(),
            relation: "=".into(),
            value: "3.5".into(),
            ..RuleRow::default()
        };
        assert!(check_attribute(&row, &model).is_empty());
    }
}
