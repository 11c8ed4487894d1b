// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property access types and rule-table comparison operators

use serde::{Deserialize, Serialize};

/// A single property value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Property value as formatted string (empty when the value is unset)
    pub value: String,
}

impl Property {
    /// Create a new property
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A property set containing multiple properties
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Property set name (e.g., "Pset_WallCommon")
    pub name: String,
    /// Properties in this set
    pub properties: Vec<Property>,
}

impl PropertySet {
    /// Create a new property set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property to this set
    pub fn add(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Get a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Comparison operator from a rule-table row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl Relation {
    /// Parse a rule-table operator token
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            ">" => Some(Relation::Gt),
            "<" => Some(Relation::Lt),
            "=" => Some(Relation::Eq),
            "!=" => Some(Relation::Ne),
            ">=" => Some(Relation::Ge),
            "<=" => Some(Relation::Le),
            _ => None,
        }
    }

    /// Evaluate the relation over two numeric values
    pub fn eval(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Relation::Gt => lhs > rhs,
            Relation::Lt => lhs < rhs,
            Relation::Eq => lhs == rhs,
            Relation::Ne => lhs != rhs,
            Relation::Ge => lhs >= rhs,
            Relation::Le => lhs <= rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_parse() {
        assert_eq!(Relation::parse(">="), Some(Relation::Ge));
        assert_eq!(Relation::parse(" != "), Some(Relation::Ne));
        assert_eq!(Relation::parse("=="), None);
    }

    #[test]
    fn test_relation_eval() {
        assert!(Relation::Gt.eval(2.0, 1.0));
        assert!(!Relation::Gt.eval(1.0, 1.0));
        assert!(Relation::Le.eval(1.0, 1.0));
        assert!(Relation::Ne.eval(1.0, 2.0));
    }

    #[test]
    fn test_property_set_lookup() {
        let mut pset = PropertySet::new("Pset_WallCommon");
        pset.add(Property::new("IsExternal", "TRUE"));
        assert_eq!(pset.get("IsExternal").map(|p| p.value.as_str()), Some("TRUE"));
        assert!(pset.get("FireRating").is_none());
    }
}
