// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry primitives for the spatial checks
//!
//! Axis-aligned bounding boxes are the only geometric representation the
//! audit engine works with; solids are reduced to boxes by the model access
//! layer before any check runs.

use serde::{Deserialize, Serialize};

/// A point in model coordinates (meters)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Create a new point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise minimum
    pub fn min(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum
    pub fn max(&self, other: &Point3) -> Point3 {
        Point3::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }
}

/// An axis-aligned bounding box
///
/// Invariant: `min <= max` per axis for a defined box. A freshly created
/// box is inverted (empty) until a point or box is merged in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3,
    pub max: Point3,
}

impl BoundingBox {
    /// Create an empty (inverted) bounding box
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create a bounding box from two opposite corners (any order)
    pub fn from_corners(a: Point3, b: Point3) -> Self {
        Self {
            min: a.min(&b),
            max: a.max(&b),
        }
    }

    /// Create a bounding box covering a set of points
    pub fn from_points(points: &[Point3]) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.merge_point(*p);
        }
        bb
    }

    /// Check if the box is empty (inverted on any axis)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Merge a point into the box
    pub fn merge_point(&mut self, p: Point3) {
        self.min = self.min.min(&p);
        self.max = self.max.max(&p);
    }

    /// Merge another box into this one
    pub fn merge(&mut self, other: &BoundingBox) {
        if !other.is_empty() {
            self.merge_point(other.min);
            self.merge_point(other.max);
        }
    }

    /// Union of two boxes
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut bb = *self;
        bb.merge(other);
        bb
    }

    /// Check if a point lies inside or on the box boundary
    pub fn contains_point(&self, p: &Point3) -> bool {
        !self.is_empty()
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Check if another box is fully contained in this one
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
            && other.min.z >= self.min.z
            && other.max.z <= self.max.z
    }

    /// Check if this box intersects another (touching counts)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Check if the infinite line through `p` along the X axis pierces the box
    ///
    /// Mirrors a box-vs-line rejection test: the line hits the box exactly
    /// when the point's Y and Z fall within the box's Y/Z extent.
    pub fn intersects_x_ray(&self, p: &Point3) -> bool {
        !self.is_empty()
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Check if the infinite line through `p` along the Y axis pierces the box
    pub fn intersects_y_ray(&self, p: &Point3) -> bool {
        !self.is_empty()
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Center of the box
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Box size per axis (zero for an empty box)
    pub fn size(&self) -> Point3 {
        if self.is_empty() {
            Point3::default()
        } else {
            Point3::new(
                self.max.x - self.min.x,
                self.max.y - self.min.y,
                self.max.z - self.min.z,
            )
        }
    }

    /// Restrict the plan extent of this box to a new vertical band
    ///
    /// Used to carve a storey's interior band out of the whole-model box.
    /// The result may be inverted when the band is degenerate; callers must
    /// treat that as an empty query region, not an error.
    pub fn with_z_band(&self, min_z: f64, max_z: f64) -> BoundingBox {
        BoundingBox {
            min: Point3::new(self.min.x, self.min.y, min_z),
            max: Point3::new(self.max.x, self.max.y, max_z),
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_empty_box_contains_nothing() {
        let bb = BoundingBox::empty();
        assert!(bb.is_empty());
        assert!(!bb.contains_point(&Point3::default()));
        assert!(!bb.intersects(&unit_box()));
    }

    #[test]
    fn test_from_corners_normalizes_order() {
        let bb = BoundingBox::from_corners(Point3::new(5.0, 1.0, 2.0), Point3::new(0.0, 4.0, 0.0));
        assert_eq!(bb.min, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(bb.max, Point3::new(5.0, 4.0, 2.0));
    }

    #[test]
    fn test_union_covers_both() {
        let a = unit_box();
        let b = BoundingBox::from_corners(Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));
        let u = a.union(&b);
        assert!(u.contains_box(&a));
        assert!(u.contains_box(&b));
    }

    #[test]
    fn test_containment_vs_intersection() {
        let outer = BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
        let inner = BoundingBox::from_corners(Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0));
        let straddling =
            BoundingBox::from_corners(Point3::new(9.0, 9.0, 9.0), Point3::new(12.0, 12.0, 12.0));
        assert!(outer.contains_box(&inner));
        assert!(!outer.contains_box(&straddling));
        assert!(outer.intersects(&straddling));
    }

    #[test]
    fn test_x_ray_pierces_only_in_band() {
        let wall = BoundingBox::from_corners(Point3::new(4.0, 0.0, 0.0), Point3::new(5.0, 10.0, 3.0));
        // Point level with the wall: the X line pierces regardless of X offset.
        assert!(wall.intersects_x_ray(&Point3::new(-100.0, 5.0, 1.2)));
        // Above the wall top: no hit.
        assert!(!wall.intersects_x_ray(&Point3::new(0.0, 5.0, 4.0)));
        // Outside the Y extent: no hit.
        assert!(!wall.intersects_x_ray(&Point3::new(0.0, 11.0, 1.2)));
    }

    #[test]
    fn test_z_band_can_invert() {
        let bb = unit_box().with_z_band(0.9, 0.1);
        assert!(bb.is_empty());
    }
}
