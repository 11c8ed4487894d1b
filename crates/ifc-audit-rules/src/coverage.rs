// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Space-coverage detector
//!
//! Samples a storey at waist height on a one-unit grid, keeps the points
//! covered by neither a wall nor a declared space, resolves the four walls
//! enclosing each such point, and merges the resulting wall-bounded cells
//! into rooms. Every room without a declared space yields one finding that
//! names all walls enclosing it.

use crate::cluster::DisjointSet;
use crate::index::SpatialIndex;
use crate::storeys::StoreyRegistry;
use ifc_audit_model::{
    BoundingBox, CheckError, EntityId, Finding, IfcType, ModelAccess, Point3, Result,
};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Sampling height above the storey elevation
const EYE_HEIGHT: f64 = 1.2;

/// Grid spacing in model units
const GRID_STEP: f64 = 1.0;

/// An uncovered sample point together with its four enclosing walls
struct Cell {
    point: Point3,
    // left, right, bottom, upper
    walls: [EntityId; 4],
}

impl Cell {
    /// Sorted wall ids, the cell's identity for deduplication
    fn wall_set(&self) -> Vec<EntityId> {
        let mut set = self.walls.to_vec();
        set.sort();
        set.dedup();
        set
    }
}

/// Find wall-enclosed regions of a storey not covered by any declared space
///
/// # Arguments
/// * `model` - Read-only model access
/// * `index` - Spatial index over the model's solids
/// * `model_box` - Whole-model bounding box
/// * `registry` - Elevation-ordered storey bands
/// * `storey_name` - Name of the storey to check
///
/// # Returns
/// One finding per uncovered room. The finding's offending list holds every
/// wall enclosing the room, sorted by entity id.
pub fn check_space_coverage(
    model: &dyn ModelAccess,
    index: &dyn SpatialIndex,
    model_box: &BoundingBox,
    registry: &StoreyRegistry,
    storey_name: &str,
) -> Result<Vec<Finding>> {
    let storey = registry.get(storey_name)?;
    if model_box.is_empty() {
        return Err(CheckError::UndefinedBox);
    }

    let walls = wall_boxes(model);
    let by_max_x = axis_sorted(&walls, |bb| bb.max.x);
    let by_max_y = axis_sorted(&walls, |bb| bb.max.y);
    let boxes: FxHashMap<EntityId, BoundingBox> = walls.iter().copied().collect();

    let z = storey.min_z + EYE_HEIGHT;
    let uncovered = uncovered_points(model, index, model_box, z);
    debug!(
        "space coverage on '{}': {} wall(s), {} uncovered point(s)",
        storey.name,
        walls.len(),
        uncovered.len()
    );

    // One representative cell per distinct enclosing-wall set. Points where
    // any of the four directions fails to resolve are outside the building
    // envelope and dropped.
    let mut cells: Vec<Cell> = Vec::new();
    let mut seen: FxHashSet<Vec<EntityId>> = FxHashSet::default();
    for point in uncovered {
        let Some(cell) = resolve_cell(&point, &boxes, &by_max_x, &by_max_y) else {
            continue;
        };
        if seen.insert(cell.wall_set()) {
            cells.push(cell);
        }
    }

    // Two cells belong to the same room when the box spanned by their sample
    // points crosses neither a wall nor a space.
    let mut clusters = DisjointSet::new(cells.len());
    for i in 0..cells.len() {
        for j in i + 1..cells.len() {
            if connected(model, index, &cells[i].point, &cells[j].point) {
                clusters.union(i, j);
            }
        }
    }

    let title = format!("no declared space between the walls on storey {}", storey.name);
    let mut findings = Vec::new();
    for component in clusters.components() {
        let mut wall_ids: FxHashSet<EntityId> = FxHashSet::default();
        for &cell in &component {
            wall_ids.extend(cells[cell].walls);
        }
        let mut wall_ids: Vec<EntityId> = wall_ids.into_iter().collect();
        wall_ids.sort();
        let global_ids = wall_ids
            .iter()
            .filter_map(|&id| model.element(id))
            .map(|e| e.global_id.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        findings.push(
            Finding::new(
                IfcType::IfcSpace.name(),
                global_ids,
                title.clone(),
                "there is no space between the walls",
            )
            .with_offending(wall_ids),
        );
    }
    debug!(
        "space coverage on '{}': {} uncovered room(s)",
        storey.name,
        findings.len()
    );
    Ok(findings)
}

/// Bounding boxes of every wall in the model, sorted by entity id
fn wall_boxes(model: &dyn ModelAccess) -> Vec<(EntityId, BoundingBox)> {
    let mut out = Vec::new();
    for ifc_type in [
        IfcType::IfcWall,
        IfcType::IfcWallStandardCase,
        IfcType::IfcCurtainWall,
    ] {
        for wall in model.elements_of_type(&ifc_type) {
            if let Some(bb) = model.bounding_box(wall.id) {
                out.push((wall.id, bb));
            }
        }
    }
    out.sort_by_key(|&(id, _)| id);
    out
}

/// Walls sorted by one coordinate of their box, ties broken by entity id
fn axis_sorted(
    walls: &[(EntityId, BoundingBox)],
    key: impl Fn(&BoundingBox) -> f64,
) -> Vec<(f64, EntityId)> {
    let mut out: Vec<(f64, EntityId)> = walls.iter().map(|(id, bb)| (key(bb), *id)).collect();
    out.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    out
}

/// Grid points at height `z` covered by neither a wall nor a space
fn uncovered_points(
    model: &dyn ModelAccess,
    index: &dyn SpatialIndex,
    model_box: &BoundingBox,
    z: f64,
) -> Vec<Point3> {
    let size = model_box.size();
    let nx = size.x.round() as i64;
    let ny = size.y.round() as i64;
    let mut out = Vec::new();
    for i in 0..nx {
        for j in 0..ny {
            let p = Point3::new(
                model_box.min.x + i as f64 * GRID_STEP,
                model_box.min.y + j as f64 * GRID_STEP,
                z,
            );
            let covered = index
                .query_point(&p)
                .into_iter()
                .filter_map(|id| model.element(id))
                .any(|e| e.ifc_type.is_wall() || e.ifc_type.is_space());
            if !covered {
                out.push(p);
            }
        }
    }
    out
}

/// Resolve the four nearest walls around a point, or `None` if any
/// direction is open
///
/// A wall qualifies for the left/right pick only when the X-parallel line
/// through the point pierces its box, and symmetrically for bottom/upper
/// with the Y-parallel line. Left is the qualifying wall with the largest
/// `max.x` strictly below the point's X, right the smallest strictly above;
/// boundary values are never picked for either side.
fn resolve_cell(
    point: &Point3,
    boxes: &FxHashMap<EntityId, BoundingBox>,
    by_max_x: &[(f64, EntityId)],
    by_max_y: &[(f64, EntityId)],
) -> Option<Cell> {
    let left = nearest_below(by_max_x, point.x, |id| boxes[&id].intersects_x_ray(point))?;
    let right = nearest_above(by_max_x, point.x, |id| boxes[&id].intersects_x_ray(point))?;
    let bottom = nearest_below(by_max_y, point.y, |id| boxes[&id].intersects_y_ray(point))?;
    let upper = nearest_above(by_max_y, point.y, |id| boxes[&id].intersects_y_ray(point))?;
    Some(Cell {
        point: *point,
        walls: [left, right, bottom, upper],
    })
}

fn nearest_below(
    sorted: &[(f64, EntityId)],
    threshold: f64,
    pierced: impl Fn(EntityId) -> bool,
) -> Option<EntityId> {
    let split = sorted.partition_point(|&(v, _)| v < threshold);
    sorted[..split]
        .iter()
        .rev()
        .find(|&&(_, id)| pierced(id))
        .map(|&(_, id)| id)
}

fn nearest_above(
    sorted: &[(f64, EntityId)],
    threshold: f64,
    pierced: impl Fn(EntityId) -> bool,
) -> Option<EntityId> {
    let split = sorted.partition_point(|&(v, _)| v <= threshold);
    sorted[split..]
        .iter()
        .find(|&&(_, id)| pierced(id))
        .map(|&(_, id)| id)
}

/// Check whether nothing wall- or space-like lies between two sample points
///
/// An empty query result means open floor, hence connected.
fn connected(model: &dyn ModelAccess, index: &dyn SpatialIndex, a: &Point3, b: &Point3) -> bool {
    let span = BoundingBox::from_corners(*a, *b);
    index
        .query_box(&span, false)
        .into_iter()
        .filter_map(|id| model.element(id))
        .all(|e| !e.ifc_type.is_wall() && !e.ifc_type.is_space())
}
