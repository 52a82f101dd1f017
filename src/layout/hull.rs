//! Expanded convex hull around a cluster's member positions

use crate::cluster::Cluster;
use crate::config::HULL_PADDING_FACTOR;
use crate::layout::NodePosition;
use serde::{Deserialize, Serialize};

/// One boundary vertex in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Hull boundary of one cluster, in canvas coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterBoundary {
    pub cluster_id: u32,
    pub points: Vec<Point>,
}

/// Padded hull boundaries for every cluster, from the laid-out positions.
///
/// Boundaries with fewer than 3 points are carried through as-is; renderers
/// skip those.
pub fn cluster_boundaries(
    clusters: &[Cluster],
    positions: &[NodePosition],
) -> Vec<ClusterBoundary> {
    clusters
        .iter()
        .map(|cluster| {
            let member_points: Vec<Point> = positions
                .iter()
                .filter(|p| cluster.members.iter().any(|m| m == &p.id))
                .map(|p| Point { x: p.x, y: p.y })
                .collect();
            ClusterBoundary {
                cluster_id: cluster.id,
                points: expanded_hull(&member_points),
            }
        })
        .collect()
}

/// Cross product of (b - a) x (c - b) in canvas coordinates (y grows
/// downward, so left turns come out negative)
fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

fn squared_distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).powi(2) + (b.y - a.y).powi(2)
}

/// Compute the padded hull around a set of member positions.
///
/// Graham scan anchored at the lowest point on screen (max y, ties broken
/// toward min x), with every hull vertex then pushed outward from the hull
/// centroid for visual padding. Fewer than 3 points are returned unchanged;
/// the caller skips rendering a boundary for those.
pub fn expanded_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let anchor = *points
        .iter()
        .reduce(|best, p| {
            if p.y > best.y || (p.y == best.y && p.x < best.x) {
                p
            } else {
                best
            }
        })
        .unwrap_or(&points[0]);

    let mut rest: Vec<Point> = points
        .iter()
        .copied()
        .filter(|p| *p != anchor)
        .collect();

    // Polar-angle sort around the anchor; the y axis is flipped so the
    // sweep runs in scan order, nearer points first on equal angles
    rest.sort_by(|p, q| {
        let angle_p = (-(p.y - anchor.y)).atan2(p.x - anchor.x);
        let angle_q = (-(q.y - anchor.y)).atan2(q.x - anchor.x);
        angle_p
            .total_cmp(&angle_q)
            .then(squared_distance(anchor, *p).total_cmp(&squared_distance(anchor, *q)))
    });

    let mut hull = vec![anchor];
    for point in rest {
        while hull.len() >= 2 {
            let top = hull[hull.len() - 1];
            let below = hull[hull.len() - 2];
            // Non-left turn in screen coordinates
            if cross(below, top, point) >= 0.0 {
                hull.pop();
            } else {
                break;
            }
        }
        hull.push(point);
    }

    if hull.len() < 3 {
        return hull;
    }

    expand_from_centroid(&hull, HULL_PADDING_FACTOR)
}

fn expand_from_centroid(hull: &[Point], factor: f64) -> Vec<Point> {
    let n = hull.len() as f64;
    let cx = hull.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = hull.iter().map(|p| p.y).sum::<f64>() / n;

    hull.iter()
        .map(|p| Point {
            x: cx + (p.x - cx) * factor,
            y: cy + (p.y - cy) * factor,
        })
        .collect()
}
