//! Force-directed 2D placement for visualization
//!
//! Presentation-only: consumes the node and edge lists after scoring and
//! never feeds back into the pipeline. The simulation is deterministic for
//! identical input order; placement depends on node array order, so a
//! reordered roster yields a different (equally valid) layout.

pub mod hull;

use crate::config::LayoutConfig;
use crate::graph::{IndividualNode, Relation, Sentiment};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};

/// Final 2D position of one individual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy)]
struct Body {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

/// Run the layout simulation.
///
/// O(n² × iterations); the dominant cost for large rosters, which is why the
/// repulsion pass runs on the rayon pool and the `cancel` flag is checked
/// every iteration. On cancellation the positions reached so far are
/// returned, clamped to the canvas.
pub fn compute_layout(
    nodes: &[IndividualNode],
    edges: &[Relation],
    config: &LayoutConfig,
    cancel: Option<&AtomicBool>,
) -> Vec<NodePosition> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let index_of: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let springs: Vec<(usize, usize, f64, f64)> = edges
        .iter()
        .filter_map(|edge| {
            let &src = index_of.get(edge.source.as_str())?;
            let &dst = index_of.get(edge.target.as_str())?;
            let ideal = if edge.sentiment == Sentiment::Positive {
                config.ideal_positive_distance
            } else {
                config.ideal_other_distance
            };
            Some((src, dst, ideal, edge.weight.abs() as f64))
        })
        .collect();

    let mut bodies = seed_on_circle(nodes.len(), config);

    for iteration in 0..config.iterations {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::debug!("layout cancelled after {} iterations", iteration);
            break;
        }

        // Pairwise repulsion, computed per node from an immutable snapshot
        // so force accumulation order stays deterministic
        let snapshot = bodies.clone();
        let mut forces: Vec<(f64, f64)> = snapshot
            .par_iter()
            .enumerate()
            .map(|(i, body)| {
                let mut fx = 0.0;
                let mut fy = 0.0;
                for (j, other) in snapshot.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let dx = body.x - other.x;
                    let dy = body.y - other.y;
                    let distance = (dx * dx + dy * dy).sqrt();
                    if distance < config.repulsion_radius && distance > f64::EPSILON {
                        let force =
                            (config.repulsion_radius - distance) * config.repulsion_strength;
                        fx += dx / distance * force;
                        fy += dy / distance * force;
                    }
                }
                (fx, fy)
            })
            .collect();

        // Spring attraction toward each edge's ideal distance
        for &(src, dst, ideal, weight) in &springs {
            let dx = bodies[dst].x - bodies[src].x;
            let dy = bodies[dst].y - bodies[src].y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= f64::EPSILON {
                continue;
            }
            let force = (distance - ideal) * config.spring_strength * weight;
            let fx = dx / distance * force;
            let fy = dy / distance * force;
            forces[src].0 += fx;
            forces[src].1 += fy;
            forces[dst].0 -= fx;
            forces[dst].1 -= fy;
        }

        for (body, (fx, fy)) in bodies.iter_mut().zip(forces) {
            body.vx += fx;
            body.vy += fy;
            body.x += body.vx * config.time_step;
            body.y += body.vy * config.time_step;
            body.vx *= config.damping;
            body.vy *= config.damping;
            clamp_to_canvas(body, config);
        }
    }

    // Covers the cancelled-before-first-iteration case
    for body in &mut bodies {
        clamp_to_canvas(body, config);
    }

    nodes
        .iter()
        .zip(bodies)
        .map(|(node, body)| NodePosition {
            id: node.id.clone(),
            x: body.x,
            y: body.y,
        })
        .collect()
}

/// Distribute bodies evenly on a circle around the canvas center
fn seed_on_circle(count: usize, config: &LayoutConfig) -> Vec<Body> {
    let radius = config.width.min(config.height) * config.seed_radius_factor;
    let (cx, cy) = (config.width / 2.0, config.height / 2.0);

    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * TAU;
            Body {
                x: cx + radius * angle.cos(),
                y: cy + radius * angle.sin(),
                vx: 0.0,
                vy: 0.0,
            }
        })
        .collect()
}

fn clamp_to_canvas(body: &mut Body, config: &LayoutConfig) {
    body.x = clamp_axis(body.x, config.width, config.margin);
    body.y = clamp_axis(body.y, config.height, config.margin);
}

/// A canvas dimension below twice the margin leaves no usable band;
/// collapse to the dimension's center instead of panicking in `clamp`
fn clamp_axis(value: f64, dimension: f64, margin: f64) -> f64 {
    if dimension <= 2.0 * margin {
        dimension / 2.0
    } else {
        value.clamp(margin, dimension - margin)
    }
}
