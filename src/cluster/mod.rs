//! Cluster analysis module

pub mod detection;

use serde::{Deserialize, Serialize};

/// A sub-group of at least three individuals connected through strong
/// positive relations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Identifier assigned after size ordering
    pub id: u32,

    /// Member ids in discovery order
    pub members: Vec<String>,

    /// Number of members
    pub size: usize,

    /// Density of positive internal edges, 0-100
    pub cohesion_score: f64,

    /// Member with the highest internal positive degree
    pub central_member_id: String,

    /// Members whose *global* isolation level is high despite belonging to
    /// this cluster. Kept on the whole-graph score as specified; confirm
    /// with the scoring-rule owners before switching to an intra-cluster
    /// measure.
    pub isolated_member_ids: Vec<String>,
}
