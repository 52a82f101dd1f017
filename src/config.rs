//! Configuration tables for the sociogram analyzer
//!
//! Every threshold the scoring pipeline branches on lives here as a named,
//! documented field rather than a literal inside the branching logic, so the
//! tables can be inspected and tested on their own.

use crate::graph::Sentiment;

/// Sentiment and weight assigned to an edge by nomination category.
///
/// Unlisted categories are neutral with weight 1 ("victim" among them; its
/// risk significance is counted from incoming mentions, not from weight).
pub fn category_profile(category: &str) -> (Sentiment, i32) {
    match category {
        "best_friend" => (Sentiment::Positive, 3),
        "play_with" | "work_with" => (Sentiment::Positive, 2),
        "reject" => (Sentiment::Negative, -2),
        "aggressor" => (Sentiment::Negative, -3),
        _ => (Sentiment::Neutral, 1),
    }
}

/// Classification thresholds for the index calculator and its consumers.
#[derive(Debug, Clone)]
pub struct Thresholds {
    /// Isolation is max(0, baseline - total degree)
    pub isolation_baseline: i32,

    /// Minimum popularity for the "popular" status
    pub popular_min_popularity: i32,

    /// Maximum rejection still compatible with "popular"
    pub popular_max_rejection: i32,

    /// Minimum rejection for the "rejected" status
    pub rejected_min_rejection: i32,

    /// Maximum popularity still compatible with "rejected"
    pub rejected_max_popularity: i32,

    /// Minimum isolation for the "isolated" status
    pub isolated_min_isolation: i32,

    /// Minimum popularity *and* rejection for "controversial"
    pub controversial_min_score: i32,

    /// Incoming "aggressor" mentions that alone mean high bullying risk
    pub bullying_high_mentions: usize,

    /// Rejection at or above this raises either risk dimension
    pub risk_min_rejection: i32,

    /// Incoming "victim" mentions that alone mean high victimization risk
    pub victim_high_mentions: usize,

    /// Isolation at or above this raises victimization risk
    pub risk_min_isolation: i32,

    /// Minimum members for a connected component to count as a cluster
    pub min_cluster_size: usize,

    /// Minimum edge weight for the positive subgraph used by clustering
    pub cluster_min_weight: i32,

    /// Global isolation at or above this puts a cluster member on the
    /// cluster's isolated-members list
    pub cluster_isolated_min: i32,

    /// Isolation at or above this counts toward the group isolation rate
    pub group_isolation_min: i32,

    /// Mean centrality below this triggers the cohesion recommendation
    pub low_mean_centrality: f64,

    /// Reciprocity rate (percent) below this triggers the reciprocity
    /// recommendation
    pub low_reciprocity_rate: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            isolation_baseline: 10,
            popular_min_popularity: 6,
            popular_max_rejection: 2,
            rejected_min_rejection: 4,
            rejected_max_popularity: 2,
            isolated_min_isolation: 7,
            controversial_min_score: 4,
            bullying_high_mentions: 3,
            risk_min_rejection: 4,
            victim_high_mentions: 3,
            risk_min_isolation: 6,
            min_cluster_size: 3,
            cluster_min_weight: 2,
            cluster_isolated_min: 5,
            group_isolation_min: 6,
            low_mean_centrality: 3.0,
            low_reciprocity_rate: 40.0,
        }
    }
}

/// Physics constants for the force-directed layout engine.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Canvas width in layout units
    pub width: f64,

    /// Canvas height in layout units
    pub height: f64,

    /// Fixed simulation iteration count
    pub iterations: usize,

    /// Node pairs closer than this repel each other
    pub repulsion_radius: f64,

    /// Scale applied to the repulsion force
    pub repulsion_strength: f64,

    /// Scale applied to the per-edge spring force
    pub spring_strength: f64,

    /// Ideal distance for positive-sentiment edges
    pub ideal_positive_distance: f64,

    /// Ideal distance for non-positive edges
    pub ideal_other_distance: f64,

    /// Velocity integration step
    pub time_step: f64,

    /// Velocity damping per iteration
    pub damping: f64,

    /// Margin kept clear on every canvas side
    pub margin: f64,

    /// Initial circle radius as a fraction of the smaller canvas dimension
    pub seed_radius_factor: f64,
}

impl LayoutConfig {
    /// Layout configuration for the given canvas size
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            iterations: 100,
            repulsion_radius: 100.0,
            repulsion_strength: 0.01,
            spring_strength: 0.001,
            ideal_positive_distance: 80.0,
            ideal_other_distance: 120.0,
            time_step: 0.1,
            damping: 0.9,
            margin: 30.0,
            seed_radius_factor: 0.3,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_canvas(800.0, 600.0)
    }
}

/// Expansion factor applied to hull vertices around the hull centroid
pub const HULL_PADDING_FACTOR: f64 = 1.2;
