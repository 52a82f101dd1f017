//! Peer-network representation: nodes, typed edges, and the assembled graph

pub mod builder;
pub mod reciprocity;

pub use builder::GraphBuilder;

use serde::{Deserialize, Serialize};

/// Sentiment carried by a nomination category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Social-status classification of an individual within the group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialStatus {
    Popular,
    Rejected,
    Isolated,
    Controversial,
    Average,
}

/// Risk level for one of the two risk dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Directed, typed, weighted edge between two individuals.
///
/// The weight is signed: its magnitude reflects category strength and its
/// sign follows the sentiment. `reciprocal` is true only when an inverse
/// edge of the same category exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    /// Nominator id
    pub source: String,

    /// Nominee id (never equal to `source`)
    pub target: String,

    /// Nomination category the edge was built from
    pub category: String,

    pub sentiment: Sentiment,

    pub weight: i32,

    pub reciprocal: bool,
}

/// An individual with identity fields from the roster and the sociometric
/// fields computed by the analysis pipeline.
///
/// Computed fields are recomputed from scratch on every analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualNode {
    pub id: String,

    /// Display name (first + last)
    pub name: String,

    pub age: Option<u32>,

    pub gender: Option<String>,

    /// Owning classroom group
    pub group_id: String,

    /// Sum of incoming positive edge weights
    pub popularity: i32,

    /// Absolute sum of incoming negative edge weights
    pub rejection: i32,

    /// max(0, 10 - total degree over all touching edges)
    pub isolation: i32,

    /// (out-degree + in-degree) / 2
    pub centrality: f64,

    pub social_status: SocialStatus,

    pub bullying_risk: RiskLevel,

    pub victimization_risk: RiskLevel,
}

/// Nodes plus the flat edge list produced by the graph builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialGraph {
    pub nodes: Vec<IndividualNode>,
    pub edges: Vec<Relation>,
}

impl SocialGraph {
    /// Index of a node by its id, if present
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}
