//! Analysis pipeline orchestration

pub mod indices;
pub mod metrics;
pub mod risk;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::cluster::{detection, Cluster};
use crate::config::Thresholds;
use crate::data::EvaluationRecord;
use crate::graph::{builder, reciprocity, IndividualNode, Relation};
use self::metrics::GroupMetrics;
use self::risk::RiskIndicators;

/// Complete analysis output for one evaluation run.
///
/// Self-contained: every field is recomputed from the input snapshot and
/// nothing here aliases state shared with other runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    pub group_id: String,
    pub group_name: String,
    pub nodes: Vec<IndividualNode>,
    pub edges: Vec<Relation>,
    pub clusters: Vec<Cluster>,
    pub metrics: GroupMetrics,
    pub risk_indicators: RiskIndicators,
    pub recommendations: Vec<String>,
}

/// Stateless analyzer over one threshold configuration.
///
/// Instances carry no per-run state, so one analyzer may serve concurrent
/// analyses of different groups from separate threads.
#[derive(Debug, Clone, Default)]
pub struct SociogramAnalyzer {
    thresholds: Thresholds,
}

impl SociogramAnalyzer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Run the full scoring pipeline over one evaluation snapshot.
    ///
    /// Fails only on structurally invalid input (duplicate roster ids);
    /// empty rosters and nomination lists produce a valid empty analysis.
    pub fn analyze(&self, record: &EvaluationRecord) -> Result<NetworkAnalysis> {
        record.validate()?;

        log::info!(
            "analyzing group '{}': {} individuals, {} nominations",
            record.group_name,
            record.roster.len(),
            record.nominations.len()
        );

        let graph = builder::build_graph(&record.group_id, &record.roster, &record.nominations);
        let edges = reciprocity::resolve_reciprocity(&graph.edges);
        let nodes = indices::compute_indices(&graph.nodes, &edges, &self.thresholds);
        let clusters = detection::find_clusters(&nodes, &edges, &self.thresholds);
        let metrics = metrics::compute_group_metrics(&nodes, &edges, &self.thresholds);
        let risk_indicators = risk::derive_risk_indicators(&nodes);
        let recommendations =
            risk::build_recommendations(&nodes, &risk_indicators, &metrics, &self.thresholds);

        Ok(NetworkAnalysis {
            group_id: record.group_id.clone(),
            group_name: record.group_name.clone(),
            nodes,
            edges,
            clusters,
            metrics,
            risk_indicators,
            recommendations,
        })
    }
}
