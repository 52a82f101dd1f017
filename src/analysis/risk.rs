//! Risk indicator lists and rule-based recommendations

use crate::analysis::metrics::GroupMetrics;
use crate::config::Thresholds;
use crate::graph::{IndividualNode, RiskLevel, SocialStatus};
use serde::{Deserialize, Serialize};

/// Named id lists derived from the per-individual classifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskIndicators {
    /// High on either risk dimension
    pub high_risk: Vec<String>,

    /// High victimization risk or rejected status
    pub potential_victims: Vec<String>,

    /// High bullying risk
    pub potential_aggressors: Vec<String>,

    pub isolated_students: Vec<String>,

    pub controversial_students: Vec<String>,
}

impl RiskIndicators {
    pub fn empty() -> Self {
        Self {
            high_risk: Vec::new(),
            potential_victims: Vec::new(),
            potential_aggressors: Vec::new(),
            isolated_students: Vec::new(),
            controversial_students: Vec::new(),
        }
    }
}

/// Derive the five indicator lists from the scored nodes
pub fn derive_risk_indicators(nodes: &[IndividualNode]) -> RiskIndicators {
    let mut indicators = RiskIndicators::empty();

    for node in nodes {
        let id = node.id.as_str();

        if node.bullying_risk == RiskLevel::High || node.victimization_risk == RiskLevel::High {
            indicators.high_risk.push(id.to_string());
        }
        if node.victimization_risk == RiskLevel::High
            || node.social_status == SocialStatus::Rejected
        {
            indicators.potential_victims.push(id.to_string());
        }
        if node.bullying_risk == RiskLevel::High {
            indicators.potential_aggressors.push(id.to_string());
        }
        if node.social_status == SocialStatus::Isolated {
            indicators.isolated_students.push(id.to_string());
        }
        if node.social_status == SocialStatus::Controversial {
            indicators.controversial_students.push(id.to_string());
        }
    }

    indicators
}

/// Emit the ordered recommendation strings whose conditions hold.
///
/// An empty roster yields no recommendations; the mean-centrality and
/// reciprocity rules would otherwise fire vacuously.
pub fn build_recommendations(
    nodes: &[IndividualNode],
    indicators: &RiskIndicators,
    metrics: &GroupMetrics,
    thresholds: &Thresholds,
) -> Vec<String> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut recommendations = Vec::new();

    if !indicators.high_risk.is_empty() {
        recommendations.push(format!(
            "Attention needed for {} high-risk individuals",
            indicators.high_risk.len()
        ));
    }

    if !indicators.isolated_students.is_empty() {
        recommendations.push(format!(
            "Integration activities for {} isolated individuals",
            indicators.isolated_students.len()
        ));
    }

    if !indicators.potential_victims.is_empty() {
        recommendations.push(format!(
            "Close monitoring for {} potential victims",
            indicators.potential_victims.len()
        ));
    }

    let mean_centrality =
        nodes.iter().map(|n| n.centrality).sum::<f64>() / nodes.len() as f64;
    if mean_centrality < thresholds.low_mean_centrality {
        recommendations.push("Group cohesion activities".to_string());
    }

    if metrics.reciprocity_rate < thresholds.low_reciprocity_rate {
        recommendations.push("Encourage reciprocal relationships".to_string());
    }

    recommendations
}
