//! Group-level cohesion and connectivity metrics

use crate::config::Thresholds;
use crate::graph::{IndividualNode, Relation, Sentiment};
use serde::{Deserialize, Serialize};

/// Rounded group-wide scalars; percentages except
/// `centrality_distribution`, which is a spread measure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMetrics {
    pub cohesion_index: f64,
    pub density_index: f64,
    pub centrality_distribution: f64,
    pub isolation_rate: f64,
    pub reciprocity_rate: f64,
}

impl GroupMetrics {
    /// All-zero metrics for a degenerate (empty) group
    pub fn zeroed() -> Self {
        Self {
            cohesion_index: 0.0,
            density_index: 0.0,
            centrality_distribution: 0.0,
            isolation_rate: 0.0,
            reciprocity_rate: 0.0,
        }
    }
}

/// Population standard deviation of all centrality scores
fn centrality_spread(nodes: &[IndividualNode]) -> f64 {
    let n = nodes.len() as f64;
    let mean = nodes.iter().map(|node| node.centrality).sum::<f64>() / n;
    let variance = nodes
        .iter()
        .map(|node| (node.centrality - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// Compute the five group metrics. Every ratio guards its denominator:
/// degenerate inputs yield 0, never NaN.
pub fn compute_group_metrics(
    nodes: &[IndividualNode],
    edges: &[Relation],
    thresholds: &Thresholds,
) -> GroupMetrics {
    let node_count = nodes.len();
    let edge_count = edges.len();

    if node_count == 0 {
        return GroupMetrics::zeroed();
    }

    let positive_edges = edges
        .iter()
        .filter(|e| e.sentiment == Sentiment::Positive)
        .count();

    let cohesion_index = (positive_edges as f64 / node_count as f64 * 10.0).round();

    let density_index = if node_count <= 1 {
        0.0
    } else {
        (edge_count as f64 / (node_count * (node_count - 1)) as f64 * 100.0).round()
    };

    let centrality_distribution = centrality_spread(nodes).round();

    let isolated = nodes
        .iter()
        .filter(|n| n.isolation >= thresholds.group_isolation_min)
        .count();
    let isolation_rate = (isolated as f64 / node_count as f64 * 100.0).round();

    let reciprocity_rate = if edge_count == 0 {
        0.0
    } else {
        let reciprocal = edges.iter().filter(|e| e.reciprocal).count();
        (reciprocal as f64 / edge_count as f64 * 100.0).round()
    };

    GroupMetrics {
        cohesion_index,
        density_index,
        centrality_distribution,
        isolation_rate,
        reciprocity_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{RiskLevel, SocialStatus};

    fn node(id: &str, isolation: i32, centrality: f64) -> IndividualNode {
        IndividualNode {
            id: id.into(),
            name: id.to_uppercase(),
            age: None,
            gender: None,
            group_id: "g".into(),
            popularity: 0,
            rejection: 0,
            isolation,
            centrality,
            social_status: SocialStatus::Average,
            bullying_risk: RiskLevel::Low,
            victimization_risk: RiskLevel::Low,
        }
    }

    fn edge(source: &str, target: &str, sentiment: Sentiment, reciprocal: bool) -> Relation {
        Relation {
            source: source.into(),
            target: target.into(),
            category: "play_with".into(),
            sentiment,
            weight: 2,
            reciprocal,
        }
    }

    #[test]
    fn empty_group_yields_all_zero_metrics() {
        let metrics = compute_group_metrics(&[], &[], &Thresholds::default());
        assert_eq!(metrics.cohesion_index, 0.0);
        assert_eq!(metrics.density_index, 0.0);
        assert_eq!(metrics.centrality_distribution, 0.0);
        assert_eq!(metrics.isolation_rate, 0.0);
        assert_eq!(metrics.reciprocity_rate, 0.0);
    }

    #[test]
    fn single_node_group_has_zero_density() {
        let nodes = vec![node("a", 10, 0.0)];
        let metrics = compute_group_metrics(&nodes, &[], &Thresholds::default());
        assert_eq!(metrics.density_index, 0.0);
        assert_eq!(metrics.reciprocity_rate, 0.0);
    }

    #[test]
    fn cohesion_index_scales_positive_edges_by_group_size() {
        let nodes = vec![
            node("a", 8, 1.0),
            node("b", 8, 1.0),
            node("c", 8, 1.0),
            node("d", 8, 1.0),
        ];
        let edges = vec![
            edge("a", "b", Sentiment::Positive, true),
            edge("b", "a", Sentiment::Positive, true),
            edge("c", "d", Sentiment::Positive, true),
            edge("d", "c", Sentiment::Positive, true),
        ];
        let metrics = compute_group_metrics(&nodes, &edges, &Thresholds::default());
        assert_eq!(metrics.cohesion_index, 10.0);
        assert_eq!(metrics.reciprocity_rate, 100.0);
    }

    #[test]
    fn negative_edges_do_not_count_toward_cohesion() {
        let nodes = vec![node("a", 9, 0.5), node("b", 9, 0.5)];
        let edges = vec![edge("a", "b", Sentiment::Negative, false)];
        let metrics = compute_group_metrics(&nodes, &edges, &Thresholds::default());
        assert_eq!(metrics.cohesion_index, 0.0);
        // 1 edge over 2*1 ordered pairs
        assert_eq!(metrics.density_index, 50.0);
    }

    #[test]
    fn isolation_rate_counts_nodes_at_or_above_cutoff() {
        let nodes = vec![node("a", 6, 2.0), node("b", 5, 2.0), node("c", 10, 0.0)];
        let metrics = compute_group_metrics(&nodes, &[], &Thresholds::default());
        assert_eq!(metrics.isolation_rate, 67.0);
    }

    #[test]
    fn centrality_distribution_is_population_std_dev() {
        // centralities 1 and 3: mean 2, variance 1, std dev 1
        let nodes = vec![node("a", 8, 1.0), node("b", 8, 3.0)];
        let metrics = compute_group_metrics(&nodes, &[], &Thresholds::default());
        assert_eq!(metrics.centrality_distribution, 1.0);
    }

    #[test]
    fn percentage_metrics_stay_within_bounds() {
        let nodes = vec![node("a", 10, 0.0), node("b", 10, 0.0)];
        let edges = vec![
            edge("a", "b", Sentiment::Positive, true),
            edge("b", "a", Sentiment::Positive, true),
        ];
        let metrics = compute_group_metrics(&nodes, &edges, &Thresholds::default());
        for value in [
            metrics.density_index,
            metrics.isolation_rate,
            metrics.reciprocity_rate,
        ] {
            assert!((0.0..=100.0).contains(&value));
        }
    }
}
