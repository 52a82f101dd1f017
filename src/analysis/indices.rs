//! Per-individual sociometric indices and classifications

use crate::config::Thresholds;
use crate::graph::{IndividualNode, Relation, RiskLevel, Sentiment, SocialStatus};
use std::collections::HashMap;

/// Degree and mention tallies accumulated per node before classification
#[derive(Debug, Default, Clone)]
struct NodeTally {
    popularity: i32,
    rejection: i32,
    in_degree: usize,
    out_degree: usize,
    aggressor_mentions: usize,
    victim_mentions: usize,
}

fn tally_edges(edges: &[Relation], index_of: &HashMap<&str, usize>) -> Vec<NodeTally> {
    let mut tallies = vec![NodeTally::default(); index_of.len()];

    for edge in edges {
        let (Some(&src), Some(&dst)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) else {
            continue;
        };

        tallies[src].out_degree += 1;
        tallies[dst].in_degree += 1;

        match edge.sentiment {
            Sentiment::Positive => tallies[dst].popularity += edge.weight,
            Sentiment::Negative => tallies[dst].rejection += edge.weight.abs(),
            Sentiment::Neutral => {}
        }

        match edge.category.as_str() {
            "aggressor" => tallies[dst].aggressor_mentions += 1,
            "victim" => tallies[dst].victim_mentions += 1,
            _ => {}
        }
    }

    tallies
}

/// First matching status wins; the order below is the classification priority.
fn classify_status(node: &IndividualNode, t: &Thresholds) -> SocialStatus {
    if node.popularity >= t.popular_min_popularity && node.rejection <= t.popular_max_rejection {
        SocialStatus::Popular
    } else if node.rejection >= t.rejected_min_rejection
        && node.popularity <= t.rejected_max_popularity
    {
        SocialStatus::Rejected
    } else if node.isolation >= t.isolated_min_isolation {
        SocialStatus::Isolated
    } else if node.popularity >= t.controversial_min_score
        && node.rejection >= t.controversial_min_score
    {
        SocialStatus::Controversial
    } else {
        SocialStatus::Average
    }
}

/// A popular individual can still land in the high branch through the
/// popularity+rejection arm; both classifications hold at once.
fn classify_bullying_risk(
    node: &IndividualNode,
    aggressor_mentions: usize,
    t: &Thresholds,
) -> RiskLevel {
    if aggressor_mentions >= t.bullying_high_mentions
        || (node.popularity >= t.popular_min_popularity
            && node.rejection >= t.risk_min_rejection)
    {
        RiskLevel::High
    } else if aggressor_mentions >= 1 || node.rejection >= t.risk_min_rejection {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn classify_victimization_risk(
    node: &IndividualNode,
    victim_mentions: usize,
    t: &Thresholds,
) -> RiskLevel {
    if victim_mentions >= t.victim_high_mentions
        || (node.isolation >= t.risk_min_isolation && node.rejection >= t.risk_min_rejection)
    {
        RiskLevel::High
    } else if victim_mentions >= 1
        || node.isolation >= t.risk_min_isolation
        || node.rejection >= t.risk_min_rejection
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Compute all per-individual indices and classifications.
///
/// Produces a fresh node vector; the inputs are left untouched.
pub fn compute_indices(
    nodes: &[IndividualNode],
    edges: &[Relation],
    thresholds: &Thresholds,
) -> Vec<IndividualNode> {
    let index_of: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let tallies = tally_edges(edges, &index_of);

    nodes
        .iter()
        .zip(tallies.iter())
        .map(|(node, tally)| {
            let total_degree = (tally.in_degree + tally.out_degree) as i32;

            let mut scored = node.clone();
            scored.popularity = tally.popularity;
            scored.rejection = tally.rejection;
            scored.isolation = (thresholds.isolation_baseline - total_degree).max(0);
            scored.centrality = (tally.in_degree + tally.out_degree) as f64 / 2.0;

            scored.social_status = classify_status(&scored, thresholds);
            scored.bullying_risk =
                classify_bullying_risk(&scored, tally.aggressor_mentions, thresholds);
            scored.victimization_risk =
                classify_victimization_risk(&scored, tally.victim_mentions, thresholds);
            scored
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::build_graph;
    use crate::data::{IndividualRecord, NominationRecord};

    fn roster(ids: &[&str]) -> Vec<IndividualRecord> {
        ids.iter()
            .map(|id| IndividualRecord {
                id: (*id).into(),
                first_name: id.to_uppercase(),
                last_name: "Test".into(),
                age: Some(11),
                gender: None,
            })
            .collect()
    }

    fn nomination(nominator: &str, category: &str, nominees: &[&str]) -> NominationRecord {
        NominationRecord {
            id: format!("n-{}-{}", nominator, category),
            nominator_id: nominator.into(),
            category: category.into(),
            raw_answer: None,
            nominated_ids: nominees.iter().map(|s| (*s).into()).collect(),
            timestamp: None,
        }
    }

    fn scored(ids: &[&str], noms: Vec<NominationRecord>) -> Vec<IndividualNode> {
        let graph = build_graph("g", &roster(ids), &noms);
        compute_indices(&graph.nodes, &graph.edges, &Thresholds::default())
    }

    #[test]
    fn popularity_sums_incoming_positive_weights() {
        let nodes = scored(
            &["a", "b", "c"],
            vec![
                nomination("b", "best_friend", &["a"]),
                nomination("c", "play_with", &["a"]),
            ],
        );
        assert_eq!(nodes[0].popularity, 5);
        assert_eq!(nodes[0].rejection, 0);
    }

    #[test]
    fn rejection_is_absolute_sum_of_negative_weights() {
        let nodes = scored(
            &["a", "b", "c"],
            vec![
                nomination("b", "reject", &["a"]),
                nomination("c", "aggressor", &["a"]),
            ],
        );
        assert_eq!(nodes[0].rejection, 5);
        assert!(nodes[0].rejection >= 0);
    }

    #[test]
    fn unconnected_individual_is_fully_isolated() {
        let nodes = scored(&["a"], vec![]);
        assert_eq!(nodes[0].isolation, 10);
        assert_eq!(nodes[0].social_status, SocialStatus::Isolated);
    }

    #[test]
    fn isolation_floors_at_zero_for_well_connected_nodes() {
        // 6 outgoing + 6 incoming edges for "a" gives total degree 12
        let noms = vec![
            nomination("a", "play_with", &["b", "c", "d", "e", "f", "g"]),
            nomination("b", "play_with", &["a"]),
            nomination("c", "play_with", &["a"]),
            nomination("d", "play_with", &["a"]),
            nomination("e", "play_with", &["a"]),
            nomination("f", "play_with", &["a"]),
            nomination("g", "play_with", &["a"]),
        ];
        let nodes = scored(&["a", "b", "c", "d", "e", "f", "g"], noms);
        assert_eq!(nodes[0].isolation, 0);
        assert_eq!(nodes[0].centrality, 6.0);
    }

    #[test]
    fn popular_status_requires_low_rejection() {
        let noms = vec![
            nomination("b", "best_friend", &["a"]),
            nomination("c", "best_friend", &["a"]),
            nomination("d", "reject", &["a"]),
            nomination("e", "reject", &["a"]),
        ];
        // popularity 6, rejection 4: popularity arm fails, controversial wins
        let nodes = scored(&["a", "b", "c", "d", "e"], noms);
        assert_eq!(nodes[0].social_status, SocialStatus::Controversial);
    }

    #[test]
    fn three_aggressor_mentions_mean_high_bullying_risk() {
        let noms = vec![
            nomination("b", "aggressor", &["a"]),
            nomination("c", "aggressor", &["a"]),
            nomination("d", "aggressor", &["a"]),
        ];
        let nodes = scored(&["a", "b", "c", "d"], noms);
        assert_eq!(nodes[0].bullying_risk, RiskLevel::High);
    }

    #[test]
    fn popular_individual_can_be_high_bullying_risk() {
        // popularity 9 via three best_friend nominations, rejection 4
        let noms = vec![
            nomination("b", "best_friend", &["a"]),
            nomination("c", "best_friend", &["a"]),
            nomination("d", "best_friend", &["a"]),
            nomination("e", "reject", &["a"]),
            nomination("f", "reject", &["a"]),
        ];
        let nodes = scored(&["a", "b", "c", "d", "e", "f"], noms);
        assert_eq!(nodes[0].bullying_risk, RiskLevel::High);
    }

    #[test]
    fn victim_mentions_raise_victimization_risk() {
        let one = scored(&["a", "b"], vec![nomination("b", "victim", &["a"])]);
        assert_eq!(one[0].victimization_risk, RiskLevel::Medium);

        let three = scored(
            &["a", "b", "c", "d"],
            vec![
                nomination("b", "victim", &["a"]),
                nomination("c", "victim", &["a"]),
                nomination("d", "victim", &["a"]),
            ],
        );
        assert_eq!(three[0].victimization_risk, RiskLevel::High);
    }

    #[test]
    fn popular_status_and_high_bullying_risk_hold_simultaneously() {
        // Scores given directly: three aggressor mentions alongside an
        // otherwise well-liked profile (popularity 7, rejection 1)
        let mut node = scored(&["f"], vec![])[0].clone();
        node.popularity = 7;
        node.rejection = 1;
        node.isolation = 0;

        let t = Thresholds::default();
        assert_eq!(classify_status(&node, &t), SocialStatus::Popular);
        assert_eq!(classify_bullying_risk(&node, 3, &t), RiskLevel::High);
    }

    #[test]
    fn victim_category_is_neutral_for_popularity_and_rejection() {
        let nodes = scored(&["a", "b"], vec![nomination("b", "victim", &["a"])]);
        assert_eq!(nodes[0].popularity, 0);
        assert_eq!(nodes[0].rejection, 0);
    }
}
