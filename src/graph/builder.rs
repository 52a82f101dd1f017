//! Graph construction from roster and nomination records

use crate::config::category_profile;
use crate::data::{IndividualRecord, NominationRecord};
use crate::graph::{
    IndividualNode, Relation, RiskLevel, SocialGraph, SocialStatus,
};
use std::collections::HashMap;

/// Builder turning one roster + nomination snapshot into a [`SocialGraph`]
pub struct GraphBuilder<'a> {
    group_id: &'a str,

    /// Mapping from roster ids to node indices
    id_to_index: HashMap<&'a str, u32>,

    nodes: Vec<IndividualNode>,

    edges: Vec<Relation>,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder seeded with every roster member as a node
    pub fn from_roster(group_id: &'a str, roster: &'a [IndividualRecord]) -> Self {
        let mut id_to_index = HashMap::with_capacity(roster.len());
        let mut nodes = Vec::with_capacity(roster.len());

        for individual in roster {
            id_to_index.insert(individual.id.as_str(), nodes.len() as u32);
            nodes.push(IndividualNode {
                id: individual.id.clone(),
                name: individual.display_name(),
                age: individual.age,
                gender: individual.gender.clone(),
                group_id: group_id.to_string(),
                popularity: 0,
                rejection: 0,
                isolation: 0,
                centrality: 0.0,
                social_status: SocialStatus::Average,
                bullying_risk: RiskLevel::Low,
                victimization_risk: RiskLevel::Low,
            });
        }

        Self {
            group_id,
            id_to_index,
            nodes,
            edges: Vec::new(),
        }
    }

    /// Add one directed edge per nominated peer.
    ///
    /// Nominees missing from the roster are dropped silently, as are
    /// self-nominations; neither produces an edge.
    pub fn add_nomination(&mut self, nomination: &NominationRecord) {
        if !self.id_to_index.contains_key(nomination.nominator_id.as_str()) {
            log::debug!(
                "dropping nomination {} from unknown individual {}",
                nomination.id,
                nomination.nominator_id
            );
            return;
        }

        let (sentiment, weight) = category_profile(&nomination.category);

        for nominee_id in &nomination.nominated_ids {
            if nominee_id == &nomination.nominator_id {
                continue;
            }
            if !self.id_to_index.contains_key(nominee_id.as_str()) {
                log::debug!(
                    "dropping nominee {} not present in roster of group {}",
                    nominee_id,
                    self.group_id
                );
                continue;
            }

            self.edges.push(Relation {
                source: nomination.nominator_id.clone(),
                target: nominee_id.clone(),
                category: nomination.category.clone(),
                sentiment,
                weight,
                reciprocal: false,
            });
        }
    }

    /// Consume the builder and produce the graph
    pub fn build(self) -> SocialGraph {
        log::debug!(
            "built graph for group {}: {} nodes, {} edges",
            self.group_id,
            self.nodes.len(),
            self.edges.len()
        );

        SocialGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

/// Build the full graph for a roster and its nominations
pub fn build_graph(
    group_id: &str,
    roster: &[IndividualRecord],
    nominations: &[NominationRecord],
) -> SocialGraph {
    let mut builder = GraphBuilder::from_roster(group_id, roster);
    for nomination in nominations {
        builder.add_nomination(nomination);
    }
    builder.build()
}
