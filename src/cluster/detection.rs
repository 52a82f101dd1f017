//! Connected-component cluster detection

use crate::cluster::Cluster;
use crate::config::Thresholds;
use crate::graph::{IndividualNode, Relation, Sentiment};
use std::collections::{HashMap, VecDeque};

/// Find clusters over the strong-positive subgraph.
///
/// The subgraph keeps only positive edges with weight at or above
/// `cluster_min_weight`, treated as undirected. Components smaller than
/// `min_cluster_size` produce no cluster. Cohesion and the central member
/// are judged over *all* positive internal edges, not just the strong ones.
pub fn find_clusters(
    nodes: &[IndividualNode],
    edges: &[Relation],
    thresholds: &Thresholds,
) -> Vec<Cluster> {
    let index_of: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    // Undirected adjacency over the strong-positive subgraph
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    for edge in edges {
        if edge.sentiment != Sentiment::Positive || edge.weight < thresholds.cluster_min_weight {
            continue;
        }
        let (Some(&src), Some(&dst)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) else {
            continue;
        };
        adjacency[src].push(dst);
        adjacency[dst].push(src);
    }

    // BFS components in roster order; member lists keep discovery order
    let mut visited = vec![false; nodes.len()];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for start in 0..nodes.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;

        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for &neighbor in &adjacency[current] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    component.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        if component.len() >= thresholds.min_cluster_size {
            components.push(component);
        }
    }

    // Largest first; stable sort keeps discovery order between equals
    components.sort_by(|a, b| b.len().cmp(&a.len()));

    let clusters: Vec<Cluster> = components
        .into_iter()
        .enumerate()
        .map(|(id, members)| build_cluster(id as u32, members, nodes, edges, thresholds))
        .collect();

    log::info!(
        "found {} clusters with {} or more members",
        clusters.len(),
        thresholds.min_cluster_size
    );

    clusters
}

fn build_cluster(
    id: u32,
    member_indices: Vec<usize>,
    nodes: &[IndividualNode],
    edges: &[Relation],
    thresholds: &Thresholds,
) -> Cluster {
    let member_pos: HashMap<&str, usize> = member_indices
        .iter()
        .enumerate()
        .map(|(pos, &idx)| (nodes[idx].id.as_str(), pos))
        .collect();

    // Positive internal degree per member, counting both directions
    let mut internal_degree = vec![0usize; member_indices.len()];
    let mut internal_positive_edges = 0usize;

    for edge in edges {
        if edge.sentiment != Sentiment::Positive {
            continue;
        }
        let (Some(&src_pos), Some(&dst_pos)) = (
            member_pos.get(edge.source.as_str()),
            member_pos.get(edge.target.as_str()),
        ) else {
            continue;
        };
        internal_positive_edges += 1;
        internal_degree[src_pos] += 1;
        internal_degree[dst_pos] += 1;
    }

    let size = member_indices.len();
    let cohesion_score = internal_positive_edges as f64 / (size * (size - 1)) as f64 * 100.0;

    // Strictly-greater comparison resolves ties toward the earliest
    // discovered member
    let mut central_pos = 0;
    for (pos, &degree) in internal_degree.iter().enumerate() {
        if degree > internal_degree[central_pos] {
            central_pos = pos;
        }
    }

    let isolated_member_ids: Vec<String> = member_indices
        .iter()
        .filter(|&&idx| nodes[idx].isolation >= thresholds.cluster_isolated_min)
        .map(|&idx| nodes[idx].id.clone())
        .collect();

    Cluster {
        id,
        size,
        cohesion_score,
        central_member_id: nodes[member_indices[central_pos]].id.clone(),
        isolated_member_ids,
        members: member_indices
            .into_iter()
            .map(|idx| nodes[idx].id.clone())
            .collect(),
    }
}
