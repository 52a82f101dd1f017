//! Reciprocity resolution over the edge list

use crate::graph::Relation;
use std::collections::HashSet;

/// Mark edges whose inverse exists for the same category.
///
/// A friendship nomination never reciprocates a rejection: the category must
/// match exactly. The lookup set keeps this O(E) instead of scanning edge
/// pairs. Returns a new vector; the input stays untouched.
pub fn resolve_reciprocity(edges: &[Relation]) -> Vec<Relation> {
    let index: HashSet<(&str, &str, &str)> = edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str(), e.category.as_str()))
        .collect();

    let resolved: Vec<Relation> = edges
        .iter()
        .map(|e| {
            let mut edge = e.clone();
            edge.reciprocal =
                index.contains(&(e.target.as_str(), e.source.as_str(), e.category.as_str()));
            edge
        })
        .collect();

    let mutual = resolved.iter().filter(|e| e.reciprocal).count();
    log::debug!("{} of {} edges are reciprocal", mutual, resolved.len());

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Sentiment;

    fn edge(source: &str, target: &str, category: &str) -> Relation {
        Relation {
            source: source.into(),
            target: target.into(),
            category: category.into(),
            sentiment: Sentiment::Positive,
            weight: 2,
            reciprocal: false,
        }
    }

    #[test]
    fn mutual_same_category_edges_are_both_marked() {
        let edges = vec![edge("a", "b", "play_with"), edge("b", "a", "play_with")];
        let resolved = resolve_reciprocity(&edges);

        assert!(resolved.iter().all(|e| e.reciprocal));
    }

    #[test]
    fn different_categories_do_not_reciprocate() {
        let edges = vec![edge("a", "b", "play_with"), edge("b", "a", "reject")];
        let resolved = resolve_reciprocity(&edges);

        assert!(resolved.iter().all(|e| !e.reciprocal));
    }

    #[test]
    fn one_way_edge_stays_unmarked() {
        let edges = vec![edge("a", "b", "best_friend")];
        let resolved = resolve_reciprocity(&edges);

        assert!(!resolved[0].reciprocal);
    }

    #[test]
    fn input_edges_are_not_mutated() {
        let edges = vec![edge("a", "b", "play_with"), edge("b", "a", "play_with")];
        let _ = resolve_reciprocity(&edges);

        assert!(edges.iter().all(|e| !e.reciprocal));
    }
}
