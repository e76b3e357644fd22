use std::collections::HashSet;

use crate::model::{Person, RelationshipEdge, RelationshipKind};

use super::graph::FamilyGraph;

/// Picks the node generation levels are measured from.
///
/// Policy: a resolving preferred id wins; otherwise the first parentless
/// node in input order; otherwise (fragment or cycle where everyone has a
/// parent) the first node. No date comparison happens here — callers that
/// want "oldest ancestor" semantics pass the result of
/// [`oldest_parentless`] as the preferred id.
pub(crate) fn select_root(graph: &FamilyGraph<'_>, preferred: Option<&str>) -> Option<usize> {
    if let Some(id) = preferred
        && let Some(idx) = graph.node_index(id)
    {
        return Some(idx);
    }
    if graph.nodes.is_empty() {
        return None;
    }
    graph
        .nodes
        .iter()
        .position(|node| node.parents.is_empty())
        .or(Some(0))
}

/// Stamps every node reachable from the root with its generation level:
/// children one deeper, spouses at the same depth. The visited set makes
/// malformed cyclic data terminate instead of recursing forever; nodes the
/// traversal never reaches keep the default level 0.
pub(crate) fn assign_levels(graph: &mut FamilyGraph<'_>, root: usize) {
    let mut visited = HashSet::new();
    descend(graph, root, 0, &mut visited);
}

fn descend(graph: &mut FamilyGraph<'_>, node: usize, level: u32, visited: &mut HashSet<usize>) {
    if !visited.insert(node) {
        return;
    }
    graph.nodes[node].level = level;
    let children = graph.nodes[node].children.clone();
    for child in children {
        descend(graph, child, level + 1, visited);
    }
    let spouses: Vec<usize> = graph.nodes[node]
        .spouses
        .iter()
        .map(|link| link.partner)
        .collect();
    for spouse in spouses {
        descend(graph, spouse, level, visited);
    }
}

/// Caller-side default-root policy: the parentless person with the earliest
/// birth date (undated ones sort last, ties keep input order). Pass the
/// result as `preferred_root`; the engine itself never compares dates.
pub fn oldest_parentless<'a>(
    persons: &'a [Person],
    relationships: &[RelationshipEdge],
) -> Option<&'a str> {
    let with_parents: HashSet<&str> = relationships
        .iter()
        .filter(|edge| edge.kind == RelationshipKind::Parent)
        .map(|edge| edge.to.as_str())
        .collect();
    persons
        .iter()
        .filter(|person| !with_parents.contains(person.id.as_str()))
        .min_by_key(|person| (person.birth_date.is_none(), person.birth_date))
        .map(|person| person.id.as_str())
}
