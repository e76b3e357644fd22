use std::collections::HashSet;

use crate::config::LayoutConfig;

use super::graph::FamilyGraph;

/// Computes `subtree_width` bottom-up from the root. A collapsed or
/// childless node reserves exactly one card width; otherwise the node
/// reserves the larger of its children's combined span and the room its
/// own card plus side-by-side spouses occupy, so a wide descendant fan is
/// never starved by a narrow couple and vice versa.
pub(crate) fn compute_subtree_widths(
    graph: &mut FamilyGraph<'_>,
    root: usize,
    config: &LayoutConfig,
) {
    let mut visited = HashSet::new();
    measure(graph, root, config, &mut visited);
    // The descent only walks `children`; spouse-only nodes and disconnected
    // fragments still reserve one card width.
    for node in &mut graph.nodes {
        node.subtree_width = node.subtree_width.max(config.node_width);
    }
}

fn measure(
    graph: &mut FamilyGraph<'_>,
    node: usize,
    config: &LayoutConfig,
    visited: &mut HashSet<usize>,
) -> f32 {
    if !visited.insert(node) {
        return graph.nodes[node].subtree_width.max(config.node_width);
    }

    let children = graph.nodes[node].children.clone();
    let width = if graph.nodes[node].collapsed || children.is_empty() {
        config.node_width
    } else {
        let mut children_span = 0.0;
        for &child in &children {
            children_span += measure(graph, child, config, visited);
        }
        children_span += config.horizontal_spacing * (children.len() as f32 - 1.0);

        let spouse_count = graph.nodes[node].spouses.len() as f32;
        let couple_span = config.node_width + spouse_count * (config.node_width + config.spouse_spacing);
        children_span.max(couple_span)
    };
    graph.nodes[node].subtree_width = width;
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, RelationshipEdge};

    fn persons(ids: &[&str]) -> Vec<Person> {
        ids.iter().map(|id| Person::new(id, id, "")).collect()
    }

    #[test]
    fn leaf_reserves_one_card_width() {
        let persons = persons(&["a"]);
        let mut graph = FamilyGraph::build(&persons, &[], &HashSet::new());
        let config = LayoutConfig::default();
        compute_subtree_widths(&mut graph, 0, &config);
        assert_eq!(graph.nodes[0].subtree_width, config.node_width);
    }

    #[test]
    fn parent_spans_its_children() {
        let persons = persons(&["a", "b", "c"]);
        let edges = vec![
            RelationshipEdge::parent("r1", "a", "b"),
            RelationshipEdge::parent("r2", "a", "c"),
        ];
        let mut graph = FamilyGraph::build(&persons, &edges, &HashSet::new());
        let config = LayoutConfig::default();
        compute_subtree_widths(&mut graph, 0, &config);
        let expected = config.node_width * 2.0 + config.horizontal_spacing;
        assert_eq!(graph.nodes[0].subtree_width, expected);
    }

    #[test]
    fn couple_width_floors_a_narrow_fan() {
        // One child but two spouses: the couple row needs more room than
        // the single descendant.
        let persons = persons(&["a", "s1", "s2", "c"]);
        let edges = vec![
            RelationshipEdge::spouse("r1", "a", "s1"),
            RelationshipEdge::spouse("r2", "a", "s2"),
            RelationshipEdge::parent("r3", "a", "c"),
        ];
        let mut graph = FamilyGraph::build(&persons, &edges, &HashSet::new());
        let config = LayoutConfig::default();
        compute_subtree_widths(&mut graph, 0, &config);
        let expected = config.node_width + 2.0 * (config.node_width + config.spouse_spacing);
        assert_eq!(graph.nodes[0].subtree_width, expected);
    }

    #[test]
    fn collapsed_node_is_treated_as_a_leaf() {
        let persons = persons(&["a", "b", "c"]);
        let edges = vec![
            RelationshipEdge::parent("r1", "a", "b"),
            RelationshipEdge::parent("r2", "a", "c"),
        ];
        let collapsed = HashSet::from(["a"]);
        let mut graph = FamilyGraph::build(&persons, &edges, &collapsed);
        let config = LayoutConfig::default();
        compute_subtree_widths(&mut graph, 0, &config);
        assert_eq!(graph.nodes[0].subtree_width, config.node_width);
    }

    #[test]
    fn spouse_only_nodes_reserve_one_card_width() {
        // The spouse is nobody's child, so the descent never measures it.
        let persons = persons(&["a", "b", "c"]);
        let edges = vec![
            RelationshipEdge::spouse("r1", "a", "b"),
            RelationshipEdge::parent("r2", "a", "c"),
        ];
        let mut graph = FamilyGraph::build(&persons, &edges, &HashSet::new());
        let config = LayoutConfig::default();
        compute_subtree_widths(&mut graph, 0, &config);
        let b = graph.node_index("b").unwrap();
        assert_eq!(graph.nodes[b].subtree_width, config.node_width);
    }

    #[test]
    fn disconnected_fragment_reserves_one_card_width() {
        let persons = persons(&["a", "island"]);
        let mut graph = FamilyGraph::build(&persons, &[], &HashSet::new());
        let config = LayoutConfig::default();
        compute_subtree_widths(&mut graph, 0, &config);
        let island = graph.node_index("island").unwrap();
        assert_eq!(graph.nodes[island].subtree_width, config.node_width);
    }

    #[test]
    fn width_never_drops_below_one_card() {
        let persons = persons(&["a", "b"]);
        let edges = vec![
            RelationshipEdge::parent("r1", "a", "b"),
            RelationshipEdge::parent("r2", "b", "a"),
        ];
        let mut graph = FamilyGraph::build(&persons, &edges, &HashSet::new());
        let config = LayoutConfig::default();
        compute_subtree_widths(&mut graph, 0, &config);
        for node in &graph.nodes {
            assert!(node.subtree_width >= config.node_width);
        }
    }
}
