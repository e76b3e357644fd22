use std::collections::HashSet;

use crate::config::LayoutConfig;

use super::graph::FamilyGraph;

/// Depth-first placement from the root at the origin. Spouse cards sit to
/// the side of their partner on the same row; each node's children row is
/// centered under the node's reserved subtree width. The visited set keeps
/// malformed cyclic input from recursing forever and ensures no card is
/// placed twice.
pub(crate) fn assign_positions(graph: &mut FamilyGraph<'_>, root: usize, config: &LayoutConfig) {
    let mut visited = HashSet::new();
    place(graph, root, 0.0, 0.0, config, &mut visited);
}

fn place(
    graph: &mut FamilyGraph<'_>,
    node: usize,
    x: f32,
    y: f32,
    config: &LayoutConfig,
    visited: &mut HashSet<usize>,
) {
    if !visited.insert(node) {
        return;
    }
    graph.nodes[node].x = x;
    graph.nodes[node].y = y;

    let spouses: Vec<usize> = graph.nodes[node]
        .spouses
        .iter()
        .map(|link| link.partner)
        .collect();
    let mut spouse_x = x;
    for spouse in spouses {
        spouse_x += config.node_width + config.spouse_spacing;
        if visited.insert(spouse) {
            graph.nodes[spouse].x = spouse_x;
            graph.nodes[spouse].y = y;
        }
    }

    if graph.nodes[node].collapsed {
        return;
    }
    let children = graph.nodes[node].children.clone();
    if children.is_empty() {
        return;
    }

    let child_y = y + config.node_height + config.vertical_spacing;
    let mut total = 0.0;
    for &child in &children {
        total += graph.nodes[child].subtree_width;
    }
    total += config.horizontal_spacing * (children.len() as f32 - 1.0);

    let mut child_x = x + graph.nodes[node].subtree_width / 2.0 - total / 2.0;
    for child in children {
        place(graph, child, child_x, child_y, config, visited);
        child_x += graph.nodes[child].subtree_width + config.horizontal_spacing;
    }
}

/// Mirrors every card about the layout midline for right-to-left flow.
/// Done after placement so the centering math stays direction-agnostic.
pub(crate) fn mirror_horizontal(graph: &mut FamilyGraph<'_>, config: &LayoutConfig) {
    if graph.nodes.is_empty() {
        return;
    }
    let min_x = graph.nodes.iter().map(|n| n.x).fold(f32::MAX, f32::min);
    let max_x = graph
        .nodes
        .iter()
        .map(|n| n.x + config.node_width)
        .fold(f32::MIN, f32::max);
    for node in &mut graph.nodes {
        node.x = min_x + max_x - node.x - config.node_width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::extent::compute_subtree_widths;
    use crate::model::{Person, RelationshipEdge};

    fn persons(ids: &[&str]) -> Vec<Person> {
        ids.iter().map(|id| Person::new(id, id, "")).collect()
    }

    fn lay_out<'a>(
        persons: &'a [Person],
        edges: &'a [RelationshipEdge],
        config: &LayoutConfig,
    ) -> FamilyGraph<'a> {
        let mut graph = FamilyGraph::build(persons, edges, &HashSet::new());
        compute_subtree_widths(&mut graph, 0, config);
        assign_positions(&mut graph, 0, config);
        graph
    }

    #[test]
    fn children_are_centered_under_the_reserved_width() {
        let persons = persons(&["a", "b", "c"]);
        let edges = vec![
            RelationshipEdge::parent("r1", "a", "b"),
            RelationshipEdge::parent("r2", "a", "c"),
        ];
        let config = LayoutConfig::default();
        let graph = lay_out(&persons, &edges, &config);
        let a = &graph.nodes[0];
        let b = &graph.nodes[1];
        let c = &graph.nodes[2];
        let span_mid = (b.x + (c.x + c.subtree_width)) / 2.0;
        let reserved_mid = a.x + a.subtree_width / 2.0;
        assert!((span_mid - reserved_mid).abs() < 1e-3);
        assert_eq!(b.y, c.y);
        assert_eq!(b.y, a.y + config.node_height + config.vertical_spacing);
    }

    #[test]
    fn spouses_sit_beside_their_partner_on_the_same_row() {
        let persons = persons(&["a", "b"]);
        let edges = vec![RelationshipEdge::spouse("r1", "a", "b")];
        let config = LayoutConfig::default();
        let graph = lay_out(&persons, &edges, &config);
        let a = &graph.nodes[0];
        let b = &graph.nodes[1];
        assert_eq!(b.x, a.x + config.node_width + config.spouse_spacing);
        assert_eq!(b.y, a.y);
    }

    #[test]
    fn collapsed_node_places_no_children() {
        let persons = persons(&["a", "b"]);
        let edges = vec![RelationshipEdge::parent("r1", "a", "b")];
        let config = LayoutConfig::default();
        let collapsed = HashSet::from(["a"]);
        let mut graph = FamilyGraph::build(&persons, &edges, &collapsed);
        compute_subtree_widths(&mut graph, 0, &config);
        assign_positions(&mut graph, 0, &config);
        // The child keeps its default position: never visited.
        assert_eq!(graph.nodes[1].x, 0.0);
        assert_eq!(graph.nodes[1].y, 0.0);
    }

    #[test]
    fn cyclic_input_terminates() {
        let persons = persons(&["a", "b"]);
        let edges = vec![
            RelationshipEdge::parent("r1", "a", "b"),
            RelationshipEdge::parent("r2", "b", "a"),
        ];
        let config = LayoutConfig::default();
        let graph = lay_out(&persons, &edges, &config);
        assert!(graph.nodes[1].y > graph.nodes[0].y);
    }

    #[test]
    fn mirror_preserves_the_horizontal_extent() {
        let persons = persons(&["a", "b", "c"]);
        let edges = vec![
            RelationshipEdge::parent("r1", "a", "b"),
            RelationshipEdge::parent("r2", "a", "c"),
        ];
        let config = LayoutConfig::default();
        let mut graph = lay_out(&persons, &edges, &config);
        let min_before = graph.nodes.iter().map(|n| n.x).fold(f32::MAX, f32::min);
        let max_before = graph
            .nodes
            .iter()
            .map(|n| n.x + config.node_width)
            .fold(f32::MIN, f32::max);
        let b_before = graph.nodes[1].x;
        let c_before = graph.nodes[2].x;
        mirror_horizontal(&mut graph, &config);
        let min_after = graph.nodes.iter().map(|n| n.x).fold(f32::MAX, f32::min);
        let max_after = graph
            .nodes
            .iter()
            .map(|n| n.x + config.node_width)
            .fold(f32::MIN, f32::max);
        assert!((min_before - min_after).abs() < 1e-3);
        assert!((max_before - max_after).abs() < 1e-3);
        // Sibling order flips.
        assert!(b_before < c_before);
        assert!(graph.nodes[1].x > graph.nodes[2].x);
    }
}
