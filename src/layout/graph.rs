use std::collections::{HashMap, HashSet};

use crate::model::{Person, RelationshipEdge, RelationshipKind};

/// A spousal link on one side of a union. Both partners carry a mirrored
/// entry pointing at the same relationship record.
#[derive(Debug, Clone)]
pub(crate) struct SpouseLink {
    pub(crate) partner: usize,
    /// Index into the relationship slice the graph was built from.
    pub(crate) edge: usize,
    /// Nodes that have *both* partners among their parents.
    pub(crate) common_children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct GraphNode {
    pub(crate) person: usize,
    pub(crate) level: u32,
    pub(crate) parents: Vec<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) spouses: Vec<SpouseLink>,
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) subtree_width: f32,
    pub(crate) collapsed: bool,
}

impl GraphNode {
    fn new(person: usize, collapsed: bool) -> Self {
        Self {
            person,
            level: 0,
            parents: Vec::new(),
            children: Vec::new(),
            spouses: Vec::new(),
            x: 0.0,
            y: 0.0,
            subtree_width: 0.0,
            collapsed,
        }
    }
}

/// Arena-backed node graph. Adjacency is expressed as indices into `nodes`,
/// never as owning references, so the mutual parent/child/spouse links form
/// no ownership cycles.
#[derive(Debug)]
pub(crate) struct FamilyGraph<'a> {
    pub(crate) persons: &'a [Person],
    pub(crate) edges: &'a [RelationshipEdge],
    pub(crate) nodes: Vec<GraphNode>,
    index: HashMap<&'a str, usize>,
}

impl<'a> FamilyGraph<'a> {
    /// Builds one node per person and wires adjacency from the edges.
    /// Edges referencing unknown ids are dropped; referential integrity is
    /// the persistence layer's job and partial data must still lay out.
    pub(crate) fn build(
        persons: &'a [Person],
        edges: &'a [RelationshipEdge],
        collapsed: &HashSet<&str>,
    ) -> Self {
        let mut nodes = Vec::with_capacity(persons.len());
        let mut index = HashMap::with_capacity(persons.len());
        for (i, person) in persons.iter().enumerate() {
            nodes.push(GraphNode::new(i, collapsed.contains(person.id.as_str())));
            index.insert(person.id.as_str(), i);
        }
        let mut graph = Self {
            persons,
            edges,
            nodes,
            index,
        };

        // Parent edges first: common children of a union can only be
        // recognized once both partners' parent links exist.
        for edge in edges {
            if edge.kind != RelationshipKind::Parent {
                continue;
            }
            let Some((from, to)) = graph.resolve(edge) else {
                continue;
            };
            graph.link_parent_child(from, to);
        }
        for (edge_idx, edge) in edges.iter().enumerate() {
            // Sibling rows are informational; placement derives sibling
            // groupings from shared parents instead.
            if edge.kind != RelationshipKind::Spouse {
                continue;
            }
            let Some((from, to)) = graph.resolve(edge) else {
                continue;
            };
            graph.link_spouses(from, to, edge_idx);
        }
        graph
    }

    fn resolve(&self, edge: &RelationshipEdge) -> Option<(usize, usize)> {
        match (
            self.index.get(edge.from.as_str()),
            self.index.get(edge.to.as_str()),
        ) {
            (Some(&from), Some(&to)) => Some((from, to)),
            _ => {
                tracing::debug!(edge = %edge.id, "dropping edge with unresolved endpoint");
                None
            }
        }
    }

    pub(crate) fn node_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn person_id(&self, node: usize) -> &str {
        &self.persons[self.nodes[node].person].id
    }

    fn link_parent_child(&mut self, parent: usize, child: usize) {
        if !self.nodes[parent].children.contains(&child) {
            self.nodes[parent].children.push(child);
        }
        if !self.nodes[child].parents.contains(&parent) {
            self.nodes[child].parents.push(parent);
        }
    }

    fn link_spouses(&mut self, a: usize, b: usize, edge_idx: usize) {
        if self.nodes[a].spouses.iter().any(|link| link.partner == b) {
            return;
        }
        let common = self.common_children(a, b);
        self.nodes[a].spouses.push(SpouseLink {
            partner: b,
            edge: edge_idx,
            common_children: common.clone(),
        });
        self.nodes[b].spouses.push(SpouseLink {
            partner: a,
            edge: edge_idx,
            common_children: common,
        });
    }

    /// Children linked to both `a` and `b` through their own parent edges.
    /// Children of only one partner (a different union) are excluded.
    fn common_children(&self, a: usize, b: usize) -> Vec<usize> {
        self.nodes[a]
            .children
            .iter()
            .copied()
            .filter(|&child| self.nodes[child].parents.contains(&b))
            .collect()
    }
}
