mod connections;
mod extent;
mod graph;
mod levels;
mod position;
pub(crate) mod types;
mod viewport;

pub use levels::oldest_parentless;
pub use types::*;
pub use viewport::fit_transform;

use std::collections::HashSet;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::config::{Direction, LayoutConfig};
use crate::model::{Person, RelationshipEdge};
use crate::theme::Theme;

use connections::synthesize_connections;
use extent::compute_subtree_widths;
use graph::FamilyGraph;
use levels::{assign_levels, select_root};
use position::{assign_positions, mirror_horizontal};
use viewport::bounding_box;

/// Runs the whole pipeline: graph build, root selection, level
/// assignment, subtree extents, placement, connector synthesis, bounds.
///
/// `None` means "nothing to lay out": an empty person list, or an
/// unexpected panic somewhere in the pipeline (caught here and logged so a
/// corrupt tree can never take the host down with it).
pub fn compute_layout(
    persons: &[Person],
    relationships: &[RelationshipEdge],
    theme: &Theme,
    config: &LayoutConfig,
) -> Option<Layout> {
    if persons.is_empty() {
        return None;
    }
    match catch_unwind(AssertUnwindSafe(|| {
        compute_layout_inner(persons, relationships, theme, config)
    })) {
        Ok(layout) => layout,
        Err(_) => {
            tracing::error!("family tree layout panicked; treating as nothing to lay out");
            None
        }
    }
}

fn compute_layout_inner(
    persons: &[Person],
    relationships: &[RelationshipEdge],
    theme: &Theme,
    config: &LayoutConfig,
) -> Option<Layout> {
    let collapsed: HashSet<&str> = config.collapsed.iter().map(String::as_str).collect();
    let mut graph = FamilyGraph::build(persons, relationships, &collapsed);
    let root = select_root(&graph, config.preferred_root.as_deref())?;

    assign_levels(&mut graph, root);
    compute_subtree_widths(&mut graph, root, config);
    assign_positions(&mut graph, root, config);
    if config.direction == Direction::RightLeft {
        mirror_horizontal(&mut graph, config);
    }
    let connections = synthesize_connections(&graph, theme, config);
    let bounds = bounding_box(&graph, config);

    let nodes = graph
        .nodes
        .iter()
        .map(|node| {
            let person = &graph.persons[node.person];
            NodeLayout {
                id: person.id.clone(),
                x: node.x,
                y: node.y,
                width: config.node_width,
                height: config.node_height,
                level: node.level,
                subtree_width: node.subtree_width,
                collapsed: node.collapsed,
                label: person.full_name(),
                given_name: person.given_name.clone(),
                family_name: person.family_name.clone(),
                sex: person.sex,
                birth_date: person.birth_date,
                death_date: person.death_date,
                deceased: person.deceased,
            }
        })
        .collect();

    Some(Layout {
        nodes,
        connections,
        root: graph.person_id(root).to_string(),
        bounds,
    })
}
