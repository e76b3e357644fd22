use std::collections::HashSet;

use crate::config::LayoutConfig;
use crate::theme::Theme;

use super::graph::FamilyGraph;
use super::types::{ConnectionDescriptor, ConnectionKind, ConnectionStyle};

const CONNECTOR_STROKE_WIDTH: f32 = 2.0;
const DIVORCED_DASHARRAY: &str = "6,4";

/// Emits one drawable connector per distinct pair per relationship kind.
/// Parent-child descriptors are keyed by the ordered pair, spouse
/// descriptors by the unordered pair, so redundant relationship rows and
/// the mirrored spouse direction collapse to a single visual edge.
pub(crate) fn synthesize_connections(
    graph: &FamilyGraph<'_>,
    theme: &Theme,
    config: &LayoutConfig,
) -> Vec<ConnectionDescriptor> {
    let mut connections = Vec::new();
    let mut seen_parent_child: HashSet<(usize, usize)> = HashSet::new();
    let mut seen_spouse: HashSet<(usize, usize)> = HashSet::new();

    for (idx, node) in graph.nodes.iter().enumerate() {
        for &child in &node.children {
            if !seen_parent_child.insert((idx, child)) {
                continue;
            }
            let parent_id = graph.person_id(idx);
            let child_id = graph.person_id(child);
            let child_node = &graph.nodes[child];
            let path = parent_child_path(
                node.x + config.node_width / 2.0,
                node.y + config.node_height,
                child_node.x + config.node_width / 2.0,
                child_node.y,
                config.node_width / 2.0,
            );
            connections.push(ConnectionDescriptor {
                id: format!("parent-{parent_id}-{child_id}"),
                kind: ConnectionKind::ParentChild,
                from: parent_id.to_string(),
                to: child_id.to_string(),
                path,
                style: ConnectionStyle {
                    stroke: theme.line_color.clone(),
                    stroke_width: CONNECTOR_STROKE_WIDTH,
                    dasharray: None,
                },
            });
        }

        for link in &node.spouses {
            let key = (idx.min(link.partner), idx.max(link.partner));
            if !seen_spouse.insert(key) {
                continue;
            }
            let edge = &graph.edges[link.edge];
            let dissolved = edge.divorced_date.is_some();
            let partner = &graph.nodes[link.partner];
            let (left, right) = if node.x <= partner.x {
                (node, partner)
            } else {
                (partner, node)
            };
            let path = spouse_path(
                left.x + config.node_width,
                right.x,
                left.y + config.node_height / 2.0,
                config.spouse_spacing,
            );
            connections.push(ConnectionDescriptor {
                id: format!("spouse-{}-{}", graph.person_id(key.0), graph.person_id(key.1)),
                kind: ConnectionKind::Spouse,
                from: graph.person_id(idx).to_string(),
                to: graph.person_id(link.partner).to_string(),
                path,
                style: ConnectionStyle {
                    stroke: if dissolved {
                        theme.divorced_line_color.clone()
                    } else {
                        theme.spouse_line_color.clone()
                    },
                    stroke_width: CONNECTOR_STROKE_WIDTH,
                    dasharray: dissolved.then(|| DIVORCED_DASHARRAY.to_string()),
                },
            });
        }
    }
    connections
}

/// Path from a parent's bottom-center anchor to a child's top-center
/// anchor: a cubic S-curve when the horizontal displacement is small,
/// otherwise a rounded elbow (down, across, down) whose corner radius is
/// clamped to a quarter of the smaller span.
fn parent_child_path(x1: f32, y1: f32, x2: f32, y2: f32, s_curve_threshold: f32) -> String {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mid_y = y1 + dy / 2.0;
    if dx.abs() <= 1.0 {
        return format!("M {x1} {y1} L {x2} {y2}");
    }
    if dx.abs() <= s_curve_threshold {
        return format!("M {x1} {y1} C {x1} {mid_y}, {x2} {mid_y}, {x2} {y2}");
    }
    let radius = (dx.abs().min(dy.abs()) / 4.0).max(0.0);
    let sign = dx.signum();
    format!(
        "M {x1} {y1} L {x1} {top} Q {x1} {mid_y} {c1} {mid_y} L {c2} {mid_y} Q {x2} {mid_y} {x2} {bottom} L {x2} {y2}",
        top = mid_y - radius * dy.signum(),
        c1 = x1 + sign * radius,
        c2 = x2 - sign * radius,
        bottom = mid_y + radius * dy.signum(),
    )
}

/// Shallow upward-bowed curve between the facing edges of two spouse
/// cards at mid-card height.
fn spouse_path(x1: f32, x2: f32, y: f32, spouse_spacing: f32) -> String {
    let mid_x = (x1 + x2) / 2.0;
    let bow = y - spouse_spacing * 0.5;
    format!("M {x1} {y} Q {mid_x} {bow} {x2} {y}")
}
