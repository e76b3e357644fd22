use crate::layout::{Layout, NodeLayout};

/// Filters the laid-out nodes by case-insensitive substring match across
/// given, family, and full names. An empty or blank query matches nothing.
/// A renderer convenience, not part of the layout algorithm.
pub fn search_nodes<'a>(layout: &'a Layout, query: &str) -> Vec<&'a NodeLayout> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    layout
        .nodes
        .iter()
        .filter(|node| {
            node.given_name.to_lowercase().contains(&needle)
                || node.family_name.to_lowercase().contains(&needle)
                || node.label.to_lowercase().contains(&needle)
        })
        .collect()
}
