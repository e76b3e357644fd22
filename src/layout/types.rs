use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Sex;

/// One positioned person card. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Generation depth from the layout root; spouses share a level,
    /// children are one deeper.
    pub level: u32,
    /// Horizontal space reserved for this card and its descendants.
    pub subtree_width: f32,
    pub collapsed: bool,
    pub label: String,
    pub given_name: String,
    pub family_name: String,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub deceased: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    ParentChild,
    Spouse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStyle {
    pub stroke: String,
    pub stroke_width: f32,
    /// SVG dash pattern; `None` renders a solid stroke.
    pub dasharray: Option<String>,
}

/// A drawable connector. One descriptor per distinct unordered pair per
/// relationship kind; the path is SVG path data whose endpoints coincide
/// with card anchor points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    pub id: String,
    pub kind: ConnectionKind,
    pub from: String,
    pub to: String,
    pub path: String,
    pub style: ConnectionStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scale/translate transform that fits a layout inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

/// Immutable snapshot produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<NodeLayout>,
    pub connections: Vec<ConnectionDescriptor>,
    /// Person id of the node generation levels are measured from.
    pub root: String,
    pub bounds: BoundingBox,
}

impl Layout {
    pub fn node(&self, id: &str) -> Option<&NodeLayout> {
        self.nodes.iter().find(|node| node.id == id)
    }
}
