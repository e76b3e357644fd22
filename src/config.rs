use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    LeftRight,
    RightLeft,
}

/// Geometry knobs for the layout pipeline. All lengths are in the same
/// abstract unit the renderer draws in (conventionally CSS pixels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub direction: Direction,
    pub node_width: f32,
    pub node_height: f32,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub spouse_spacing: f32,
    /// Margin added on every side of the layout bounding box.
    pub padding: f32,
    /// Reserved. Sibling edges are accepted but build no adjacency today.
    pub show_siblings: bool,
    /// Anchor the generation levels at this person when it resolves.
    pub preferred_root: Option<String>,
    /// Ids whose descendant subtrees are treated as leaves.
    pub collapsed: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::LeftRight,
            node_width: 160.0,
            node_height: 90.0,
            horizontal_spacing: 40.0,
            vertical_spacing: 60.0,
            spouse_spacing: 24.0,
            padding: 50.0,
            show_siblings: false,
            preferred_root: None,
            collapsed: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    direction: Option<Direction>,
    node_width: Option<f32>,
    node_height: Option<f32>,
    horizontal_spacing: Option<f32>,
    vertical_spacing: Option<f32>,
    spouse_spacing: Option<f32>,
    padding: Option<f32>,
    show_siblings: Option<bool>,
    preferred_root: Option<String>,
    collapsed: Option<Vec<String>>,
}

/// Loads a json5 config file of partial overrides on top of the defaults.
/// `None` yields the default config.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
        } else if theme_name == "classic" || theme_name == "default" {
            config.theme = Theme::classic();
        }
    }
    if let Some(v) = parsed.direction {
        config.layout.direction = v;
    }
    if let Some(v) = parsed.node_width {
        config.layout.node_width = v;
    }
    if let Some(v) = parsed.node_height {
        config.layout.node_height = v;
    }
    if let Some(v) = parsed.horizontal_spacing {
        config.layout.horizontal_spacing = v;
    }
    if let Some(v) = parsed.vertical_spacing {
        config.layout.vertical_spacing = v;
    }
    if let Some(v) = parsed.spouse_spacing {
        config.layout.spouse_spacing = v;
    }
    if let Some(v) = parsed.padding {
        config.layout.padding = v;
    }
    if let Some(v) = parsed.show_siblings {
        config.layout.show_siblings = v;
    }
    if let Some(v) = parsed.preferred_root {
        config.layout.preferred_root = Some(v);
    }
    if let Some(v) = parsed.collapsed {
        config.layout.collapsed = v;
    }

    Ok(config)
}
