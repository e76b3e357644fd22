use crate::config::LayoutConfig;

use super::graph::FamilyGraph;
use super::types::{BoundingBox, Layout, ViewportTransform};

/// Bounding box of all placed cards with the configured padding added on
/// every side.
pub(crate) fn bounding_box(graph: &FamilyGraph<'_>, config: &LayoutConfig) -> BoundingBox {
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for node in &graph.nodes {
        min_x = min_x.min(node.x);
        min_y = min_y.min(node.y);
        max_x = max_x.max(node.x + config.node_width);
        max_y = max_y.max(node.y + config.node_height);
    }
    if min_x == f32::MAX {
        return BoundingBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
            width: 0.0,
            height: 0.0,
        };
    }
    min_x -= config.padding;
    min_y -= config.padding;
    max_x += config.padding;
    max_y += config.padding;
    BoundingBox {
        min_x,
        min_y,
        max_x,
        max_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Scale/translate transform that fits the whole layout inside a viewport,
/// centered, never upscaling beyond 1:1.
pub fn fit_transform(layout: &Layout, viewport_width: f32, viewport_height: f32) -> ViewportTransform {
    let bounds = &layout.bounds;
    let width = bounds.width.max(1.0);
    let height = bounds.height.max(1.0);
    let scale = (viewport_width / width)
        .min(viewport_height / height)
        .min(1.0);
    ViewportTransform {
        scale,
        translate_x: (viewport_width - width * scale) / 2.0 - bounds.min_x * scale,
        translate_y: (viewport_height - height * scale) / 2.0 - bounds.min_y * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_layout;
    use crate::model::{Person, RelationshipEdge};
    use crate::theme::Theme;

    fn small_layout() -> Layout {
        let persons = vec![Person::new("a", "a", ""), Person::new("b", "b", "")];
        let edges = vec![RelationshipEdge::parent("r1", "a", "b")];
        compute_layout(&persons, &edges, &Theme::classic(), &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn bounds_include_the_padding_margin() {
        let config = LayoutConfig::default();
        let layout = small_layout();
        assert_eq!(layout.bounds.min_x, -config.padding);
        assert_eq!(layout.bounds.min_y, -config.padding);
        let expected_height =
            config.node_height * 2.0 + config.vertical_spacing + config.padding * 2.0;
        assert!((layout.bounds.height - expected_height).abs() < 1e-3);
    }

    #[test]
    fn large_viewport_never_upscales() {
        let layout = small_layout();
        let transform = fit_transform(&layout, 5000.0, 5000.0);
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn small_viewport_scales_down_and_centers() {
        let layout = small_layout();
        let (vw, vh) = (200.0, 150.0);
        let transform = fit_transform(&layout, vw, vh);
        assert!(transform.scale < 1.0);
        let scaled_min_x = layout.bounds.min_x * transform.scale + transform.translate_x;
        let scaled_max_x = layout.bounds.max_x * transform.scale + transform.translate_x;
        let slack_left = scaled_min_x;
        let slack_right = vw - scaled_max_x;
        assert!((slack_left - slack_right).abs() < 1e-3);
        assert!(slack_left >= -1e-3);
    }
}
