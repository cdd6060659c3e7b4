//! Layout calculation: recursive tree-to-rect computation.

use tessera_common::types::{PaneId, Rect};

use super::LayoutEngine;
use crate::tree::{Elem, Orientation, SplitTree};

impl LayoutEngine {
    /// Rectangles for every pane below `root`, in tree order.
    pub fn compute(&self, tree: &SplitTree, root: Elem, viewport: Rect) -> Vec<(PaneId, Rect)> {
        let mut results = Vec::new();
        self.layout_node(tree, root, self.inset(viewport), &mut results);
        results
    }

    pub(crate) fn inset(&self, viewport: Rect) -> Rect {
        let pad = self.outer_padding as f64;
        Rect {
            x: viewport.x + pad,
            y: viewport.y + pad,
            width: (viewport.width - 2.0 * pad).max(0.0),
            height: (viewport.height - 2.0 * pad).max(0.0),
        }
    }

    fn layout_node(&self, tree: &SplitTree, elem: Elem, bounds: Rect, out: &mut Vec<(PaneId, Rect)>) {
        match elem {
            Elem::Pane(id) => out.push((id, bounds)),
            Elem::Split(id) => {
                let Some(split) = tree.split_node(id) else {
                    return;
                };
                let (a, b) = split_bounds(split.orientation, split.ratio, bounds, self.gap as f64);
                self.layout_node(tree, split.first, a, out);
                self.layout_node(tree, split.second, b, out);
            }
        }
    }
}

/// Divide `bounds` between the two children of a split.
pub(crate) fn split_bounds(orientation: Orientation, ratio: f64, bounds: Rect, gap: f64) -> (Rect, Rect) {
    match orientation {
        Orientation::Horizontal => {
            let available_width = (bounds.width - gap).max(0.0);
            let w1 = available_width * ratio;
            let w2 = (available_width - w1).max(0.0);
            (
                Rect {
                    x: bounds.x,
                    y: bounds.y,
                    width: w1,
                    height: bounds.height,
                },
                Rect {
                    x: bounds.x + w1 + gap,
                    y: bounds.y,
                    width: w2,
                    height: bounds.height,
                },
            )
        }
        Orientation::Vertical => {
            let available_height = (bounds.height - gap).max(0.0);
            let h1 = available_height * ratio;
            let h2 = (available_height - h1).max(0.0);
            (
                Rect {
                    x: bounds.x,
                    y: bounds.y,
                    width: bounds.width,
                    height: h1,
                },
                Rect {
                    x: bounds.x,
                    y: bounds.y + h1 + gap,
                    width: bounds.width,
                    height: h2,
                },
            )
        }
    }
}
