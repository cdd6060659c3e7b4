//! Split divider geometry for pixel resizes.
//!
//! Walks the split tree and produces one `SplitBorder` per split node,
//! describing where its divider sits and the area the split covers. Pixel
//! resize amounts are converted to ratio deltas through these.

use tessera_common::types::{Rect, SplitId};

use super::calculation::split_bounds;
use super::LayoutEngine;
use crate::tree::{Elem, Orientation, SplitTree};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SplitBorder {
    pub split: SplitId,
    /// Horizontal splits have a vertical divider line.
    pub orientation: Orientation,
    /// Position of the divider in pixels (x for horizontal, y for vertical).
    pub position: f64,
    /// Start of the divider line (y for horizontal, x for vertical).
    pub start: f64,
    /// End of the divider line.
    pub end: f64,
    /// The bounding rect of the entire split region.
    pub bounds: Rect,
}

impl SplitBorder {
    /// Convert a pixel delta to a ratio delta for this border.
    pub fn pixel_to_ratio(&self, pixel_delta: f64) -> f64 {
        let span = match self.orientation {
            Orientation::Horizontal => self.bounds.width,
            Orientation::Vertical => self.bounds.height,
        };
        if span <= 0.0 {
            return 0.0;
        }
        pixel_delta / span
    }
}

// =============================================================================
// COMPUTATION
// =============================================================================

impl LayoutEngine {
    /// All split borders below `root` within the given viewport, outermost first.
    pub fn borders(&self, tree: &SplitTree, root: Elem, viewport: Rect) -> Vec<SplitBorder> {
        let mut borders = Vec::new();
        walk_borders(tree, root, self.inset(viewport), self.gap as f64, &mut borders);
        borders
    }
}

fn walk_borders(tree: &SplitTree, elem: Elem, bounds: Rect, gap: f64, out: &mut Vec<SplitBorder>) {
    let Elem::Split(id) = elem else {
        return;
    };
    let Some(split) = tree.split_node(id) else {
        return;
    };
    let (first_bounds, second_bounds) = split_bounds(split.orientation, split.ratio, bounds, gap);
    let (position, start, end) = match split.orientation {
        Orientation::Horizontal => (
            first_bounds.right() + gap / 2.0,
            bounds.y,
            bounds.bottom(),
        ),
        Orientation::Vertical => (
            first_bounds.bottom() + gap / 2.0,
            bounds.x,
            bounds.right(),
        ),
    };
    out.push(SplitBorder {
        split: id,
        orientation: split.orientation,
        position,
        start,
        end,
        bounds,
    });
    walk_borders(tree, split.first, first_bounds, gap, out);
    walk_borders(tree, split.second, second_bounds, gap, out);
}

// =============================================================================
// TESTS
// =============================================================================
