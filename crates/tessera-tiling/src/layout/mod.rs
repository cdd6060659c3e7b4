pub mod borders;
mod calculation;
mod types;

pub use borders::SplitBorder;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Pane;
    use crate::tree::{Container, Elem, Orientation, SplitTree};
    use tessera_common::types::{PaneId, Rect, TabId};

    fn bounds() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    fn single() -> SplitTree {
        let mut tree = SplitTree::new();
        tree.insert_pane(Pane::new(PaneId(1)));
        tree.replace(Container::Tab(TabId(1)), Elem::Pane(PaneId(1)));
        tree
    }

    #[test]
    fn single_pane_fills_bounds() {
        let engine = LayoutEngine::default();
        let tree = single();
        let result = engine.compute(&tree, Elem::Pane(PaneId(1)), bounds());
        assert_eq!(result, vec![(PaneId(1), bounds())]);
    }

    #[test]
    fn horizontal_split_divides_width() {
        let engine = LayoutEngine::default();
        let mut tree = single();
        tree.split_pane(PaneId(1), Orientation::Horizontal, Pane::new(PaneId(2)), false, 0.5)
            .unwrap();
        let result = engine.compute(&tree, tree.root(TabId(1)).unwrap(), bounds());
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0, PaneId(1));
        assert_eq!(result[1].0, PaneId(2));
        assert!((result[0].1.width - 400.0).abs() < 0.01);
        assert!((result[1].1.x - 400.0).abs() < 0.01);
    }

    #[test]
    fn vertical_split_divides_height() {
        let engine = LayoutEngine::default();
        let mut tree = single();
        tree.split_pane(PaneId(1), Orientation::Vertical, Pane::new(PaneId(2)), false, 0.25)
            .unwrap();
        let result = engine.compute(&tree, tree.root(TabId(1)).unwrap(), bounds());
        assert!((result[0].1.height - 150.0).abs() < 0.01);
        assert!((result[1].1.y - 150.0).abs() < 0.01);
    }

    #[test]
    fn gap_and_padding_reduce_available_space() {
        let engine = LayoutEngine {
            gap: 10,
            outer_padding: 5,
        };
        let mut tree = single();
        tree.split_pane(PaneId(1), Orientation::Horizontal, Pane::new(PaneId(2)), false, 0.5)
            .unwrap();
        let result = engine.compute(&tree, tree.root(TabId(1)).unwrap(), bounds());
        let total = result[0].1.width + result[1].1.width;
        assert!((total - 780.0).abs() < 0.01);
        assert!((result[0].1.x - 5.0).abs() < 0.01);
    }
}
