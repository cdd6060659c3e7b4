mod core;
mod geometry;

pub use self::core::*;
pub use geometry::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_edges_and_center() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert!((r.right() - 110.0).abs() < f64::EPSILON);
        assert!((r.bottom() - 70.0).abs() < f64::EPSILON);
        assert_eq!(r.center(), (60.0, 45.0));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn id_display() {
        assert_eq!(PaneId(42).to_string(), "pane-42");
        assert_eq!(SplitId(3).to_string(), "split-3");
        assert_eq!(TabId(1).to_string(), "tab-1");
    }

    #[test]
    fn pane_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PaneId(1));
        set.insert(PaneId(2));
        set.insert(PaneId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn pane_id_serialization() {
        let id = PaneId(7);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PaneId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn content_scale_default_is_identity() {
        assert_eq!(ContentScale::default(), ContentScale::uniform(1.0));
    }
}
