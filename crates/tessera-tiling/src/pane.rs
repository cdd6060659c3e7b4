use tessera_common::types::{ContentScale, CursorPos, GridSize, PaneId, Size};

use crate::tree::{Container, Elem};

/// Cached geometry reported by the surface backing a pane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaneGeometry {
    pub size: Size,
    pub grid: GridSize,
    pub cursor: CursorPos,
    pub content_scale: ContentScale,
}

/// Where a zoomed pane came from, so un-zooming restores it exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomSave {
    /// The split slot the pane vacated.
    pub slot: Container,
    /// The tab root before the pane replaced it.
    pub tab_root: Elem,
}

#[derive(Debug)]
pub struct Pane {
    pub id: PaneId,
    pub title: String,
    pub tooltip: String,
    pub geometry: PaneGeometry,
    pub(crate) container: Container,
    pub(crate) zoom: Option<ZoomSave>,
}

impl Pane {
    pub fn new(id: PaneId) -> Self {
        Self {
            id,
            title: String::new(),
            tooltip: String::new(),
            geometry: PaneGeometry::default(),
            container: Container::None,
            zoom: None,
        }
    }

    pub fn with_title(id: PaneId, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::new(id)
        }
    }

    pub fn container(&self) -> Container {
        self.container
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_some()
    }

    pub fn zoom_save(&self) -> Option<ZoomSave> {
        self.zoom
    }
}
