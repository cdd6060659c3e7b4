//! Core types and constructors for Window and Tab.

use tessera_common::types::{PaneId, Rect, TabId};
use tessera_common::Event;

use crate::layout::LayoutEngine;
use crate::pane::Pane;
use crate::tree::{Container, Elem, SplitTree};

/// Tuning for structural operations.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Ratio given to the existing pane when a split is created.
    pub default_ratio: f64,
    /// Smallest share either side of a divider may shrink to.
    pub min_ratio: f64,
    /// Title shown for tabs and the window when the focused pane has none.
    pub default_title: String,
    pub layout: LayoutEngine,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            default_ratio: 0.5,
            min_ratio: 0.1,
            default_title: "tessera".into(),
            layout: LayoutEngine::default(),
        }
    }
}

/// A tab: owns one root element (stored in the tree arena) and the single
/// focus pointer for that tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: TabId,
    pub(super) focus: Option<PaneId>,
    pub(super) title: String,
    pub(super) tooltip: String,
}

impl Tab {
    pub(super) fn new(id: TabId) -> Self {
        Self {
            id,
            focus: None,
            title: String::new(),
            tooltip: String::new(),
        }
    }

    pub fn focus(&self) -> Option<PaneId> {
        self.focus
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// Result of closing a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseOutcome {
    /// Panes dropped from the arena; their surfaces must be torn down.
    pub destroyed: Vec<PaneId>,
    /// The pane that received focus in place of the closed one.
    pub successor: Option<PaneId>,
    pub tab_closed: bool,
    pub window_closed: bool,
}

/// An ordered set of tabs sharing one node arena, at most one active.
pub struct Window {
    pub(super) tree: SplitTree,
    pub(super) tabs: Vec<Tab>,
    pub(super) active: Option<usize>,
    pub(super) settings: WindowSettings,
    pub(super) viewport: Rect,
    /// Chrome notifications produced by the last mutations, drained by the host.
    pub(super) events: Vec<Event>,
    pub(super) next_pane: u32,
    pub(super) next_tab: u32,
}

impl Window {
    /// Create a window with one tab holding one pane.
    pub fn new() -> Self {
        Self::with_settings(WindowSettings::default())
    }

    pub fn with_settings(settings: WindowSettings) -> Self {
        let mut window = Self {
            tree: SplitTree::new(),
            tabs: Vec::new(),
            active: None,
            settings,
            viewport: Rect {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 600.0,
            },
            events: Vec::new(),
            next_pane: 1,
            next_tab: 1,
        };
        window.new_tab();
        window
    }

    // -- Accessors --

    pub fn settings(&self) -> &WindowSettings {
        &self.settings
    }

    pub fn tree(&self) -> &SplitTree {
        &self.tree
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.tree.pane(id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.tree.pane_mut(id)
    }

    pub fn pane_count(&self) -> usize {
        self.tree.pane_count()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub(super) fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub(super) fn tab_index(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.active_tab().map(|t| t.id)
    }

    /// The focus target of the active tab.
    pub fn focused_pane(&self) -> Option<PaneId> {
        self.active_tab().and_then(|t| t.focus)
    }

    /// The tab whose tree holds `pane`. Panes hidden behind a zoomed sibling
    /// are found through the saved tree.
    pub fn tab_of(&self, pane: PaneId) -> Option<TabId> {
        if let Some(tab) = self.tree.tab_of(Elem::Pane(pane)) {
            return Some(tab);
        }
        self.tree.pane(pane)?;
        self.tabs
            .iter()
            .map(|t| t.id)
            .find(|&tab| self.zoomed_pane(tab).is_some() && self.panes_of(tab).contains(&pane))
    }

    /// The pane currently zoomed in `tab`, if any.
    pub fn zoomed_pane(&self, tab: TabId) -> Option<PaneId> {
        match self.tree.root(tab)? {
            Elem::Pane(id) if self.tree.pane(id)?.is_zoomed() => Some(id),
            _ => None,
        }
    }

    /// Panes of `tab` in tree order. While zoomed, includes the panes of the
    /// saved tree.
    pub fn panes_of(&self, tab: TabId) -> Vec<PaneId> {
        let root = match self.zoomed_pane(tab) {
            Some(id) => self.tree.pane(id).and_then(|p| p.zoom_save()).map(|z| z.tab_root),
            None => self.tree.root(tab),
        };
        root.map(|r| self.tree.panes_in_order(r)).unwrap_or_default()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn set_layout(&mut self, layout: LayoutEngine) {
        self.settings.layout = layout;
    }

    /// Take the chrome events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub(super) fn alloc_pane(&mut self) -> Pane {
        let id = PaneId(self.next_pane);
        self.next_pane += 1;
        Pane::new(id)
    }

    pub(super) fn alloc_tab(&mut self) -> TabId {
        let id = TabId(self.next_tab);
        self.next_tab += 1;
        id
    }

    pub(super) fn pane_container(&self, pane: PaneId) -> Container {
        self.tree.container_of(Elem::Pane(pane))
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}
