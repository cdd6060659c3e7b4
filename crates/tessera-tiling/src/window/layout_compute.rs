//! Layout computation and command dispatch for Window.

use tessera_common::types::{PaneId, Rect, Size, TabId};
use tracing::debug;

use super::Window;
use crate::commands::TilingCommand;
use crate::layout::SplitBorder;
use crate::tree::{Container, Elem};

impl Window {
    /// Execute a tiling command against the active tab. Returns `true` if the
    /// command changed anything.
    pub fn execute(&mut self, cmd: TilingCommand) -> bool {
        match cmd {
            TilingCommand::Split(direction) => self.split(direction).is_some(),
            TilingCommand::Goto(direction) => self.goto(direction),
            TilingCommand::Resize(direction, amount) => self.resize(direction, amount),
            TilingCommand::ToggleZoom => self.toggle_zoom(),
            TilingCommand::Equalize => self.equalize(),
            TilingCommand::NewTab => {
                self.new_tab();
                true
            }
            TilingCommand::NextTab => self.next_tab(),
            TilingCommand::PreviousTab => self.previous_tab(),
            TilingCommand::GotoTab(index) => self.goto_tab(index),
            TilingCommand::Detach => match self.focused_pane() {
                Some(pane) => self.detach_pane(pane).is_some(),
                None => false,
            },
        }
    }

    /// Rectangles of the panes shown for `tab`. A zoomed pane fills the
    /// viewport on its own.
    pub fn layout(&self, tab: TabId) -> Vec<(PaneId, Rect)> {
        match self.tree.root(tab) {
            Some(root) => self.settings.layout.compute(&self.tree, root, self.viewport),
            None => Vec::new(),
        }
    }

    /// Divider geometry for `tab`. Empty while a pane is zoomed.
    pub fn borders(&self, tab: TabId) -> Vec<SplitBorder> {
        match self.tree.root(tab) {
            Some(root) => self.settings.layout.borders(&self.tree, root, self.viewport),
            None => Vec::new(),
        }
    }

    /// Rectangles of every pane in `tab` as they sit when not zoomed.
    pub(super) fn navigation_layout(&self, tab: TabId) -> Vec<(PaneId, Rect)> {
        match self.layout_root(tab) {
            Some(root) => self.settings.layout.compute(&self.tree, root, self.viewport),
            None => Vec::new(),
        }
    }

    /// The root of `tab`'s split tree, looking through a zoomed pane.
    pub(super) fn layout_root(&self, tab: TabId) -> Option<Elem> {
        match self.zoomed_pane(tab) {
            Some(pane) => self.pane(pane)?.zoom_save().map(|z| z.tab_root),
            None => self.tree.root(tab),
        }
    }

    /// Accept a surface's preferred initial size. Only honoured when the
    /// window has a single tab whose root is `pane`; otherwise the layout
    /// decides the size.
    pub fn initial_size(&mut self, pane: PaneId, size: Size) -> bool {
        let sole = self.tabs.len() == 1
            && matches!(self.pane_container(pane), Container::Tab(tab) if tab == self.tabs[0].id);
        if !sole {
            debug!(%pane, "initial size ignored: pane is not the window's only root");
            return false;
        }
        match self.pane_mut(pane) {
            Some(p) => {
                p.geometry.size = size;
                true
            }
            None => false,
        }
    }
}
