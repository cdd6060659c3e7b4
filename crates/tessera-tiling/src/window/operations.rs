//! Structural window operations: tabs, split, close, zoom, resize, detach.

use tessera_common::actions::{ResizeDirection, SplitDirection};
use tessera_common::types::{PaneId, TabId};
use tessera_common::Event;
use tracing::{debug, info, warn};

use super::{CloseOutcome, Tab, Window};
use crate::pane::ZoomSave;
use crate::tree::{Container, Elem, Orientation, Side};

impl Window {
    // -- Tabs --

    /// Open a tab holding one fresh pane, place it after the active tab, and
    /// select it.
    pub fn new_tab(&mut self) -> (TabId, PaneId) {
        let tab = self.alloc_tab();
        let pane = self.alloc_pane();
        let pane_id = pane.id;
        self.tree.insert_pane(pane);
        self.tree.replace(Container::Tab(tab), Elem::Pane(pane_id));

        let index = self.active.map(|i| i + 1).unwrap_or(self.tabs.len());
        self.tabs.insert(index, Tab::new(tab));
        self.emit(Event::TabOpened(tab));
        self.emit(Event::PaneOpened(pane_id));
        info!(%tab, %pane_id, "tab opened");

        self.select_tab(tab);
        self.set_focus(pane_id);
        (tab, pane_id)
    }

    pub fn select_tab(&mut self, tab: TabId) -> bool {
        let Some(index) = self.tab_index(tab) else {
            return false;
        };
        self.active = Some(index);
        self.emit(Event::TabSelected(tab));
        let title = self.tabs[index].title.clone();
        if !title.is_empty() {
            self.emit(Event::WindowTitleChanged(title));
        }
        true
    }

    pub fn next_tab(&mut self) -> bool {
        self.cycle_tab(1)
    }

    pub fn previous_tab(&mut self) -> bool {
        self.cycle_tab(-1)
    }

    /// Select the tab at `index` (zero-based). Out-of-range indexes select the
    /// last tab.
    pub fn goto_tab(&mut self, index: usize) -> bool {
        let Some(last) = self.tabs.len().checked_sub(1) else {
            return false;
        };
        let id = self.tabs[index.min(last)].id;
        self.select_tab(id)
    }

    fn cycle_tab(&mut self, step: isize) -> bool {
        let len = self.tabs.len();
        if len <= 1 {
            return false;
        }
        let current = self.active.unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len as isize) as usize;
        let id = self.tabs[next].id;
        self.select_tab(id)
    }

    /// Close a whole tab and every pane in it.
    pub fn close_tab(&mut self, tab: TabId) -> Option<CloseOutcome> {
        self.tab_index(tab)?;
        if let Some(zoomed) = self.zoomed_pane(tab) {
            self.unzoom(zoomed);
        }
        let removed = self.tree.remove(Container::Tab(tab))?;
        let destroyed = self.tree.destroy(removed.elem);
        for &pane in &destroyed {
            self.emit(Event::PaneClosed(pane));
        }
        let window_closed = self.drop_tab(tab);
        Some(CloseOutcome {
            destroyed,
            successor: self.focused_pane(),
            tab_closed: true,
            window_closed,
        })
    }

    /// Remove an emptied tab from the tab list. Returns true when it was the
    /// last one and the window closed.
    fn drop_tab(&mut self, tab: TabId) -> bool {
        let Some(index) = self.tab_index(tab) else {
            return false;
        };
        let was_active = self.active == Some(index);
        self.tabs.remove(index);
        self.emit(Event::TabClosed(tab));
        info!(%tab, "tab closed");

        if self.tabs.is_empty() {
            self.active = None;
            self.emit(Event::WindowClosed);
            info!("last tab closed, window closing");
            return true;
        }

        match self.active {
            Some(active) if was_active => {
                let id = self.tabs[active.min(self.tabs.len() - 1)].id;
                self.select_tab(id);
            }
            Some(active) if active > index => self.active = Some(active - 1),
            _ => {}
        }
        false
    }

    // -- Split / close --

    /// Split the focused pane of the active tab.
    pub fn split(&mut self, direction: SplitDirection) -> Option<PaneId> {
        let pane = self.focused_pane()?;
        self.split_pane(pane, direction)
    }

    /// Split `target`, placing a new pane on the side named by `direction`,
    /// and focus the new pane. A zoomed pane in the same tab is un-zoomed
    /// first.
    pub fn split_pane(&mut self, target: PaneId, direction: SplitDirection) -> Option<PaneId> {
        let tab = self.tab_of(target)?;
        if let Some(zoomed) = self.zoomed_pane(tab) {
            self.unzoom(zoomed);
        }

        let (orientation, new_first) = match direction {
            SplitDirection::Right => (Orientation::Horizontal, false),
            SplitDirection::Left => (Orientation::Horizontal, true),
            SplitDirection::Down => (Orientation::Vertical, false),
            SplitDirection::Up => (Orientation::Vertical, true),
        };
        let existing_share = self.settings.default_ratio;
        let ratio = if new_first {
            1.0 - existing_share
        } else {
            existing_share
        };

        let pane = self.alloc_pane();
        let pane_id = pane.id;
        let split = self
            .tree
            .split_pane(target, orientation, pane, new_first, ratio)?;
        info!(%target, %pane_id, %split, ?direction, "pane split");

        self.emit(Event::PaneOpened(pane_id));
        self.set_focus(pane_id);
        Some(pane_id)
    }

    /// Close `pane`. The enclosing split collapses into the sibling; if the
    /// pane had focus, the sibling's pane nearest the closed side receives it.
    /// Closing a tab's last pane closes the tab, and closing the last tab
    /// closes the window.
    pub fn close_pane(&mut self, pane: PaneId) -> Option<CloseOutcome> {
        let tab = self.tab_of(pane)?;
        if let Some(zoomed) = self.zoomed_pane(tab) {
            self.unzoom(zoomed);
        }
        let had_focus = self.tab(tab).and_then(|t| t.focus) == Some(pane);

        let removed = self.tree.remove(self.pane_container(pane))?;
        let destroyed = self.tree.destroy(removed.elem);
        for &id in &destroyed {
            self.emit(Event::PaneClosed(id));
        }
        debug!(%pane, ?removed, "pane removed");

        let Some(survivor) = removed.survivor else {
            let window_closed = self.drop_tab(tab);
            return Some(CloseOutcome {
                destroyed,
                successor: self.focused_pane(),
                tab_closed: true,
                window_closed,
            });
        };

        if had_focus {
            let side = removed.side.unwrap_or(Side::First);
            match self.tree.deepest_pane(survivor, side) {
                Some(next) => {
                    self.set_focus(next);
                }
                None => warn!(%pane, "no successor found in surviving subtree"),
            }
        }
        Some(CloseOutcome {
            destroyed,
            successor: self.tab(tab).and_then(|t| t.focus),
            tab_closed: false,
            window_closed: false,
        })
    }

    // -- Zoom --

    /// Zoom the focused pane of the active tab, or un-zoom it if zoomed.
    pub fn toggle_zoom(&mut self) -> bool {
        let Some(pane) = self.focused_pane() else {
            return false;
        };
        let zoomed = self.pane(pane).is_some_and(|p| p.is_zoomed());
        if zoomed {
            self.unzoom(pane)
        } else {
            self.zoom(pane)
        }
    }

    /// Make `pane` temporarily fill its tab. The tab's tree is kept intact
    /// behind the zoomed pane and restored exactly by `unzoom`.
    ///
    /// A pane that is its tab's only pane, or already zoomed, is left alone.
    pub fn zoom(&mut self, pane: PaneId) -> bool {
        let slot = self.pane_container(pane);
        if slot.split().is_none() {
            debug!(%pane, ?slot, "zoom: pane is not inside a split");
            return false;
        }
        let Some(tab) = self.tree.tab_of(Elem::Pane(pane)) else {
            return false;
        };
        let Some(tab_root) = self.tree.root(tab) else {
            return false;
        };
        if !self.tree.zoom_into_tab(tab, pane) {
            return false;
        }
        if let Some(p) = self.tree.pane_mut(pane) {
            p.zoom = Some(ZoomSave { slot, tab_root });
        }

        self.emit(Event::ZoomChanged { pane, zoomed: true });
        debug!(%pane, %tab, "pane zoomed");
        self.set_focus(pane);
        true
    }

    /// Restore the tree that was displaced by zooming `pane`.
    pub fn unzoom(&mut self, pane: PaneId) -> bool {
        let Some(tab) = self.pane_container(pane).tab() else {
            return false;
        };
        let Some(save) = self.pane_mut(pane).and_then(|p| p.zoom.take()) else {
            return false;
        };
        self.tree.replace(Container::Tab(tab), save.tab_root);
        if !self.tree.restore_container(Elem::Pane(pane), save.slot) {
            warn!(%pane, slot = ?save.slot, "saved slot no longer holds the pane");
        }
        self.emit(Event::ZoomChanged {
            pane,
            zoomed: false,
        });
        debug!(%pane, %tab, "pane unzoomed");
        true
    }

    // -- Sizing --

    /// Give every pane of the active tab an equal share.
    pub fn equalize(&mut self) -> bool {
        let Some(tab) = self.active_tab_id() else {
            return false;
        };
        match self.layout_root(tab) {
            Some(root @ Elem::Split(_)) => {
                self.tree.equalize(root);
                true
            }
            _ => false,
        }
    }

    /// Move the divider nearest the focused pane in `direction` by `amount`
    /// pixels.
    pub fn resize(&mut self, direction: ResizeDirection, amount: u16) -> bool {
        let Some(pane) = self.focused_pane() else {
            return false;
        };
        let Some(tab) = self.active_tab_id() else {
            return false;
        };
        if self.zoomed_pane(tab).is_some() {
            debug!(%pane, "resize ignored while zoomed");
            return false;
        }

        let (orientation, sign) = match direction {
            ResizeDirection::Left => (Orientation::Horizontal, -1.0),
            ResizeDirection::Right => (Orientation::Horizontal, 1.0),
            ResizeDirection::Up => (Orientation::Vertical, -1.0),
            ResizeDirection::Down => (Orientation::Vertical, 1.0),
        };
        let Some(split) = self
            .tree
            .first_ancestor_with_orientation(Elem::Pane(pane), orientation)
        else {
            return false;
        };
        let Some(border) = self.borders(tab).into_iter().find(|b| b.split == split) else {
            return false;
        };
        let delta = sign * border.pixel_to_ratio(f64::from(amount));
        self.tree
            .resize(pane, orientation, delta, self.settings.min_ratio)
    }

    // -- Detach --

    /// Move `pane` out of its split into a new tab placed after the current
    /// one. A pane alone in its tab stays put.
    pub fn detach_pane(&mut self, pane: PaneId) -> Option<TabId> {
        let tab = self.tab_of(pane)?;
        if let Some(zoomed) = self.zoomed_pane(tab) {
            self.unzoom(zoomed);
        }
        let slot = self.pane_container(pane);
        if slot.split().is_none() {
            debug!(%pane, "detach: pane is alone in its tab");
            return None;
        }
        let had_focus = self.tab(tab).and_then(|t| t.focus) == Some(pane);

        let removed = self.tree.remove(slot)?;
        if had_focus {
            if let Some(next) = removed
                .survivor
                .and_then(|s| self.tree.deepest_pane(s, removed.side.unwrap_or(Side::First)))
            {
                self.set_focus(next);
            }
        }

        let new_tab = self.alloc_tab();
        let index = self.tab_index(tab).map(|i| i + 1).unwrap_or(self.tabs.len());
        self.tabs.insert(index, Tab::new(new_tab));
        if let Some(active) = self.active {
            if active >= index {
                self.active = Some(active + 1);
            }
        }
        self.tree.replace(Container::Tab(new_tab), Elem::Pane(pane));
        self.emit(Event::TabOpened(new_tab));
        info!(%pane, from = %tab, to = %new_tab, "pane detached to new tab");

        self.select_tab(new_tab);
        self.set_focus(pane);
        Some(new_tab)
    }
}
