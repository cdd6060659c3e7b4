//! Focus tracking and chrome title propagation for Window.

use tessera_common::actions::GotoDirection;
use tessera_common::types::{PaneId, Rect, TabId};
use tessera_common::Event;
use tracing::debug;

use super::Window;

impl Window {
    /// Make `pane` the focus target of its tab.
    ///
    /// A different pane that is zoomed in the same tab is un-zoomed first;
    /// only the focused pane may stay zoomed. The pane's title becomes the
    /// tab title, and the window title when the tab is active.
    pub fn set_focus(&mut self, pane: PaneId) -> bool {
        let Some(tab) = self.tab_of(pane) else {
            debug!(%pane, "set_focus: pane is not in any tab");
            return false;
        };
        if let Some(zoomed) = self.zoomed_pane(tab) {
            if zoomed != pane {
                self.unzoom(zoomed);
            }
        }

        let title = self.display_title(pane);
        let tooltip = self.pane(pane).map(|p| p.tooltip.clone()).unwrap_or_default();
        let Some(t) = self.tab_mut(tab) else {
            return false;
        };
        let changed = t.focus != Some(pane);
        t.focus = Some(pane);
        t.title = title.clone();
        t.tooltip = tooltip.clone();

        if changed {
            self.emit(Event::PaneFocused { tab, pane });
        }
        self.emit(Event::TabTitleChanged {
            tab,
            title: title.clone(),
        });
        self.emit(Event::TabTooltipChanged { tab, tooltip });
        if self.active_tab_id() == Some(tab) {
            self.emit(Event::WindowTitleChanged(title));
        }
        true
    }

    /// Whether `pane` is its tab's focus target.
    pub fn is_focused(&self, pane: PaneId) -> bool {
        self.tab_of(pane)
            .and_then(|tab| self.tab(tab))
            .is_some_and(|t| t.focus == Some(pane))
    }

    /// Record a new title for `pane`. Tab chrome repaints only when the pane
    /// is its tab's focus target; window chrome additionally requires the tab
    /// to be active and the pane's widget to hold input focus.
    pub fn pane_title_changed(&mut self, pane: PaneId, title: &str, has_input_focus: bool) {
        let Some(p) = self.tree.pane_mut(pane) else {
            return;
        };
        p.title = title.to_string();

        let Some(tab) = self.focused_tab_of(pane) else {
            return;
        };
        let shown = self.display_title(pane);
        if let Some(t) = self.tab_mut(tab) {
            t.title = shown.clone();
        }
        self.emit(Event::TabTitleChanged {
            tab,
            title: shown.clone(),
        });
        if has_input_focus && self.active_tab_id() == Some(tab) {
            self.emit(Event::WindowTitleChanged(shown));
        }
    }

    /// Record a new working directory for `pane`: it becomes the pane's
    /// tooltip, and the window subtitle under the same rules as titles.
    pub fn pane_pwd_changed(&mut self, pane: PaneId, pwd: &str, has_input_focus: bool) {
        let Some(p) = self.tree.pane_mut(pane) else {
            return;
        };
        p.tooltip = pwd.to_string();

        let Some(tab) = self.focused_tab_of(pane) else {
            return;
        };
        if let Some(t) = self.tab_mut(tab) {
            t.tooltip = pwd.to_string();
        }
        self.emit(Event::TabTooltipChanged {
            tab,
            tooltip: pwd.to_string(),
        });
        if has_input_focus && self.active_tab_id() == Some(tab) {
            self.emit(Event::WindowSubtitleChanged(pwd.to_string()));
        }
    }

    /// Move focus within the active tab.
    pub fn goto(&mut self, direction: GotoDirection) -> bool {
        let Some(current) = self.focused_pane() else {
            return false;
        };
        let Some(tab) = self.active_tab_id() else {
            return false;
        };

        let target = match direction {
            GotoDirection::Previous | GotoDirection::Next => {
                let order = self.panes_of(tab);
                if order.len() <= 1 {
                    return false;
                }
                let Some(idx) = order.iter().position(|&id| id == current) else {
                    return false;
                };
                let next = if direction == GotoDirection::Next {
                    (idx + 1) % order.len()
                } else {
                    (idx + order.len() - 1) % order.len()
                };
                Some(order[next])
            }
            _ => self.spatial_neighbor(tab, current, direction),
        };

        match target {
            Some(pane) if pane != current => self.set_focus(pane),
            _ => false,
        }
    }

    /// The pane whose rectangle lies in `direction` from `from`: panes that
    /// overlap on the perpendicular axis win, then the nearest edge, then the
    /// largest overlap.
    fn spatial_neighbor(&self, tab: TabId, from: PaneId, direction: GotoDirection) -> Option<PaneId> {
        let layout = self.navigation_layout(tab);
        let origin = layout.iter().find(|(id, _)| *id == from)?.1;
        const EPS: f64 = 0.5;

        let mut best: Option<(bool, f64, f64, PaneId)> = None;
        for &(id, rect) in &layout {
            if id == from {
                continue;
            }
            let (distance, overlap) = match direction {
                GotoDirection::Left if rect.right() <= origin.x + EPS => {
                    (origin.x - rect.right(), overlap_y(&origin, &rect))
                }
                GotoDirection::Right if rect.x >= origin.right() - EPS => {
                    (rect.x - origin.right(), overlap_y(&origin, &rect))
                }
                GotoDirection::Up if rect.bottom() <= origin.y + EPS => {
                    (origin.y - rect.bottom(), overlap_x(&origin, &rect))
                }
                GotoDirection::Down if rect.y >= origin.bottom() - EPS => {
                    (rect.y - origin.bottom(), overlap_x(&origin, &rect))
                }
                _ => continue,
            };
            let candidate = (overlap > 0.0, distance, overlap, id);
            let better = match best {
                None => true,
                Some((b_overlaps, b_distance, b_overlap, _)) => {
                    (candidate.0 && !b_overlaps)
                        || (candidate.0 == b_overlaps
                            && (distance < b_distance - EPS
                                || ((distance - b_distance).abs() <= EPS && overlap > b_overlap)))
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        best.map(|(_, _, _, id)| id)
    }

    /// The tab of `pane`, but only when `pane` is that tab's focus target.
    fn focused_tab_of(&self, pane: PaneId) -> Option<TabId> {
        let tab = self.tab_of(pane)?;
        (self.tab(tab)?.focus == Some(pane)).then_some(tab)
    }

    pub(super) fn display_title(&self, pane: PaneId) -> String {
        match self.pane(pane) {
            Some(p) if !p.title.is_empty() => p.title.clone(),
            _ => self.settings.default_title.clone(),
        }
    }
}

fn overlap_x(a: &Rect, b: &Rect) -> f64 {
    (a.right().min(b.right()) - a.x.max(b.x)).max(0.0)
}

fn overlap_y(a: &Rect, b: &Rect) -> f64 {
    (a.bottom().min(b.bottom()) - a.y.max(b.y)).max(0.0)
}
