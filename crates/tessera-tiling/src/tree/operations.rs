//! Mutating operations on the split tree: replace, remove, split, resize,
//! equalize, destroy.

use tessera_common::types::{PaneId, SplitId, TabId};
use tracing::debug;

use super::{Container, Elem, Orientation, Removed, Side, Split, SplitTree};
use crate::pane::Pane;

impl SplitTree {
    /// Install `elem` into the slot named by `container` and point `elem`'s
    /// back-reference at that slot. A previous occupant that still claims the
    /// slot is detached (`Container::None`).
    ///
    /// Returns `false`, changing nothing, when the slot does not exist or
    /// `elem` is attached to a different slot. Detach it first.
    pub fn replace(&mut self, container: Container, elem: Elem) -> bool {
        if !self.contains(elem) {
            debug!(?elem, "replace: element not in arena");
            return false;
        }
        let current = self.container_of(elem);
        if current.is_attached() && current != container {
            debug!(?elem, ?current, ?container, "replace: element is attached elsewhere");
            return false;
        }
        self.install(container, elem)
    }

    /// Make `pane` the root of `tab` while its split slot keeps holding it,
    /// so the displaced tree can be restored on unzoom. The pane's
    /// back-reference names the tab until `restore_container` points it home.
    pub(crate) fn zoom_into_tab(&mut self, tab: TabId, pane: PaneId) -> bool {
        let elem = Elem::Pane(pane);
        if !self.contains(elem) || self.container_of(elem).split().is_none() {
            debug!(%pane, "zoom_into_tab: pane is not inside a split");
            return false;
        }
        self.install(Container::Tab(tab), elem)
    }

    fn install(&mut self, container: Container, elem: Elem) -> bool {
        let previous = match container {
            Container::None => return false,
            Container::Tab(tab) => self.roots.insert(tab, elem),
            Container::SplitFirst(id) | Container::SplitSecond(id) => {
                let Some(split) = self.splits.get_mut(&id) else {
                    debug!(%id, "replace: split not found");
                    return false;
                };
                let slot = if matches!(container, Container::SplitFirst(_)) {
                    &mut split.first
                } else {
                    &mut split.second
                };
                Some(std::mem::replace(slot, elem))
            }
        };

        if let Some(old) = previous {
            if old != elem && self.container_of(old) == container {
                self.set_container(old, Container::None);
            }
        }
        self.set_container(elem, container);
        true
    }

    /// Detach the subtree at `container`.
    ///
    /// When the slot belongs to a split, that split collapses: the surviving
    /// sibling takes the split's place in its parent slot and the split is
    /// dropped from the arena. A split never keeps a single child.
    pub fn remove(&mut self, container: Container) -> Option<Removed> {
        let elem = self.slot(container)?;
        match container {
            Container::None => None,
            Container::Tab(tab) => {
                self.roots.remove(&tab);
                self.set_container(elem, Container::None);
                Some(Removed {
                    elem,
                    side: None,
                    survivor: None,
                })
            }
            Container::SplitFirst(id) | Container::SplitSecond(id) => {
                let split = self.splits.remove(&id)?;
                let side = if matches!(container, Container::SplitFirst(_)) {
                    Side::First
                } else {
                    Side::Second
                };
                let survivor = split.child(side.opposite());

                self.set_container(elem, Container::None);
                // The survivor still names the dropped split's slot.
                self.set_container(survivor, Container::None);
                self.replace(split.container, survivor);
                debug!(%id, ?elem, ?survivor, "split collapsed");
                Some(Removed {
                    elem,
                    side: Some(side),
                    survivor: Some(survivor),
                })
            }
        }
    }

    /// Wrap `target`'s slot in a new split holding `target` and `new_pane`.
    ///
    /// `new_first` places the new pane in the first slot (left/up). Returns
    /// the new split's id, or `None` when `target` is unknown or detached.
    pub fn split_pane(
        &mut self,
        target: PaneId,
        orientation: Orientation,
        new_pane: Pane,
        new_first: bool,
        ratio: f64,
    ) -> Option<SplitId> {
        let container = self.panes.get(&target)?.container;
        if !container.is_attached() {
            debug!(%target, "split_pane: target is detached");
            return None;
        }

        let new_id = new_pane.id;
        self.insert_pane(new_pane);
        let id = self.alloc_split_id();
        let (first, second) = if new_first {
            (Elem::Pane(new_id), Elem::Pane(target))
        } else {
            (Elem::Pane(target), Elem::Pane(new_id))
        };
        self.splits.insert(
            id,
            Split {
                id,
                orientation,
                ratio,
                first,
                second,
                container: Container::None,
            },
        );

        self.replace(container, Elem::Split(id));
        self.set_container(first, Container::SplitFirst(id));
        self.set_container(second, Container::SplitSecond(id));
        Some(id)
    }

    /// Move the divider of the nearest enclosing split with `orientation` by
    /// `delta` (a fraction of that split's extent). Positive grows `first`.
    pub fn resize(
        &mut self,
        pane: PaneId,
        orientation: Orientation,
        delta: f64,
        min_ratio: f64,
    ) -> bool {
        let Some(id) = self.first_ancestor_with_orientation(Elem::Pane(pane), orientation) else {
            debug!(%pane, ?orientation, "resize: no enclosing split");
            return false;
        };
        let Some(split) = self.splits.get_mut(&id) else {
            return false;
        };
        let min = min_ratio.clamp(0.0, 0.5);
        split.ratio = (split.ratio + delta).clamp(min, 1.0 - min);
        true
    }

    /// Recompute ratios below `elem` so every pane gets the same share along
    /// each split. Returns the weight of `elem`: 1 for a pane, the sum of its
    /// children for a split.
    pub fn equalize(&mut self, elem: Elem) -> f64 {
        match elem {
            Elem::Pane(_) => 1.0,
            Elem::Split(id) => {
                let Some((first, second)) = self.splits.get(&id).map(|s| (s.first, s.second))
                else {
                    return 0.0;
                };
                let first_weight = self.equalize(first);
                let second_weight = self.equalize(second);
                let weight = first_weight + second_weight;
                if weight > 0.0 {
                    if let Some(split) = self.splits.get_mut(&id) {
                        split.ratio = first_weight / weight;
                    }
                }
                weight
            }
        }
    }

    /// Point `elem` back at a slot that already holds it. Used when a saved
    /// subtree is re-attached; refuses when the slot holds something else.
    pub(crate) fn restore_container(&mut self, elem: Elem, container: Container) -> bool {
        if self.slot(container) != Some(elem) {
            debug!(?elem, ?container, "restore_container: slot does not hold element");
            return false;
        }
        self.set_container(elem, container);
        true
    }

    /// Drop a detached subtree from the arena. Returns the panes destroyed.
    pub fn destroy(&mut self, elem: Elem) -> Vec<PaneId> {
        let mut destroyed = Vec::new();
        self.destroy_into(elem, &mut destroyed);
        destroyed
    }

    fn destroy_into(&mut self, elem: Elem, out: &mut Vec<PaneId>) {
        match elem {
            Elem::Pane(id) => {
                if self.panes.remove(&id).is_some() {
                    out.push(id);
                }
            }
            Elem::Split(id) => {
                if let Some(split) = self.splits.remove(&id) {
                    self.destroy_into(split.first, out);
                    self.destroy_into(split.second, out);
                }
            }
        }
    }
}
