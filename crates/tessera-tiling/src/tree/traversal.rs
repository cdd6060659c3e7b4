//! Read-only traversal: deepest pane, ancestor search, ordering, snapshots,
//! and consistency checking.

use tessera_common::types::{PaneId, SplitId, TabId};

use super::{Container, Elem, Orientation, Side, SplitTree, TreeError, TreeSnapshot};

impl SplitTree {
    /// Walk toward `side` until a pane is found.
    pub fn deepest_pane(&self, elem: Elem, side: Side) -> Option<PaneId> {
        let mut current = elem;
        loop {
            match current {
                Elem::Pane(id) => return self.panes.contains_key(&id).then_some(id),
                Elem::Split(id) => current = self.splits.get(&id)?.child(side),
            }
        }
    }

    /// Walk back-references upward to the nearest enclosing split with the
    /// given orientation.
    pub fn first_ancestor_with_orientation(
        &self,
        elem: Elem,
        orientation: Orientation,
    ) -> Option<SplitId> {
        let mut current = elem;
        while let Some((id, _)) = self.container_of(current).split() {
            let split = self.splits.get(&id)?;
            if split.orientation == orientation {
                return Some(id);
            }
            current = Elem::Split(id);
        }
        None
    }

    /// The tab whose tree holds `elem`, following back-references upward.
    pub fn tab_of(&self, elem: Elem) -> Option<TabId> {
        let mut current = elem;
        loop {
            match self.container_of(current) {
                Container::None => return None,
                Container::Tab(tab) => return Some(tab),
                Container::SplitFirst(id) | Container::SplitSecond(id) => {
                    current = Elem::Split(id);
                }
            }
        }
    }

    /// All panes below `elem`, first-then-second (left-to-right, top-to-bottom).
    pub fn panes_in_order(&self, elem: Elem) -> Vec<PaneId> {
        let mut ids = Vec::new();
        self.collect_panes(elem, &mut ids);
        ids
    }

    fn collect_panes(&self, elem: Elem, out: &mut Vec<PaneId>) {
        match elem {
            Elem::Pane(id) => out.push(id),
            Elem::Split(id) => {
                if let Some(split) = self.splits.get(&id) {
                    self.collect_panes(split.first, out);
                    self.collect_panes(split.second, out);
                }
            }
        }
    }

    pub fn snapshot(&self, elem: Elem) -> Option<TreeSnapshot> {
        match elem {
            Elem::Pane(id) => self.panes.get(&id).map(|pane| TreeSnapshot::Pane {
                id,
                container: pane.container,
            }),
            Elem::Split(id) => {
                let split = self.splits.get(&id)?;
                Some(TreeSnapshot::Split {
                    id,
                    orientation: split.orientation,
                    ratio: split.ratio,
                    container: split.container,
                    first: Box::new(self.snapshot(split.first)?),
                    second: Box::new(self.snapshot(split.second)?),
                })
            }
        }
    }

    /// Verify that every node reachable from the tab's root names the exact
    /// slot that holds it.
    pub fn check_consistency(&self, tab: TabId) -> Result<(), TreeError> {
        let root = self.root(tab).ok_or(TreeError::EmptyTab(tab))?;
        self.check_node(root, Container::Tab(tab))
    }

    fn check_node(&self, elem: Elem, expected: Container) -> Result<(), TreeError> {
        if !self.contains(elem) {
            return Err(TreeError::MissingNode(elem));
        }
        let claimed = self.container_of(elem);
        if claimed != expected {
            return Err(TreeError::StaleContainer {
                elem,
                claimed,
                actual: expected,
            });
        }
        // The claimed slot must resolve back to this node.
        if self.slot(claimed) != Some(elem) {
            return Err(TreeError::StaleContainer {
                elem,
                claimed,
                actual: expected,
            });
        }
        if let Elem::Split(id) = elem {
            let split = self.splits.get(&id).ok_or(TreeError::MissingNode(elem))?;
            if split.first == elem || split.second == elem {
                return Err(TreeError::SelfReference(id));
            }
            self.check_node(split.first, Container::SplitFirst(id))?;
            self.check_node(split.second, Container::SplitSecond(id))?;
        }
        Ok(())
    }
}
