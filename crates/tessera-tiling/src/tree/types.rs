//! Core types for the split tree: elements, back-references, and the arena.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tessera_common::types::{PaneId, SplitId, TabId};

use crate::pane::Pane;

/// How a split divides its area. `Horizontal` places the children side by
/// side (left/right), `Vertical` stacks them (top/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One of the two child slots of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// A tree element: either a pane leaf or a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Elem {
    Pane(PaneId),
    Split(SplitId),
}

/// Where a node currently sits. A relation, never ownership: the tab owns
/// its root and every split owns its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Container {
    #[default]
    None,
    Tab(TabId),
    SplitFirst(SplitId),
    SplitSecond(SplitId),
}

impl Container {
    pub fn split(self) -> Option<(SplitId, Side)> {
        match self {
            Container::SplitFirst(id) => Some((id, Side::First)),
            Container::SplitSecond(id) => Some((id, Side::Second)),
            Container::None | Container::Tab(_) => None,
        }
    }

    pub fn tab(self) -> Option<TabId> {
        match self {
            Container::Tab(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_attached(self) -> bool {
        !matches!(self, Container::None)
    }

    pub(crate) fn for_side(split: SplitId, side: Side) -> Self {
        match side {
            Side::First => Container::SplitFirst(split),
            Side::Second => Container::SplitSecond(split),
        }
    }
}

/// Internal node with exactly two children.
#[derive(Debug, Clone)]
pub struct Split {
    pub id: SplitId,
    pub orientation: Orientation,
    /// Share of the area given to `first`, in (0, 1).
    pub ratio: f64,
    pub first: Elem,
    pub second: Elem,
    pub container: Container,
}

impl Split {
    pub fn child(&self, side: Side) -> Elem {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

/// What `SplitTree::remove` detached, and which sibling took the collapsed
/// split's place (if the removed slot was inside a split).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removed {
    pub elem: Elem,
    pub side: Option<Side>,
    pub survivor: Option<Elem>,
}

/// A structural copy of a subtree, including every node's back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeSnapshot {
    Pane {
        id: PaneId,
        container: Container,
    },
    Split {
        id: SplitId,
        orientation: Orientation,
        ratio: f64,
        container: Container,
        first: Box<TreeSnapshot>,
        second: Box<TreeSnapshot>,
    },
}

impl TreeSnapshot {
    pub fn pane_count(&self) -> usize {
        match self {
            TreeSnapshot::Pane { .. } => 1,
            TreeSnapshot::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeError {
    #[error("{0} has no root")]
    EmptyTab(TabId),

    #[error("{0:?} is referenced but not in the arena")]
    MissingNode(Elem),

    #[error("{elem:?} claims {claimed:?} but sits in {actual:?}")]
    StaleContainer {
        elem: Elem,
        claimed: Container,
        actual: Container,
    },

    #[error("{0} has a child slot pointing at itself")]
    SelfReference(SplitId),
}

/// Arena holding every pane and split of a window, plus one root slot per tab.
///
/// All mutations that touch a parent slot also update the child's
/// `Container` in the same call.
#[derive(Debug, Default)]
pub struct SplitTree {
    pub(super) panes: HashMap<PaneId, Pane>,
    pub(super) splits: HashMap<SplitId, Split>,
    pub(super) roots: HashMap<TabId, Elem>,
    pub(super) next_split: u32,
}

impl SplitTree {
    pub fn new() -> Self {
        Self {
            next_split: 1,
            ..Self::default()
        }
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.get(&id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.panes.get_mut(&id)
    }

    pub fn split_node(&self, id: SplitId) -> Option<&Split> {
        self.splits.get(&id)
    }

    pub fn root(&self, tab: TabId) -> Option<Elem> {
        self.roots.get(&tab).copied()
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn split_count(&self) -> usize {
        self.splits.len()
    }

    pub fn contains(&self, elem: Elem) -> bool {
        match elem {
            Elem::Pane(id) => self.panes.contains_key(&id),
            Elem::Split(id) => self.splits.contains_key(&id),
        }
    }

    /// Put a pane into the arena, detached.
    pub fn insert_pane(&mut self, mut pane: Pane) {
        pane.container = Container::None;
        self.panes.insert(pane.id, pane);
    }

    pub fn container_of(&self, elem: Elem) -> Container {
        match elem {
            Elem::Pane(id) => self.panes.get(&id).map(|p| p.container),
            Elem::Split(id) => self.splits.get(&id).map(|s| s.container),
        }
        .unwrap_or_default()
    }

    pub(super) fn set_container(&mut self, elem: Elem, container: Container) {
        match elem {
            Elem::Pane(id) => {
                if let Some(pane) = self.panes.get_mut(&id) {
                    pane.container = container;
                }
            }
            Elem::Split(id) => {
                if let Some(split) = self.splits.get_mut(&id) {
                    split.container = container;
                }
            }
        }
    }

    /// The element currently held by a slot.
    pub fn slot(&self, container: Container) -> Option<Elem> {
        match container {
            Container::None => None,
            Container::Tab(tab) => self.roots.get(&tab).copied(),
            Container::SplitFirst(id) => self.splits.get(&id).map(|s| s.first),
            Container::SplitSecond(id) => self.splits.get(&id).map(|s| s.second),
        }
    }

    pub(super) fn alloc_split_id(&mut self) -> SplitId {
        let id = SplitId(self.next_split.max(1));
        self.next_split = id.0 + 1;
        id
    }
}
