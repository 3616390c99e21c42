//! Active tab of the scroll navbar's bottom bar.

use super::nav::{tab_entries, TabEntry, TabItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: TabItem,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> TabItem {
        self.active
    }

    /// Returns `true` when the highlight moved.
    pub fn press(&mut self, item: TabItem) -> bool {
        let changed = self.active != item;
        self.active = item;
        changed
    }

    pub fn entries(&self) -> [TabEntry; 4] {
        tab_entries(self.active)
    }
}
