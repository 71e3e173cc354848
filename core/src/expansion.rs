//! Detail row expansion
//!
//! Tracks which table rows are open and joins each open row to its reference
//! links. The link index arrives asynchronously; until it does, every row
//! behaves as if no links exist.

use hashbrown::HashMap;

use crate::links::ReferenceLinkIndex;

/// Load state of the reference link index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IndexState {
    /// Fetch still outstanding (or stalled).
    #[default]
    Pending,
    /// Fetch finished. A failed fetch also lands here, with an empty index.
    Ready(ReferenceLinkIndex),
}

/// Per-category expansion flags plus the link index they reveal.
#[derive(Debug, Clone, Default)]
pub struct DetailExpansion {
    expanded: HashMap<String, bool>,
    index: IndexState,
}

impl DetailExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `category` and return the new value.
    ///
    /// Unknown categories start collapsed, so the first toggle opens them.
    pub fn toggle(&mut self, category: &str) -> bool {
        let flag = self.expanded.entry_ref(category).or_insert(false);
        *flag = !*flag;
        tracing::debug!(category, expanded = *flag, "Row toggled");
        *flag
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.get(category).copied().unwrap_or(false)
    }

    /// Install the loaded index. Later calls are ignored: the index is
    /// populated once and read-only afterwards.
    pub fn set_index(&mut self, index: ReferenceLinkIndex) {
        if matches!(self.index, IndexState::Ready(_)) {
            tracing::debug!("Reference index already installed, ignoring reload");
            return;
        }
        self.index = IndexState::Ready(index);
    }

    pub fn index_state(&self) -> &IndexState {
        &self.index
    }

    pub fn is_index_ready(&self) -> bool {
        matches!(self.index, IndexState::Ready(_))
    }

    /// All known links for a category, regardless of expansion.
    pub fn links_for(&self, category: &str) -> &[String] {
        match &self.index {
            IndexState::Ready(index) => index.links_for(category),
            IndexState::Pending => &[],
        }
    }

    /// Links to show under a row: only when it is open and has any.
    pub fn panel_links(&self, category: &str) -> Option<&[String]> {
        if !self.is_expanded(category) {
            return None;
        }
        let links = self.links_for(category);
        (!links.is_empty()).then_some(links)
    }
}
