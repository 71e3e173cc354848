//! Category → reference link index
//!
//! Parsed from a comma-separated file whose header names the columns. Only
//! non-archived threads are kept, at most [`MAX_LINKS_PER_CATEGORY`] per
//! category, in file order.

use hashbrown::HashMap;

use super::LinkSourceError;

/// Column holding the thread URL.
pub const URL_COLUMN: &str = "URL";
/// Column holding the category name the thread belongs to.
pub const CATEGORY_COLUMN: &str = "Category";
/// Column flagging archived threads (`yes` / `no`).
pub const ARCHIVED_COLUMN: &str = "reddit_is_archived";

/// Links kept per category. Later matching rows are ignored.
pub const MAX_LINKS_PER_CATEGORY: usize = 2;

/// Read-only mapping from category name to sample thread links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceLinkIndex {
    links: HashMap<String, Vec<String>>,
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    url: usize,
    category: usize,
    archived: usize,
}

impl ColumnLayout {
    fn from_header(header: &str) -> Result<Self, LinkSourceError> {
        let columns: Vec<&str> = header
            .split(',')
            .map(|c| c.trim().trim_start_matches('\u{feff}'))
            .collect();

        let find = |column: &'static str| {
            columns
                .iter()
                .position(|c| *c == column)
                .ok_or(LinkSourceError::MissingColumn { column })
        };

        Ok(Self {
            url: find(URL_COLUMN)?,
            category: find(CATEGORY_COLUMN)?,
            archived: find(ARCHIVED_COLUMN)?,
        })
    }

    /// Smallest field count a row needs to cover every column.
    fn min_fields(&self) -> usize {
        self.url.max(self.category).max(self.archived) + 1
    }
}

impl ReferenceLinkIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CSV text into an index.
    ///
    /// Rows too short to reach every located column are skipped. Fails only
    /// when the header itself is unusable.
    pub fn parse(text: &str) -> Result<Self, LinkSourceError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(LinkSourceError::Empty)?;
        let layout = ColumnLayout::from_header(header)?;
        let min_fields = layout.min_fields();

        let mut index = Self::new();
        let mut skipped = 0usize;

        for line in lines {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < min_fields {
                skipped += 1;
                continue;
            }

            if fields[layout.archived].trim().to_lowercase() != "no" {
                continue;
            }

            // Blank links are not rendered and do not use up the cap
            let url = fields[layout.url].trim();
            if url.is_empty() {
                continue;
            }
            index.push(fields[layout.category].trim(), url);
        }

        tracing::debug!(
            categories = index.len(),
            skipped_rows = skipped,
            "Parsed reference link index"
        );
        Ok(index)
    }

    fn push(&mut self, category: &str, url: &str) {
        let links = self.links.entry_ref(category).or_default();
        if links.len() < MAX_LINKS_PER_CATEGORY {
            links.push(url.to_string());
        }
    }

    /// Links for a category, in file order. Empty when none are known.
    pub fn links_for(&self, category: &str) -> &[String] {
        self.links.get(category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of categories with at least one link.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Category names with links, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.links.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}
