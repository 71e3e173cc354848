//! Reference links: sample thread URLs per category, side-loaded from CSV.

mod error;
mod index;
mod source;

pub use error::LinkSourceError;
pub use index::{
    ARCHIVED_COLUMN, CATEGORY_COLUMN, MAX_LINKS_PER_CATEGORY, ReferenceLinkIndex, URL_COLUMN,
};
#[cfg(feature = "native")]
pub use source::FileSource;
pub use source::{
    DEFAULT_REFERENCE_PATH, ReferenceSource, index_or_empty, load_reference_index,
    parse_reference_bytes,
};
