//! Where the reference link file comes from
//!
//! Loading is best effort: every failure is logged and turned into an empty
//! index so the table keeps rendering without sample links.

use std::future::Future;

use super::{LinkSourceError, ReferenceLinkIndex};

/// Relative location of the reference file, both on disk and on the web host.
pub const DEFAULT_REFERENCE_PATH: &str = "reference_links.csv";

/// A fetchable copy of the reference link file.
pub trait ReferenceSource {
    /// Human readable location, used in log messages.
    fn location(&self) -> String;

    /// Fetch the raw file contents.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LinkSourceError>>;
}

/// Decode fetched bytes as UTF-8 (BOM stripped) and parse them.
///
/// Malformed sequences become U+FFFD; only the affected fields are damaged.
pub fn parse_reference_bytes(bytes: &[u8]) -> Result<ReferenceLinkIndex, LinkSourceError> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::debug!("Reference file has invalid UTF-8, replaced with U+FFFD");
    }
    ReferenceLinkIndex::parse(&text)
}

/// Turn a fetch result into an index, degrading to empty on any error.
pub fn index_or_empty(
    location: &str,
    fetched: Result<Vec<u8>, LinkSourceError>,
) -> ReferenceLinkIndex {
    match fetched.and_then(|bytes| parse_reference_bytes(&bytes)) {
        Ok(index) => {
            tracing::info!(
                location,
                categories = index.len(),
                "Reference links loaded"
            );
            index
        }
        Err(e) => {
            tracing::warn!(location, error = %e, "Reference links unavailable, continuing without them");
            ReferenceLinkIndex::new()
        }
    }
}

/// Fetch and parse the reference file once. Never fails.
pub async fn load_reference_index<S: ReferenceSource>(source: &S) -> ReferenceLinkIndex {
    let location = source.location();
    let fetched = source.fetch().await;
    index_or_empty(&location, fetched)
}

// ─────────────────────────────────────────────────────────────────────────────
// Filesystem Source
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "native")]
pub use file::FileSource;

#[cfg(feature = "native")]
mod file {
    use std::path::PathBuf;

    use super::*;

    /// Reference file read from local disk.
    #[derive(Debug, Clone)]
    pub struct FileSource {
        path: PathBuf,
    }

    impl FileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// Read and parse the file, degrading to an empty index.
        pub async fn load(&self) -> ReferenceLinkIndex {
            let fetched = self.read().await;
            index_or_empty(&self.location(), fetched)
        }

        async fn read(&self) -> Result<Vec<u8>, LinkSourceError> {
            tokio::fs::read(&self.path)
                .await
                .map_err(|source| LinkSourceError::Read {
                    path: self.path.clone(),
                    source,
                })
        }
    }

    impl ReferenceSource for FileSource {
        fn location(&self) -> String {
            self.path.display().to_string()
        }

        fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LinkSourceError>> {
            self.read()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::CATEGORY_COLUMN;

    struct FailingSource;

    impl ReferenceSource for FailingSource {
        fn location(&self) -> String {
            "failing".to_string()
        }

        async fn fetch(&self) -> Result<Vec<u8>, LinkSourceError> {
            Err(LinkSourceError::Fetch {
                url: "failing".to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    struct StaticSource(&'static [u8]);

    impl ReferenceSource for StaticSource {
        fn location(&self) -> String {
            "static".to_string()
        }

        async fn fetch(&self) -> Result<Vec<u8>, LinkSourceError> {
            Ok(self.0.to_vec())
        }
    }

    #[tokio::test]
    async fn failed_fetch_yields_empty_index() {
        let index = load_reference_index(&FailingSource).await;
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn successful_fetch_is_parsed() {
        let source = StaticSource(b"URL,Category,reddit_is_archived\nhttps://r/1,X,no\n");
        let index = load_reference_index(&source).await;
        assert_eq!(index.links_for("X"), ["https://r/1"]);
    }

    #[tokio::test]
    async fn bad_header_yields_empty_index() {
        let source = StaticSource(b"link,group\nhttps://r/1,X\n");
        let index = load_reference_index(&source).await;
        assert!(index.is_empty());
    }

    #[test]
    fn invalid_utf8_keeps_clean_rows() {
        let bytes = b"Title,URL,Category,reddit_is_archived\n\
                      it\x92s bad,https://r/1,X,no\n\
                      fine,https://r/2,X,no\n";
        let index = parse_reference_bytes(bytes).unwrap();
        assert_eq!(index.links_for("X"), ["https://r/1", "https://r/2"]);
    }

    #[test]
    fn invalid_utf8_in_header_still_fails_on_missing_column() {
        let err = parse_reference_bytes(b"URL,Categ\xffory,reddit_is_archived\nu,X,no\n")
            .unwrap_err();
        assert!(matches!(
            err,
            LinkSourceError::MissingColumn {
                column: CATEGORY_COLUMN
            }
        ));
    }

    #[tokio::test]
    async fn bad_byte_does_not_empty_the_index() {
        let source = StaticSource(b"Title,URL,Category,reddit_is_archived\nit\x92s,https://r/1,X,no\n");
        let index = load_reference_index(&source).await;
        assert_eq!(index.links_for("X"), ["https://r/1"]);
    }

    #[test]
    fn bom_is_stripped_before_parsing() {
        let index =
            parse_reference_bytes(b"\xef\xbb\xbfURL,Category,reddit_is_archived\nu,X,no\n").unwrap();
        assert_eq!(index.links_for("X"), ["u"]);
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn missing_file_yields_empty_index() {
        let source = FileSource::new("/nonexistent/serpdash/reference_links.csv");
        assert!(source.load().await.is_empty());
        assert!(load_reference_index(&source).await.is_empty());
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn file_source_reads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "serpdash-links-{}.csv",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "Category,reddit_is_archived,URL\nX,no,https://r/1\nX,yes,https://r/2\nX,no,https://r/3\nX,no,https://r/4\n",
        )
        .unwrap();

        let index = FileSource::new(&path).load().await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(index.links_for("X"), ["https://r/1", "https://r/3"]);
    }
}
