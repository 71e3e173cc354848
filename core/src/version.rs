//! Version footer

/// Project repository the release tags live in.
pub const REPOSITORY_URL: &str = "https://github.com/naveen3830/Ransomware-Reddit-Data-Analysis";

/// Crate version baked in at build time.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Footer text, e.g. `Version 0.3.1`.
pub fn version_label() -> String {
    format!("Version {}", APP_VERSION)
}

/// Link to the release page for `version`.
pub fn release_url(version: &str) -> String {
    format!("{}/releases/tag/v{}", REPOSITORY_URL, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_url_uses_v_prefix() {
        assert_eq!(
            release_url("1.2.0"),
            "https://github.com/naveen3830/Ransomware-Reddit-Data-Analysis/releases/tag/v1.2.0"
        );
    }

    #[test]
    fn label_contains_version() {
        assert!(version_label().ends_with(APP_VERSION));
    }
}
