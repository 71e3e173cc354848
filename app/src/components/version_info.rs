use dioxus::prelude::*;
use serpdash_core::version::{APP_VERSION, release_url, version_label};

/// Footer link to the release notes of the running build.
#[component]
pub fn VersionInfo() -> Element {
    let url = release_url(APP_VERSION);
    let label = version_label();

    rsx! {
        footer { class: "version-info",
            a {
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{label}"
            }
        }
    }
}
