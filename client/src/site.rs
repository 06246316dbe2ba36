//! Deployment paths. The site is published under a fixed subpath.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Path segment the whole site lives under.
pub const BASE_SEGMENT: &str = "nexem";

/// Absolute subpath prefix, without trailing slash.
pub const BASE_PATH: &str = "/nexem";

/// Canonical page URL. File hosts serve the exported `index.html` here.
pub const SITE_PATH: &str = "/nexem/";

/// Leptos output name; also the stem of the stylesheet and WASM bundle.
pub const OUTPUT_NAME: &str = "nexem";

/// Absolute URL of a file in the site's `pkg` directory.
pub fn pkg_url(file: &str) -> String {
    format!("{BASE_PATH}/pkg/{}", file.trim_start_matches('/'))
}

/// Stylesheet emitted by the build.
pub fn stylesheet_url() -> String {
    pkg_url(&format!("{OUTPUT_NAME}.css"))
}
