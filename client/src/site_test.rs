use super::*;

#[test]
fn base_path_is_segment_with_leading_slash() {
    assert_eq!(BASE_PATH, format!("/{BASE_SEGMENT}"));
    assert!(!BASE_PATH.ends_with('/'));
}

#[test]
fn site_path_is_base_path_with_trailing_slash() {
    assert_eq!(SITE_PATH, format!("{BASE_PATH}/"));
}

#[test]
fn pkg_url_prefixes_base_path() {
    assert_eq!(pkg_url("nexem.js"), "/nexem/pkg/nexem.js");
    assert_eq!(pkg_url("/nexem_bg.wasm"), "/nexem/pkg/nexem_bg.wasm");
}

#[test]
fn stylesheet_url_uses_output_name() {
    assert_eq!(stylesheet_url(), "/nexem/pkg/nexem.css");
}
