#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_string_is_none_in_non_hydrate_tests() {
    assert_eq!(load_string("anything"), None);
}

#[test]
fn auth_token_is_none_without_browser_storage() {
    assert_eq!(auth_token(), None);
}
