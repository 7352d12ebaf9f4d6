use super::*;

fn profile(id: Option<i64>, roles: &[&str]) -> ProfileRecord {
    ProfileRecord {
        id,
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn default_state_is_loading_without_roles() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.roles().is_empty());
    assert_eq!(state.host_access(), Access::Loading);
}

#[test]
fn host_role_grants_access() {
    let state = AuthState::loaded(profile(Some(9), &["RENTER", "HOST"]));
    assert!(state.has_role("HOST"));
    assert_eq!(state.host_access(), Access::Granted);
    assert_eq!(state.user_id(), Some(9));
}

#[test]
fn missing_host_role_denies_access() {
    let state = AuthState::loaded(profile(Some(9), &["RENTER"]));
    assert_eq!(state.host_access(), Access::Denied);
}

#[test]
fn role_match_is_exact() {
    let state = AuthState::loaded(profile(Some(9), &["host", "HOSTS"]));
    assert!(!state.has_role("HOST"));
}

#[test]
fn failed_profile_denies_access() {
    let state = AuthState::failed();
    assert!(!state.loading);
    assert_eq!(state.user_id(), None);
    assert_eq!(state.host_access(), Access::Denied);
}
