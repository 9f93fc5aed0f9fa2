use super::*;
use crate::net::types::User;

fn signed_in(role: &str) -> SessionStore {
    let store = SessionStore::in_memory();
    let user = User {
        id: 1,
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        role: role.to_owned(),
    };
    store.set_session("tok", &user);
    store
}

// =============================================================
// require_auth
// =============================================================

#[test]
fn require_auth_redirects_signed_out_to_login() {
    let store = SessionStore::in_memory();
    assert_eq!(require_auth(&store), Gate::Redirect("/login"));
}

#[test]
fn require_auth_allows_any_signed_in_user() {
    assert_eq!(require_auth(&signed_in("user")), Gate::Allow);
    assert_eq!(require_auth(&signed_in("admin")), Gate::Allow);
}

// =============================================================
// require_admin
// =============================================================

#[test]
fn require_admin_redirects_signed_out_to_login() {
    let store = SessionStore::in_memory();
    assert_eq!(require_admin(&store), Gate::Redirect("/login"));
}

#[test]
fn require_admin_sends_non_admin_to_default_page() {
    assert_eq!(require_admin(&signed_in("user")), Gate::Redirect("/upload"));
}

#[test]
fn require_admin_allows_admin() {
    assert_eq!(require_admin(&signed_in("admin")), Gate::Allow);
}

// =============================================================
// Full sign-in / sign-out walkthroughs
// =============================================================

#[test]
fn fresh_login_as_user_cannot_reach_admin() {
    // Login response stored, then a navigation to /admin is attempted.
    let store = SessionStore::in_memory();
    let user = User {
        id: 2,
        email: "eve@example.com".to_owned(),
        name: "Eve".to_owned(),
        role: "user".to_owned(),
    };
    store.set_session("fresh-token", &user);

    assert!(store.is_authenticated());
    assert_eq!(require_admin(&store), Gate::Redirect("/upload"));
}

#[test]
fn guards_react_to_forced_sign_out() {
    let store = signed_in("admin");
    assert_eq!(require_admin(&store), Gate::Allow);

    store.expire();

    assert_eq!(require_auth(&store), Gate::Redirect("/login"));
    assert_eq!(require_admin(&store), Gate::Redirect("/login"));
}
