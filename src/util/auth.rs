//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard must run on every location change, and sign-in and
//! sign-out must update storage the same way wherever they are triggered.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use super::storage;
use crate::net::types::CurrentUser;
use crate::routing::guard::{self, GuardDecision, GuardOutcome};
use crate::routing::paths;
use crate::routing::table::{self, RouteEntry, RouteKind};
use crate::state::session::{Role, SessionContext};

/// Guard redirects replace the history entry they intercept.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Re-evaluate routing on every pathname change and follow the first hop.
///
/// The session is re-read from storage for each navigation so sign-in and
/// sign-out in other tabs are honored. Must be called under a `<Router>`.
pub fn install_navigation_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        match guard_step(&path, &storage::load_session()) {
            Some((next, rule)) => {
                log::info!("guard: {path} -> {next} ({rule})");
                navigate(next, redirect_options());
            }
            None => log::debug!("guard: proceed to {path}"),
        }
    });
}

/// The redirect for a navigation to `path` with the label of what caused it:
/// `"alias"` for catalog aliases, otherwise the name of the guard rule.
pub fn guard_step(path: &str, session: &SessionContext) -> Option<(&'static str, &'static str)> {
    if let Some(&RouteEntry { kind: RouteKind::Alias(target), .. }) = table::lookup(path) {
        return Some((target, "alias"));
    }
    match guard::decide(path, session) {
        GuardDecision { rule: Some(rule), outcome: GuardOutcome::Redirect(next) } => Some((next, rule)),
        _ => None,
    }
}

/// Persist `user` as the active session and go straight to where the root
/// page settles for their role.
///
/// # Errors
///
/// Returns a display-ready message if the session cannot be stored.
pub fn sign_in<F>(user: &CurrentUser, navigate: F) -> Result<(), String>
where
    F: Fn(&str, NavigateOptions),
{
    storage::save_session(user).map_err(|e| format!("could not store session: {e}"))?;
    log::info!("signed in as user {} ({})", user.user_id, user.role);
    let session = SessionContext::signed_in(Role::parse(Some(&user.role)));
    navigate(table::settle(paths::ROOT, &session), NavigateOptions::default());
    Ok(())
}

/// Clear the session and return to the login page.
pub fn sign_out<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    storage::clear_session();
    log::info!("signed out");
    navigate(paths::LOGIN, redirect_options());
}
