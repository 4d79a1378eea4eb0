//! Pre-navigation guard.
//!
//! DESIGN
//! ======
//! The guard is a pure function of the target path and a session snapshot.
//! Rules form an ordered table; the first rule whose predicate holds decides
//! the outcome and later rules are never consulted. When no rule matches the
//! navigation proceeds unmodified.
//!
//! ORDER
//! =====
//! 1. `require-session`      non-public path without a session -> `/login`
//! 2. `customer-home`        customer at `/`                   -> `/c`
//! 3. `restaurant-home`      restaurant at `/`                 -> `/merchant/stats`
//! 4. `delivery-home`        rider at `/`                      -> `/d`
//! 5. `login-when-signed-in` any session at `/login`           -> `/`
//!
//! Signed-in admins and unrecognized roles at `/` match none of the above
//! and proceed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::paths;
use crate::state::session::{Role, SessionContext};

/// Result of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Continue to the requested path.
    Proceed,
    /// Replace the navigation with this path.
    Redirect(&'static str),
}

/// Outcome plus the name of the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    pub rule: Option<&'static str>,
    pub outcome: GuardOutcome,
}

struct Rule {
    name: &'static str,
    applies: fn(&str, &SessionContext) -> bool,
    redirect_to: &'static str,
}

static RULES: [Rule; 5] = [
    Rule { name: "require-session", applies: requires_session, redirect_to: paths::LOGIN },
    Rule { name: "customer-home", applies: customer_at_root, redirect_to: paths::CUSTOMER_HOME },
    Rule { name: "restaurant-home", applies: restaurant_at_root, redirect_to: paths::MERCHANT_STATS },
    Rule { name: "delivery-home", applies: rider_at_root, redirect_to: paths::RIDER_HOME },
    Rule { name: "login-when-signed-in", applies: signed_in_at_login, redirect_to: paths::ROOT },
];

fn requires_session(target: &str, session: &SessionContext) -> bool {
    !paths::is_public(target) && !session.is_signed_in()
}

fn customer_at_root(target: &str, session: &SessionContext) -> bool {
    session.is_signed_in_as(Role::Customer) && target == paths::ROOT
}

fn restaurant_at_root(target: &str, session: &SessionContext) -> bool {
    session.is_signed_in_as(Role::Restaurant) && target == paths::ROOT
}

fn rider_at_root(target: &str, session: &SessionContext) -> bool {
    session.is_signed_in_as(Role::Delivery) && target == paths::ROOT
}

fn signed_in_at_login(target: &str, session: &SessionContext) -> bool {
    target == paths::LOGIN && session.is_signed_in()
}

/// Evaluate the rule table and report which rule fired.
pub fn decide(target: &str, session: &SessionContext) -> GuardDecision {
    RULES
        .iter()
        .find(|rule| (rule.applies)(target, session))
        .map_or(GuardDecision { rule: None, outcome: GuardOutcome::Proceed }, |rule| GuardDecision {
            rule: Some(rule.name),
            outcome: GuardOutcome::Redirect(rule.redirect_to),
        })
}

/// Evaluate the guard for a navigation to `target`.
pub fn evaluate(target: &str, session: &SessionContext) -> GuardOutcome {
    decide(target, session).outcome
}
