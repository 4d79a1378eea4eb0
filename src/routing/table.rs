//! Client route catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen of the application is registered here with a stable name.
//! Alias entries forward to another path before the guard runs, mirroring
//! router semantics where record-level redirects resolve first.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::guard::{self, GuardOutcome};
use crate::state::session::SessionContext;

/// Upper bound on redirect hops followed by [`settle`].
pub const MAX_REDIRECTS: usize = 8;

/// Which part of the application a route belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Public,
    Customer,
    Rider,
    /// Admin and merchant screens sharing the console layout.
    Console,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    Page,
    Alias(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub area: Area,
    pub kind: RouteKind,
}

const fn page(path: &'static str, name: &'static str, title: &'static str, area: Area) -> RouteEntry {
    RouteEntry { path, name, title, area, kind: RouteKind::Page }
}

const fn alias(path: &'static str, name: &'static str, target: &'static str) -> RouteEntry {
    RouteEntry { path, name, title: name, area: Area::Console, kind: RouteKind::Alias(target) }
}

pub static ROUTES: [RouteEntry; 25] = [
    page("/login", "Login", "Sign in", Area::Public),
    page("/restaurant/apply", "RestaurantApply", "Restaurant application", Area::Public),
    page("/customer/register", "CustomerRegister", "Create an account", Area::Public),
    page("/c", "CustomerHome", "Restaurants near you", Area::Customer),
    page("/c/orders", "CustomerOrders", "My orders", Area::Customer),
    page("/c/stats", "CustomerStats", "My spending", Area::Customer),
    page("/c/addresses", "CustomerAddresses", "Delivery addresses", Area::Customer),
    page("/c/profile", "CustomerProfile", "Profile", Area::Customer),
    page("/d", "RiderHome", "My deliveries", Area::Rider),
    page("/d/hall", "RiderHall", "Order hall", Area::Rider),
    page("/", "Dashboard", "Dashboard", Area::Console),
    page("/orders", "Orders", "Orders", Area::Console),
    page("/restaurants", "Restaurants", "Restaurants", Area::Console),
    page("/customers", "Customers", "Customers", Area::Console),
    alias("/restaurant-users", "RestaurantUsers", "/restaurants"),
    alias("/commission", "Commission", "/"),
    page("/stats", "Stats", "Platform statistics", Area::Console),
    page("/payment-logs", "PaymentLogs", "Payment logs", Area::Console),
    page("/ratings", "RatingsAdmin", "Ratings", Area::Console),
    page("/delivery-staff", "DeliveryStaff", "Delivery staff", Area::Console),
    alias("/delivery-staff-users", "DeliveryStaffUsers", "/delivery-staff"),
    page("/restaurant-applications", "RestaurantApplications", "Restaurant applications", Area::Console),
    page("/merchant/dishes", "MerchantDishes", "Dishes", Area::Console),
    page("/merchant/promotions", "MerchantPromotions", "Promotions", Area::Console),
    page("/merchant/stats", "MerchantStats", "Store statistics", Area::Console),
];

/// Drop one trailing slash, keeping `/` itself.
fn trim_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    }
}

/// Find the route registered for `path`.
pub fn lookup(path: &str) -> Option<&'static RouteEntry> {
    let path = trim_trailing_slash(path);
    ROUTES.iter().find(|route| route.path == path)
}

/// Follow an alias entry, or return `path` unchanged.
pub fn resolve_alias(path: &str) -> &str {
    match lookup(path) {
        Some(&RouteEntry { kind: RouteKind::Alias(target), .. }) => target,
        _ => path,
    }
}

/// The single redirect, if any, applied to a navigation to `path`.
///
/// An alias forwards before the guard is consulted; the guard then runs
/// on the alias target as a navigation of its own.
pub fn next_hop(path: &str, session: &SessionContext) -> Option<&'static str> {
    if let Some(&RouteEntry { kind: RouteKind::Alias(target), .. }) = lookup(path) {
        return Some(target);
    }
    match guard::evaluate(path, session) {
        GuardOutcome::Redirect(to) => Some(to),
        GuardOutcome::Proceed => None,
    }
}

/// Final destination of a navigation to `path` after following every hop.
///
/// Gives up after [`MAX_REDIRECTS`] hops and returns the last path reached.
pub fn settle<'a>(path: &'a str, session: &SessionContext) -> &'a str {
    let (dest, exhausted) = follow(path, MAX_REDIRECTS, |current| next_hop(current, session));
    if exhausted {
        log::warn!("redirect limit reached navigating to {path}");
    }
    dest
}

/// Apply `step` until it yields no new path or `max_hops` hops are taken.
///
/// The flag is set only when a further hop was still pending at the limit.
fn follow<'a, F>(path: &'a str, max_hops: usize, step: F) -> (&'a str, bool)
where
    F: Fn(&str) -> Option<&'static str>,
{
    let mut current = path;
    for _ in 0..max_hops {
        match step(current) {
            Some(next) if next != current => current = next,
            _ => return (current, false),
        }
    }
    let pending = step(current).is_some_and(|next| next != current);
    (current, pending)
}
