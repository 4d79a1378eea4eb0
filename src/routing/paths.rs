//! Well-known client paths referenced by the guard and pages.

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const RESTAURANT_APPLY: &str = "/restaurant/apply";
pub const CUSTOMER_REGISTER: &str = "/customer/register";

/// Landing page for customers.
pub const CUSTOMER_HOME: &str = "/c";
/// Landing page for restaurant accounts.
pub const MERCHANT_STATS: &str = "/merchant/stats";
/// Landing page for riders.
pub const RIDER_HOME: &str = "/d";

/// Paths reachable without a session.
pub const PUBLIC: [&str; 3] = [LOGIN, RESTAURANT_APPLY, CUSTOMER_REGISTER];

/// True if `path` is on the public allow-list. Matching is exact.
pub fn is_public(path: &str) -> bool {
    PUBLIC.contains(&path)
}
