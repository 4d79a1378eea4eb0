//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` owns the sign-in flow; every other catalog route renders through
//! `route_page`.

pub mod login;
pub mod route_page;
