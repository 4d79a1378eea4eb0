//! Client-side navigation: path constants, route catalog, and the guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `table` knows every screen, `guard` decides who may see it, and the app
//! shell applies both on each location change.

pub mod guard;
pub mod paths;
pub mod table;
