//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session snapshot is a plain value so routing decisions can be made
//! without touching browser storage.

pub mod session;
