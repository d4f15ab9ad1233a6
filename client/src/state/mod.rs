//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the authoritative session and its operations; `auth` is
//! the reactive snapshot components render from.

pub mod auth;
pub mod session;
