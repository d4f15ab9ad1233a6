//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and session work to `state::session`.

pub mod login;
pub mod register;
pub mod timeline;
