//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, location, the WASM
//! task queue) from page and session logic so both can be tested natively.

pub mod auth;
pub mod cookie;
pub mod navigate;
pub mod task;
