//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render timeline content and session chrome while reading
//! shared state from Leptos context providers.

pub mod post_card;
pub mod user_bar;
