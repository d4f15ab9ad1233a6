//! Networking modules for the backend-as-a-service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the remote seam, `api` implements it over the Backendless
//! REST API, `types` holds the wire schema and `error` the failure taxonomy.

pub mod api;
pub mod backend;
pub mod error;
pub mod types;
