//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls to the backend and identity collaborator,
//! `types` defines the shared wire schema both sides agree on.

pub mod api;
pub mod types;
