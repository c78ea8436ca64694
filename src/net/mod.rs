//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls against the finance backend and `types`
//! defines the shared wire schema. The backend itself is an external
//! collaborator; nothing here owns its data model.

pub mod api;
pub mod types;
