//! Networking modules for the invoice REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the load/save collaborator and its HTTP implementation;
//! `types` defines the wire schema and its conversion to form state.

pub mod api;
pub mod types;
