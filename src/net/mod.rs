//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and its HTTP implementation, `types` defines
//! the wire schema and transport errors.

pub mod api;
pub mod types;
