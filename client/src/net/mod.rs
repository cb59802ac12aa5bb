//! Networking modules for the identity service and the plant service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` is the adapter the session store subscribes to, `firebase` is
//! its REST backend, `plants` handles plant CRUD calls, and `types` defines
//! the shared wire schema.

pub mod firebase;
pub mod identity;
pub mod plants;
pub mod types;
