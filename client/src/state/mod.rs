//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notice`, `plants`, `ui`) so
//! components depend on small focused models provided through context.

pub mod notice;
pub mod plants;
pub mod session;
pub mod ui;
