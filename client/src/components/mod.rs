//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, plant tables and forms while reading
//! session, notice and UI state from Leptos context providers.

pub mod confirm_dialog;
pub mod footer;
pub mod google_button;
pub mod navbar;
pub mod plant_form;
pub mod plant_table;
pub mod route_guard;
pub mod toast;
