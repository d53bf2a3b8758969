//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shell chrome rendered above the routed pages on every screen.

pub mod auth_status;
pub mod nav_links;
