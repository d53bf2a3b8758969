//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is applied by
//! the route table, not by the pages themselves.

pub mod home;
pub mod login;
pub mod protected;
pub mod public;
