//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in reactive signals provided via context, so pages and
//! components read it without threading props through the route tree.

pub mod session;
