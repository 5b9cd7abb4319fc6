//! # Route Handlers
//!
//! Re-exports the handlers used by the router.

pub mod banner;
pub mod general;

pub use banner::{generate_banner_handler, method_not_allowed};
pub use general::{health_check, root};
