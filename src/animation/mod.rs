//! Animation-rate values and spring physics (pure).
//!
//! Everything here runs on the per-frame path: no blocking, no I/O, no
//! access to host state. The driver owns the sheet's continuous
//! presentation values; the rest of the system sees them only through
//! read-only snapshots and the controller's discrete commit events.

pub mod driver;
pub mod spring;
pub mod value;

// Re-export for convenience
pub use driver::{AnimationDriver, AnimationState, CardTarget};
pub use spring::{Spring, SpringParams};
pub use value::AnimatedValue;
