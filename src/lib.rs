//! snapsheet
//!
//! An interactive snap-point bottom sheet controller: a draggable overlay
//! that resizes between named detents or dismisses on a vertical drag, and
//! tosses its content card toward a sibling record on a horizontal swipe,
//! with spring-physics settling throughout.
//!
//! The crate follows a Pure Core / Impure Shell architecture. The core
//! ([`model`], [`animation`], [`state`]) is pure and host-agnostic: pointer
//! samples in, per-frame animation values and discrete commit events out.
//! The shell ([`input`], [`view`], the demo binary) hosts that core in a
//! terminal over crossterm mouse events.

pub mod animation;
pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
