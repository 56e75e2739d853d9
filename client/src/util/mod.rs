//! Utility helpers shared across tutorial modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `scheduler` and `geometry` are pure and browser-free; `timer` binds the
//! simulated clock to real browser timeouts in the hydrated build.

pub mod geometry;
pub mod scheduler;
pub mod timer;
