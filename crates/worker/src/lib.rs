//! Cooperative timer primitives for the storefront event loop.
//!
//! Everything runs on one logical thread. Timers are entries in a
//! [`Scheduler`] keyed by due time; the owner drains due tasks one at a time
//! and runs each to completion before taking the next, so handlers never
//! interleave. Time is virtual: it only moves when the owner advances it.

mod debounce;
mod scheduler;

pub use debounce::Debounce;
pub use scheduler::{FRAME_INTERVAL, Scheduler, TimerId};
