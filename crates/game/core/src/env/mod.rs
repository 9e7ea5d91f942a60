//! Injected environment for the engine.
//!
//! The controller owns exactly two outside dependencies: a random source and
//! the current instant. Both are traits so hosts can plug real sources and
//! tests can script them.
mod clock;
mod rng;

pub use clock::{Clock, ManualClock, Timestamp};
pub use rng::{RngOracle, SequenceRng};
