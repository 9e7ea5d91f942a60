//! Host-side runtime for the arena.
//!
//! This crate wires the pure `game-core` controller to the outside world:
//! a real clock and RNG, stock observers, key translation, and environment
//! configuration. Hosts embed [`Session`] and forward [`HostKey`]s and ticks.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`input`] maps host keys onto controller inputs per phase
//! - [`observers`] provides the stock `Logger`, `Announcer`, and a recorder
//! - [`rng`] and [`clock`] provide production adapters for the core seams
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod observers;
pub mod rng;
pub mod session;

pub use clock::SystemClock;
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use input::{HostKey, parse_key, translate};
pub use observers::{Announcer, EventRecorder, Logger};
pub use rng::ChaChaRng;
pub use session::{KeyOutcome, Session, SessionBuilder};
