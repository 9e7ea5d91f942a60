//! Match state representation.
//!
//! Plain data describing where a match stands: the match phase, whose turn
//! it is, and the per-side animation phase with its start instant. The
//! engine owns and mutates these; hosts read them through
//! [`MatchSnapshot`].
mod phase;
mod snapshot;

pub use phase::{MatchPhase, ShakeRequest, Side, SidePhase, SideState, Turn};
pub use snapshot::{FighterView, MatchSnapshot};
