//! Tap counting, cycles, daily statistics and streaks.

mod engine;
mod session;
mod state;
mod stats;
mod streak;

pub use engine::{ChantingEngine, Snapshot};
pub use session::SessionState;
pub use state::ChantingState;
pub use stats::{rank_most_used, ChantingStats};
pub use streak::DayBoundary;

/// Taps in one full round of the mala.
pub const CYCLE_LENGTH: u32 = 108;
