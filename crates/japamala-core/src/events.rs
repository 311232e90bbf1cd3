use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Every state change in the engine produces an Event.
/// The presentation layer reacts to them with sound, vibration and toasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A tap that did not close a cycle.
    TapCounted {
        mantra_id: String,
        count: u32,
        round: u32,
        date: NaiveDate,
    },
    /// A tap that closed a cycle.
    RoundCompleted {
        mantra_id: String,
        round: u32,
        cycle_length: u32,
        lifetime_rounds: u64,
        date: NaiveDate,
    },
    CountReset {
        round: u32,
    },
    CycleReset,
    MantraSelected {
        mantra_id: String,
        /// The requested id was unknown and the default was chosen instead.
        fell_back: bool,
    },
    PauseToggled {
        paused: bool,
    },
    CustomMantraAdded {
        mantra_id: String,
    },
    CustomMantraRemoved {
        mantra_id: String,
        was_active: bool,
    },
    FavoriteToggled {
        mantra_id: String,
        favorite: bool,
    },
    /// First activity check on a new day; today's totals were cleared.
    DayRolledOver {
        date: NaiveDate,
    },
    /// At least one day was missed; the streak went back to zero.
    StreakBroken {
        previous_streak: u32,
        gap_days: i64,
        date: NaiveDate,
    },
    DataReset,
}

impl Event {
    /// True iff this event is a tap that completed a cycle.
    pub fn is_round_complete(&self) -> bool {
        matches!(self, Event::RoundCompleted { .. })
    }

    /// True for both kinds of tap event.
    pub fn is_tap(&self) -> bool {
        matches!(self, Event::TapCounted { .. } | Event::RoundCompleted { .. })
    }

    /// The mantra this event is about, if any.
    pub fn mantra_id(&self) -> Option<&str> {
        match self {
            Event::TapCounted { mantra_id, .. }
            | Event::RoundCompleted { mantra_id, .. }
            | Event::MantraSelected { mantra_id, .. }
            | Event::CustomMantraAdded { mantra_id }
            | Event::CustomMantraRemoved { mantra_id, .. }
            | Event::FavoriteToggled { mantra_id, .. } => Some(mantra_id),
            _ => None,
        }
    }
}
