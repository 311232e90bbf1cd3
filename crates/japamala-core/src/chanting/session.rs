use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_MANTRA_ID;

/// What is being chanted right now and how far along the cycle it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub current_mantra_id: String,
    /// Taps since the last completed cycle, always below the cycle length.
    pub current_count: u32,
    /// Completed cycles since the last explicit reset.
    pub current_round: u32,
    pub is_paused: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_mantra_id: DEFAULT_MANTRA_ID.to_string(),
            current_count: 0,
            current_round: 0,
            is_paused: false,
        }
    }
}

impl SessionState {
    /// Count one tap. Returns `true` when the tap closes a cycle, in which
    /// case the count wraps to zero and the round advances.
    pub(crate) fn advance(&mut self, cycle_length: u32) -> bool {
        let completed = self.current_count + 1 >= cycle_length;
        if completed {
            self.current_count = 0;
            self.current_round += 1;
        } else {
            self.current_count += 1;
        }
        completed
    }

    pub(crate) fn reset_count(&mut self) {
        self.current_count = 0;
    }

    pub(crate) fn reset_cycle(&mut self) {
        self.current_count = 0;
        self.current_round = 0;
    }

    /// 0.0 .. 100.0 progress through the current cycle.
    pub fn progress_pct(&self, cycle_length: u32) -> f64 {
        if cycle_length == 0 {
            return 0.0;
        }
        f64::from(self.current_count) / f64::from(cycle_length) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_cycle_length() {
        let mut s = SessionState {
            current_count: 107,
            ..SessionState::default()
        };
        assert!(s.advance(108));
        assert_eq!(s.current_count, 0);
        assert_eq!(s.current_round, 1);
    }

    #[test]
    fn advance_below_boundary() {
        let mut s = SessionState::default();
        assert!(!s.advance(108));
        assert_eq!(s.current_count, 1);
        assert_eq!(s.current_round, 0);
    }

    #[test]
    fn cycle_length_one_completes_every_tap() {
        let mut s = SessionState::default();
        assert!(s.advance(1));
        assert!(s.advance(1));
        assert_eq!(s.current_round, 2);
        assert_eq!(s.current_count, 0);
    }

    #[test]
    fn reset_cycle_clears_count_and_round() {
        let mut s = SessionState {
            current_count: 9,
            current_round: 3,
            ..SessionState::default()
        };
        s.reset_count();
        assert_eq!((s.current_count, s.current_round), (0, 3));
        s.current_count = 5;
        s.reset_cycle();
        assert_eq!((s.current_count, s.current_round), (0, 0));
    }

    #[test]
    fn progress_pct() {
        let s = SessionState {
            current_count: 54,
            ..SessionState::default()
        };
        assert_eq!(s.progress_pct(108), 50.0);
        assert_eq!(s.progress_pct(0), 0.0);
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let json = serde_json::to_value(SessionState::default()).unwrap();
        assert_eq!(json["currentMantraId"], "shiva-1");
        assert_eq!(json["currentCount"], 0);
        assert_eq!(json["currentRound"], 0);
        assert_eq!(json["isPaused"], false);
    }
}
