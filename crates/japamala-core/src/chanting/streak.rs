//! Day-boundary reconciliation.
//!
//! Whether a day was missed is decided here, from the gap between the last
//! chant date and today. Whether today counts toward the streak is decided
//! when a tap is recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ChantingStats;

/// How today relates to the last recorded chant date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DayBoundary {
    /// Nothing has ever been chanted.
    NeverChanted,
    /// Already chanted today.
    SameDay,
    /// Last chant was yesterday; the streak is still alive.
    NextDay,
    /// At least one whole day was missed.
    Broken { gap_days: i64 },
    /// Today is before the last chant date. Left alone.
    ClockRewound { gap_days: i64 },
}

impl DayBoundary {
    pub fn classify(last_chant_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(last) = last_chant_date else {
            return DayBoundary::NeverChanted;
        };
        match today.signed_duration_since(last).num_days() {
            0 => DayBoundary::SameDay,
            1 => DayBoundary::NextDay,
            gap if gap > 1 => DayBoundary::Broken { gap_days: gap },
            gap => DayBoundary::ClockRewound { gap_days: gap },
        }
    }
}

/// Bring daily totals in line with `today` before anything else happens.
///
/// A missed day zeroes the streak and today's totals; plain day rollover
/// only zeroes today's totals. Safe to call repeatedly.
pub(crate) fn reconcile(stats: &mut ChantingStats, today: NaiveDate) -> DayBoundary {
    let boundary = DayBoundary::classify(stats.last_chant_date, today);
    match boundary {
        DayBoundary::Broken { .. } => {
            stats.daily_streak = 0;
            stats.today_count = 0;
            stats.today_rounds = 0;
        }
        DayBoundary::NextDay => {
            stats.today_count = 0;
            stats.today_rounds = 0;
        }
        DayBoundary::NeverChanted | DayBoundary::SameDay | DayBoundary::ClockRewound { .. } => {}
    }
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn stats_last_chanted(day: &str) -> ChantingStats {
        ChantingStats {
            today_count: 40,
            today_rounds: 2,
            lifetime_count: 500,
            lifetime_rounds: 4,
            daily_streak: 6,
            last_chant_date: Some(date(day)),
            ..ChantingStats::default()
        }
    }

    #[test]
    fn gap_of_several_days_breaks_streak() {
        let mut stats = stats_last_chanted("2024-01-01");
        let boundary = reconcile(&mut stats, date("2024-01-05"));
        assert_eq!(boundary, DayBoundary::Broken { gap_days: 4 });
        assert_eq!(stats.daily_streak, 0);
        assert_eq!(stats.today_count, 0);
        assert_eq!(stats.today_rounds, 0);
        assert_eq!(stats.lifetime_count, 500);
    }

    #[test]
    fn next_day_keeps_streak() {
        let mut stats = stats_last_chanted("2024-01-01");
        let boundary = reconcile(&mut stats, date("2024-01-02"));
        assert_eq!(boundary, DayBoundary::NextDay);
        assert_eq!(stats.daily_streak, 6);
        assert_eq!(stats.today_count, 0);
        assert_eq!(stats.today_rounds, 0);
    }

    #[test]
    fn same_day_is_untouched() {
        let mut stats = stats_last_chanted("2024-01-01");
        let before = stats.clone();
        assert_eq!(reconcile(&mut stats, date("2024-01-01")), DayBoundary::SameDay);
        assert_eq!(stats, before);
    }

    #[test]
    fn never_chanted_is_noop() {
        let mut stats = ChantingStats::default();
        assert_eq!(
            reconcile(&mut stats, date("2024-01-01")),
            DayBoundary::NeverChanted
        );
        assert_eq!(stats, ChantingStats::default());
    }

    #[test]
    fn rewound_clock_is_noop() {
        let mut stats = stats_last_chanted("2024-01-10");
        let before = stats.clone();
        assert_eq!(
            reconcile(&mut stats, date("2024-01-08")),
            DayBoundary::ClockRewound { gap_days: -2 }
        );
        assert_eq!(stats, before);
    }

    #[test]
    fn gap_counts_calendar_days_across_months() {
        assert_eq!(
            DayBoundary::classify(Some(date("2024-02-28")), date("2024-03-01")),
            DayBoundary::Broken { gap_days: 2 }
        );
        assert_eq!(
            DayBoundary::classify(Some(date("2023-12-31")), date("2024-01-01")),
            DayBoundary::NextDay
        );
    }
}
