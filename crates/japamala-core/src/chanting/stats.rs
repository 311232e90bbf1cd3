//! Cumulative and daily chanting statistics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChantingStats {
    pub today_count: u64,
    pub today_rounds: u64,
    pub lifetime_count: u64,
    pub lifetime_rounds: u64,
    /// Consecutive calendar days with at least one tap.
    pub daily_streak: u32,
    pub last_chant_date: Option<NaiveDate>,
    pub most_used_mantra_id: Option<String>,
    /// Taps per mantra id. Ordered by id, which fixes the tie-break in
    /// [`rank_most_used`].
    pub mantra_usage: BTreeMap<String, u64>,
}

impl ChantingStats {
    /// Apply one tap on `mantra_id` made on `today`.
    pub(crate) fn record_tap(&mut self, mantra_id: &str, completed_round: bool, today: NaiveDate) {
        let is_new_day = self.last_chant_date != Some(today);

        self.today_count = if is_new_day { 1 } else { self.today_count + 1 };
        self.today_rounds = match (completed_round, is_new_day) {
            (true, true) => 1,
            (true, false) => self.today_rounds + 1,
            (false, true) => 0,
            (false, false) => self.today_rounds,
        };
        self.lifetime_count += 1;
        if completed_round {
            self.lifetime_rounds += 1;
        }
        if is_new_day {
            self.daily_streak += 1;
        }

        *self.mantra_usage.entry(mantra_id.to_string()).or_insert(0) += 1;
        self.most_used_mantra_id = rank_most_used(&self.mantra_usage);
        self.last_chant_date = Some(today);
    }

    pub fn usage_of(&self, mantra_id: &str) -> u64 {
        self.mantra_usage.get(mantra_id).copied().unwrap_or(0)
    }
}

/// The id with the highest tap count.
///
/// Ties go to the lexicographically smallest id, so the answer never depends
/// on the order in which mantras were first used.
pub fn rank_most_used(usage: &BTreeMap<String, u64>) -> Option<String> {
    let mut best: Option<(&String, u64)> = None;
    for (id, &count) in usage {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((id, count));
        }
    }
    best.map(|(id, _)| id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn first_tap_starts_streak() {
        let mut stats = ChantingStats::default();
        stats.record_tap("shiva-1", false, date("2024-01-01"));
        assert_eq!(stats.today_count, 1);
        assert_eq!(stats.today_rounds, 0);
        assert_eq!(stats.lifetime_count, 1);
        assert_eq!(stats.daily_streak, 1);
        assert_eq!(stats.last_chant_date, Some(date("2024-01-01")));
        assert_eq!(stats.most_used_mantra_id.as_deref(), Some("shiva-1"));
    }

    #[test]
    fn same_day_taps_accumulate() {
        let mut stats = ChantingStats::default();
        let day = date("2024-01-01");
        stats.record_tap("a", false, day);
        stats.record_tap("a", true, day);
        stats.record_tap("a", true, day);
        assert_eq!(stats.today_count, 3);
        assert_eq!(stats.today_rounds, 2);
        assert_eq!(stats.lifetime_rounds, 2);
        assert_eq!(stats.daily_streak, 1);
    }

    #[test]
    fn new_day_without_completion_zeroes_today_rounds() {
        let mut stats = ChantingStats::default();
        stats.record_tap("a", true, date("2024-01-01"));
        stats.record_tap("a", false, date("2024-01-02"));
        assert_eq!(stats.today_count, 1);
        assert_eq!(stats.today_rounds, 0);
        assert_eq!(stats.lifetime_rounds, 1);
        assert_eq!(stats.daily_streak, 2);
    }

    #[test]
    fn new_day_with_completion_sets_one_round() {
        let mut stats = ChantingStats::default();
        stats.record_tap("a", true, date("2024-01-01"));
        stats.record_tap("a", true, date("2024-01-02"));
        assert_eq!(stats.today_rounds, 1);
        assert_eq!(stats.lifetime_rounds, 2);
    }

    #[test]
    fn tie_goes_to_smallest_id() {
        let usage: BTreeMap<String, u64> = [("b".to_string(), 5), ("a".to_string(), 5)].into();
        assert_eq!(rank_most_used(&usage).as_deref(), Some("a"));
    }

    #[test]
    fn strictly_higher_count_wins() {
        let usage: BTreeMap<String, u64> =
            [("a".to_string(), 2), ("z".to_string(), 7), ("m".to_string(), 7)].into();
        assert_eq!(rank_most_used(&usage).as_deref(), Some("m"));
        assert_eq!(rank_most_used(&BTreeMap::new()), None);
    }

    #[test]
    fn usage_sums_to_lifetime_count() {
        let mut stats = ChantingStats::default();
        let day = date("2024-03-10");
        for id in ["a", "b", "a", "c", "a"] {
            stats.record_tap(id, false, day);
        }
        assert_eq!(stats.mantra_usage.values().sum::<u64>(), stats.lifetime_count);
        assert_eq!(stats.usage_of("a"), 3);
        assert_eq!(stats.usage_of("missing"), 0);
    }

    #[test]
    fn serializes_dates_as_plain_days() {
        let mut stats = ChantingStats::default();
        stats.record_tap("a", false, date("2024-01-05"));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["lastChantDate"], "2024-01-05");
        assert_eq!(json["mantraUsage"]["a"], 1);
        assert_eq!(json["dailyStreak"], 1);
    }

    #[test]
    fn never_chanted_serializes_null_date() {
        let json = serde_json::to_value(ChantingStats::default()).unwrap();
        assert!(json["lastChantDate"].is_null());
        assert!(json["mostUsedMantraId"].is_null());
    }
}
