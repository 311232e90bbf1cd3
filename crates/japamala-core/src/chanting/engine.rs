//! Chanting engine.
//!
//! Owns the session, statistics, custom mantras and favorites, and is the
//! only thing that mutates them. Every command applies one state transition
//! and then writes all four records to the store in a single batch.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = ChantingEngine::load(Database::open()?, SystemClock)?;
//! if let Some(event) = engine.record_tap() {
//!     // play a click, vibrate, celebrate on event.is_round_complete()
//! }
//! ```
//!
//! Storage failures after load are logged and otherwise ignored; the
//! in-memory state stays authoritative for the rest of the session.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::state::ChantingState;
use super::streak::{self, DayBoundary};
use super::{ChantingStats, SessionState, CYCLE_LENGTH};
use crate::catalog::{Catalog, GalleryFilter, Mantra, NewMantra, DEFAULT_MANTRA_ID};
use crate::clock::Clock;
use crate::error::StoreError;
use crate::events::Event;
use crate::storage::KeyValueStore;

/// Everything a presentation layer needs to draw the counter screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub session: SessionState,
    pub stats: ChantingStats,
    pub current_mantra: Mantra,
    pub cycle_length: u32,
    /// 0.0 .. 100.0 through the current cycle.
    pub progress_pct: f64,
    pub favorites: Vec<String>,
    pub most_used_mantra: Option<Mantra>,
}

pub struct ChantingEngine<S, C> {
    store: S,
    clock: C,
    state: ChantingState,
    cycle_length: u32,
    /// Last rollover or streak break noticed outside `reconcile_day`.
    day_event: Option<Event>,
}

impl<S: KeyValueStore, C: Clock> ChantingEngine<S, C> {
    /// Load persisted state, repair dangling references and reconcile the
    /// day boundary against `clock`.
    ///
    /// # Errors
    /// Returns an error only if reading from the store fails.
    pub fn load(store: S, clock: C) -> Result<Self, StoreError> {
        let state = ChantingState::load(&store)?;
        let mut engine = Self {
            store,
            clock,
            state,
            cycle_length: CYCLE_LENGTH,
            day_event: None,
        };

        let today = engine.clock.today();
        let mut changed = engine.state.normalize(engine.cycle_length);
        if let Some(event) = engine.reconcile_in_place(today) {
            engine.day_event = Some(event);
            changed = true;
        }
        if changed {
            engine.persist();
        }

        debug!(
            mantra_id = %engine.state.session.current_mantra_id,
            count = engine.state.session.current_count,
            round = engine.state.session.current_round,
            streak = engine.state.stats.daily_streak,
            "chanting engine loaded"
        );
        Ok(engine)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> &SessionState {
        &self.state.session
    }

    pub fn stats(&self) -> &ChantingStats {
        &self.state.stats
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn catalog(&self) -> Catalog<'_> {
        self.state.catalog()
    }

    /// The active mantra, or the default one if the id no longer resolves.
    pub fn current_mantra(&self) -> &Mantra {
        self.catalog().resolve(&self.state.session.current_mantra_id)
    }

    pub fn all_mantras(&self) -> Vec<Mantra> {
        self.catalog().to_vec()
    }

    pub fn custom_mantras(&self) -> &[Mantra] {
        &self.state.custom_mantras
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.state.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.favorites.contains(id)
    }

    pub fn gallery(&self, filter: GalleryFilter, query: Option<&str>) -> Vec<&Mantra> {
        filter.apply(&self.catalog(), &self.state.favorites, query)
    }

    pub fn most_used_mantra(&self) -> Option<&Mantra> {
        let id = self.state.stats.most_used_mantra_id.as_deref()?;
        self.catalog().find(id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.state.session.clone(),
            stats: self.state.stats.clone(),
            current_mantra: self.current_mantra().clone(),
            cycle_length: self.cycle_length,
            progress_pct: self.state.session.progress_pct(self.cycle_length),
            favorites: self.state.favorites.iter().cloned().collect(),
            most_used_mantra: self.most_used_mantra().cloned(),
        }
    }

    /// Take the day rollover or streak break that `load` or `record_tap`
    /// applied, if any.
    pub fn take_day_event(&mut self) -> Option<Event> {
        self.day_event.take()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Count one tap on the active mantra.
    ///
    /// The day boundary is reconciled first, so a session left open across
    /// midnight still notices a missed day. Returns `None` while paused.
    pub fn record_tap(&mut self) -> Option<Event> {
        if self.state.session.is_paused {
            debug!("tap ignored while paused");
            return None;
        }

        let today = self.clock.today();
        if let Some(event) = self.reconcile_in_place(today) {
            info!(?event, "day boundary crossed before tap");
            self.day_event = Some(event);
        }

        let mantra_id = self.state.session.current_mantra_id.clone();
        let completed = self.state.session.advance(self.cycle_length);
        self.state.stats.record_tap(&mantra_id, completed, today);
        self.persist();

        if completed {
            info!(
                mantra_id = %mantra_id,
                round = self.state.session.current_round,
                lifetime_rounds = self.state.stats.lifetime_rounds,
                "round completed"
            );
            Some(Event::RoundCompleted {
                mantra_id,
                round: self.state.session.current_round,
                cycle_length: self.cycle_length,
                lifetime_rounds: self.state.stats.lifetime_rounds,
                date: today,
            })
        } else {
            Some(Event::TapCounted {
                mantra_id,
                count: self.state.session.current_count,
                round: self.state.session.current_round,
                date: today,
            })
        }
    }

    /// Re-check the day boundary without tapping. Returns an event when
    /// today's totals were cleared.
    pub fn reconcile_day(&mut self) -> Option<Event> {
        let today = self.clock.today();
        let event = self.reconcile_in_place(today)?;
        self.persist();
        Some(event)
    }

    pub fn reset_count(&mut self) -> Option<Event> {
        self.state.session.reset_count();
        self.persist();
        Some(Event::CountReset {
            round: self.state.session.current_round,
        })
    }

    pub fn reset_cycle(&mut self) -> Option<Event> {
        self.state.session.reset_cycle();
        self.persist();
        Some(Event::CycleReset)
    }

    /// Make `id` the active mantra and restart the count. The round is kept.
    /// Unknown ids select the default mantra instead.
    pub fn select_mantra(&mut self, id: &str) -> Option<Event> {
        let fell_back = !self.catalog().contains(id);
        let mantra_id = if fell_back {
            warn!(requested = id, "unknown mantra, selecting default");
            DEFAULT_MANTRA_ID.to_string()
        } else {
            id.to_string()
        };

        self.state.session.current_mantra_id = mantra_id.clone();
        self.state.session.reset_count();
        self.persist();
        Some(Event::MantraSelected {
            mantra_id,
            fell_back,
        })
    }

    pub fn toggle_pause(&mut self) -> Option<Event> {
        let session = &mut self.state.session;
        session.is_paused = !session.is_paused;
        let paused = session.is_paused;
        self.persist();
        Some(Event::PauseToggled { paused })
    }

    /// Append a custom mantra. The returned event carries its new id.
    ///
    /// Input is not validated here; callers run [`NewMantra::validate`].
    pub fn add_custom_mantra(&mut self, new: NewMantra) -> Option<Event> {
        let id = format!("custom-{}", Uuid::now_v7());
        self.state.custom_mantras.push(new.into_mantra(id.clone()));
        self.persist();
        info!(mantra_id = %id, "custom mantra added");
        Some(Event::CustomMantraAdded { mantra_id: id })
    }

    /// Remove a custom mantra, its favorite entry, and the active pointer to
    /// it. Seed mantras and unknown ids are left alone.
    pub fn remove_custom_mantra(&mut self, id: &str) -> Option<Event> {
        let pos = self.state.custom_mantras.iter().position(|m| m.id == id)?;
        self.state.custom_mantras.remove(pos);
        self.state.favorites.remove(id);

        let was_active = self.state.session.current_mantra_id == id;
        if was_active {
            self.state.session.current_mantra_id = DEFAULT_MANTRA_ID.to_string();
            self.state.session.reset_count();
        }
        self.persist();
        info!(mantra_id = id, was_active, "custom mantra removed");
        Some(Event::CustomMantraRemoved {
            mantra_id: id.to_string(),
            was_active,
        })
    }

    /// Flip favorite membership. Only catalog ids can be added; any id can
    /// be removed.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<Event> {
        let favorite = if self.state.favorites.remove(id) {
            false
        } else if self.catalog().contains(id) {
            self.state.favorites.insert(id.to_string());
            true
        } else {
            warn!(mantra_id = id, "cannot favorite unknown mantra");
            return None;
        };
        self.persist();
        Some(Event::FavoriteToggled {
            mantra_id: id.to_string(),
            favorite,
        })
    }

    /// Wipe session, statistics, custom mantras and favorites. Settings are
    /// stored separately and survive.
    pub fn reset_all_data(&mut self) -> Option<Event> {
        self.state = ChantingState::default();
        self.day_event = None;
        self.persist();
        info!("all chanting data reset");
        Some(Event::DataReset)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn reconcile_in_place(&mut self, today: NaiveDate) -> Option<Event> {
        let previous_streak = self.state.stats.daily_streak;
        match streak::reconcile(&mut self.state.stats, today) {
            DayBoundary::NextDay => {
                debug!(%today, "new day, cleared today's totals");
                Some(Event::DayRolledOver { date: today })
            }
            DayBoundary::Broken { gap_days } => {
                info!(%today, gap_days, previous_streak, "streak broken");
                Some(Event::StreakBroken {
                    previous_streak,
                    gap_days,
                    date: today,
                })
            }
            DayBoundary::ClockRewound { gap_days } => {
                warn!(%today, gap_days, "clock is behind the last chant date");
                None
            }
            DayBoundary::NeverChanted | DayBoundary::SameDay => None,
        }
    }

    fn persist(&mut self) {
        let entries = match self.state.to_entries() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "failed to encode chanting state");
                return;
            }
        };
        if let Err(err) = self.store.set_many(&entries) {
            warn!(error = %err, "failed to persist chanting state");
        }
    }
}
