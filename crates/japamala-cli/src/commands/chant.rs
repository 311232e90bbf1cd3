use clap::Subcommand;
use japamala_core::{Event, Feedback, KeyValueStore, SessionState, Settings};
use serde::Serialize;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum ResetTarget {
    /// Set the current count back to zero
    Count,
    /// Set the count and the round back to zero
    Round,
    /// Erase all chanting data (settings are kept)
    All {
        /// Confirm the irreversible reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TapReport {
    taps: u32,
    rounds_completed: u32,
    last_event: Option<Event>,
    /// Set when the taps started a new day or followed a missed one.
    day_event: Option<Event>,
    feedback: Feedback,
    session: SessionState,
}

pub fn status() -> CliResult {
    let engine = open_engine()?;
    print_json(&engine.snapshot())
}

pub fn tap(times: u32) -> CliResult {
    let mut engine = open_engine()?;
    if engine.session().is_paused {
        return Err("chanting is paused; run `japamala pause` to resume".into());
    }

    let mut taps = 0;
    let mut rounds_completed = 0;
    let mut last_event = None;
    let mut cue_event = None;
    for _ in 0..times {
        let Some(event) = engine.record_tap() else {
            break;
        };
        taps += 1;
        if event.is_round_complete() {
            rounds_completed += 1;
            cue_event = Some(event.clone());
        }
        last_event = Some(event);
    }

    let settings = load_settings(engine.store())?;
    let feedback = cue_event
        .as_ref()
        .or(last_event.as_ref())
        .map(|e| Feedback::for_event(e, &settings))
        .unwrap_or_default();

    print_json(&TapReport {
        taps,
        rounds_completed,
        last_event,
        day_event: engine.take_day_event(),
        feedback,
        session: engine.session().clone(),
    })
}

pub fn reset(target: ResetTarget) -> CliResult {
    let mut engine = open_engine()?;
    let event = match target {
        ResetTarget::Count => engine.reset_count(),
        ResetTarget::Round => engine.reset_cycle(),
        ResetTarget::All { yes: false } => {
            return Err("refusing to erase all data without --yes".into());
        }
        ResetTarget::All { yes: true } => engine.reset_all_data(),
    };
    print_json(&event)
}

pub fn select(id: &str) -> CliResult {
    let mut engine = open_engine()?;
    let event = engine.select_mantra(id);
    if let Some(Event::MantraSelected { fell_back: true, .. }) = &event {
        eprintln!("unknown mantra '{id}', selected the default instead");
    }
    print_json(&event)
}

pub fn pause() -> CliResult {
    let mut engine = open_engine()?;
    print_json(&engine.toggle_pause())
}

fn load_settings<S: KeyValueStore>(store: &S) -> CliResult<Settings> {
    Ok(Settings::load(store)?)
}
