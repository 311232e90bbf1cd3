pub mod chant;
pub mod mantra;
pub mod settings;
pub mod sounds;
pub mod stats;

use japamala_core::{ChantingEngine, Database, SystemClock};
use serde::Serialize;
use tracing::debug;

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub type Engine = ChantingEngine<Database, SystemClock>;

/// Open the store in the data directory and load the engine from it.
pub fn open_engine() -> CliResult<Engine> {
    let db = Database::open()?;
    let engine = ChantingEngine::load(db, SystemClock)?;
    debug!(
        mantra_id = %engine.session().current_mantra_id,
        count = engine.session().current_count,
        "engine ready"
    );
    Ok(engine)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
