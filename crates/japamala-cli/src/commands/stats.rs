use japamala_core::{ChantingStats, Mantra};
use serde::Serialize;

use super::{open_engine, print_json, CliResult};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: &'a ChantingStats,
    most_used_mantra: Option<&'a Mantra>,
    current_round: u32,
}

pub fn run() -> CliResult {
    let engine = open_engine()?;
    print_json(&StatsReport {
        stats: engine.stats(),
        most_used_mantra: engine.most_used_mantra(),
        current_round: engine.session().current_round,
    })
}
