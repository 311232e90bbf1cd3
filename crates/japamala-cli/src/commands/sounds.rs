use clap::ValueEnum;
use japamala_core::audio::{AudioTrack, AMBIENT_TRACKS, COMPLETION_SOUNDS, SILENCE};

use super::{print_json, CliResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SoundKind {
    Ambient,
    Completion,
}

pub fn run(kind: Option<SoundKind>) -> CliResult {
    let ambient = std::iter::once(&SILENCE).chain(AMBIENT_TRACKS.iter());
    let tracks: Vec<&AudioTrack> = match kind {
        Some(SoundKind::Ambient) => ambient.collect(),
        Some(SoundKind::Completion) => COMPLETION_SOUNDS.iter().collect(),
        None => ambient.chain(COMPLETION_SOUNDS.iter()).collect(),
    };
    print_json(&tracks)
}
