//! Sensory cues for tap events.
//!
//! Turns an [`Event`] plus the user's [`Settings`] into plain data. Whatever
//! drives the speaker or vibration motor decides how to act on it.

use serde::Serialize;

use crate::events::Event;
use crate::storage::{Language, Settings};

/// Vibration for an ordinary tap, in milliseconds.
pub const TAP_VIBRATION_MS: u32 = 10;

/// On/off vibration pattern for a completed round, in milliseconds.
pub const COMPLETION_VIBRATION: [u32; 5] = [100, 50, 100, 50, 200];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionCue {
    pub sound_id: String,
    pub volume: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub tap_sound: bool,
    /// Empty means no vibration.
    pub vibration: Vec<u32>,
    pub completion: Option<CompletionCue>,
    pub message: Option<String>,
}

impl Feedback {
    pub fn for_event(event: &Event, settings: &Settings) -> Self {
        if !event.is_tap() {
            return Self::default();
        }
        let complete = event.is_round_complete();

        let vibration = match (settings.vibration_enabled, complete) {
            (false, _) => Vec::new(),
            (true, false) => vec![TAP_VIBRATION_MS],
            (true, true) => COMPLETION_VIBRATION.to_vec(),
        };

        let completion = (complete && settings.sound_enabled).then(|| CompletionCue {
            sound_id: settings.completion_sound_id.clone(),
            volume: settings.completion_volume,
        });

        let message = match event {
            Event::RoundCompleted { cycle_length, .. } => {
                Some(completion_message(settings.language, *cycle_length))
            }
            _ => None,
        };

        Self {
            tap_sound: settings.sound_enabled,
            vibration,
            completion,
            message,
        }
    }

    pub fn is_silent(&self) -> bool {
        *self == Self::default()
    }
}

pub fn completion_message(language: Language, cycle_length: u32) -> String {
    match language {
        Language::En => format!("🙏 {cycle_length} chants complete! Blessed!"),
        Language::Hi => format!(
            "🙏 {} जप पूर्ण! शुभ हो!",
            devanagari_digits(&cycle_length.to_string())
        ),
    }
}

fn devanagari_digits(ascii: &str) -> String {
    ascii
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0966 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
