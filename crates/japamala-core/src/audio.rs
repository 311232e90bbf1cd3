//! Built-in sound catalog.
//!
//! Only identifiers and display names live here; playback belongs to the
//! presentation layer. Settings use this list to reject unknown completion
//! sounds.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Ambient,
    Completion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackCategory {
    Temple,
    Instrumental,
    Nature,
    Chants,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    pub id: &'static str,
    pub name_en: &'static str,
    pub name_hi: &'static str,
    pub kind: TrackKind,
    pub category: TrackCategory,
    pub icon: &'static str,
}

const fn track(
    id: &'static str,
    name_en: &'static str,
    name_hi: &'static str,
    kind: TrackKind,
    category: TrackCategory,
    icon: &'static str,
) -> AudioTrack {
    AudioTrack {
        id,
        name_en,
        name_hi,
        kind,
        category,
        icon,
    }
}

use TrackCategory::{Chants, Instrumental, Nature, Temple};
use TrackKind::{Ambient, Completion};

pub const DEFAULT_COMPLETION_SOUND_ID: &str = "temple-bell";

/// Selecting this means "no ambient track".
pub const SILENCE: AudioTrack = track("silence", "Silence", "मौन", Ambient, Nature, "🤫");

pub static AMBIENT_TRACKS: [AudioTrack; 17] = [
    track("temple-bell-loop", "Temple Bell Loop", "मंदिर घंटी", Ambient, Temple, "🔔"),
    track("morning-aarti", "Morning Aarti", "प्रातः आरती", Ambient, Temple, "🛕"),
    track("om-chanting", "Om Chanting", "ॐ जप", Ambient, Temple, "🕉️"),
    track("bansuri-flute", "Bansuri Flute", "बांसुरी", Ambient, Instrumental, "🎵"),
    track("tanpura-drone", "Tanpura Drone", "तानपुरा", Ambient, Instrumental, "🎸"),
    track("tabla-soft", "Soft Tabla", "मृदु तबला", Ambient, Instrumental, "🥁"),
    track("sitar-meditation", "Sitar Meditation", "सितार ध्यान", Ambient, Instrumental, "🎶"),
    track("santoor", "Santoor", "संतूर", Ambient, Instrumental, "🎵"),
    track("veena", "Veena Classical", "वीणा", Ambient, Instrumental, "🎶"),
    track("ganga-river", "Ganga River Flow", "गंगा नदी", Ambient, Nature, "🌊"),
    track("morning-birds", "Morning Birds", "प्रातः पक्षी", Ambient, Nature, "🐦"),
    track("forest-ashram", "Forest Ashram", "वन आश्रम", Ambient, Nature, "🌿"),
    track("night-crickets", "Night Crickets", "रात्रि झींगुर", Ambient, Nature, "🌙"),
    track("gentle-rain", "Gentle Rain", "मृदु वर्षा", Ambient, Nature, "🌧️"),
    track("vedic-chanting", "Vedic Chanting", "वैदिक मंत्र", Ambient, Chants, "📿"),
    track("bhajan-melody", "Bhajan Melody", "भजन धुन", Ambient, Chants, "🙏"),
    track("tibetan-bowls", "Tibetan Bowls", "तिब्बती कटोरे", Ambient, Chants, "☮️"),
];

pub static COMPLETION_SOUNDS: [AudioTrack; 5] = [
    track(DEFAULT_COMPLETION_SOUND_ID, "Temple Bell", "मंदिर घंटी", Completion, Temple, "🔔"),
    track("shankh", "Shankh (Conch)", "शंख", Completion, Temple, "📯"),
    track("celestial-chime", "Celestial Chime", "दिव्य झंकार", Completion, Temple, "✨"),
    track("dundubhi", "Victory Dundubhi", "विजय दुंदुभी", Completion, Temple, "🎵"),
    track("gentle-gong", "Gentle Gong", "मृदु घंटा", Completion, Temple, "🔔"),
];

pub fn completion_sound(id: &str) -> Option<&'static AudioTrack> {
    COMPLETION_SOUNDS.iter().find(|t| t.id == id)
}

pub fn ambient_track(id: &str) -> Option<&'static AudioTrack> {
    AMBIENT_TRACKS.iter().find(|t| t.id == id)
}
