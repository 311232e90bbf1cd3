//! # Japamala Core Library
//!
//! Core logic for a japa mala chanting counter. Every operation is usable
//! from the standalone `japamala` CLI; any GUI is a thin layer over the
//! same library.
//!
//! ## Architecture
//!
//! - **Chanting Engine**: counts taps in cycles of 108, keeps daily and
//!   lifetime statistics, and maintains the daily streak
//! - **Catalog**: built-in seed mantras plus user-defined custom mantras
//! - **Storage**: key-value persistence of JSON records (SQLite or in-memory)
//!   and TOML-based application configuration
//! - **Feedback**: sound and vibration cues derived from engine events
//!
//! ## Key Components
//!
//! - [`ChantingEngine`]: owns and mutates all chanting state
//! - [`KeyValueStore`]: persistence seam, implemented by [`Database`] and
//!   [`MemoryStore`]
//! - [`Clock`]: source of "today"
//! - [`Settings`]: user preferences

pub mod audio;
pub mod catalog;
pub mod chanting;
pub mod clock;
pub mod error;
pub mod events;
pub mod feedback;
pub mod storage;

pub use catalog::{Catalog, GalleryFilter, Mantra, MantraCategory, NewMantra, DEFAULT_MANTRA_ID};
pub use chanting::{ChantingEngine, ChantingStats, SessionState, Snapshot, CYCLE_LENGTH};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::Event;
pub use feedback::Feedback;
pub use storage::{AppConfig, Database, KeyValueStore, Language, MemoryStore, Settings};
