use clap::Subcommand;
use japamala_core::{Database, Settings};

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Get a setting value
    Get {
        /// Setting key (e.g. "language", "completionVolume")
        key: String,
    },
    /// Set a setting value
    Set {
        /// Setting key
        key: String,
        /// New value; `null` clears the ambient sound
        value: String,
    },
    /// List all settings
    List,
    /// Reset settings to defaults
    Reset,
}

pub fn run(action: SettingsAction) -> CliResult {
    let mut db = Database::open()?;
    match action {
        SettingsAction::Get { key } => {
            let settings = Settings::load(&db)?;
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        SettingsAction::Set { key, value } => {
            let mut settings = Settings::load(&db)?;
            settings.set(&key, &value)?;
            settings.save(&mut db)?;
            print_json(&settings)?;
        }
        SettingsAction::List => {
            print_json(&Settings::load(&db)?)?;
        }
        SettingsAction::Reset => {
            let settings = Settings::default();
            settings.save(&mut db)?;
            print_json(&settings)?;
        }
    }
    Ok(())
}
