use clap::Subcommand;
use japamala_core::{GalleryFilter, Mantra, MantraCategory, NewMantra};
use serde::Serialize;

use super::{open_engine, print_json, CliResult};

#[derive(Subcommand)]
pub enum MantraAction {
    /// List mantras, optionally filtered
    List {
        /// Only this category (shiva, ram, krishna, goddess, ganesh, hanuman, universal)
        #[arg(long, conflicts_with = "favorites")]
        category: Option<MantraCategory>,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
        /// Search text, transliteration and meaning
        #[arg(long)]
        search: Option<String>,
    },
    /// List categories with display names
    Categories,
    /// Add a custom mantra
    Add {
        /// Display text, usually Devanagari
        text: String,
        /// Latin transliteration
        transliteration: String,
        #[arg(long)]
        meaning: Option<String>,
        #[arg(long)]
        meaning_hindi: Option<String>,
        #[arg(long)]
        category: Option<MantraCategory>,
    },
    /// Remove a custom mantra
    Remove {
        /// Custom mantra id
        id: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MantraRow<'a> {
    #[serde(flatten)]
    mantra: &'a Mantra,
    is_favorite: bool,
    is_active: bool,
}

pub fn run(action: MantraAction) -> CliResult {
    match action {
        MantraAction::List {
            category,
            favorites,
            search,
        } => {
            let engine = open_engine()?;
            let filter = match (favorites, category) {
                (true, _) => GalleryFilter::Favorites,
                (false, Some(c)) => GalleryFilter::Category(c),
                (false, None) => GalleryFilter::All,
            };
            let active = &engine.session().current_mantra_id;
            let rows: Vec<MantraRow<'_>> = engine
                .gallery(filter, search.as_deref())
                .into_iter()
                .map(|mantra| MantraRow {
                    mantra,
                    is_favorite: engine.is_favorite(&mantra.id),
                    is_active: &mantra.id == active,
                })
                .collect();
            print_json(&rows)
        }
        MantraAction::Categories => {
            let infos: Vec<_> = MantraCategory::ALL.iter().map(|c| c.info()).collect();
            print_json(&infos)
        }
        MantraAction::Add {
            text,
            transliteration,
            meaning,
            meaning_hindi,
            category,
        } => {
            let input = NewMantra {
                text,
                transliteration,
                meaning,
                meaning_hindi,
                category,
            };
            input.validate()?;

            let mut engine = open_engine()?;
            let added = engine
                .add_custom_mantra(input)
                .and_then(|event| event.mantra_id().map(str::to_string))
                .and_then(|id| engine.catalog().find(&id).cloned());
            print_json(&added)
        }
        MantraAction::Remove { id } => {
            let mut engine = open_engine()?;
            match engine.remove_custom_mantra(&id) {
                Some(event) => print_json(&event),
                None => Err(format!("no custom mantra with id '{id}'").into()),
            }
        }
    }
}

pub fn favorite(id: &str) -> CliResult {
    let mut engine = open_engine()?;
    match engine.toggle_favorite(id) {
        Some(event) => print_json(&event),
        None => Err(format!("unknown mantra '{id}'").into()),
    }
}
