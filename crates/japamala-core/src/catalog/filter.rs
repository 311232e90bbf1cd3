//! Gallery filtering: category tabs, the favorites tab and free-text search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Catalog, Mantra, MantraCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum GalleryFilter {
    #[default]
    All,
    Favorites,
    Category(MantraCategory),
}

impl GalleryFilter {
    /// Apply the filter and an optional search query.
    ///
    /// The favorites tab ignores the query. Otherwise the query matches the
    /// display text as-is, and transliteration or meaning case-insensitively.
    pub fn apply<'a>(
        &self,
        catalog: &Catalog<'a>,
        favorites: &BTreeSet<String>,
        query: Option<&str>,
    ) -> Vec<&'a Mantra> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        catalog
            .iter()
            .filter(|m| match self {
                GalleryFilter::Favorites => favorites.contains(&m.id),
                GalleryFilter::Category(c) if m.category != *c => false,
                _ => query.map_or(true, |q| matches_query(m, q)),
            })
            .collect()
    }
}

fn matches_query(mantra: &Mantra, query: &str) -> bool {
    let lowered = query.to_lowercase();
    mantra.text.contains(query)
        || mantra.transliteration.to_lowercase().contains(&lowered)
        || mantra.meaning.to_lowercase().contains(&lowered)
}
