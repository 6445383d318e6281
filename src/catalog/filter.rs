// Catalog filtering for the sidebar list
//
// Pure function of (genres, search term, category filter). Cheap enough to
// run on every keystroke.

use super::{Category, GenreRecord};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(CategoryFilter::All),
            "standard" => Ok(CategoryFilter::Only(Category::Standard)),
            "k-pop" | "kpop" => Ok(CategoryFilter::Only(Category::KPop)),
            other => Err(format!(
                "Unknown category '{}'. Valid categories: All, Standard, K-POP",
                other
            )),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Genres whose name contains `search_term` (case-insensitive) and whose
/// category passes `category_filter`, in catalog order.
pub fn filter_genres<'a>(
    genres: &'a [GenreRecord],
    search_term: &str,
    category_filter: CategoryFilter,
) -> Vec<&'a GenreRecord> {
    let needle = search_term.to_lowercase();
    genres
        .iter()
        .filter(|g| category_filter.matches(g.category))
        .filter(|g| needle.is_empty() || g.name.to_lowercase().contains(&needle))
        .collect()
}
