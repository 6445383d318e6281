// Genre catalog: static preset data plus lookup and shape validation
//
// The catalog ships embedded in the binary (see `data.rs`) and is validated
// once at startup. Everything here is immutable for the process lifetime.

pub mod data;
pub mod filter;
pub mod style;

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

pub use filter::{filter_genres, CategoryFilter};
pub use style::{radar_points, CategoryStyle, RadarPoint};

/// Bumped whenever the embedded genre table changes
pub const CATALOG_VERSION: &str = "2025.1";

/// Upper bound of every attribute score
pub const ATTRIBUTE_MAX: u8 = 10;

/// Top-level genre classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Standard,
    KPop,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Standard => "Standard",
            Category::KPop => "K-POP",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Radar chart axes, in the order they are stored on a genre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Energy,
    Electronic,
    Acoustic,
    Mood,
    Complexity,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Energy,
        Attribute::Electronic,
        Attribute::Acoustic,
        Attribute::Mood,
        Attribute::Complexity,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label shown on the chart axis
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Energy => "에너지",
            Attribute::Electronic => "전자음",
            Attribute::Acoustic => "어쿠스틱",
            Attribute::Mood => "분위기",
            Attribute::Complexity => "복잡성",
        }
    }
}

/// A pre-authored Suno tag string and its rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetPrompt {
    pub text: &'static str,
    pub description: &'static str,
}

/// One genre entry of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRecord {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// energy, electronic, acoustic, mood, complexity
    pub attributes: [u8; 5],
    pub tags: &'static [&'static str],
    pub prompts: &'static [PresetPrompt],
}

impl GenreRecord {
    pub fn attribute(&self, attribute: Attribute) -> u8 {
        self.attributes
            .get(attribute.index())
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,
    #[error("duplicate genre id {0}")]
    DuplicateId(u32),
    #[error("duplicate genre name '{0}'")]
    DuplicateName(String),
    #[error("genre {id}: attribute {attribute:?} is {value}, expected 0..=10")]
    AttributeOutOfRange {
        id: u32,
        attribute: Attribute,
        value: u8,
    },
    #[error("genre {0} has no prompts")]
    NoPrompts(u32),
    #[error("genre {id}: prompt #{index} has empty text")]
    EmptyPrompt { id: u32, index: usize },
}

/// Counts shown in the catalog header
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogSummary {
    pub version: &'static str,
    pub genre_count: usize,
    pub total_prompt_count: usize,
}

/// Read-only view over a genre table
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    genres: &'static [GenreRecord],
}

impl Catalog {
    /// Wrap a genre table after checking its shape
    pub fn new(genres: &'static [GenreRecord]) -> Result<Self, CatalogError> {
        let catalog = Catalog { genres };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(data::GENRES)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.genres.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for genre in self.genres {
            if !ids.insert(genre.id) {
                return Err(CatalogError::DuplicateId(genre.id));
            }
            if !names.insert(genre.name) {
                return Err(CatalogError::DuplicateName(genre.name.to_string()));
            }
            for attribute in Attribute::ALL {
                let value = genre.attribute(attribute);
                if value > ATTRIBUTE_MAX {
                    return Err(CatalogError::AttributeOutOfRange {
                        id: genre.id,
                        attribute,
                        value,
                    });
                }
            }
            if genre.prompts.is_empty() {
                return Err(CatalogError::NoPrompts(genre.id));
            }
            if let Some(index) = genre.prompts.iter().position(|p| p.text.trim().is_empty()) {
                return Err(CatalogError::EmptyPrompt { id: genre.id, index });
            }
        }
        Ok(())
    }

    pub fn genres(&self) -> &'static [GenreRecord] {
        self.genres
    }

    pub fn get(&self, id: u32) -> Option<&'static GenreRecord> {
        self.genres.iter().find(|g| g.id == id)
    }

    /// Default selection. Validation guarantees at least one entry.
    pub fn first(&self) -> &'static GenreRecord {
        &self.genres[0]
    }

    /// Matching genre, or the first one when the id is unknown
    pub fn resolve(&self, id: u32) -> &'static GenreRecord {
        self.get(id).unwrap_or_else(|| self.first())
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            version: CATALOG_VERSION,
            genre_count: self.genres.len(),
            total_prompt_count: self.genres.iter().map(|g| g.prompts.len()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPTS: &[PresetPrompt] = &[PresetPrompt {
        text: "test, prompt",
        description: "test",
    }];

    const fn genre(id: u32, name: &'static str, attributes: [u8; 5]) -> GenreRecord {
        GenreRecord {
            id,
            name,
            category: Category::Standard,
            description: "",
            attributes,
            tags: &[],
            prompts: PROMPTS,
        }
    }

    static DUPLICATE_IDS: [GenreRecord; 2] = [genre(1, "A", [1; 5]), genre(1, "B", [1; 5])];
    static DUPLICATE_NAMES: [GenreRecord; 2] = [genre(1, "A", [1; 5]), genre(2, "A", [1; 5])];
    static OUT_OF_RANGE: [GenreRecord; 1] = [genre(7, "A", [1, 2, 11, 4, 5])];
    static NO_PROMPTS: [GenreRecord; 1] = [GenreRecord {
        prompts: &[],
        ..genre(3, "A", [1; 5])
    }];

    #[test]
    fn test_embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.summary().genre_count > 0);
    }

    #[test]
    fn test_resolve_falls_back_to_first() {
        let catalog = Catalog::embedded().unwrap();
        let first = catalog.first();
        assert_eq!(catalog.resolve(9999).id, first.id);

        let last = catalog.genres().last().unwrap();
        assert_eq!(catalog.resolve(last.id).id, last.id);
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert_eq!(Catalog::new(&[]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            Catalog::new(&DUPLICATE_IDS).unwrap_err(),
            CatalogError::DuplicateId(1)
        );
        assert_eq!(
            Catalog::new(&DUPLICATE_NAMES).unwrap_err(),
            CatalogError::DuplicateName("A".to_string())
        );
    }

    #[test]
    fn test_rejects_out_of_range_attribute() {
        assert_eq!(
            Catalog::new(&OUT_OF_RANGE).unwrap_err(),
            CatalogError::AttributeOutOfRange {
                id: 7,
                attribute: Attribute::Acoustic,
                value: 11
            }
        );
    }

    #[test]
    fn test_rejects_genre_without_prompts() {
        assert_eq!(
            Catalog::new(&NO_PROMPTS).unwrap_err(),
            CatalogError::NoPrompts(3)
        );
    }

    #[test]
    fn test_summary_counts_prompts() {
        let catalog = Catalog::embedded().unwrap();
        let expected: usize = catalog.genres().iter().map(|g| g.prompts.len()).sum();
        assert_eq!(catalog.summary().total_prompt_count, expected);
        assert_eq!(catalog.summary().version, CATALOG_VERSION);
    }

    #[test]
    fn test_category_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Category::KPop).unwrap(), "\"K-POP\"");
        assert_eq!(
            serde_json::to_string(&Category::Standard).unwrap(),
            "\"Standard\""
        );
    }
}
