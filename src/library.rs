// src/library.rs
//! Possibility container + loader for RON-authored libraries.

use std::collections::HashMap;

use crate::core::{FixedOrRandom, Possibility};
use crate::error::SeedError;

/// Named possibilities, read-only for the lifetime of an engine instance.
/// Each entry may itself be weighted, so one title can resolve to
/// different schemas on different calls.
#[derive(Clone, Debug, Default)]
pub struct PossibilityLibrary {
    entries: HashMap<String, FixedOrRandom<Possibility>>,
}

impl PossibilityLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(title, possibility)` pairs, rejecting duplicates.
    pub fn from_entries(
        list: Vec<(String, FixedOrRandom<Possibility>)>,
    ) -> Result<Self, LibraryLoadError> {
        let mut entries = HashMap::with_capacity(list.len());
        for (title, possibility) in list {
            if entries.insert(title.clone(), possibility).is_some() {
                return Err(LibraryLoadError::DuplicateTitle(title));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a RON list of `(title, possibility)` entries, as authored
    /// in configuration assets.
    pub fn from_ron(text: &str) -> Result<Self, LibraryLoadError> {
        let list: Vec<(String, FixedOrRandom<Possibility>)> =
            ron::de::from_str(text).map_err(|e| LibraryLoadError::Ron(e.to_string()))?;
        Self::from_entries(list)
    }

    /// Register or replace a single possibility.
    pub fn insert(&mut self, title: impl Into<String>, possibility: FixedOrRandom<Possibility>) {
        self.entries.insert(title.into(), possibility);
    }

    /// Fail fast on unregistered titles instead of propagating an
    /// undefined schema.
    pub fn get(&self, title: &str) -> Result<&FixedOrRandom<Possibility>, SeedError> {
        self.entries
            .get(title)
            .ok_or_else(|| SeedError::UnknownPossibility(title.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum LibraryLoadError {
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("duplicate possibility title '{0}'")]
    DuplicateTitle(String),
}

#[cfg(test)]
mod library_tests {
    use super::*;
    use crate::core::{Align, ChildDef, Direction, FixedOrRandom, Size, Spacing};

    fn leaf_possibility() -> Possibility {
        Possibility {
            children: FixedOrRandom::Fixed(vec![FixedOrRandom::Fixed(ChildDef::Result(
                crate::core::ResultDef {
                    title: FixedOrRandom::Fixed("Tree".to_owned()),
                    size: None,
                    align: None,
                    properties: None,
                },
            ))]),
            direction: Direction::Bottom,
            size: Size { width: 2.0, height: 2.0 },
            align: Align::Stretch,
            repeat: 1,
            spacing: FixedOrRandom::Fixed(Spacing::Fixed(0.0)),
        }
    }

    #[test]
    fn loads_entries_from_ron() {
        let text = r#"[
            ("Grove", Fixed((
                children: Fixed([Fixed(Result((title: Fixed("Tree"))))]),
                direction: Bottom,
                size: (width: 2.0, height: 2.0),
            ))),
        ]"#;
        let library = PossibilityLibrary::from_ron(text).unwrap();
        assert_eq!(1, library.len());
        assert!(library.get("Grove").is_ok());
    }

    #[test]
    fn rejects_duplicate_titles() {
        let entry = FixedOrRandom::Fixed(leaf_possibility());
        let err = PossibilityLibrary::from_entries(vec![
            ("Grove".to_owned(), entry.clone()),
            ("Grove".to_owned(), entry),
        ])
        .unwrap_err();
        assert!(matches!(err, LibraryLoadError::DuplicateTitle(title) if title == "Grove"));
    }

    #[test]
    fn unknown_title_fails_fast() {
        let library = PossibilityLibrary::new();
        let err = library.get("Missing").unwrap_err();
        assert_eq!(
            "no possibility registered under title 'Missing'",
            err.to_string()
        );
    }
}
