use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeciesListError {
    #[error("a species list needs at least two species, got {count}")]
    TooFew { count: usize },
    #[error("species '{species}' appears more than once in the species list")]
    Duplicate { species: String },
    #[error("this operation is only defined for binary systems, got {count} species")]
    NotBinary { count: usize },
}

/// A validated, ordered list of unique chemical species.
///
/// The list defines the fixed index space used throughout the pipeline: the
/// species at position 0 is the omitted coordinate of composition points, and
/// the species at position 1 is the reported mole-fraction axis in the binary
/// case. Construction pre-builds the species-to-index map so downstream
/// stages never perform repeated linear searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesList {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SpeciesList {
    /// Validates and builds a species list.
    ///
    /// # Errors
    ///
    /// Returns [`SpeciesListError::TooFew`] for fewer than two species and
    /// [`SpeciesListError::Duplicate`] if any species repeats.
    pub fn new(
        species: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, SpeciesListError> {
        let names: Vec<String> = species.into_iter().map(Into::into).collect();
        if names.len() < 2 {
            return Err(SpeciesListError::TooFew { count: names.len() });
        }
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(SpeciesListError::Duplicate {
                    species: name.clone(),
                });
            }
        }
        Ok(Self { names, index })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of `species` in the list, if requested at all.
    pub fn index_of(&self, species: &str) -> Option<usize> {
        self.index.get(species).copied()
    }

    pub fn is_binary(&self) -> bool {
        self.names.len() == 2
    }

    /// Fails unless the list has exactly two species.
    ///
    /// The lower-hull boundary walk is only defined for the binary case.
    pub fn require_binary(&self) -> Result<(), SpeciesListError> {
        if self.is_binary() {
            Ok(())
        } else {
            Err(SpeciesListError::NotBinary {
                count: self.names.len(),
            })
        }
    }
}
