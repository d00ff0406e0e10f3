use super::models::record::StructureRecord;
use super::models::species::SpeciesList;
use std::error::Error;

/// Supplies raw structure records for a requested species list.
///
/// Implementors own every transport, authentication, and query-language
/// detail; the pipeline only sees the resulting record sequence. Passing
/// `None` for `model` selects the reference ("ground truth") dataset, while
/// `Some(id)` selects the predictions of that interatomic-potential model.
pub trait StructureSource {
    /// The error type for fetch failures.
    type Error: Error + Send + Sync + 'static;

    /// Fetches every record whose species are a subset of `species`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying provider fails; an empty result is
    /// not an error at this seam and is diagnosed downstream.
    fn fetch(
        &self,
        species: &SpeciesList,
        model: Option<&str>,
    ) -> Result<Vec<StructureRecord>, Self::Error>;
}
