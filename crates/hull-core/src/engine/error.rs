use thiserror::Error;

use crate::core::models::species::SpeciesListError;
use crate::core::prototype::PrototypeError;

/// The pipeline's error taxonomy.
///
/// Every condition is detected as early as possible and carries the offending
/// species or label; none is silently converted into a default value.
#[derive(Debug, Error)]
pub enum HullError {
    #[error("invalid species list: {source}")]
    InvalidSpeciesList {
        #[from]
        source: SpeciesListError,
    },

    #[error("malformed prototype label: {source}")]
    MalformedPrototypeLabel {
        #[from]
        source: PrototypeError,
    },

    #[error("no usable elemental reference found for species '{species}'")]
    MissingElementalReference { species: String },

    #[error("record {index} ('{label}') is degenerate: {reason}")]
    DegenerateRecord {
        index: usize,
        label: String,
        reason: String,
    },

    #[error("elemental reference record {record_index} is not a vertex of the convex hull")]
    MissingHullReferenceVertex { record_index: usize },

    #[error("the data source returned no records")]
    NoData,

    #[error("structure data source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}
