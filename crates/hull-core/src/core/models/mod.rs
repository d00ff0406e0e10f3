//! Value types shared by every pipeline stage.
//!
//! All of these are immutable once constructed; each stage of the pipeline
//! consumes them by reference and returns new derived collections, so indices
//! into the input record sequence stay valid end to end.

pub mod point;
pub mod record;
pub mod species;
