//! # KIM Hull Core Library
//!
//! A library for constructing binary convex-hull phase diagrams from crystal
//! binding-energy data and validating an interatomic-potential model's
//! predicted hull against a first-principles reference hull.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`StructureRecord`,
//!   `SpeciesList`, `CompositionPoint`), the prototype-label stoichiometry decoder,
//!   the planar convex-hull geometry seam, and the structure-data source trait.
//!
//! - **[`engine`]: The Logic Core.** The pipeline stages that transform raw structure
//!   records into a phase diagram: elemental reference resolution, formation-energy
//!   normalization, the lower-hull boundary walk, and hull-vertex classification.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute complete procedures, such as
//!   building a hull diagram from a record set or validating a model against
//!   reference data.

pub mod core;
pub mod engine;
pub mod workflows;
