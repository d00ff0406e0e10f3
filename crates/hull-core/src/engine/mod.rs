//! # Engine Module
//!
//! This module implements the pipeline stages that turn raw structure records
//! into a binary phase diagram.
//!
//! ## Overview
//!
//! Every stage is a pure, synchronous transformation over in-memory
//! collections. Stages communicate only through the value types in
//! [`crate::core::models`], and every index-valued output refers to the
//! unmodified input record order.
//!
//! ## Architecture
//!
//! - **Reference Resolution** ([`references`]) - Finds the lowest-energy
//!   elemental record per species
//! - **Formation Energies** ([`formation`]) - Normalizes raw record energies
//!   into per-atom formation energies and mole fractions
//! - **Lower Hull** ([`lower_hull`]) - Walks the convex-hull boundary between
//!   the two elemental endpoints
//! - **Comparison** ([`comparison`]) - Classifies a candidate hull's vertices
//!   against a reference hull by prototype-label membership
//! - **Error Handling** ([`error`]) - The pipeline's error taxonomy

pub mod comparison;
pub mod error;
pub mod formation;
pub mod lower_hull;
pub mod references;
