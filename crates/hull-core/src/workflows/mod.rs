//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate the
//! complete phase-diagram pipeline.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of the library. They tie the
//! engine stages together: resolving elemental references, normalizing
//! formation energies, extracting the lower hull, and comparing a candidate
//! model's hull against a reference hull. Each invocation is independent and
//! side-effect free, so repeating a call with the same inputs is always safe.
//!
//! - **Hull Workflow** ([`hull`]) - Builds a [`hull::HullDiagram`] from a
//!   record set or a [`crate::core::source::StructureSource`], and validates
//!   one diagram against another.

pub mod hull;
