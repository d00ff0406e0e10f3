//! # Core Module
//!
//! This module provides the fundamental building blocks for binary phase-diagram
//! construction, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module defines the value types that flow through the pipeline and the
//! two seams the pipeline depends on but does not own: where structure records come
//! from, and how a planar convex hull is computed.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Structure records, validated species lists, and
//!   composition/energy points
//! - **Prototype Decoding** ([`prototype`]) - Stoichiometry extraction from
//!   AFLOW-style prototype labels
//! - **Planar Geometry** ([`geometry`]) - The convex-hull trait and its
//!   monotone-chain implementation
//! - **Data Sources** ([`source`]) - The trait implemented by external providers of
//!   structure records

pub mod geometry;
pub mod models;
pub mod prototype;
pub mod source;
