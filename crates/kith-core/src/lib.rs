//! Kith Core Types and Definitions
//!
//! This crate provides the foundational types for the Kith relationship
//! graph tool. It includes:
//!
//! - **Identifiers**: Efficient string-interned person identifiers ([`identifier::Id`])
//! - **Model**: The persisted people document ([`model`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)

pub mod geometry;
pub mod identifier;
pub mod model;
