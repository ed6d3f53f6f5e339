//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (criterion direction, errors)
//! - `fuzzy` - Triangular fuzzy numbers and the two linguistic scales
//! - `judgments` - Expert judgment matrices and the demo dataset
//! - `analysis` - Pure domain services for Fuzzy ARAS ranking

pub mod analysis;
pub mod foundation;
pub mod fuzzy;
pub mod judgments;
