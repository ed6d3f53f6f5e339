//! Fuzzy ARAS - Multi-criteria ranking from linguistic expert judgments
//!
//! This crate aggregates importance and performance terms from several
//! experts as triangular fuzzy numbers and ranks alternatives with the
//! Additive Ratio Assessment method.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
