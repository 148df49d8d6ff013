//! Hiersel Core Library
//!
//! Sparse tri-state selection trees over lazily materialized hierarchies,
//! and the filter documents derived from them.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod identity;
pub mod logging;
pub mod resolve;
pub mod strategy;
pub mod tree;
