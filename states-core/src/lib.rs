//! Core types for the States site.
//!
//! This crate has no browser dependency. It provides:
//! - `record`: the per-state record and its JSON wire format
//! - `dataset`: the loaded dataset with lookup by abbreviation
//! - `source`: the fixed citation table and the merged source registry
//! - `geo`: the geometry region code table used by the map
//! - `error`: the load error taxonomy

pub mod dataset;
pub mod error;
pub mod geo;
pub mod record;
pub mod source;

pub use dataset::Dataset;
pub use error::{LoadError, Result};
pub use record::{FunFact, StateRecord, StateSources};
pub use source::{Citation, CitationKey, SourceGroup, SourceRecord, SourceRegistry};
