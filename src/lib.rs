// src/lib.rs

pub mod core;
pub mod scoring;

pub use crate::core::engine::ChandasEngine;
pub use crate::core::registry::MeterRegistry;
pub use crate::core::types::{MatchResult, Syllable, Token, Verification, Weight};

pub type Result<T> = std::result::Result<T, ChandasError>;

#[derive(thiserror::Error, Debug)]
pub enum ChandasError {
    /// Input has no recoverable syllable structure.
    #[error("no vowel-bearing syllable found in input")]
    Syllabification,

    /// Requested meter name is absent from the registry.
    #[error("unknown meter: {0}")]
    UnknownMeter(String),

    /// Catalog entry could not be resolved into a concrete pattern.
    #[error("invalid catalog entry for '{name}': {reason}")]
    Catalog { name: String, reason: String },

    #[error("catalog parse error: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}
