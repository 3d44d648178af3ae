// src/core/mod.rs

pub mod engine;
pub mod matcher;
pub mod registry;
pub mod syllabify;
pub mod types;
pub mod weights;
