// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the chord engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while selecting a key or building a scale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A note name that is not in the spelling table (or not a selectable tonic)
    #[error("Unknown spelling: {0:?}")]
    UnknownSpelling(String),

    /// A scale name that is not one of the built-in families
    #[error("Unknown scale name: {0:?}")]
    UnknownScaleName(String),

    /// A scale pattern that does not describe a seven-note octave
    #[error("Invalid scale steps {steps:?}: {reason}")]
    InvalidStep { steps: Vec<u8>, reason: String },
}
