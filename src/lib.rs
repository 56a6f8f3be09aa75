// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! keychords - correctly spelled scales and the chords built on them.
//!
//! Pick a tonic and a scale family; the engine spells the seven-note scale
//! and derives triads, seventh chords, secondary dominants, secondary
//! leading-tone chords and the tritone substitution.
//!
//! ```
//! use keychords::ChordEngine;
//!
//! let mut engine = ChordEngine::default();
//! engine.select_key("D").unwrap();
//! assert_eq!(engine.harmony().scale.to_string(), "D E F♯ G A B C♯");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod harmony;
pub mod music;

pub use engine::{ChordEngine, Harmony, Selection};
pub use error::{Error, Result};
pub use harmony::{Chord, Quality};
pub use music::{Notation, PitchClass, ScaleFamily, SpelledScale, Spelling};
