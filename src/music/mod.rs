// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives.
//!
//! This module provides the pitch-class/spelling tables and the scale
//! speller that every chord derivation is built on.

pub mod pitch;
pub mod scale;

pub use pitch::{
    parse_tonic, pitch_class_of, preferred_spelling, spellings_at, tonics, Accidental, Letter,
    Notation, PitchClass, Spelling,
};
pub use scale::{enumerate_scale, ScaleFamily, ScalePattern, SpelledScale, SCALE_LEN};
