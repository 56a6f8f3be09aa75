// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord derivations on top of a spelled scale.

pub mod chord;
pub mod derived;

pub use chord::{build_chords, sevenths, triads, Chord, DegreeTable, Quality, SEVENTH, TRIAD};
pub use derived::{secondary_dominants, secondary_leading_tones, tritone_substitution};
