// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Secondary and substitute chords.
//!
//! Secondary dominants and secondary leading-tone chords borrow from the
//! major scale built on a non-tonic degree (the "secondary key"). The
//! tritone substitution leaves the diatonic scale altogether and is built
//! straight off the chromatic circle.

use super::chord::{stack, Chord, Quality, SEVENTH, TRIAD};
use crate::music::{enumerate_scale, preferred_spelling, ScaleFamily, SpelledScale, Spelling};

/// Upper-case roman numerals for the seven degrees
pub const ROMAN: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Semitone offsets of a dominant seventh: root, major third, fifth, minor seventh
pub const DOMINANT_SEVENTH_SEMITONES: [u8; 4] = [0, 4, 7, 10];

const DOMINANT_DEGREE: usize = 4;
const LEADING_TONE_DEGREE: usize = 6;

/// Major scale rooted on a degree of the current scale
fn secondary_key(scale: &SpelledScale, degree: usize) -> SpelledScale {
    enumerate_scale(scale.degree(degree), &ScaleFamily::Major.pattern())
}

/// V7 of each non-tonic degree (II..VII)
pub fn secondary_dominants(scale: &SpelledScale) -> Vec<Chord> {
    (1..ROMAN.len())
        .map(|degree| {
            let secondary = secondary_key(scale, degree);
            Chord::new(
                secondary.degree(DOMINANT_DEGREE),
                Quality::DominantSeventh,
                format!("V7 / {}", ROMAN[degree]),
                stack(&secondary, DOMINANT_DEGREE, &SEVENTH),
            )
        })
        .collect()
}

/// Diminished leading-tone triad of each non-tonic degree (II..VII)
pub fn secondary_leading_tones(scale: &SpelledScale) -> Vec<Chord> {
    (1..ROMAN.len())
        .map(|degree| {
            let secondary = secondary_key(scale, degree);
            Chord::new(
                secondary.degree(LEADING_TONE_DEGREE),
                Quality::Diminished,
                format!("VII\u{b0} / {}", ROMAN[degree]),
                stack(&secondary, LEADING_TONE_DEGREE, &TRIAD),
            )
        })
        .collect()
}

/// Dominant seventh a tritone away from the primary dominant.
///
/// The root sits one semitone above the tonic, outside the diatonic scale,
/// so chord tones are counted in semitones and named with the preferred
/// chromatic spelling of each class.
pub fn tritone_substitution(tonic: Spelling) -> Vec<Chord> {
    let root = tonic.pitch_class().transpose(1);
    let notes: Vec<Spelling> = DOMINANT_SEVENTH_SEMITONES
        .iter()
        .map(|&offset| preferred_spelling(root.transpose(offset)))
        .collect();

    vec![Chord::new(
        notes[0],
        Quality::DominantSeventh,
        "sub VII7 / V7",
        notes,
    )]
}
