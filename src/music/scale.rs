// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale families and the scale speller.
//!
//! A scale is spelled by walking its step pattern from a starting spelling
//! and, at each pitch class, taking the first candidate whose letter differs
//! from the previous note. That keeps consecutive notes on different letters
//! (C D E F G A B rather than C D E E♯ G A B).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pitch::{spellings_at, Spelling};
use crate::error::{Error, Result};

/// Number of notes in a spelled scale
pub const SCALE_LEN: usize = 7;

/// Number of steps in a scale pattern
pub const STEP_COUNT: usize = SCALE_LEN - 1;

const MAJOR_STEPS: [u8; STEP_COUNT] = [2, 2, 1, 2, 2, 2];
const NATURAL_MINOR_STEPS: [u8; STEP_COUNT] = [2, 1, 2, 2, 1, 2];

/// Built-in scale families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    Major,        // Ionian
    NaturalMinor, // Aeolian
}

impl ScaleFamily {
    /// All families, in the order they are offered for selection
    pub const ALL: [ScaleFamily; 2] = [ScaleFamily::Major, ScaleFamily::NaturalMinor];

    /// Get the step pattern for this family
    pub fn pattern(self) -> ScalePattern {
        let steps = match self {
            ScaleFamily::Major => MAJOR_STEPS,
            ScaleFamily::NaturalMinor => NATURAL_MINOR_STEPS,
        };
        ScalePattern { steps }
    }

    /// Get a human-readable name for this family
    pub fn name(self) -> &'static str {
        match self {
            ScaleFamily::Major => "Major",
            ScaleFamily::NaturalMinor => "Natural Minor",
        }
    }
}

impl fmt::Display for ScaleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ScaleFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match key.as_str() {
            "major" | "ionian" => Ok(ScaleFamily::Major),
            "minor" | "naturalminor" | "aeolian" => Ok(ScaleFamily::NaturalMinor),
            _ => Err(Error::UnknownScaleName(s.to_string())),
        }
    }
}

/// Validated step pattern of a seven-note scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalePattern {
    steps: [u8; STEP_COUNT],
}

impl ScalePattern {
    /// Validate a step list: six positive steps that add up to an octave
    pub fn new(steps: &[u8]) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidStep {
            steps: steps.to_vec(),
            reason: reason.to_string(),
        };

        let steps: [u8; STEP_COUNT] = steps
            .try_into()
            .map_err(|_| invalid("expected six steps"))?;
        if steps.contains(&0) {
            return Err(invalid("steps must be positive"));
        }
        let total: u32 = steps.iter().map(|&s| s as u32).sum();
        // The seventh step back to the octave must also be positive
        if total >= 12 {
            return Err(invalid("steps must leave room for the step back to the octave"));
        }

        Ok(Self { steps })
    }

    /// Get the steps (semitones between consecutive notes)
    pub fn steps(&self) -> &[u8] {
        &self.steps
    }

    /// Semitones from the last note back up to the octave
    pub fn closing_step(&self) -> u8 {
        12 - self.steps.iter().sum::<u8>()
    }
}

/// Seven spellings, index 0 = tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpelledScale {
    notes: [Spelling; SCALE_LEN],
}

impl SpelledScale {
    /// Get the notes of the scale
    pub fn notes(&self) -> &[Spelling; SCALE_LEN] {
        &self.notes
    }

    /// Get the tonic
    pub fn tonic(&self) -> Spelling {
        self.notes[0]
    }

    /// Get the note at a 0-based degree, wrapping past the seventh
    pub fn degree(&self, degree: usize) -> Spelling {
        self.notes[degree % SCALE_LEN]
    }
}

impl fmt::Display for SpelledScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

/// Spell a seven-note scale starting at `start`.
///
/// At each step the first candidate spelling with a letter different from
/// the previous note wins. When every candidate shares that letter (only
/// possible for single-spelling classes D, G and A) the collision is
/// accepted and the last candidate is used.
pub fn enumerate_scale(start: Spelling, pattern: &ScalePattern) -> SpelledScale {
    let mut notes = [start; SCALE_LEN];
    let mut last = start;
    let mut pitch_class = start.pitch_class();

    for (slot, &step) in notes.iter_mut().skip(1).zip(pattern.steps.iter()) {
        pitch_class = pitch_class.transpose(step);
        let candidates = spellings_at(pitch_class);
        let chosen = candidates
            .iter()
            .copied()
            .find(|s| s.letter() != last.letter())
            .unwrap_or(candidates[candidates.len() - 1]);
        *slot = chosen;
        last = chosen;
    }

    SpelledScale { notes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::pitch::{tonics, Letter};

    fn spell(tonic: &str, family: ScaleFamily) -> String {
        let start: Spelling = tonic.parse().unwrap();
        enumerate_scale(start, &family.pattern()).to_string()
    }

    #[test]
    fn test_built_in_patterns_are_valid() {
        for family in ScaleFamily::ALL {
            let pattern = family.pattern();
            assert_eq!(ScalePattern::new(pattern.steps()), Ok(pattern));
        }
        assert_eq!(ScaleFamily::Major.pattern().closing_step(), 1);
        assert_eq!(ScaleFamily::NaturalMinor.pattern().closing_step(), 2);
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            ScalePattern::new(&[2, 2, 1, 2, 2]),
            Err(Error::InvalidStep { .. })
        ));
        assert!(matches!(
            ScalePattern::new(&[2, 2, 0, 2, 2, 2]),
            Err(Error::InvalidStep { .. })
        ));
        assert!(matches!(
            ScalePattern::new(&[2, 2, 2, 2, 2, 2]),
            Err(Error::InvalidStep { .. })
        ));
        // Harmonic minor is a valid heptatonic pattern
        assert!(ScalePattern::new(&[2, 1, 2, 2, 1, 3]).is_ok());
    }

    #[test]
    fn test_scale_family_from_str() {
        assert_eq!("major".parse(), Ok(ScaleFamily::Major));
        assert_eq!("Ionian".parse(), Ok(ScaleFamily::Major));
        assert_eq!("Minor".parse(), Ok(ScaleFamily::NaturalMinor));
        assert_eq!("Natural Minor".parse(), Ok(ScaleFamily::NaturalMinor));
        assert_eq!("natural_minor".parse(), Ok(ScaleFamily::NaturalMinor));
        assert_eq!(
            "dorian".parse::<ScaleFamily>(),
            Err(Error::UnknownScaleName("dorian".to_string()))
        );
    }

    #[test]
    fn test_c_major_and_a_minor() {
        assert_eq!(spell("C", ScaleFamily::Major), "C D E F G A B");
        assert_eq!(spell("A", ScaleFamily::NaturalMinor), "A B C D E F G");
    }

    #[test]
    fn test_sharp_and_flat_keys() {
        assert_eq!(spell("D", ScaleFamily::Major), "D E F♯ G A B C♯");
        assert_eq!(spell("G♭", ScaleFamily::Major), "G♭ A♭ B♭ C♭ D♭ E♭ F");
        assert_eq!(spell("C♯", ScaleFamily::Major), "C♯ D♯ E♯ F♯ G♯ A♯ B♯");
        assert_eq!(spell("B♭", ScaleFamily::NaturalMinor), "B♭ C D♭ E♭ F G♭ A♭");
    }

    #[test]
    fn test_letter_collision_is_accepted() {
        // G♯ major needs F𝄪, which the table cannot spell
        assert_eq!(spell("G♯", ScaleFamily::Major), "G♯ A♯ B♯ C♯ D♯ E♯ G");
        assert_eq!(spell("D♭", ScaleFamily::NaturalMinor), "D♭ E♭ F♭ G♭ A♭ A B");
    }

    #[test]
    fn test_letters_never_repeat_unless_forced() {
        for family in ScaleFamily::ALL {
            for tonic in tonics() {
                let scale = enumerate_scale(tonic, &family.pattern());
                for pair in scale.notes().windows(2) {
                    if pair[0].letter() == pair[1].letter() {
                        let only = spellings_at(pair[1].pitch_class());
                        assert!(
                            only.iter().all(|s| s.letter() == pair[0].letter()),
                            "{} {}: avoidable collision in {}",
                            tonic,
                            family,
                            scale
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_pitch_classes_follow_pattern() {
        for family in ScaleFamily::ALL {
            let pattern = family.pattern();
            for tonic in tonics() {
                let scale = enumerate_scale(tonic, &pattern);
                let mut pc = tonic.pitch_class();
                for (i, &step) in pattern.steps().iter().enumerate() {
                    pc = pc.transpose(step);
                    assert_eq!(scale.degree(i + 1).pitch_class(), pc);
                }
                assert_eq!(pc.transpose(pattern.closing_step()), tonic.pitch_class());
            }
        }
    }

    #[test]
    fn test_degree_wraps() {
        let scale = enumerate_scale(Spelling::natural(Letter::C), &ScaleFamily::Major.pattern());
        assert_eq!(scale.tonic(), Spelling::natural(Letter::C));
        assert_eq!(scale.degree(7), Spelling::natural(Letter::C));
        assert_eq!(scale.degree(11), Spelling::natural(Letter::G));
    }
}
