// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and their spellings.
//!
//! The chromatic circle has twelve pitch classes. Each one can be named by
//! one or two spellings (a natural letter plus an optional accidental). The
//! order of the spellings within a pitch class matters: the scale speller
//! scans them left to right when it picks a name.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Unicode sharp sign
pub const SHARP: char = '\u{266f}';

/// Unicode flat sign
pub const FLAT: char = '\u{266d}';

/// A position on the chromatic circle (0-11, C = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, wrapping at the octave
    pub const fn new(value: u8) -> Self {
        Self(value % 12)
    }

    /// Get the raw index (0-11)
    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up by a number of semitones
    pub fn transpose(self, semitones: u8) -> Self {
        Self(((self.0 as u16 + semitones as u16) % 12) as u8)
    }

    /// All twelve pitch classes in chromatic order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Natural letter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// Pitch class of the unaltered letter
    fn natural_pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental attached to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Semitone adjustment applied to the natural letter
    fn offset(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// How accidentals are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// ♯ and ♭
    #[default]
    Unicode,
    /// # and b
    Ascii,
}

/// A note name: natural letter plus at most one accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spelling {
    letter: Letter,
    accidental: Accidental,
}

impl Spelling {
    /// Create a spelling from its parts
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    pub const fn sharp(letter: Letter) -> Self {
        Self::new(letter, Accidental::Sharp)
    }

    pub const fn flat(letter: Letter) -> Self {
        Self::new(letter, Accidental::Flat)
    }

    /// Get the natural letter of this spelling
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// Get the accidental of this spelling
    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Get the pitch class this spelling names
    pub fn pitch_class(self) -> PitchClass {
        let pc = self.letter.natural_pitch_class() as i8 + self.accidental.offset();
        PitchClass::new(pc.rem_euclid(12) as u8)
    }

    /// True for spellings that only appear inside scales (B♯, E♯, F♭, C♭),
    /// never as a selectable key
    pub fn is_theoretical(self) -> bool {
        matches!(
            (self.letter, self.accidental),
            (Letter::B, Accidental::Sharp)
                | (Letter::E, Accidental::Sharp)
                | (Letter::F, Accidental::Flat)
                | (Letter::C, Accidental::Flat)
        )
    }

    /// Render using the given accidental notation
    pub fn render(self, notation: Notation) -> String {
        let mut name = String::with_capacity(4);
        name.push(self.letter.as_char());
        match (self.accidental, notation) {
            (Accidental::Natural, _) => {}
            (Accidental::Sharp, Notation::Unicode) => name.push(SHARP),
            (Accidental::Sharp, Notation::Ascii) => name.push('#'),
            (Accidental::Flat, Notation::Unicode) => name.push(FLAT),
            (Accidental::Flat, Notation::Ascii) => name.push('b'),
        }
        name
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Unicode))
    }
}

impl FromStr for Spelling {
    type Err = Error;

    /// Parse a note name (e.g., "C", "F♯", "F#", "B♭", "Bb")
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || Error::UnknownSpelling(s.to_string());

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(unknown)?;

        let accidental = match chars.as_str() {
            "" => Accidental::Natural,
            "\u{266f}" | "#" => Accidental::Sharp,
            "\u{266d}" | "b" => Accidental::Flat,
            _ => return Err(unknown()),
        };

        Ok(Spelling::new(letter, accidental))
    }
}

/// Spelling candidates for each pitch class, in scan order
static CHROMATIC: [&[Spelling]; 12] = [
    &[Spelling::sharp(Letter::B), Spelling::natural(Letter::C)],
    &[Spelling::sharp(Letter::C), Spelling::flat(Letter::D)],
    &[Spelling::natural(Letter::D)],
    &[Spelling::sharp(Letter::D), Spelling::flat(Letter::E)],
    &[Spelling::natural(Letter::E), Spelling::flat(Letter::F)],
    &[Spelling::sharp(Letter::E), Spelling::natural(Letter::F)],
    &[Spelling::sharp(Letter::F), Spelling::flat(Letter::G)],
    &[Spelling::natural(Letter::G)],
    &[Spelling::sharp(Letter::G), Spelling::flat(Letter::A)],
    &[Spelling::natural(Letter::A)],
    &[Spelling::sharp(Letter::A), Spelling::flat(Letter::B)],
    &[Spelling::natural(Letter::B), Spelling::flat(Letter::C)],
];

/// Get the candidate spellings for a pitch class, in scan order
pub fn spellings_at(pitch_class: PitchClass) -> &'static [Spelling] {
    CHROMATIC[pitch_class.value() as usize]
}

/// Resolve a note name to its pitch class
pub fn pitch_class_of(name: &str) -> Result<PitchClass> {
    name.parse::<Spelling>().map(Spelling::pitch_class)
}

/// Parse a note name that may be selected as a key
pub fn parse_tonic(name: &str) -> Result<Spelling> {
    let spelling: Spelling = name.parse()?;
    if spelling.is_theoretical() {
        return Err(Error::UnknownSpelling(name.to_string()));
    }
    Ok(spelling)
}

/// All selectable keys in chromatic order
pub fn tonics() -> impl Iterator<Item = Spelling> {
    CHROMATIC
        .iter()
        .flat_map(|candidates| candidates.iter().copied())
        .filter(|s| !s.is_theoretical())
}

/// Spelling used for notes built straight off the chromatic circle.
///
/// This is the last selectable spelling of the class, which favors flats
/// (D♭, E♭, G♭, A♭, B♭) and plain letters over B♯/E♯/F♭/C♭.
pub fn preferred_spelling(pitch_class: PitchClass) -> Spelling {
    let candidates = spellings_at(pitch_class);
    candidates
        .iter()
        .rev()
        .copied()
        .find(|s| !s.is_theoretical())
        .unwrap_or(candidates[0])
}
