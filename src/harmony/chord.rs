// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic chord building.
//!
//! Chords are stacked on a spelled scale by scale-degree offsets rather than
//! semitones: a third above the root is two degrees up, a fifth is four and
//! a seventh is six. The same routine builds triads and seventh chords; only
//! the offsets and the per-degree quality table change.

use std::fmt;

use crate::music::{Notation, ScaleFamily, SpelledScale, Spelling, SCALE_LEN};

/// Degree offsets of a triad (root, third, fifth)
pub const TRIAD: [usize; 3] = [0, 2, 4];

/// Degree offsets of a seventh chord (root, third, fifth, seventh)
pub const SEVENTH: [usize; 4] = [0, 2, 4, 6];

/// Chord qualities used by the derivations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    MajorSeventh,
    MinorSeventh,
    DominantSeventh,
    HalfDiminishedSeventh,
}

impl Quality {
    /// Suffix appended to the root to form the chord name
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "\u{b0}",
            Quality::MajorSeventh => "M7",
            Quality::MinorSeventh => "m7",
            Quality::DominantSeventh => "7",
            Quality::HalfDiminishedSeventh => "\u{f8}7",
        }
    }
}

/// A chord derived from the current key and scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    root: Spelling,
    quality: Quality,
    position: String,
    notes: Vec<Spelling>,
}

impl Chord {
    /// Create a chord from its root, quality, position label and notes
    pub fn new(root: Spelling, quality: Quality, position: impl Into<String>, notes: Vec<Spelling>) -> Self {
        Self {
            root,
            quality,
            position: position.into(),
            notes,
        }
    }

    /// Get the chord name (root plus quality suffix, e.g. "Dm7")
    pub fn name(&self) -> String {
        self.name_in(Notation::Unicode)
    }

    /// Get the chord name with accidentals in the given notation
    pub fn name_in(&self, notation: Notation) -> String {
        format!("{}{}", self.root.render(notation), self.quality.suffix())
    }

    pub fn root(&self) -> Spelling {
        self.root
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Get the position label (e.g. "IV", "V7 / ii")
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Get the chord tones, root first
    pub fn notes(&self) -> &[Spelling] {
        &self.notes
    }

    /// Render as `name (position): notes`
    pub fn render(&self, notation: Notation) -> String {
        let notes: Vec<String> = self.notes.iter().map(|n| n.render(notation)).collect();
        format!("{} ({}): {}", self.name_in(notation), self.position, notes.join(" "))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Unicode))
    }
}

/// Quality and position label for each root degree of a scale family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeTable {
    pub qualities: [Quality; SCALE_LEN],
    pub positions: [&'static str; SCALE_LEN],
}

static MAJOR_TRIADS: DegreeTable = DegreeTable {
    qualities: [
        Quality::Major,
        Quality::Minor,
        Quality::Minor,
        Quality::Major,
        Quality::Major,
        Quality::Minor,
        Quality::Diminished,
    ],
    positions: ["I", "ii", "iii", "IV", "V", "vi", "vii\u{b0}"],
};

static MAJOR_SEVENTHS: DegreeTable = DegreeTable {
    qualities: [
        Quality::MajorSeventh,
        Quality::MinorSeventh,
        Quality::MinorSeventh,
        Quality::MajorSeventh,
        Quality::DominantSeventh,
        Quality::MinorSeventh,
        Quality::HalfDiminishedSeventh,
    ],
    positions: ["IM7", "ii7", "iii7", "IVM7", "V7", "vi7", "vii\u{f8}7"],
};

static MINOR_TRIADS: DegreeTable = DegreeTable {
    qualities: [
        Quality::Minor,
        Quality::Diminished,
        Quality::Major,
        Quality::Minor,
        Quality::Minor,
        Quality::Major,
        Quality::Major,
    ],
    positions: ["i", "ii\u{b0}", "III", "iv", "v", "VI", "VII"],
};

static MINOR_SEVENTHS: DegreeTable = DegreeTable {
    qualities: [
        Quality::MinorSeventh,
        Quality::HalfDiminishedSeventh,
        Quality::MajorSeventh,
        Quality::MinorSeventh,
        Quality::MinorSeventh,
        Quality::MajorSeventh,
        Quality::DominantSeventh,
    ],
    positions: ["i7", "ii\u{f8}7", "IIIM7", "iv7", "v7", "VIM7", "VII7"],
};

impl ScaleFamily {
    /// Triad qualities and labels for each degree
    pub fn triad_table(self) -> &'static DegreeTable {
        match self {
            ScaleFamily::Major => &MAJOR_TRIADS,
            ScaleFamily::NaturalMinor => &MINOR_TRIADS,
        }
    }

    /// Seventh-chord qualities and labels for each degree
    pub fn seventh_table(self) -> &'static DegreeTable {
        match self {
            ScaleFamily::Major => &MAJOR_SEVENTHS,
            ScaleFamily::NaturalMinor => &MINOR_SEVENTHS,
        }
    }
}

/// Stack scale notes above `root_degree` at the given degree offsets
pub fn stack(scale: &SpelledScale, root_degree: usize, offsets: &[usize]) -> Vec<Spelling> {
    offsets
        .iter()
        .map(|&offset| scale.degree(root_degree + offset))
        .collect()
}

/// Build one chord on every degree of the scale
pub fn build_chords(scale: &SpelledScale, offsets: &[usize], table: &DegreeTable) -> Vec<Chord> {
    (0..SCALE_LEN)
        .map(|degree| {
            Chord::new(
                scale.degree(degree),
                table.qualities[degree],
                table.positions[degree],
                stack(scale, degree, offsets),
            )
        })
        .collect()
}

/// Triads on each degree of the scale
pub fn triads(scale: &SpelledScale, family: ScaleFamily) -> Vec<Chord> {
    build_chords(scale, &TRIAD, family.triad_table())
}

/// Seventh chords on each degree of the scale
pub fn sevenths(scale: &SpelledScale, family: ScaleFamily) -> Vec<Chord> {
    build_chords(scale, &SEVENTH, family.seventh_table())
}
