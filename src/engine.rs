// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key/scale selection and the chord collections derived from it.
//!
//! The engine owns one piece of mutable state, the current selection. Every
//! change of key or scale re-derives the spelled scale and all five chord
//! collections from scratch; a rejected selection leaves everything as it was.

use std::fmt;

use tracing::{debug, warn};

use crate::error::Result;
use crate::harmony::{
    secondary_dominants, secondary_leading_tones, sevenths, triads, tritone_substitution, Chord,
};
use crate::music::{
    enumerate_scale, parse_tonic, Letter, PitchClass, ScaleFamily, SpelledScale, Spelling,
    SCALE_LEN,
};

/// A key and scale family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    tonic: Spelling,
    family: ScaleFamily,
}

impl Selection {
    /// Create a selection from an already-validated tonic
    pub fn new(tonic: Spelling, family: ScaleFamily) -> Self {
        Self { tonic, family }
    }

    /// Parse a selection from strings (e.g., "E♭", "minor")
    pub fn parse(key: &str, scale: &str) -> Result<Self> {
        let tonic = parse_tonic(key)?;
        let family = scale.parse()?;
        Ok(Self::new(tonic, family))
    }

    pub fn tonic(&self) -> Spelling {
        self.tonic
    }

    pub fn tonic_pitch_class(&self) -> PitchClass {
        self.tonic.pitch_class()
    }

    pub fn family(&self) -> ScaleFamily {
        self.family
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(Spelling::natural(Letter::C), ScaleFamily::Major)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.family)
    }
}

/// Everything derived from one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harmony {
    pub scale: SpelledScale,
    pub triads: Vec<Chord>,
    pub sevenths: Vec<Chord>,
    pub secondary_dominants: Vec<Chord>,
    pub secondary_leading_tones: Vec<Chord>,
    pub tritone_substitution: Vec<Chord>,
}

impl Harmony {
    /// Derive the scale and all chord collections for a selection
    pub fn derive(selection: &Selection) -> Self {
        let family = selection.family();
        let scale = enumerate_scale(selection.tonic(), &family.pattern());

        Self {
            triads: triads(&scale, family),
            sevenths: sevenths(&scale, family),
            secondary_dominants: secondary_dominants(&scale),
            secondary_leading_tones: secondary_leading_tones(&scale),
            tritone_substitution: tritone_substitution(selection.tonic()),
            scale,
        }
    }
}

/// Current selection plus its derived harmony
#[derive(Debug, Clone)]
pub struct ChordEngine {
    selection: Selection,
    harmony: Harmony,
}

impl ChordEngine {
    /// Create an engine for the given selection
    pub fn new(selection: Selection) -> Self {
        debug!(selection = %selection, "deriving harmony");
        Self {
            harmony: Harmony::derive(&selection),
            selection,
        }
    }

    /// Select a new key, keeping the scale family
    pub fn select_key(&mut self, name: &str) -> Result<()> {
        let tonic = parse_tonic(name).inspect_err(|e| warn!("key rejected: {}", e))?;
        self.select(Selection::new(tonic, self.selection.family()));
        Ok(())
    }

    /// Select a new scale family, keeping the key
    pub fn select_scale(&mut self, name: &str) -> Result<()> {
        let family: ScaleFamily = name
            .parse()
            .inspect_err(|e| warn!("scale rejected: {}", e))?;
        self.select(Selection::new(self.selection.tonic(), family));
        Ok(())
    }

    /// Replace the whole selection at once
    pub fn select(&mut self, selection: Selection) {
        debug!(selection = %selection, "deriving harmony");
        self.harmony = Harmony::derive(&selection);
        self.selection = selection;
    }

    /// Get the current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Get the derived harmony
    pub fn harmony(&self) -> &Harmony {
        &self.harmony
    }

    /// Get the spelled scale notes
    pub fn scale_notes(&self) -> &[Spelling; SCALE_LEN] {
        self.harmony.scale.notes()
    }

    pub fn triads(&self) -> &[Chord] {
        &self.harmony.triads
    }

    pub fn sevenths(&self) -> &[Chord] {
        &self.harmony.sevenths
    }

    pub fn secondary_dominants(&self) -> &[Chord] {
        &self.harmony.secondary_dominants
    }

    pub fn secondary_leading_tones(&self) -> &[Chord] {
        &self.harmony.secondary_leading_tones
    }

    pub fn tritone_substitution(&self) -> &[Chord] {
        &self.harmony.tritone_substitution
    }
}

impl Default for ChordEngine {
    fn default() -> Self {
        Self::new(Selection::default())
    }
}
