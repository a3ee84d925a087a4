//! Named intervals, from unison up to a thirteenth.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    Unison,
    Flat2nd,
    Second,
    Minor3rd,
    Major3rd,
    Perfect4th,
    Flat5th,
    Perfect5th,
    Minor6th,
    Major6th,
    Minor7th,
    Major7th,
    Octave,
    Flat9th,
    Ninth,
    Sharp9th,
    Major10th,
    Eleventh,
    Augmented11th,
    Perfect12th,
    Flat13th,
    Thirteenth,
}

impl Interval {
    /// Canonical order; each interval's position is its size in semitones.
    pub const ALL: [Interval; 22] = [
        Interval::Unison,
        Interval::Flat2nd,
        Interval::Second,
        Interval::Minor3rd,
        Interval::Major3rd,
        Interval::Perfect4th,
        Interval::Flat5th,
        Interval::Perfect5th,
        Interval::Minor6th,
        Interval::Major6th,
        Interval::Minor7th,
        Interval::Major7th,
        Interval::Octave,
        Interval::Flat9th,
        Interval::Ninth,
        Interval::Sharp9th,
        Interval::Major10th,
        Interval::Eleventh,
        Interval::Augmented11th,
        Interval::Perfect12th,
        Interval::Flat13th,
        Interval::Thirteenth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Interval::Unison => "unison",
            Interval::Flat2nd => "flat 2nd",
            Interval::Second => "2nd",
            Interval::Minor3rd => "minor 3rd",
            Interval::Major3rd => "major 3rd",
            Interval::Perfect4th => "perfect 4th",
            Interval::Flat5th => "flat 5th",
            Interval::Perfect5th => "perfect 5th",
            Interval::Minor6th => "minor 6th",
            Interval::Major6th => "major 6th",
            Interval::Minor7th => "minor 7th",
            Interval::Major7th => "major 7th",
            Interval::Octave => "octave",
            Interval::Flat9th => "flat 9th",
            Interval::Ninth => "9th",
            Interval::Sharp9th => "sharp 9th",
            Interval::Major10th => "major 10th",
            Interval::Eleventh => "11th",
            Interval::Augmented11th => "augmented 11th",
            Interval::Perfect12th => "perfect 12th",
            Interval::Flat13th => "flat 13th",
            Interval::Thirteenth => "13th",
        }
    }

    pub fn semitones(&self) -> u8 {
        *self as u8
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Interval> {
        Self::ALL.iter().copied().find(|i| i.name() == name)
    }
}

/// Semitone size of a named interval.
pub fn semitone_offset(name: &str) -> Result<u8> {
    Interval::from_name(name)
        .map(|i| i.semitones())
        .ok_or_else(|| TheoryError::UnknownInterval {
            name: name.to_string(),
        })
}
