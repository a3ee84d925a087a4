//! Note token parsing: a letter, an optional accidental and an optional octave digit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::pitch::{Letter, PitchClass};

/// Octave assumed when a token carries no digit.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Longest accepted token: letter + accidental + one octave digit.
pub const MAX_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn semitones(&self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Accidental> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' | 'B' => Some(Accidental::Flat),
            _ => None,
        }
    }
}

/// A spelled note. Spelling is kept so that it can be re-rendered; the sounding
/// pitch depends only on [`Note::key_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
    /// `None` when the token had no octave digit.
    pub octave: Option<i32>,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental, octave: Option<i32>) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    /// Parse a token such as `"C#4"`, `"Bb"` or `"g"`.
    pub fn parse(token: &str) -> Result<Note> {
        let invalid = || TheoryError::invalid_note(token);
        if token.is_empty() || token.chars().count() > MAX_TOKEN_LEN {
            return Err(invalid());
        }

        let mut chars = token.chars().peekable();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(invalid)?;

        let accidental = match chars.peek().copied().and_then(Accidental::from_char) {
            Some(acc) => {
                chars.next();
                acc
            }
            None => Accidental::Natural,
        };

        let octave = match chars.next() {
            Some(c) => Some(c.to_digit(10).ok_or_else(invalid)? as i32),
            None => None,
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Note::new(letter, accidental, octave))
    }

    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::from_index(self.letter.semitone() + self.accidental.semitones())
    }

    pub fn octave_or_default(&self) -> i32 {
        self.octave.unwrap_or(DEFAULT_OCTAVE)
    }

    /// Absolute key number with C0 = 0. Accidentals may cross the octave boundary,
    /// so `Cb4` and `B3` share a key index.
    pub fn key_index(&self) -> i32 {
        self.letter.semitone() + self.accidental.semitones() + self.octave_or_default() * 12
    }

    /// Same note with a different octave (or none).
    pub fn with_octave(self, octave: Option<i32>) -> Note {
        Note { octave, ..self }
    }
}

impl From<PitchClass> for Note {
    fn from(pc: PitchClass) -> Self {
        let (letter, sharp) = pc.sharp_spelling();
        let accidental = if sharp {
            Accidental::Sharp
        } else {
            Accidental::Natural
        };
        Note::new(letter, accidental, None)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Note::parse(s)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())?;
        if let Some(octave) = self.octave {
            write!(f, "{}", octave)?;
        }
        Ok(())
    }
}
