//! The chromatic pitch-class table and the natural-letter alphabet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::Note;

/// One of the 12 equal-tempered semitones, named with its preferred sharp spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Position in the table, C = 0 through B = 11.
    pub fn index(&self) -> i32 {
        *self as i32
    }

    /// Resolve any table position, wrapping past B back to C (and below C to B).
    pub fn from_index(index: i32) -> PitchClass {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn transpose(&self, semitones: i32) -> PitchClass {
        Self::from_index(self.index() + semitones)
    }

    /// The natural letter and whether a sharp is applied in the preferred spelling.
    pub fn sharp_spelling(&self) -> (Letter, bool) {
        match self {
            PitchClass::C => (Letter::C, false),
            PitchClass::Cs => (Letter::C, true),
            PitchClass::D => (Letter::D, false),
            PitchClass::Ds => (Letter::D, true),
            PitchClass::E => (Letter::E, false),
            PitchClass::F => (Letter::F, false),
            PitchClass::Fs => (Letter::F, true),
            PitchClass::G => (Letter::G, false),
            PitchClass::Gs => (Letter::G, true),
            PitchClass::A => (Letter::A, false),
            PitchClass::As => (Letter::A, true),
            PitchClass::B => (Letter::B, false),
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Accepts any note token; the octave, if any, is discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Note::parse(s)?.pitch_class())
    }
}

/// Natural note letters, in alphabet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    pub fn from_char(c: char) -> Option<Letter> {
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

    pub fn as_char(&self) -> char {
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

    /// Semitone of the natural note above C in the same octave.
    pub fn semitone(&self) -> i32 {
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

    /// Next letter in the alphabet; G wraps to A.
    pub fn next(&self) -> Letter {
        Self::ALL[(*self as usize + 1) % 7]
    }

    /// Previous letter in the alphabet; A wraps to G.
    pub fn prev(&self) -> Letter {
        Self::ALL[(*self as usize + 6) % 7]
    }

    /// E and B are a semitone below the next letter, so they take no sharp.
    pub fn has_sharp(&self) -> bool {
        !matches!(self, Letter::E | Letter::B)
    }

    /// C and F are a semitone above the previous letter, so they take no flat.
    pub fn has_flat(&self) -> bool {
        !matches!(self, Letter::C | Letter::F)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pitch_class_all_has_12() {
        assert_eq!(PitchClass::ALL.len(), 12);
    }

    #[test]
    fn pitch_class_names_unique() {
        let names: HashSet<&str> = PitchClass::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn pitch_class_indices_0_to_11() {
        let indices: Vec<i32> = PitchClass::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, (0..12).collect::<Vec<i32>>());
    }

    #[test]
    fn from_index_wraps_both_ways() {
        assert_eq!(PitchClass::from_index(12), PitchClass::C);
        assert_eq!(PitchClass::from_index(23), PitchClass::B);
        assert_eq!(PitchClass::from_index(-1), PitchClass::B);
        assert_eq!(PitchClass::from_index(9 + 11), PitchClass::Gs);
    }

    #[test]
    fn transpose_is_cyclic() {
        for pc in PitchClass::ALL {
            assert_eq!(pc.transpose(12), pc);
            assert_eq!(pc.transpose(-12), pc);
        }
        assert_eq!(PitchClass::A.transpose(3), PitchClass::C);
    }

    #[test]
    fn sharp_spelling_matches_name() {
        for pc in PitchClass::ALL {
            let (letter, sharp) = pc.sharp_spelling();
            let mut rendered = letter.as_char().to_string();
            if sharp {
                rendered.push('#');
            }
            assert_eq!(rendered, pc.name());
            assert_eq!(letter.semitone() + sharp as i32, pc.index());
        }
    }

    #[test]
    fn pitch_class_from_str() {
        assert_eq!("c#4".parse::<PitchClass>(), Ok(PitchClass::Cs));
        assert_eq!("Bb".parse::<PitchClass>(), Ok(PitchClass::As));
        assert!("H".parse::<PitchClass>().is_err());
    }

    #[test]
    fn pitch_class_serializes_as_name() {
        let json = serde_json::to_string(&PitchClass::Fs).unwrap();
        assert_eq!(json, "\"F#\"");
        let back: PitchClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PitchClass::Fs);
    }

    #[test]
    fn letters_cycle() {
        assert_eq!(Letter::G.next(), Letter::A);
        assert_eq!(Letter::A.prev(), Letter::G);
        for l in Letter::ALL {
            assert_eq!(l.next().prev(), l);
        }
    }

    #[test]
    fn letter_from_char_is_case_insensitive() {
        assert_eq!(Letter::from_char('g'), Some(Letter::G));
        assert_eq!(Letter::from_char('G'), Some(Letter::G));
        assert_eq!(Letter::from_char('h'), None);
    }
}
