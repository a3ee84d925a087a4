//! Sharp/flat respelling. Both directions keep the sounding pitch: the result
//! always has the same [`Note::key_index`] as the input.

use crate::note::{Accidental, Note};
use crate::pitch::Letter;

/// Respell a flat note with a sharp (`Db4` → `C#4`). Non-flat notes are returned as-is.
///
/// Stepping back from C lands on B of the previous octave, so `Cb4` becomes `B3`.
/// B and E take no sharp, so `Cb` and `Fb` come out natural.
///
/// The octave is not clamped: `Cb0` becomes `B-1`, which renders fine but is outside
/// the single-digit range [`Note::parse`] accepts.
pub fn flat_to_sharp(note: &Note) -> Note {
    if note.accidental != Accidental::Flat {
        return *note;
    }

    let letter = note.letter.prev();
    let accidental = if letter.has_sharp() {
        Accidental::Sharp
    } else {
        Accidental::Natural
    };
    let octave = if letter == Letter::B {
        note.octave.map(|o| o - 1)
    } else {
        note.octave
    };
    Note::new(letter, accidental, octave)
}

/// Respell a sharp note with a flat (`C#4` → `Db4`). Non-sharp notes are returned as-is.
///
/// Stepping forward from B lands on C of the next octave, so `B#3` becomes `C4`.
///
/// The octave is not clamped: `B#9` becomes `C10`, which renders fine but is outside
/// the single-digit range [`Note::parse`] accepts.
pub fn sharp_to_flat(note: &Note) -> Note {
    if note.accidental != Accidental::Sharp {
        return *note;
    }

    let letter = note.letter.next();
    let accidental = if letter.has_flat() {
        Accidental::Flat
    } else {
        Accidental::Natural
    };
    let octave = if letter == Letter::C {
        note.octave.map(|o| o + 1)
    } else {
        note.octave
    };
    Note::new(letter, accidental, octave)
}

impl Note {
    pub fn to_sharp(&self) -> Note {
        flat_to_sharp(self)
    }

    pub fn to_flat(&self) -> Note {
        sharp_to_flat(self)
    }
}
