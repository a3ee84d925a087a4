//! # solfege-types
//!
//! The music theory engine: note parsing, enharmonic spelling, intervals, scales,
//! chords and equal-tempered frequencies. Everything here is a pure function over
//! value types; nothing performs I/O or holds state between calls.
//!
//! ## Module Overview
//!
//! - [`pitch`] : the 12-tone chromatic table (`PitchClass`) and natural letters
//! - [`note`] : note token parsing (`Note`, `Accidental`)
//! - [`enharmonic`] : sharp/flat respelling
//! - [`interval`] : the named interval vocabulary
//! - [`scale`] : major and minor scales
//! - [`chord`] : chord shorthand resolution
//! - [`frequency`] : note to Hz conversion anchored at A4

pub mod chord;
pub mod enharmonic;
mod error;
pub mod frequency;
pub mod interval;
pub mod note;
pub mod pitch;
pub mod scale;

pub use chord::{chord_to_notes, parse_chord, Chord, ChordQuality};
pub use enharmonic::{flat_to_sharp, sharp_to_flat};
pub use error::{Result, TheoryError};
pub use frequency::{frequency, frequency_with_reference, note_frequency, A4_FREQUENCY};
pub use interval::{semitone_offset, Interval};
pub use note::{Accidental, Note, DEFAULT_OCTAVE};
pub use pitch::{Letter, PitchClass};
pub use scale::{scale, Scale, ScaleMode};
