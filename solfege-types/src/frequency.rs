//! Equal-tempered frequency of a note, anchored at A4.

use crate::enharmonic::flat_to_sharp;
use crate::error::Result;
use crate::note::Note;

pub const A4_FREQUENCY: f64 = 440.0;

/// Key index of A4 with C0 = 0.
pub const A4_KEY_INDEX: i32 = 57;

const A4_OCTAVE: i32 = A4_KEY_INDEX / 12;
const A4_PITCH_CLASS: i32 = A4_KEY_INDEX % 12;

/// Frequency in Hz with A4 = 440 Hz.
pub fn frequency(note: &Note) -> f64 {
    frequency_with_reference(note, A4_FREQUENCY)
}

/// Frequency in Hz for an arbitrary A4 reference pitch.
///
/// Computed as `a4 * 2^((key - 57) / 12)`, split into a pitch-class factor and a
/// power-of-two octave factor so that one octave up is exactly twice the frequency.
pub fn frequency_with_reference(note: &Note, tuning_a4: f64) -> f64 {
    let key_index = flat_to_sharp(note).key_index();
    let pitch_class = key_index.rem_euclid(12);
    let octave = key_index.div_euclid(12);
    tuning_a4
        * 2.0_f64.powf((pitch_class - A4_PITCH_CLASS) as f64 / 12.0)
        * 2.0_f64.powi(octave - A4_OCTAVE)
}

/// Parse a token and return its frequency.
pub fn note_frequency(token: &str) -> Result<f64> {
    Ok(frequency(&Note::parse(token)?))
}
