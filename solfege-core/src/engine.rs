//! Call surface for callers holding loosely typed tokens (JSON requests, scripts).
//!
//! Tokens arrive as [`serde_json::Value`]; anything that is not a string is rejected
//! with [`TheoryError::InvalidNote`] instead of being coerced.

use serde_json::Value;

use solfege_types::{
    self as theory, frequency_with_reference, semitone_offset, Chord, Note, PitchClass,
    Result, ScaleMode, TheoryError, A4_FREQUENCY,
};

fn token_str(token: &Value) -> Result<&str> {
    token
        .as_str()
        .ok_or_else(|| TheoryError::invalid_note(token.to_string()))
}

fn names(pcs: &[PitchClass]) -> Vec<String> {
    pcs.iter().map(|pc| pc.name().to_string()).collect()
}

/// Resolve a chord token. Arrays and other non-strings fail.
pub fn parse_chord(token: &Value) -> Result<Chord> {
    theory::parse_chord(token_str(token)?)
}

pub fn get_chord(token: &Value) -> Result<Chord> {
    parse_chord(token)
}

pub fn chord_to_notes(token: &Value) -> Result<Vec<String>> {
    Ok(names(&parse_chord(token)?.notes))
}

/// Scale note names. Any mode other than minor gives the major scale.
pub fn get_scale(root: &str, mode: &str) -> Result<Vec<String>> {
    let mode = match ScaleMode::from_name(mode) {
        Some(ScaleMode::Minor) => ScaleMode::Minor,
        _ => ScaleMode::Major,
    };
    scale_names(root, mode)
}

pub(crate) fn scale_names(root: &str, mode: ScaleMode) -> Result<Vec<String>> {
    let root: PitchClass = root.parse()?;
    Ok(names(&theory::scale(root, mode).degrees))
}

pub fn get_semitone_difference(interval: &str) -> Result<u8> {
    semitone_offset(interval)
}

pub fn sharp_to_flat(note: &str) -> Result<String> {
    Ok(theory::sharp_to_flat(&Note::parse(note)?).to_string())
}

pub fn flat_to_sharp(note: &str) -> Result<String> {
    Ok(theory::flat_to_sharp(&Note::parse(note)?).to_string())
}

/// Frequency in Hz with A4 = 440 Hz.
pub fn get_frequency(token: &Value) -> Result<f64> {
    frequency_at(token, A4_FREQUENCY)
}

pub(crate) fn frequency_at(token: &Value, tuning_a4: f64) -> Result<f64> {
    let note = Note::parse(token_str(token)?)?;
    Ok(frequency_with_reference(&note, tuning_a4))
}
