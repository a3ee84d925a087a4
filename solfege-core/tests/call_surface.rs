//! The public call surface, checked against the documented behaviour.

use serde_json::json;
use solfege_core::engine::*;
use solfege_core::types::TheoryError;

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// --- Frequency ---

#[test]
fn test_frequency_anchor() {
    assert_eq!(get_frequency(&json!("A4")), Ok(440.0));
}

#[test]
fn test_frequency_octave_doubling() {
    let a4 = get_frequency(&json!("A4")).unwrap();
    let a5 = get_frequency(&json!("A5")).unwrap();
    assert_eq!(a5, 2.0 * a4);

    for name in ["C", "D", "D#", "E", "F", "Gb", "G", "G#", "Bb", "B"] {
        for octave in 0..9 {
            let low = get_frequency(&json!(format!("{}{}", name, octave))).unwrap();
            let high = get_frequency(&json!(format!("{}{}", name, octave + 1))).unwrap();
            assert_eq!(high, 2.0 * low, "{}{}", name, octave);
        }
    }
}

#[test]
fn test_frequency_default_octave_is_4() {
    assert_eq!(get_frequency(&json!("C")), get_frequency(&json!("C4")));
}

#[test]
fn test_frequency_rejects_non_strings() {
    assert!(matches!(
        get_frequency(&json!(12345)),
        Err(TheoryError::InvalidNote { .. })
    ));
    assert!(get_frequency(&json!(null)).is_err());
    assert!(get_frequency(&json!({"note": "A4"})).is_err());
}

#[test]
fn test_frequency_rejects_long_tokens() {
    assert_eq!(
        get_frequency(&json!("C#44")),
        Err(TheoryError::invalid_note("C#44"))
    );
}

// --- Scales ---

#[test]
fn test_major_scale() {
    assert_eq!(
        get_scale("C", "major"),
        Ok(strings(&["C", "D", "E", "F", "G", "A", "B", "C"]))
    );
}

#[test]
fn test_minor_scale() {
    assert_eq!(
        get_scale("A", "minor"),
        Ok(strings(&["A", "B", "C", "D", "E", "F", "G", "A"]))
    );
}

#[test]
fn test_scales_close_on_root() {
    for root in ["C", "C#", "Db", "E", "F#", "Ab", "B"] {
        for mode in ["major", "minor"] {
            let notes = get_scale(root, mode).unwrap();
            assert_eq!(notes.len(), 8);
            assert_eq!(notes[0], notes[7], "{} {}", root, mode);
        }
    }
}

// --- Chords ---

#[test]
fn test_chord_to_notes() {
    assert_eq!(chord_to_notes(&json!("Cmaj")), Ok(strings(&["C", "E", "G", "C"])));
    assert_eq!(chord_to_notes(&json!("Am")), Ok(strings(&["A", "C", "E", "A"])));
}

#[test]
fn test_parse_chord_rejects_arrays() {
    assert!(parse_chord(&json!(["C", "maj"])).is_err());
}

#[test]
fn test_parse_chord_rejects_missing_quality() {
    assert_eq!(
        parse_chord(&json!("Cx")),
        Err(TheoryError::UnresolvedChordQuality { chord: "Cx".into() })
    );
}

#[test]
fn test_parse_chord_records_seventh() {
    let chord = get_chord(&json!("Dm7")).unwrap();
    assert!(chord.seventh);
    assert_eq!(chord.notes.len(), 4);
}

// --- Intervals ---

#[test]
fn test_interval_table() {
    assert_eq!(get_semitone_difference("perfect 5th"), Ok(7));
    assert_eq!(get_semitone_difference("octave"), Ok(12));
    assert!(matches!(
        get_semitone_difference("fifth"),
        Err(TheoryError::UnknownInterval { .. })
    ));
}

// --- Enharmonics ---

#[test]
fn test_enharmonic_round_trip() {
    for sharp in ["C#", "D#", "F#", "G#", "A#", "C#3", "A#0"] {
        let flat = sharp_to_flat(sharp).unwrap();
        assert!(flat.contains('b'), "{} -> {}", sharp, flat);
        assert_eq!(flat_to_sharp(&flat).unwrap(), sharp);
    }
}

#[test]
fn test_enharmonic_spellings_sound_the_same() {
    for flat in ["Db4", "Eb2", "Gb6", "Ab1", "Bb3", "Cb4", "Fb5"] {
        let sharp = flat_to_sharp(flat).unwrap();
        assert_eq!(
            get_frequency(&json!(flat)),
            get_frequency(&json!(sharp)),
            "{} vs {}",
            flat,
            sharp
        );
    }
}
