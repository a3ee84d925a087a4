//! Chord shorthand resolution (`"Cmaj"`, `"Am"`, `"F#m7"`).

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::interval::Interval;
use crate::note::{Accidental, Note};
use crate::pitch::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    Major,
    Minor,
}

impl ChordQuality {
    /// `"maj"` anywhere in the lowercased chord means major; otherwise any `m` means
    /// minor. Anything else has no quality.
    pub fn detect(chord: &str) -> Option<ChordQuality> {
        let lower = chord.to_lowercase();
        if lower.contains("maj") {
            Some(ChordQuality::Major)
        } else if lower.contains('m') {
            Some(ChordQuality::Minor)
        } else {
            None
        }
    }

    pub fn third(&self) -> Interval {
        match self {
            ChordQuality::Major => Interval::Major3rd,
            ChordQuality::Minor => Interval::Minor3rd,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: ChordQuality,
    /// A `7` was present. Recorded only; the note list is always a triad plus octave.
    pub seventh: bool,
    /// First digit of the chord, when it is not a seventh.
    pub octave: Option<i32>,
    /// Root, third, fifth, root an octave up.
    pub notes: Vec<PitchClass>,
}

impl Chord {
    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|pc| pc.name()).collect()
    }
}

/// Resolve a chord token into its root, quality and notes.
pub fn parse_chord(chord: &str) -> Result<Chord> {
    let root = parse_root(chord)?;
    let quality =
        ChordQuality::detect(chord).ok_or_else(|| TheoryError::UnresolvedChordQuality {
            chord: chord.to_string(),
        })?;

    let seventh = chord.contains('7');
    let octave = if seventh {
        None
    } else {
        chord
            .chars()
            .find_map(|c| c.to_digit(10))
            .map(|d| d as i32)
    };

    let notes = [
        Interval::Unison,
        quality.third(),
        Interval::Perfect5th,
        Interval::Octave,
    ]
    .iter()
    .map(|interval| root.transpose(interval.semitones() as i32))
    .collect();

    Ok(Chord {
        root,
        quality,
        seventh,
        octave,
        notes,
    })
}

/// Note list of a chord token.
pub fn chord_to_notes(chord: &str) -> Result<Vec<PitchClass>> {
    Ok(parse_chord(chord)?.notes)
}

/// The leading letter plus an accidental if one follows it.
fn parse_root(chord: &str) -> Result<PitchClass> {
    let mut end = chord
        .chars()
        .next()
        .map(char::len_utf8)
        .ok_or_else(|| TheoryError::invalid_note(chord))?;
    if chord[end..].chars().next().and_then(Accidental::from_char).is_some() {
        end += 1;
    }
    Note::parse(&chord[..end])
        .map(|note| note.pitch_class())
        .map_err(|_| TheoryError::invalid_note(chord))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major() {
        let chord = parse_chord("Cmaj").unwrap();
        assert_eq!(chord.root, PitchClass::C);
        assert_eq!(chord.quality, ChordQuality::Major);
        assert_eq!(chord.names(), vec!["C", "E", "G", "C"]);
    }

    #[test]
    fn a_minor() {
        assert_eq!(parse_chord("Am").unwrap().names(), vec!["A", "C", "E", "A"]);
    }

    #[test]
    fn quality_detection_is_case_insensitive() {
        assert_eq!(ChordQuality::detect("CMAJ"), Some(ChordQuality::Major));
        assert_eq!(ChordQuality::detect("dM"), Some(ChordQuality::Minor));
        assert_eq!(ChordQuality::detect("Cx"), None);
    }

    #[test]
    fn maj_wins_over_m() {
        assert_eq!(ChordQuality::detect("Cmaj"), Some(ChordQuality::Major));
        assert_eq!(ChordQuality::detect("Cmin"), Some(ChordQuality::Minor));
    }

    #[test]
    fn accidental_roots() {
        assert_eq!(parse_chord("F#m").unwrap().names(), vec!["F#", "A", "C#", "F#"]);
        assert_eq!(parse_chord("Bbmaj").unwrap().names(), vec!["A#", "D", "F", "A#"]);
    }

    #[test]
    fn root_accidentals_match_note_parsing() {
        // 'B' after the letter is a flat, as in note tokens
        let chord = parse_chord("BBmaj").unwrap();
        assert_eq!(chord.root, Note::parse("BB").unwrap().pitch_class());
        assert_eq!(chord.names(), vec!["A#", "D", "F", "A#"]);
        assert_eq!(parse_chord("EBm").unwrap().root, PitchClass::Ds);
        assert_eq!(parse_chord("Bmaj").unwrap().root, PitchClass::B);
    }

    #[test]
    fn notes_wrap_past_b() {
        assert_eq!(parse_chord("Bmaj").unwrap().names(), vec!["B", "D#", "F#", "B"]);
        assert_eq!(parse_chord("Gm").unwrap().names(), vec!["G", "A#", "D", "G"]);
    }

    #[test]
    fn seventh_is_detected_but_not_voiced() {
        let chord = parse_chord("Cmaj7").unwrap();
        assert!(chord.seventh);
        assert_eq!(chord.octave, None);
        assert_eq!(chord.notes.len(), 4);
        assert_eq!(chord.names(), vec!["C", "E", "G", "C"]);
    }

    #[test]
    fn octave_digit_is_recorded() {
        let chord = parse_chord("Am3").unwrap();
        assert!(!chord.seventh);
        assert_eq!(chord.octave, Some(3));
        assert_eq!(parse_chord("Am").unwrap().octave, None);
    }

    #[test]
    fn missing_quality_fails() {
        assert_eq!(
            parse_chord("Cx"),
            Err(TheoryError::UnresolvedChordQuality { chord: "Cx".into() })
        );
        assert!(parse_chord("C").is_err());
    }

    #[test]
    fn bad_root_fails() {
        assert_eq!(parse_chord("Xmaj"), Err(TheoryError::invalid_note("Xmaj")));
        assert_eq!(parse_chord(""), Err(TheoryError::invalid_note("")));
        assert_eq!(parse_chord("7m"), Err(TheoryError::invalid_note("7m")));
    }

    #[test]
    fn chord_to_notes_matches_parse() {
        assert_eq!(
            chord_to_notes("Dm").unwrap(),
            vec![PitchClass::D, PitchClass::F, PitchClass::A, PitchClass::D]
        );
    }

    #[test]
    fn third_and_fifth_offsets() {
        for root in PitchClass::ALL {
            for (suffix, third) in [("maj", 4), ("m", 3)] {
                let token = format!("{}{}", root.name(), suffix);
                let chord = parse_chord(&token).unwrap();
                assert_eq!(chord.notes[1], root.transpose(third), "{}", token);
                assert_eq!(chord.notes[2], root.transpose(7), "{}", token);
                assert_eq!(chord.notes[3], root, "{}", token);
            }
        }
    }
}
