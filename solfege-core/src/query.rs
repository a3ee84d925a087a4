//! Query types for the dispatch system.
//!
//! A `Query` is one request against the engine; dispatching it yields an `Answer`.
//! Both are serde types so that they travel as JSON lines.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use solfege_types::Chord;

/// One request, tagged by `"op"` on the wire:
/// `{"op": "frequency", "note": "A4"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Query {
    Frequency {
        note: Value,
    },
    Scale {
        root: String,
        /// Falls back to the configured default mode.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<String>,
    },
    Chord {
        chord: Value,
    },
    ChordNotes {
        chord: Value,
    },
    Interval {
        name: String,
    },
    SharpToFlat {
        note: String,
    },
    FlatToSharp {
        note: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Frequency { hz: f64 },
    Notes { notes: Vec<String> },
    Chord(Chord),
    Semitones { semitones: u8 },
    Note { note: String },
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Frequency { hz } => write!(f, "{}", hz),
            Answer::Notes { notes } => write!(f, "{}", notes.join(" ")),
            Answer::Chord(chord) => {
                write!(f, "{} ({}", chord.names().join(" "), chord.quality.name())?;
                if chord.seventh {
                    write!(f, ", 7th")?;
                }
                write!(f, ")")
            }
            Answer::Semitones { semitones } => write!(f, "{}", semitones),
            Answer::Note { note } => write!(f, "{}", note),
        }
    }
}

/// Wire envelope for one dispatched line: `{"ok": ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Response {
    Ok(Answer),
    Error(String),
}
