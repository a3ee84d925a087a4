use serde_json::Value;

use solfege_types::{semitone_offset, Result, ScaleMode};

use crate::config::Config;
use crate::engine;
use crate::query::{Answer, Query, Response};

/// Routes queries to the engine, applying configured defaults (A4 reference,
/// default scale mode).
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Frequency of a note token against the configured A4 reference.
    pub fn frequency(&self, note: &Value) -> Result<f64> {
        engine::frequency_at(note, self.config.tuning_a4())
    }

    /// Dispatch a query. Failures are returned as values and never abort the caller.
    pub fn dispatch(&self, query: &Query) -> Result<Answer> {
        log::debug!(target: "dispatch", "query: {:?}", query);
        let result = match query {
            Query::Frequency { note } => self.frequency(note).map(|hz| Answer::Frequency { hz }),
            Query::Scale { root, mode } => {
                let mode = match mode {
                    Some(name) => ScaleMode::from_name(name).unwrap_or_default(),
                    None => self.config.default_scale_mode(),
                };
                engine::scale_names(root, mode).map(|notes| Answer::Notes { notes })
            }
            Query::Chord { chord } => engine::parse_chord(chord).map(Answer::Chord),
            Query::ChordNotes { chord } => {
                engine::chord_to_notes(chord).map(|notes| Answer::Notes { notes })
            }
            Query::Interval { name } => {
                semitone_offset(name).map(|semitones| Answer::Semitones { semitones })
            }
            Query::SharpToFlat { note } => {
                engine::sharp_to_flat(note).map(|note| Answer::Note { note })
            }
            Query::FlatToSharp { note } => {
                engine::flat_to_sharp(note).map(|note| Answer::Note { note })
            }
        };
        match &result {
            Ok(answer) => log::debug!(target: "dispatch", "answer: {:?}", answer),
            Err(e) => log::debug!(target: "dispatch", "unresolved: {}", e),
        }
        result
    }

    /// Parse one JSON query line and render one JSON response line.
    pub fn dispatch_line(&self, line: &str) -> String {
        let response = match serde_json::from_str::<Query>(line) {
            Ok(query) => match self.dispatch(&query) {
                Ok(answer) => Response::Ok(answer),
                Err(e) => Response::Error(e.to_string()),
            },
            Err(e) => {
                log::warn!(target: "dispatch", "malformed query {:?}: {}", line, e);
                Response::Error(format!("malformed query: {}", e))
            }
        };
        serde_json::to_string(&response)
            .unwrap_or_else(|e| format!("{{\"error\":\"cannot encode response: {}\"}}", e))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
