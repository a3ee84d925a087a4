use thiserror::Error;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Why a musical input could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Malformed or non-string note token, or an unparseable root letter.
    #[error("invalid note '{token}'")]
    InvalidNote { token: String },
    #[error("unknown interval '{name}'")]
    UnknownInterval { name: String },
    /// Neither a major nor a minor marker was found in the chord.
    #[error("cannot determine chord quality of '{chord}'")]
    UnresolvedChordQuality { chord: String },
}

impl TheoryError {
    pub fn invalid_note(token: impl Into<String>) -> Self {
        TheoryError::InvalidNote {
            token: token.into(),
        }
    }
}
