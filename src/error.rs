use crate::profile::Mood;
use std::fmt;

/// Errors reported by the MoodMix engine.
///
/// All failures are synchronous and leave no partial output behind: decode,
/// generate and remix either return a complete buffer or one of these.
#[derive(Debug)]
pub enum MoodMixError {
    /// The input container is not 8- or 16-bit integer PCM, or is
    /// structurally malformed (bad magic, missing chunks, truncated data).
    UnsupportedFormat { detail: String },
    /// The requested mood name is not in the fixed profile table.
    UnknownMood { name: String },
    /// A caller-supplied parameter is out of range (non-positive duration or
    /// sample rate, intensity outside [0, 1]).
    InvalidParameter { name: &'static str, detail: String },
}

impl fmt::Display for MoodMixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodMixError::UnsupportedFormat { detail } => {
                write!(f, "Unsupported audio format: {detail}")
            }
            MoodMixError::UnknownMood { name } => {
                let known: Vec<&str> = Mood::ALL.iter().map(|m| m.name()).collect();
                write!(f, "Unsupported mood: {name}. Choose from: {}", known.join(", "))
            }
            MoodMixError::InvalidParameter { name, detail } => {
                write!(f, "Invalid {name}: {detail}")
            }
        }
    }
}

impl std::error::Error for MoodMixError {}
