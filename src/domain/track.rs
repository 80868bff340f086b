use std::fmt;

use serde::Deserialize;

/// Opaque key naming an audio asset within a remote content service.
///
/// The id is joined onto the cache directory when deriving file names, so
/// anything that could escape that directory is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, TrackIdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TrackIdError::Empty);
        }
        if raw.contains('/') || raw.contains('\\') || raw.contains("..") {
            return Err(TrackIdError::PathComponent(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackIdError {
    #[error("track id is empty")]
    Empty,
    #[error("track id contains a path component: {0}")]
    PathComponent(String),
}

/// Audio container tag as requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackFormat {
    Ogg,
    Mp3,
    Flac,
    Wav,
}

impl TrackFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Ogg => "ogg",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Wav => "wav",
        }
    }
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
