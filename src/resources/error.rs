use std::{fmt, io, string::FromUtf8Error};

use thiserror::Error;

/// What a read was producing, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTarget {
    Raw,
    String,
}

impl fmt::Display for ReadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadTarget::Raw => Ok(()),
            ReadTarget::String => f.write_str(" to string"),
        }
    }
}

/// Why a resource could not be loaded. The `Display` text is the diagnostic
/// that gets logged; details live in the fields and `source()`.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Failed to open resource file '{filename}'")]
    Open {
        filename: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read resource file '{filename}'{target}")]
    Size {
        filename: String,
        target: ReadTarget,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read resource file '{filename}'{target}")]
    TooLarge {
        filename: String,
        target: ReadTarget,
        size: u64,
    },

    #[error("Failed to read resource file '{filename}'{target}")]
    Io {
        filename: String,
        target: ReadTarget,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read resource file '{filename}'{target}")]
    Read {
        filename: String,
        target: ReadTarget,
        expected: u64,
        read: usize,
    },

    #[error("Failed to read resource file '{filename}' to string")]
    InvalidUtf8 {
        filename: String,
        #[source]
        source: FromUtf8Error,
    },
}

impl ResourceError {
    pub fn filename(&self) -> &str {
        match self {
            ResourceError::Open { filename, .. }
            | ResourceError::Size { filename, .. }
            | ResourceError::TooLarge { filename, .. }
            | ResourceError::Io { filename, .. }
            | ResourceError::Read { filename, .. }
            | ResourceError::InvalidUtf8 { filename, .. } => filename,
        }
    }

    pub fn is_open_failure(&self) -> bool {
        matches!(self, ResourceError::Open { .. })
    }

    pub fn is_read_failure(&self) -> bool {
        !self.is_open_failure()
    }
}
