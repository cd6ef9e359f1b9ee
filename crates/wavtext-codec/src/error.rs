//! Error types for the wavtext codec.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error reading the source or writing the destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bit depth outside {8, 16, 32}.
    #[error("unsupported bit depth: {bits} (supported: 8, 16, 32)")]
    UnsupportedBitDepth {
        /// The rejected bit depth.
        bits: u16,
    },

    /// The decoded samples do not start with the magic marker.
    #[error("this WAV file doesn't contain encoded data")]
    NotEncoded,

    /// The magic marker is present but the payload is not valid base64.
    #[error("corrupt payload: {0}")]
    CorruptPayload(#[from] base64::DecodeError),

    /// The container stores IEEE float samples.
    #[error("unsupported sample format: only integer PCM is supported")]
    UnsupportedSampleFormat,

    /// The RIFF/WAVE structure could not be parsed.
    #[error("malformed WAV container: {0}")]
    Container(String),

    /// The WAV would not fit in a 32-bit RIFF chunk.
    #[error("payload too large: {bytes} bytes exceeds the WAV size limit")]
    PayloadTooLarge {
        /// Size of the payload that was rejected.
        bytes: usize,
    },
}

impl CodecError {
    /// Creates a container error.
    pub fn container(message: impl Into<String>) -> Self {
        Self::Container(message.into())
    }

    /// Returns true for the "no magic marker" outcome.
    ///
    /// Callers report this as a non-match rather than a crash.
    pub fn is_not_encoded(&self) -> bool {
        matches!(self, CodecError::NotEncoded)
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::Io(_) => "CODEC_001",
            CodecError::UnsupportedBitDepth { .. } => "CODEC_002",
            CodecError::NotEncoded => "CODEC_003",
            CodecError::CorruptPayload(_) => "CODEC_004",
            CodecError::UnsupportedSampleFormat => "CODEC_005",
            CodecError::Container(_) => "CODEC_006",
            CodecError::PayloadTooLarge { .. } => "CODEC_007",
        }
    }
}

impl From<hound::Error> for CodecError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => CodecError::Io(e),
            other => CodecError::Container(other.to_string()),
        }
    }
}
