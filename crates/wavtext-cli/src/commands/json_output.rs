//! JSON output types for machine-readable CLI output.
//!
//! Used by `inspect --json` so scripts can check whether a WAV carries a
//! payload without parsing colored text.

use serde::{Deserialize, Serialize};
use wavtext_codec::{CodecError, Inspection, PayloadStatus};

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CODEC_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a JSON error from a codec error.
    pub fn from_codec(err: &CodecError, file: &str) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            file: Some(file.to_string()),
        }
    }
}

/// Container details reported by `inspect`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectResult {
    /// Input file path
    pub file: String,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Number of samples read
    pub sample_count: usize,
    /// Whether the data chunk ended early
    pub truncated: bool,
    /// Whether the samples start with the magic marker
    pub encoded: bool,
    /// Size of the recovered payload, if it decoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_bytes: Option<usize>,
    /// Why the payload could not be recovered, if it didn't
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_error: Option<String>,
}

impl InspectResult {
    /// Builds the JSON view of an inspection.
    pub fn new(file: &str, info: &Inspection) -> Self {
        let (payload_bytes, payload_error) = match &info.payload {
            PayloadStatus::Recovered(size) => (Some(*size), None),
            PayloadStatus::NotEncoded => (None, Some(CodecError::NotEncoded.to_string())),
            PayloadStatus::Corrupt(reason) | PayloadStatus::Unsupported(reason) => {
                (None, Some(reason.clone()))
            }
        };

        Self {
            file: file.to_string(),
            channels: info.format.channels,
            sample_rate: info.format.sample_rate,
            bits_per_sample: info.format.bits_per_sample,
            sample_count: info.sample_count,
            truncated: info.truncated,
            encoded: info.encoded,
            payload_bytes,
            payload_error,
        }
    }
}

/// Top-level JSON document printed by `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectOutput {
    /// Whether the file could be read as a WAV container
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Inspection result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

impl InspectOutput {
    /// Creates a successful output.
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavtext_codec::{encode, inspect};

    #[test]
    fn test_inspect_result_recovered() {
        let info = inspect(&encode(b"Hello", 16).unwrap()).unwrap();
        let result = InspectResult::new("hello.wav", &info);

        assert_eq!(result.bits_per_sample, 16);
        assert_eq!(result.sample_count, 21);
        assert!(result.encoded);
        assert_eq!(result.payload_bytes, Some(5));
        assert!(result.payload_error.is_none());
    }

    #[test]
    fn test_success_serialization_skips_empty_fields() {
        let info = inspect(&encode(b"", 8).unwrap()).unwrap();
        let output = InspectOutput::success(InspectResult::new("empty.wav", &info));
        let json = serde_json::to_string(&output).unwrap();

        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""payload_bytes":0"#));
        assert!(!json.contains("payload_error"));
    }

    #[test]
    fn test_failure_serialization() {
        let err = CodecError::container("no RIFF tag found");
        let output = InspectOutput::failure(vec![JsonError::from_codec(&err, "bad.wav")]);
        let json = serde_json::to_string(&output).unwrap();

        assert!(json.contains(r#""success":false"#));
        assert!(json.contains("CODEC_006"));
        assert!(!json.contains(r#""result""#));
    }
}
