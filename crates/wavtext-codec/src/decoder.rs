//! Decoder: WAV -> PCM samples -> Frame -> payload bytes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::depth::BitDepth;
use crate::error::{CodecError, CodecResult};
use crate::frame::{frame_body, parse_frame};
use crate::output::write_atomic;
use crate::wav::{read_wav, PcmStream, WavFormat};

/// Summary of a completed file decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Source WAV file.
    pub input: PathBuf,
    /// Written payload file.
    pub output: PathBuf,
    /// Depth of the source samples.
    pub bit_depth: BitDepth,
    /// Number of samples read.
    pub sample_count: usize,
    /// Size of the recovered payload in bytes.
    pub payload_bytes: usize,
}

/// What a WAV file holds, without writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Container format parameters.
    pub format: WavFormat,
    /// Number of samples read.
    pub sample_count: usize,
    /// Whether the data chunk ended early.
    pub truncated: bool,
    /// Whether the decoded bytes start with the magic marker.
    pub encoded: bool,
    /// Outcome of payload recovery.
    pub payload: PayloadStatus,
}

/// Result of trying to recover a payload during inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadStatus {
    /// Payload decoded; holds its size in bytes.
    Recovered(usize),
    /// No magic marker.
    NotEncoded,
    /// Marker present but the body is not valid base64.
    Corrupt(String),
    /// Sample width is not one the codec produces.
    Unsupported(String),
}

/// Maps every sample back to its Frame byte.
fn stream_to_bytes(stream: &PcmStream) -> CodecResult<(BitDepth, Vec<u8>)> {
    let depth = BitDepth::from_sample_width(stream.format.bytes_per_sample() as usize)?;
    let bytes = stream
        .samples
        .iter()
        .map(|&sample| depth.to_byte(sample))
        .collect();
    Ok((depth, bytes))
}

fn decode_stream(stream: &PcmStream) -> CodecResult<(BitDepth, Vec<u8>)> {
    let (depth, bytes) = stream_to_bytes(stream)?;
    tracing::debug!(
        samples = stream.sample_count(),
        depth = depth.bits(),
        "decoding frame"
    );
    let payload = parse_frame(&bytes)?;
    Ok((depth, payload))
}

/// Decodes WAV bytes back into the original payload.
///
/// # Errors
/// * [`CodecError::NotEncoded`] if the samples do not start with the marker
/// * [`CodecError::CorruptPayload`] if the base64 body is malformed
/// * [`CodecError::UnsupportedBitDepth`] for sample widths other than 1, 2 or 4 bytes
pub fn decode(wav: &[u8]) -> CodecResult<Vec<u8>> {
    let stream = read_wav(wav)?;
    decode_stream(&stream).map(|(_, payload)| payload)
}

/// Decodes a WAV file and writes the payload to `output`.
///
/// Nothing is written unless the whole payload decodes.
pub fn decode_file(input: &Path, output: &Path) -> CodecResult<DecodeReport> {
    let wav = fs::read(input)?;
    let stream = read_wav(&wav)?;
    let (bit_depth, payload) = decode_stream(&stream)?;
    write_atomic(output, &payload)?;

    Ok(DecodeReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        bit_depth,
        sample_count: stream.sample_count(),
        payload_bytes: payload.len(),
    })
}

/// Describes a WAV file and whether it carries a payload.
///
/// Only container-level failures are errors; a missing marker or a broken
/// payload is reported in [`Inspection::payload`].
pub fn inspect(wav: &[u8]) -> CodecResult<Inspection> {
    let stream = read_wav(wav)?;

    let (encoded, payload) = match stream_to_bytes(&stream) {
        Ok((_, bytes)) => {
            let encoded = frame_body(&bytes).is_some();
            let status = match parse_frame(&bytes) {
                Ok(payload) => PayloadStatus::Recovered(payload.len()),
                Err(CodecError::NotEncoded) => PayloadStatus::NotEncoded,
                Err(e) => PayloadStatus::Corrupt(e.to_string()),
            };
            (encoded, status)
        }
        Err(e) => (false, PayloadStatus::Unsupported(e.to_string())),
    };

    Ok(Inspection {
        format: stream.format,
        sample_count: stream.sample_count(),
        truncated: stream.truncated,
        encoded,
        payload,
    })
}

/// Reads and inspects a WAV file.
pub fn inspect_file(input: &Path) -> CodecResult<Inspection> {
    inspect(&fs::read(input)?)
}
