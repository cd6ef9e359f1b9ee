//! Encoder: payload bytes -> Frame -> PCM samples -> WAV.

use std::fs;
use std::path::{Path, PathBuf};

use crate::depth::BitDepth;
use crate::error::CodecResult;
use crate::frame::build_frame;
use crate::output::write_atomic;
use crate::wav::{bytes_to_pcm, write_wav_to_vec, WavFormat, HEADER_SIZE};

/// Bit depth used when none is given.
pub const DEFAULT_BIT_DEPTH: u16 = 16;

/// Summary of a completed file encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeReport {
    /// Source file.
    pub input: PathBuf,
    /// Written WAV file.
    pub output: PathBuf,
    /// Depth of the written samples.
    pub bit_depth: BitDepth,
    /// Size of the original payload in bytes.
    pub payload_bytes: usize,
    /// Number of samples written (one per Frame byte).
    pub sample_count: usize,
    /// Size of the WAV file in bytes.
    pub wav_bytes: usize,
}

/// Encodes payloads into WAV files at a fixed bit depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    depth: BitDepth,
}

impl Encoder {
    /// Creates an encoder for the given depth.
    pub fn new(depth: BitDepth) -> Self {
        Self { depth }
    }

    /// Creates an encoder from a raw bit count.
    ///
    /// # Errors
    /// [`crate::CodecError::UnsupportedBitDepth`] unless `bits` is 8, 16 or 32.
    pub fn with_bits(bits: u16) -> CodecResult<Self> {
        Ok(Self::new(BitDepth::try_from(bits)?))
    }

    /// Depth this encoder writes.
    pub fn bit_depth(&self) -> BitDepth {
        self.depth
    }

    /// Encodes a payload into complete WAV file bytes.
    pub fn encode(&self, payload: &[u8]) -> CodecResult<Vec<u8>> {
        let frame = build_frame(payload);
        let pcm = bytes_to_pcm(&frame, self.depth);

        tracing::debug!(
            payload = payload.len(),
            frame = frame.len(),
            depth = self.depth.bits(),
            "encoding frame"
        );

        write_wav_to_vec(&WavFormat::encoded(self.depth), &pcm)
    }

    /// Encodes `input` into a WAV file at `output`, replacing it if present.
    pub fn encode_file(&self, input: &Path, output: &Path) -> CodecResult<EncodeReport> {
        let payload = fs::read(input)?;
        let wav = self.encode(&payload)?;
        write_atomic(output, &wav)?;

        Ok(EncodeReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            bit_depth: self.depth,
            payload_bytes: payload.len(),
            sample_count: (wav.len() - HEADER_SIZE) / self.depth.sample_width(),
            wav_bytes: wav.len(),
        })
    }
}

/// Encodes a payload into WAV bytes at `bits` per sample.
pub fn encode(payload: &[u8], bits: u16) -> CodecResult<Vec<u8>> {
    Encoder::with_bits(bits)?.encode(payload)
}

/// Encodes a file into a WAV file at `bits` per sample.
///
/// The depth is validated before `input` is opened, so an unsupported depth
/// never touches the filesystem.
pub fn encode_file(input: &Path, output: &Path, bits: u16) -> CodecResult<EncodeReport> {
    Encoder::with_bits(bits)?.encode_file(input, output)
}
