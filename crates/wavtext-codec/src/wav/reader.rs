//! WAV reading via `hound`.

use std::io::Cursor;

use super::format::WavFormat;
use crate::error::{CodecError, CodecResult};

/// Samples and format read from a WAV container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmStream {
    /// Container format parameters.
    pub format: WavFormat,
    /// Interleaved samples. 8-bit samples hold their unsigned on-disk value.
    pub samples: Vec<i32>,
    /// Whether the data chunk ended before its declared length.
    pub truncated: bool,
}

impl PcmStream {
    /// Number of samples actually read.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

/// Reads every sample from WAV bytes.
///
/// A data chunk cut short is read up to its last complete sample instead of
/// failing, so damaged files surface as payload errors downstream.
///
/// # Errors
/// * [`CodecError::UnsupportedSampleFormat`] for float containers
/// * [`CodecError::Container`] for malformed RIFF structure
pub fn read_wav(bytes: &[u8]) -> CodecResult<PcmStream> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(CodecError::UnsupportedSampleFormat);
    }

    let format = WavFormat {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
    };

    // The declared length is untrusted (streaming writers leave 0xFFFFFFFF);
    // the input can never hold more samples than it has bytes.
    let mut samples = Vec::with_capacity((reader.len() as usize).min(bytes.len()));
    let mut truncated = false;

    for sample in reader.samples::<i32>() {
        match sample {
            Ok(value) => samples.push(value),
            // The source is in memory, so an I/O error here means it ran out.
            Err(hound::Error::IoError(_)) => {
                truncated = true;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    // hound hands 8-bit PCM back as signed; restore the unsigned byte.
    if format.bits_per_sample == 8 {
        for value in &mut samples {
            *value += 128;
        }
    }

    if truncated {
        tracing::warn!(
            declared = reader.len(),
            read = samples.len(),
            "WAV data chunk is shorter than its header declares"
        );
    }

    Ok(PcmStream {
        format,
        samples,
        truncated,
    })
}
