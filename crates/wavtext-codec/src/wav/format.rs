//! WAV file format parameters.

use crate::depth::BitDepth;

/// Sample rate of every WAV the encoder writes.
pub const SAMPLE_RATE: u32 = 44_100;

/// Channel count of every WAV the encoder writes.
pub const CHANNELS: u16 = 1;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates the mono 44.1 kHz format used for encoded payloads.
    pub fn encoded(depth: BitDepth) -> Self {
        Self {
            channels: CHANNELS,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: depth.bits(),
        }
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample.div_ceil(8)
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
