//! Bit depths and the byte <-> sample scaling rules.
//!
//! Each Frame byte becomes exactly one sample. 8-bit samples store the byte
//! unchanged; wider depths centre the byte on zero and multiply it up so the
//! 256 byte values spread across the available dynamic range. Decoding divides
//! back down (truncating) and clamps to 0..=255.

use std::fmt;

use crate::error::CodecError;

/// Scale factor for 16-bit samples.
pub const SCALE_16: i32 = 256;

/// Scale factor for 32-bit samples.
pub const SCALE_32: i32 = 16_777_216;

/// Offset that centres a byte value on zero.
const BYTE_CENTER: i32 = 128;

/// Supported sample bit depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    /// Unsigned 8-bit PCM.
    Eight,
    /// Signed 16-bit PCM.
    #[default]
    Sixteen,
    /// Signed 32-bit PCM.
    ThirtyTwo,
}

impl BitDepth {
    /// All supported depths, narrowest first.
    pub const ALL: [BitDepth; 3] = [BitDepth::Eight, BitDepth::Sixteen, BitDepth::ThirtyTwo];

    /// Number of bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::ThirtyTwo => 32,
        }
    }

    /// Sample width in bytes.
    pub fn sample_width(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Resolves a container's sample width (in bytes) to a bit depth.
    pub fn from_sample_width(width: usize) -> Result<Self, CodecError> {
        match width {
            1 => Ok(BitDepth::Eight),
            2 => Ok(BitDepth::Sixteen),
            4 => Ok(BitDepth::ThirtyTwo),
            other => Err(CodecError::UnsupportedBitDepth {
                bits: other
                    .checked_mul(8)
                    .and_then(|bits| u16::try_from(bits).ok())
                    .unwrap_or(u16::MAX),
            }),
        }
    }

    /// Maps a Frame byte to its sample value.
    pub fn to_sample(self, byte: u8) -> i32 {
        match self {
            BitDepth::Eight => byte as i32,
            BitDepth::Sixteen => (byte as i32 - BYTE_CENTER) * SCALE_16,
            BitDepth::ThirtyTwo => (byte as i32 - BYTE_CENTER) * SCALE_32,
        }
    }

    /// Recovers a byte from a sample value.
    ///
    /// Values that no encoder produced (foreign files) are clamped into range.
    pub fn to_byte(self, sample: i32) -> u8 {
        let value = match self {
            BitDepth::Eight => sample,
            BitDepth::Sixteen => sample / SCALE_16 + BYTE_CENTER,
            BitDepth::ThirtyTwo => sample / SCALE_32 + BYTE_CENTER,
        };
        value.clamp(0, 255) as u8
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = CodecError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            32 => Ok(BitDepth::ThirtyTwo),
            bits => Err(CodecError::UnsupportedBitDepth { bits }),
        }
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
