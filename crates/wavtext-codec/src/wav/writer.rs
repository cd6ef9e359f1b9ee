//! RIFF/WAVE writing and sample packing.

use std::io::{self, Write};

use super::format::WavFormat;
use crate::depth::BitDepth;
use crate::error::{CodecError, CodecResult};

/// Size of the canonical PCM header (RIFF + fmt + data chunk headers).
pub const HEADER_SIZE: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// The `fmt ` chunk is always the plain 16-byte PCM form, whatever the
/// bit depth.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw little-endian PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> CodecResult<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or(CodecError::PayloadTooLarge {
            bytes: pcm_data.len(),
        })?;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    write_chunks(writer, format, data_size, file_size, pcm_data)?;
    Ok(())
}

fn write_chunks<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    data_size: u32,
    file_size: u32,
    pcm_data: &[u8],
) -> io::Result<()> {
    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // 1 = PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> CodecResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Packs Frame bytes into little-endian PCM at the given depth.
///
/// 8-bit PCM is unsigned on disk, so those bytes pass through untouched.
pub fn bytes_to_pcm(bytes: &[u8], depth: BitDepth) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(bytes.len() * depth.sample_width());

    for &byte in bytes {
        let sample = depth.to_sample(byte);
        match depth {
            BitDepth::Eight => pcm.push(sample as u8),
            BitDepth::Sixteen => pcm.extend_from_slice(&(sample as i16).to_le_bytes()),
            BitDepth::ThirtyTwo => pcm.extend_from_slice(&sample.to_le_bytes()),
        }
    }

    pcm
}
