//! WAV container adapter.
//!
//! Writes mono PCM WAV files with a plain 16-byte `fmt ` chunk at 8, 16 or
//! 32 bits, and reads integer PCM WAV files of any channel count back into a
//! flat sample list. The codec only hands this module sample values and
//! format parameters; chunk layout stays in here.

mod format;
mod reader;
mod writer;


// Re-export public API
pub use format::{WavFormat, CHANNELS, SAMPLE_RATE};
pub use reader::{read_wav, PcmStream};
pub use writer::{bytes_to_pcm, write_wav, write_wav_to_vec, HEADER_SIZE};
