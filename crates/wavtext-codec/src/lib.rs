//! wavtext codec
//!
//! Reversible transformation of arbitrary files into PCM WAV audio and back.
//!
//! # Overview
//!
//! The encoder wraps the payload in a Frame (`ENCODED_TEXT:` followed by
//! standard base64 of the payload) and writes one audio sample per Frame byte
//! into a mono 44.1 kHz WAV at 8, 16 or 32 bits. The decoder reads the samples
//! back, inverts the scaling, checks the marker and decodes the base64.
//!
//! | Depth | Sample for byte `b` | On disk |
//! |-------|---------------------|---------|
//! | 8     | `b`                 | unsigned |
//! | 16    | `(b - 128) * 256`   | signed LE |
//! | 32    | `(b - 128) * 2^24`  | signed LE |
//!
//! # Example
//!
//! ```
//! use wavtext_codec::{decode, encode};
//!
//! let wav = encode(b"Hello", 16)?;
//! assert_eq!(decode(&wav)?, b"Hello");
//! # Ok::<(), wavtext_codec::CodecError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`encoder`] - Payload to WAV
//! - [`decoder`] - WAV to payload, plus inspection
//! - [`frame`] - Magic marker and base64 framing
//! - [`depth`] - Bit depths and sample scaling
//! - [`wav`] - WAV container reading and writing
//! - [`output`] - Atomic file output

pub mod decoder;
pub mod depth;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod output;
pub mod wav;

// Re-export main types at crate root
pub use decoder::{
    decode, decode_file, inspect, inspect_file, DecodeReport, Inspection, PayloadStatus,
};
pub use depth::BitDepth;
pub use encoder::{encode, encode_file, EncodeReport, Encoder, DEFAULT_BIT_DEPTH};
pub use error::{CodecError, CodecResult};
pub use frame::MAGIC;
