//! Payload framing: `MAGIC || base64(payload)`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CodecError, CodecResult};

/// Marker placed at the start of every Frame.
pub const MAGIC: &[u8] = b"ENCODED_TEXT:";

/// Builds the Frame for a payload.
///
/// The base64 text uses the standard alphabet with padding and no line
/// breaks, so every Frame byte is printable ASCII.
pub fn build_frame(payload: &[u8]) -> Vec<u8> {
    let body = STANDARD.encode(payload);
    let mut frame = Vec::with_capacity(MAGIC.len() + body.len());
    frame.extend_from_slice(MAGIC);
    frame.extend_from_slice(body.as_bytes());
    frame
}

/// Returns the base64 body if the bytes start with [`MAGIC`].
pub fn frame_body(decoded: &[u8]) -> Option<&[u8]> {
    decoded.strip_prefix(MAGIC)
}

/// Recovers the payload from decoded sample bytes.
///
/// # Errors
/// * [`CodecError::NotEncoded`] if the bytes do not begin with [`MAGIC`]
/// * [`CodecError::CorruptPayload`] if the body is not valid base64
pub fn parse_frame(decoded: &[u8]) -> CodecResult<Vec<u8>> {
    let body = frame_body(decoded).ok_or(CodecError::NotEncoded)?;
    Ok(STANDARD.decode(body)?)
}
