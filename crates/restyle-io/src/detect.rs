//! Binary detection and decoding utilities.

use memchr::memchr;

use crate::error::IoError;

/// Quick binary detection - checks the first 8KB for NULL bytes.
///
/// Files containing NULL bytes in the first 8KB are considered binary.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let check_len = std::cmp::min(buffer.len(), 8192);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Decode bytes to String, strictly.
///
/// Checks for binary content first, then requires valid UTF-8. The decoded
/// text is written back to the same path after rewriting, so a lossy decode
/// here would destroy bytes on the round trip.
///
/// # Errors
/// Returns `IoError::BinaryFile` when binary content is detected and
/// `IoError::Encoding` when the buffer is not valid UTF-8.
pub fn decode_buffer(buffer: Vec<u8>) -> Result<String, IoError> {
    if is_binary(&buffer) {
        return Err(IoError::BinaryFile);
    }

    String::from_utf8(buffer).map_err(|_| IoError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_not_binary() {
        assert!(!is_binary(b"plain text content"));
    }

    #[test]
    fn test_null_byte_is_binary() {
        assert!(is_binary(b"abc\x00def"));
    }

    #[test]
    fn test_decode_valid_utf8() {
        let s = decode_buffer(b"className=\"canvas-area\"".to_vec());
        assert_eq!(s.ok().as_deref(), Some("className=\"canvas-area\""));
    }

    #[test]
    fn test_decode_invalid_utf8_is_error() {
        let result = decode_buffer(vec![0xff, 0xfe, 0x41]);
        assert!(matches!(result, Err(IoError::Encoding)));
    }
}
