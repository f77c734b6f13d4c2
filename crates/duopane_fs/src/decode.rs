//! Text decoding for preview content

use chardetng::EncodingDetector;

/// Decode bytes to a UTF-8 string.
///
/// Valid UTF-8 passes through; anything else goes through encoding
/// detection and is converted with replacement characters for invalid
/// sequences. Returns the decoded string and a flag indicating whether
/// replacements occurred.
pub fn decode_bytes(bytes: &[u8]) -> (String, bool) {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return (s.to_string(), false);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (result, _, had_errors) = encoding.decode(bytes);
    (result.into_owned(), had_errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let bytes = "Hello, 世界!".as_bytes();
        let (decoded, had_errors) = decode_bytes(bytes);
        assert_eq!(decoded, "Hello, 世界!");
        assert!(!had_errors);
    }

    #[test]
    fn test_non_utf8_is_converted() {
        // "テスト" in Shift_JIS
        let bytes = [0x83, 0x65, 0x83, 0x58, 0x83, 0x67];
        let (decoded, _) = decode_bytes(&bytes);
        assert!(!decoded.is_empty());
        assert!(std::str::from_utf8(decoded.as_bytes()).is_ok());
    }
}
