use crate::error::EncodingError;

/// Encode a string so that byte comparison of encodings matches string
/// comparison, and the encoding is self-delimiting inside a larger key.
///
/// Scheme:
/// - each 0x00 byte of the UTF-8 input is escaped as `0x00 0xFF`
/// - the encoding ends with the terminator `0x00 0x00`
///
/// The terminator sorts below any continuation byte, so `"a"` < `"aa"`
/// holds on the encoded form as well.
pub fn encode_string(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() + 2);
    for &b in s.as_bytes() {
        out.push(b);
        if b == 0x00 {
            out.push(0xFF);
        }
    }
    out.push(0x00);
    out.push(0x00);
    out
}

/// Decode a string produced by [`encode_string`] from the front of `data`.
///
/// Returns the string together with the number of bytes consumed
/// (terminator included), so callers can keep decoding composite keys
/// past it.
pub fn decode_string(data: &[u8]) -> Result<(String, usize), EncodingError> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < data.len() {
        if data[i] != 0x00 {
            out.push(data[i]);
            i += 1;
            continue;
        }
        match data.get(i + 1) {
            // Terminator.
            Some(0x00) => {
                let s = String::from_utf8(out).map_err(|_| EncodingError::MalformedKey)?;
                return Ok((s, i + 2));
            }
            // Escaped 0x00.
            Some(0xFF) => {
                out.push(0x00);
                i += 2;
            }
            _ => return Err(EncodingError::MalformedKey),
        }
    }
    Err(EncodingError::MalformedKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let cases = [
            "",
            "id",
            "employee_name",
            "with space",
            "\x00",
            "nul\x00inside",
            "\x00\x00",
            "größe",
            "emoji \u{1F4BE}",
        ];
        for s in cases {
            let encoded = encode_string(s);
            let (decoded, consumed) = decode_string(&encoded).unwrap();
            assert_eq!(decoded, s, "roundtrip failed for {s:?}");
            assert_eq!(consumed, encoded.len());
        }
    }

    #[test]
    fn test_ordering_matches_string_ordering() {
        let names = ["a", "aa", "ab", "b", "ba"];
        for pair in names.windows(2) {
            let lo = encode_string(pair[0]);
            let hi = encode_string(pair[1]);
            assert!(lo < hi, "expected {:?} < {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_self_delimiting() {
        // Decoding must stop at the terminator even with trailing bytes.
        let mut data = encode_string("id");
        let tail_start = data.len();
        data.extend_from_slice(&[0x42, 0x43]);
        let (decoded, consumed) = decode_string(&data).unwrap();
        assert_eq!(decoded, "id");
        assert_eq!(consumed, tail_start);
    }

    #[test]
    fn test_empty_string_is_bare_terminator() {
        assert_eq!(encode_string(""), vec![0x00, 0x00]);
    }

    #[test]
    fn test_malformed_inputs_rejected() {
        // Lone 0x00 with nothing after it.
        assert!(decode_string(&[0x00]).is_err());
        // No terminator at all.
        assert!(decode_string(b"abc").is_err());
        assert!(decode_string(&[]).is_err());
        // 0x00 followed by an invalid escape byte.
        assert!(decode_string(&[0x00, 0x07]).is_err());
        // Invalid UTF-8 payload.
        assert!(decode_string(&[0xC3, 0x28, 0x00, 0x00]).is_err());
    }
}
