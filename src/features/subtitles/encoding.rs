//! Text decoding for subtitle files
//!
//! Subtitle files in the wild are often not UTF-8 (old fansubs in GBK, Big5,
//! Shift-JIS, Windows-1252). This module turns raw file bytes into text.

use encoding_rs::{BIG5, EUC_KR, Encoding, GBK, SHIFT_JIS, WINDOWS_1252};

/// Decode subtitle bytes to a string
///
/// Decoding priority:
/// 1. Byte order mark (UTF-8, UTF-16LE, UTF-16BE)
/// 2. UTF-8
/// 3. GBK, Big5, Shift-JIS, EUC-KR, Windows-1252
/// 4. Lossy UTF-8
pub fn decode_subtitle_bytes(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return decoded.into_owned();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    let encodings = [GBK, BIG5, SHIFT_JIS, EUC_KR, WINDOWS_1252];
    for encoding in encodings {
        let (decoded, _, had_errors) = encoding.decode(bytes);
        if !had_errors && is_likely_valid_text(&decoded) {
            tracing::debug!("Decoded subtitles as {}", encoding.name());
            return decoded.into_owned();
        }
    }

    String::from_utf8_lossy(bytes).into_owned()
}

/// Heuristic check that decoded text is not garbage
fn is_likely_valid_text(s: &str) -> bool {
    let suspicious = s
        .chars()
        .filter(|c| {
            (*c < ' ' && !matches!(c, '\t' | '\n' | '\r'))
                || ('\u{E000}'..='\u{F8FF}').contains(c)
                || *c == '\u{FFFD}'
        })
        .count();

    // Allow up to 5% suspicious characters
    suspicious <= (s.len() / 20).max(1)
}
