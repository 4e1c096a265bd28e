//! SRT subtitle parser
//!
//! Best-effort: malformed blocks are skipped, malformed timestamp components
//! count as zero. Parsing never fails.
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,500
//! First line
//! continued
//! ```

use super::timeline::SubtitleEntry;

/// Separator between the start and end timestamps
const TIME_RANGE_SEPARATOR: &str = " --> ";

/// Parse SRT content into entries, in source order
pub fn parse_srt(src: &str) -> Vec<SubtitleEntry> {
    let normalized = src.replace("\r\n", "\n");
    let mut entries = Vec::new();

    for (index, block) in normalized.trim().split("\n\n").enumerate() {
        match parse_block(block) {
            Some(entry) => entries.push(entry),
            None => tracing::debug!("Skipping malformed subtitle block #{}", index + 1),
        }
    }

    entries
}

/// Parse one block: index line, time-range line, then text lines
fn parse_block(block: &str) -> Option<SubtitleEntry> {
    let lines: Vec<&str> = block.split('\n').collect();
    if lines.len() < 3 {
        return None;
    }

    let range: Vec<&str> = lines[1].split(TIME_RANGE_SEPARATOR).collect();
    let [start, end] = range.as_slice() else {
        return None;
    };

    let start = time_to_seconds(start)?;
    let end = time_to_seconds(end)?;
    let text = lines[2..].join(" ");

    Some(SubtitleEntry { start, end, text })
}

/// Convert `HH:MM:SS,mmm` (or `HH:MM:SS.mmm`) to seconds
///
/// Returns `None` unless there are exactly three `:`-separated parts. A part
/// that is not a number counts as zero.
pub fn time_to_seconds(src: &str) -> Option<f64> {
    let parts: Vec<&str> = src.trim().split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return None;
    };

    // "NaN" and "inf" parse as f64 but are not numbers here
    let value = |part: &str| {
        part.trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    };

    Some(value(*hours) * 3600.0 + value(*minutes) * 60.0 + value(*seconds))
}
