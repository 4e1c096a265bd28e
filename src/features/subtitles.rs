//! SRT subtitles
//!
//! Raw file bytes go through `encoding` to text, `parser` to entries, and
//! end up in a `SubtitleTimeline` that answers "what is on screen at t".

mod encoding;
mod parser;
mod timeline;

use encoding::decode_subtitle_bytes;
use parser::parse_srt;
pub use timeline::{DEFAULT_SUBTITLE, SubtitleEntry, SubtitleTimeline};

/// Decode and parse a subtitle file
pub fn load_subtitles(bytes: &[u8]) -> Vec<SubtitleEntry> {
    let text = decode_subtitle_bytes(bytes);
    let entries = parse_srt(&text);
    tracing::debug!(
        "Parsed {} subtitle entries from {} bytes",
        entries.len(),
        bytes.len()
    );
    entries
}
