//! Application messages

use std::path::PathBuf;

use iced::Size;

use crate::audio::AudioAsset;
use crate::features::SubtitleEntry;

/// Subtitle file contents after decoding and parsing
#[derive(Debug, Clone)]
pub struct LoadedSubtitles {
    pub name: String,
    pub entries: Vec<SubtitleEntry>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Frame loop ============
    /// Display refresh callback
    Frame,

    // ============ Audio ============
    /// Open the audio file picker
    OpenAudio,
    /// Audio picker closed (None if cancelled)
    AudioFilePicked(Option<PathBuf>),
    /// Audio file read and decoded
    AudioLoaded(Result<AudioAsset, String>),
    /// Play/pause button
    TogglePlayback,

    // ============ Subtitles ============
    /// Open the subtitle file picker
    OpenSubtitles,
    /// Subtitle picker closed (None if cancelled)
    SubtitleFilePicked(Option<PathBuf>),
    /// Subtitle file read and parsed
    SubtitlesLoaded(Result<LoadedSubtitles, String>),

    // ============ Window ============
    /// Window resized
    WindowResized(Size),
    /// Close button clicked
    RequestClose,
}
