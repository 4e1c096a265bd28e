//! Async helpers for file pickers and loading

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::app::message::LoadedSubtitles;
use crate::audio::AudioAsset;
use crate::features::subtitles;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "ogg", "m4a", "aac", "opus"];
const SUBTITLE_EXTENSIONS: &[&str] = &["srt"];

/// Open audio file dialog
pub async fn pick_audio_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open audio")
        .add_filter("Audio", AUDIO_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Open subtitle file dialog
pub async fn pick_subtitle_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open subtitles")
        .add_filter("SubRip", SUBTITLE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Read and decode an audio file; errors are flattened for the status line
pub async fn load_audio_file(path: PathBuf) -> Result<AudioAsset, String> {
    read_audio(&path).await.map_err(|e| format!("{:#}", e))
}

async fn read_audio(path: &Path) -> anyhow::Result<AudioAsset> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = file_name(path);

    // Full decode is CPU-bound
    tokio::task::spawn_blocking(move || AudioAsset::decode(name, bytes))
        .await
        .context("Audio decode task failed")?
}

/// Read, decode and parse a subtitle file
pub async fn load_subtitle_file(path: PathBuf) -> Result<LoadedSubtitles, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
        .map_err(|e| format!("{:#}", e))?;

    Ok(LoadedSubtitles {
        name: file_name(&path),
        entries: subtitles::load_subtitles(&bytes),
    })
}

/// Display name for a picked file
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/music/song.mp3")), "song.mp3");
        assert_eq!(file_name(Path::new("/")), "/");
    }

    #[tokio::test]
    async fn test_load_subtitle_file() {
        let path =
            std::env::temp_dir().join(format!("subwave-helpers-{}.srt", std::process::id()));
        std::fs::write(&path, "1\n00:00:00,000 --> 00:00:05,000\nA\n").unwrap();

        let loaded = load_subtitle_file(path.clone()).await.unwrap();
        assert_eq!(loaded.entries.len(), 1);
        assert!(loaded.name.ends_with(".srt"));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_missing_files_report_errors() {
        let missing = PathBuf::from("/nonexistent/subwave/missing.srt");
        let err = load_subtitle_file(missing.clone()).await.unwrap_err();
        assert!(err.contains("Failed to read"));

        assert!(load_audio_file(missing).await.is_err());
    }

    #[tokio::test]
    async fn test_undecodable_audio_is_an_error() {
        let path =
            std::env::temp_dir().join(format!("subwave-helpers-{}.mp3", std::process::id()));
        std::fs::write(&path, b"definitely not audio").unwrap();

        let err = load_audio_file(path.clone()).await.unwrap_err();
        assert!(err.contains("Failed to decode audio file"));

        let _ = std::fs::remove_file(path);
    }
}
