//! Decoded audio assets
//!
//! An asset is decoded once, up front, into interleaved `f32` samples. Every
//! output path (each `play`) gets its own `SamplesBuffer` over the same data.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, Source};

/// A fully decoded, immutable audio buffer
#[derive(Clone)]
pub struct AudioAsset {
    name: String,
    samples: Arc<[f32]>,
    channels: u16,
    sample_rate: u32,
}

impl std::fmt::Debug for AudioAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioAsset")
            .field("name", &self.name)
            .field("channels", &self.channels)
            .field("sample_rate", &self.sample_rate)
            .field("duration", &self.duration())
            .finish_non_exhaustive()
    }
}

impl AudioAsset {
    /// Decode raw file bytes (any format symphonia understands)
    pub fn decode(name: impl Into<String>, bytes: Vec<u8>) -> anyhow::Result<Self> {
        let name = name.into();
        let decoder = Decoder::new(Cursor::new(bytes))
            .with_context(|| format!("Failed to decode audio file {}", name))?;

        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<f32> = decoder.collect();

        Self::from_samples(name, channels, sample_rate, samples)
    }

    /// Wrap already-decoded interleaved samples
    pub fn from_samples(
        name: impl Into<String>,
        channels: u16,
        sample_rate: u32,
        samples: Vec<f32>,
    ) -> anyhow::Result<Self> {
        let name = name.into();
        if channels == 0 || sample_rate == 0 {
            bail!(
                "Invalid audio format in {}: {} channels at {}Hz",
                name,
                channels,
                sample_rate
            );
        }
        if samples.is_empty() {
            bail!("Audio file {} contains no samples", name);
        }

        Ok(Self {
            name,
            samples: samples.into(),
            channels,
            sample_rate,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration(&self) -> Duration {
        let frames = self.samples.len() / self.channels as usize;
        Duration::from_secs_f64(frames as f64 / self.sample_rate as f64)
    }

    /// A fresh playable source starting `offset` into the asset
    pub fn source_from(&self, offset: Duration) -> SamplesBuffer {
        let frame = (offset.as_secs_f64() * self.sample_rate as f64) as usize;
        let start = (frame * self.channels as usize).min(self.samples.len());
        SamplesBuffer::new(self.channels, self.sample_rate, &self.samples[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_asset() -> AudioAsset {
        // One second of stereo silence at 8kHz
        AudioAsset::from_samples("silence.wav", 2, 8000, vec![0.0; 16000]).unwrap()
    }

    #[test]
    fn test_duration() {
        assert_eq!(stereo_asset().duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_source_from_offset() {
        let asset = stereo_asset();
        assert_eq!(asset.source_from(Duration::ZERO).count(), 16000);
        assert_eq!(asset.source_from(Duration::from_millis(500)).count(), 8000);
        assert_eq!(asset.source_from(Duration::from_secs(5)).count(), 0);
    }

    #[test]
    fn test_rejects_empty_or_invalid() {
        assert!(AudioAsset::from_samples("empty", 2, 44100, Vec::new()).is_err());
        assert!(AudioAsset::from_samples("mono0", 0, 44100, vec![0.0]).is_err());
    }

    #[test]
    fn test_decode_failure_is_reported() {
        let err = AudioAsset::decode("notes.txt", b"definitely not audio".to_vec()).unwrap_err();
        assert!(format!("{:#}", err).contains("notes.txt"));
    }
}
