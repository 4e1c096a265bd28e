//! Audio playback module
//!
//! This module provides decoding, playback and real-time analysis:
//! - `AudioAsset`: Fully decoded audio buffer
//! - `PlaybackController`: Play/pause state machine and elapsed time
//! - `AudioTransport`: Output device seam (`RodioTransport` in the app)
//! - `SpectrumSampler`: Per-tick frequency snapshots from the playing audio

pub mod analyzer;
mod asset;
mod playback;
mod transport;

pub use analyzer::SpectrumSnapshot;
pub use asset::AudioAsset;
pub use playback::{PlaybackController, ResumeMode};
pub use transport::{AudioTransport, RodioTransport};

#[cfg(test)]
pub use transport::ManualTransport;
