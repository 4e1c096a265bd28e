//! Playback controller
//!
//! State machine over a loaded asset: `Idle -> Playing <-> Paused`.
//!
//! Elapsed time is `transport clock - reference offset`. By default a resume
//! replays the track from zero, because every output path is single-use and
//! cannot be rewound. `ResumeMode::Resume` starts the new path at the paused
//! position instead.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::analyzer::SpectrumSampler;
use super::asset::AudioAsset;
use super::transport::AudioTransport;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Idle,
    Playing,
    Paused,
}

/// What `play` does when coming out of `Paused`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeMode {
    /// Start over from time zero
    #[default]
    Restart,
    /// Continue from the paused position
    Resume,
}

/// Asset plus its analysis sampler, present once something was loaded
struct Loaded {
    asset: AudioAsset,
    sampler: SpectrumSampler,
}

/// Drives an `AudioTransport` and tracks elapsed playback time
pub struct PlaybackController<T: AudioTransport> {
    transport: T,
    loaded: Option<Loaded>,
    status: PlaybackStatus,
    reference_offset: f64,
    last_elapsed: f64,
    resume_mode: ResumeMode,
    smoothing: f32,
}

impl<T: AudioTransport> PlaybackController<T> {
    pub fn new(transport: T, resume_mode: ResumeMode, smoothing: f32) -> Self {
        Self {
            transport,
            loaded: None,
            status: PlaybackStatus::Idle,
            reference_offset: 0.0,
            last_elapsed: 0.0,
            resume_mode,
            smoothing,
        }
    }

    /// Attach a new asset; stops any output and does not start playback
    pub fn load(&mut self, asset: AudioAsset) {
        self.transport.stop();

        tracing::info!(
            "Loaded {} ({} ch, {}Hz, {:?})",
            asset.name(),
            asset.channels(),
            asset.sample_rate(),
            asset.duration()
        );

        let sampler = SpectrumSampler::new(asset.sample_rate(), self.smoothing);
        self.loaded = Some(Loaded { asset, sampler });
        self.status = PlaybackStatus::Idle;
        self.reference_offset = 0.0;
        self.last_elapsed = 0.0;
    }

    /// Start a fresh output path (from `Idle` or `Paused`)
    pub fn play(&mut self) -> anyhow::Result<()> {
        let Some(loaded) = self.loaded.as_mut() else {
            tracing::warn!("Play requested with no audio loaded");
            return Ok(());
        };

        let offset = match self.status {
            PlaybackStatus::Playing => {
                tracing::debug!("Play requested while already playing");
                return Ok(());
            }
            PlaybackStatus::Idle => 0.0,
            PlaybackStatus::Paused => match self.resume_mode {
                ResumeMode::Restart => 0.0,
                ResumeMode::Resume => self.last_elapsed,
            },
        };

        let tap = loaded.sampler.connect();
        self.transport
            .start(&loaded.asset, tap, Duration::from_secs_f64(offset))?;

        self.reference_offset = self.transport.now() - offset;
        self.last_elapsed = offset;
        self.status = PlaybackStatus::Playing;
        tracing::info!("Playback started at {:.3}s", offset);
        Ok(())
    }

    /// Stop output (from `Playing` only)
    pub fn pause(&mut self) {
        if self.status != PlaybackStatus::Playing {
            tracing::debug!("Pause ignored in {:?}", self.status);
            return;
        }

        self.last_elapsed = self.transport.now() - self.reference_offset;
        self.transport.stop();
        self.disconnect_sampler();
        self.status = PlaybackStatus::Paused;
        tracing::info!("Playback paused at {:.3}s", self.last_elapsed);
    }

    /// Play when paused or idle, pause when playing
    pub fn toggle(&mut self) -> anyhow::Result<()> {
        if self.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Stop output and return to `Idle`, keeping the asset
    pub fn stop(&mut self) {
        self.transport.stop();
        self.disconnect_sampler();
        self.status = PlaybackStatus::Idle;
        self.last_elapsed = 0.0;
    }

    fn disconnect_sampler(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.sampler.disconnect();
        }
    }

    /// Seconds since the current playback session began
    ///
    /// While paused this is the position at the pause; while idle it is 0.
    pub fn elapsed(&self) -> f64 {
        match self.status {
            PlaybackStatus::Playing => self.transport.now() - self.reference_offset,
            PlaybackStatus::Paused => self.last_elapsed,
            PlaybackStatus::Idle => 0.0,
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn asset(&self) -> Option<&AudioAsset> {
        self.loaded.as_ref().map(|l| &l.asset)
    }

    /// The spectrum sampler, if an asset is attached
    pub fn sampler_mut(&mut self) -> Option<&mut SpectrumSampler> {
        self.loaded.as_mut().map(|l| &mut l.sampler)
    }

    #[cfg(test)]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
