//! Audio output transport
//!
//! The transport is the platform seam of the playback controller: it owns the
//! output device, the current output path and the transport clock.
//!
//! Output paths are single-use. Every `start` builds a new sink over a new
//! source, so restarting always begins from the requested offset.

use std::time::{Duration, Instant};

use anyhow::Context;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::analyzer::{AnalyzingSource, SpectrumTap};
use super::asset::AudioAsset;

/// Platform audio output driven by the playback controller
pub trait AudioTransport {
    /// Monotonic transport clock in seconds
    fn now(&self) -> f64;

    /// Start a fresh output path for `asset`, `offset` into the track
    fn start(&mut self, asset: &AudioAsset, tap: SpectrumTap, offset: Duration)
    -> anyhow::Result<()>;

    /// Stop the current output path, if any
    fn stop(&mut self);
}

/// Default-device output using rodio
pub struct RodioTransport {
    stream: Option<OutputStream>,
    sink: Option<Sink>,
    epoch: Instant,
}

impl RodioTransport {
    pub fn new() -> Self {
        Self {
            stream: None,
            sink: None,
            epoch: Instant::now(),
        }
    }

    /// Open the default output stream on first use
    fn stream(&mut self) -> anyhow::Result<&OutputStream> {
        if self.stream.is_none() {
            let stream = OutputStreamBuilder::open_default_stream()
                .context("Failed to create audio output")?;
            tracing::info!("Opened default audio output stream");
            self.stream = Some(stream);
        }
        self.stream
            .as_ref()
            .context("Audio output stream unavailable")
    }
}

impl Default for RodioTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioTransport for RodioTransport {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn start(
        &mut self,
        asset: &AudioAsset,
        tap: SpectrumTap,
        offset: Duration,
    ) -> anyhow::Result<()> {
        self.stop();

        let source = AnalyzingSource::new(asset.source_from(offset), tap);
        let sink = Sink::connect_new(self.stream()?.mixer());
        sink.append(source);
        self.sink = Some(sink);

        tracing::debug!("Started output for {} at {:?}", asset.name(), offset);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Transport with a hand-driven clock and no audio device
///
/// The last tap is kept after `stop`, like a sink whose source is dropped late.
#[cfg(test)]
#[derive(Default)]
pub struct ManualTransport {
    pub clock: f64,
    pub starts: Vec<Duration>,
    pub stops: usize,
    pub fail_next_start: bool,
    pub active: bool,
    pub tap: Option<SpectrumTap>,
}

#[cfg(test)]
impl ManualTransport {
    pub fn advance(&mut self, seconds: f64) {
        self.clock += seconds;
    }
}

#[cfg(test)]
impl AudioTransport for ManualTransport {
    fn now(&self) -> f64 {
        self.clock
    }

    fn start(
        &mut self,
        _asset: &AudioAsset,
        tap: SpectrumTap,
        offset: Duration,
    ) -> anyhow::Result<()> {
        if std::mem::take(&mut self.fail_next_start) {
            anyhow::bail!("No audio output device");
        }
        self.tap = Some(tap);
        self.starts.push(offset);
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        if self.active {
            self.stops += 1;
        }
        self.active = false;
    }
}
