//! Frame scheduler
//!
//! Sequences one tick per display refresh: advance and draw the wave field,
//! sample and draw the spectrum, then publish the subtitle for the current
//! playback position. The scheduler owns the animation clock and the wave
//! field (the engine state) and the display list the canvas replays.
//!
//! The refresh callback itself belongs to the UI. The app only subscribes to
//! frame events while [`FrameScheduler::is_running`] is true, so `cancel`
//! releases the registration on the next subscription pass.

use iced::Size;
use rand::Rng;

use crate::audio::{AudioTransport, PlaybackController};
use crate::features::subtitles::{DEFAULT_SUBTITLE, SubtitleTimeline};
use crate::visuals::{DisplayList, Surface, WaveField, render_spectrum};

/// Animation clock increment per tick, independent of wall time
pub const DEFAULT_CLOCK_STEP: f32 = 0.05;

/// Knobs for engine setup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerConfig {
    pub ambient_waves: usize,
    pub clock_step: f32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            ambient_waves: crate::visuals::waves::DEFAULT_AMBIENT_WAVES,
            clock_step: DEFAULT_CLOCK_STEP,
        }
    }
}

/// Why the engine is being rebuilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartReason {
    AudioChanged,
    SubtitlesChanged,
}

/// Per-run animation state, created on start and dropped on cancel
#[derive(Debug)]
struct EngineState {
    clock: f32,
    waves: WaveField,
}

#[derive(Debug)]
enum Lifecycle {
    Stopped,
    Running(EngineState),
}

/// Owns the engine state and drives the per-tick cycle
pub struct FrameScheduler<R: Rng> {
    lifecycle: Lifecycle,
    rng: R,
    config: SchedulerConfig,
    surface: DisplayList,
    published: String,
    ticks: u64,
}

impl<R: Rng> FrameScheduler<R> {
    pub fn new(rng: R, config: SchedulerConfig) -> Self {
        Self {
            lifecycle: Lifecycle::Stopped,
            rng,
            config,
            surface: DisplayList::default(),
            published: DEFAULT_SUBTITLE.to_string(),
            ticks: 0,
        }
    }

    /// Size the surface and build a fresh engine with the clock at zero
    pub fn start(&mut self, size: Size) {
        self.surface.resize(size);
        self.setup();
        tracing::info!(
            "Frame scheduler started ({}x{})",
            self.surface.size().width,
            self.surface.size().height
        );
    }

    /// Re-run setup after an input change
    ///
    /// The animation clock resets to zero and ambient waves are re-rolled.
    pub fn restart(&mut self, reason: RestartReason) {
        let previous_clock = self.clock();
        self.setup();
        tracing::info!(
            "Frame scheduler restarted ({:?}), clock reset from {:.2}",
            reason,
            previous_clock
        );
    }

    /// Stop ticking; safe to call more than once
    pub fn cancel(&mut self) {
        if let Lifecycle::Running(_) = std::mem::replace(&mut self.lifecycle, Lifecycle::Stopped) {
            tracing::info!("Frame scheduler cancelled after {} ticks", self.ticks);
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running(_))
    }

    /// Follow a surface resize without interrupting the tick sequence
    pub fn on_resize(&mut self, size: Size) {
        self.surface.resize(size);
        if let Lifecycle::Running(state) = &mut self.lifecycle {
            state.waves.on_resize(self.surface.size().height);
        }
        tracing::debug!("Surface resized to {}x{}", size.width, size.height);
    }

    /// Current animation clock, zero when stopped
    pub fn clock(&self) -> f32 {
        match &self.lifecycle {
            Lifecycle::Running(state) => state.clock,
            Lifecycle::Stopped => 0.0,
        }
    }

    /// The most recently published subtitle text
    pub fn published(&self) -> &str {
        &self.published
    }

    /// The draw commands of the last tick
    pub fn display_list(&self) -> &DisplayList {
        &self.surface
    }

    /// Run one tick; returns the published text, or `None` when stopped
    pub fn tick<T: AudioTransport>(
        &mut self,
        playback: &mut PlaybackController<T>,
        timeline: &SubtitleTimeline,
    ) -> Option<&str> {
        let Lifecycle::Running(state) = &mut self.lifecycle else {
            return None;
        };

        self.surface.clear();

        state.waves.advance(state.clock);
        state.waves.render(&mut self.surface, state.clock);

        if let Some(sampler) = playback.sampler_mut() {
            let snapshot = sampler.sample();
            render_spectrum(&mut self.surface, &snapshot, state.clock, &mut self.rng);
        }

        let text = if playback.is_playing() {
            timeline.lookup(playback.elapsed())
        } else {
            DEFAULT_SUBTITLE
        };
        if self.published != text {
            tracing::debug!("Subtitle: {:?}", text);
            self.published.clear();
            self.published.push_str(text);
        }

        state.clock += self.config.clock_step;
        self.ticks += 1;

        Some(self.published.as_str())
    }

    fn setup(&mut self) {
        let height = self.surface.size().height;
        let waves = WaveField::new(height, self.config.ambient_waves, &mut self.rng);
        self.lifecycle = Lifecycle::Running(EngineState { clock: 0.0, waves });
    }
}
