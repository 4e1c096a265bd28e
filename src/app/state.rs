//! Application state definitions

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::audio::{PlaybackController, RodioTransport};
use crate::features::{Settings, SubtitleTimeline};
use crate::scheduler::{FrameScheduler, SchedulerConfig};

/// Main application state
pub struct App {
    pub settings: Settings,
    /// Audio output, play state and spectrum sampler
    pub playback: PlaybackController<RodioTransport>,
    /// Animation engine and display list
    pub scheduler: FrameScheduler<StdRng>,
    pub timeline: SubtitleTimeline,
    pub ui: UiState,
}

/// Labels and transient UI flags
#[derive(Debug, Default)]
pub struct UiState {
    /// Name of the loaded audio file
    pub audio_name: Option<String>,
    /// Name of the loaded subtitle file
    pub subtitles_name: Option<String>,
    /// Last load error, shown in the status line
    pub status: Option<String>,
    /// A picker or file load is in flight
    pub loading: bool,
}

impl App {
    /// Build state from loaded settings; the scheduler is not started yet
    pub fn with_settings(settings: Settings) -> Self {
        let rng = match settings.visuals.seed {
            Some(seed) => {
                tracing::info!("Using fixed visual seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        let scheduler = FrameScheduler::new(
            rng,
            SchedulerConfig {
                ambient_waves: settings.visuals.ambient_waves,
                clock_step: settings.visuals.clock_step,
            },
        );

        let playback = PlaybackController::new(
            RodioTransport::new(),
            settings.audio.resume_mode,
            settings.audio.smoothing,
        );

        Self {
            settings,
            playback,
            scheduler,
            timeline: SubtitleTimeline::default(),
            ui: UiState::default(),
        }
    }
}
