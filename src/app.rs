//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Size, Task};

use crate::features::Settings;
pub use message::{LoadedSubtitles, Message};
pub use state::{App, UiState};

impl App {
    /// Create new application instance and start the frame scheduler
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let size = Size::new(settings.window.width, settings.window.height);
        let mut app = Self::with_settings(settings);
        app.scheduler.start(size);
        (app, Task::none())
    }

    /// Window title with the loaded file names
    pub fn title(&self) -> String {
        match (&self.ui.audio_name, &self.ui.subtitles_name) {
            (Some(audio), Some(subs)) => format!("Subwave - {} [{}]", audio, subs),
            (Some(audio), None) => format!("Subwave - {}", audio),
            (None, Some(subs)) => format!("Subwave - [{}]", subs),
            (None, None) => "Subwave".to_string(),
        }
    }

    /// Frame ticks while the scheduler runs, plus window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let frame_sub = if subscription_logic::needs_frames(self.scheduler.is_running()) {
            iced::window::frames().map(|_| Message::Frame)
        } else {
            iced::Subscription::none()
        };

        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([frame_sub, resize_sub, close_request_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frame callbacks are registered only while the engine is running
    pub fn needs_frames(scheduler_running: bool) -> bool {
        scheduler_running
    }
}
