//! Audio loading and playback control handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::scheduler::RestartReason;

impl App {
    /// Handle playback-related messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenAudio => {
                if self.ui.loading {
                    return Some(Task::none());
                }
                self.ui.loading = true;
                Some(Task::perform(
                    helpers::pick_audio_file(),
                    Message::AudioFilePicked,
                ))
            }

            Message::AudioFilePicked(None) => {
                self.ui.loading = false;
                Some(Task::none())
            }

            Message::AudioFilePicked(Some(path)) => {
                tracing::info!("Loading audio from {}", path.display());
                Some(Task::perform(
                    helpers::load_audio_file(path.clone()),
                    Message::AudioLoaded,
                ))
            }

            Message::AudioLoaded(Ok(asset)) => {
                self.ui.loading = false;
                self.ui.status = None;
                self.ui.audio_name = Some(asset.name().to_string());

                self.playback.load(asset.clone());
                if let Err(e) = self.playback.play() {
                    tracing::error!("Failed to start playback: {:#}", e);
                    self.ui.status = Some(format!("{:#}", e));
                }
                self.scheduler.restart(RestartReason::AudioChanged);
                Some(Task::none())
            }

            Message::AudioLoaded(Err(e)) => {
                tracing::warn!("Audio load failed: {}", e);
                self.ui.loading = false;
                self.ui.status = Some(e.clone());
                Some(Task::none())
            }

            Message::TogglePlayback => {
                if let Err(e) = self.playback.toggle() {
                    tracing::error!("Failed to start playback: {:#}", e);
                    self.ui.status = Some(format!("{:#}", e));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
