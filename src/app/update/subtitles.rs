//! Subtitle loading handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::scheduler::RestartReason;

impl App {
    /// Handle subtitle-related messages
    pub fn handle_subtitles(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenSubtitles => {
                if self.ui.loading {
                    return Some(Task::none());
                }
                self.ui.loading = true;
                Some(Task::perform(
                    helpers::pick_subtitle_file(),
                    Message::SubtitleFilePicked,
                ))
            }

            Message::SubtitleFilePicked(None) => {
                self.ui.loading = false;
                Some(Task::none())
            }

            Message::SubtitleFilePicked(Some(path)) => {
                tracing::info!("Loading subtitles from {}", path.display());
                Some(Task::perform(
                    helpers::load_subtitle_file(path.clone()),
                    Message::SubtitlesLoaded,
                ))
            }

            Message::SubtitlesLoaded(Ok(loaded)) => {
                self.ui.loading = false;
                self.ui.status = None;
                self.ui.subtitles_name = Some(loaded.name.clone());
                self.timeline.replace(loaded.entries.clone());
                self.scheduler.restart(RestartReason::SubtitlesChanged);
                Some(Task::none())
            }

            Message::SubtitlesLoaded(Err(e)) => {
                tracing::warn!("Subtitle load failed: {}", e);
                self.ui.loading = false;
                self.ui.status = Some(e.clone());
                Some(Task::none())
            }

            _ => None,
        }
    }
}
