//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.scheduler.on_resize(*size);
                Some(Task::none())
            }

            Message::RequestClose => {
                tracing::info!("Shutting down");
                self.scheduler.cancel();
                self.playback.stop();
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
