//! Display refresh handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Run one scheduler tick per frame
    pub fn handle_frame(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Frame => {
                self.scheduler.tick(&mut self.playback, &self.timeline);
                Some(Task::none())
            }
            _ => None,
        }
    }
}
