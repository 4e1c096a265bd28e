//! Application view rendering

use iced::widget::{Space, button, column, container, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use super::App;
use super::message::Message;
use crate::ui::{theme, view_visualizer};

const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let subtitle = container(
            text(self.scheduler.published())
                .size(theme::SUBTITLE_SIZE)
                .color(theme::SUBTITLE_TEXT)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                })
                .align_x(Alignment::Center),
        )
        .max_width(theme::SUBTITLE_MAX_WIDTH)
        .center_x(Fill);

        let centered = container(subtitle).center(Fill);

        stack![
            view_visualizer(self.scheduler.display_list()),
            centered,
            self.view_controls(),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }

    /// Floating buttons and the status line
    fn view_controls(&self) -> Element<'_, Message> {
        let open_subtitles = control_button("Subtitles", theme::subtitle_button)
            .on_press_maybe((!self.ui.loading).then_some(Message::OpenSubtitles));
        let open_audio = control_button("Audio", theme::audio_button)
            .on_press_maybe((!self.ui.loading).then_some(Message::OpenAudio));

        let top = row![Space::new().width(Fill), open_subtitles, open_audio]
            .spacing(16)
            .align_y(Alignment::Center);

        let status: Element<'_, Message> = match &self.ui.status {
            Some(message) => text(message.as_str())
                .size(14)
                .color(theme::STATUS_ERROR)
                .into(),
            None => text(self.loaded_files_label())
                .size(14)
                .color(theme::TEXT_MUTED)
                .into(),
        };

        // Play/pause only once audio is attached
        let play: Element<'_, Message> = if self.playback.asset().is_some() {
            let label = if self.playback.is_playing() {
                "Pause"
            } else {
                "Play"
            };
            control_button(label, theme::audio_button)
                .on_press(Message::TogglePlayback)
                .into()
        } else {
            Space::new().into()
        };

        let bottom = row![status, Space::new().width(Fill), play]
            .spacing(16)
            .align_y(Alignment::Center);

        column![top, Space::new().height(Fill), bottom]
            .padding(Padding::new(16.0))
            .width(Fill)
            .height(Fill)
            .into()
    }

    fn loaded_files_label(&self) -> String {
        [&self.ui.audio_name, &self.ui.subtitles_name]
            .into_iter()
            .flatten()
            .cloned()
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

fn control_button<'a>(
    label: &'a str,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> button::Button<'a, Message> {
    button(
        text(label).size(14).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
    )
    .padding(Padding::new(12.0).left(20).right(20))
    .style(style)
}
