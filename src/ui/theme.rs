//! Colors and widget styles
//!
//! A single dark palette: the visualizer draws on a near-black backdrop and
//! the controls are white pills floating over it.

use iced::color;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Canvas backdrop
pub const BACKGROUND: Color = color!(0x111827);

/// Subtitle label
pub const SUBTITLE_TEXT: Color = Color::WHITE;

/// Status line for load errors
pub const STATUS_ERROR: Color = color!(0xfc8181);

/// Muted hint text (file names)
pub const TEXT_MUTED: Color = color!(0x9ca3af);

/// Control pill foreground
pub const CONTROL_TEXT: Color = color!(0x111827);

/// Hover tint for the audio and play buttons
pub const AUDIO_HOVER: Color = color!(0xdbeafe);

/// Hover tint for the subtitle button
pub const SUBTITLE_HOVER: Color = color!(0xdcfce7);

/// Size of the subtitle label
pub const SUBTITLE_SIZE: f32 = 36.0;

/// Widest the subtitle label may grow before wrapping
pub const SUBTITLE_MAX_WIDTH: f32 = 768.0;

fn control_button(hover: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: CONTROL_TEXT,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: TEXT_MUTED,
            ..base
        },
        _ => base,
    }
}

/// White pill with a blue hover (open audio, play/pause)
pub fn audio_button(_theme: &Theme, status: button::Status) -> button::Style {
    control_button(AUDIO_HOVER, status)
}

/// White pill with a green hover (open subtitles)
pub fn subtitle_button(_theme: &Theme, status: button::Status) -> button::Style {
    control_button(SUBTITLE_HOVER, status)
}
