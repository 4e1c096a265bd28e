//! Subwave - An audio-reactive wave visualizer synced to SRT subtitles
//! Built with iced, rodio and a small procedural animation engine

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod audio;
mod features;
mod scheduler;
mod ui;
mod visuals;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = features::Settings::load();
    let window = iced::window::Settings {
        size: iced::Size::new(settings.window.width, settings.window.height),
        exit_on_close_request: false,
        ..Default::default()
    };

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .subscription(app::App::subscription)
    .window(window)
    .antialiasing(true)
    .run()
}
