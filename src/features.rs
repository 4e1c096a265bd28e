//! Feature modules - business logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod settings;
pub mod subtitles;

pub use settings::Settings;
pub use subtitles::{SubtitleEntry, SubtitleTimeline};
