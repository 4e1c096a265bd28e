//! UI module
//!
//! - `visualizer`: Canvas that replays the scheduler's display list
//! - `theme`: Palette and control styles

pub mod theme;
pub mod visualizer;

pub use visualizer::view_visualizer;
