//! Visual core - everything drawn on the background canvas
//!
//! - `surface`: Drawing target abstraction and the recorded display list
//! - `waves`: Procedural named and ambient sine waves
//! - `spectrum`: Audio-reactive bars and line

pub mod spectrum;
pub mod surface;
pub mod waves;

pub use spectrum::render_spectrum;
pub use surface::{DisplayList, DrawCommand, Surface};
pub use waves::WaveField;
