//! Procedural wave field
//!
//! Two families of sine lines share one drift model:
//! - four hand-tuned *named* waves, stroked thick
//! - a configurable number of randomized *ambient* waves, stroked thin
//!
//! Only the baseline moves after construction. Everything else about a wave
//! is fixed for the lifetime of the field.

use iced::{Color, Point, color};
use rand::Rng;

use super::surface::Surface;

/// Vertical drift of every baseline around the surface center (pixels)
pub const DRIFT_AMPLITUDE: f32 = 50.0;

/// Stroke width of the named waves
pub const NAMED_STROKE_WIDTH: f32 = 3.0;

/// Stroke width of the ambient waves
pub const AMBIENT_STROKE_WIDTH: f32 = 1.0;

/// Default number of ambient waves
pub const DEFAULT_AMBIENT_WAVES: usize = 20;

/// A single animated sine line
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    /// Current vertical center (pixels)
    pub baseline: f32,
    /// Spatial coefficient: horizontal oscillation density
    pub wavelength: f32,
    /// Peak deviation from the baseline (pixels)
    pub amplitude: f32,
    /// Temporal coefficient: oscillation speed against the global clock
    pub frequency: f32,
    pub color: Color,
    /// Speed of the baseline drift
    pub speed: f32,
}

impl Wave {
    /// Vertical position of the line at column `x`
    pub fn y_at(&self, x: f32, time: f32) -> f32 {
        self.baseline + (x * self.wavelength + time * self.frequency).sin() * self.amplitude
    }

    fn drift(&mut self, center_y: f32, time: f32) {
        self.baseline = center_y + (time * self.speed).sin() * DRIFT_AMPLITUDE;
    }
}

/// Which family a wave belongs to (rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveKind {
    Named,
    Ambient,
}

impl WaveKind {
    pub fn stroke_width(self) -> f32 {
        match self {
            WaveKind::Named => NAMED_STROKE_WIDTH,
            WaveKind::Ambient => AMBIENT_STROKE_WIDTH,
        }
    }
}

/// (wavelength, amplitude, frequency, color, speed)
const NAMED_WAVES: [(f32, f32, f32, Color, f32); 4] = [
    (0.01, 100.0, 0.02, color!(0x4299e1), 0.05),
    (0.02, 80.0, 0.03, color!(0xed64a6), 0.07),
    (0.015, 60.0, 0.01, color!(0x48bb78), 0.03),
    (0.025, 70.0, 0.04, color!(0xecc94b), 0.06),
];

/// The full set of named and ambient waves
#[derive(Debug, Clone)]
pub struct WaveField {
    center_y: f32,
    named: Vec<Wave>,
    ambient: Vec<Wave>,
}

impl WaveField {
    /// Build the field for a surface of the given height
    pub fn new<R: Rng + ?Sized>(height: f32, ambient_count: usize, rng: &mut R) -> Self {
        let center_y = height / 2.0;

        let named = NAMED_WAVES
            .iter()
            .map(|&(wavelength, amplitude, frequency, color, speed)| Wave {
                baseline: center_y,
                wavelength,
                amplitude,
                frequency,
                color,
                speed,
            })
            .collect();

        let ambient = (0..ambient_count)
            .map(|_| random_ambient_wave(center_y, rng))
            .collect();

        Self {
            center_y,
            named,
            ambient,
        }
    }

    #[cfg(test)]
    pub fn named(&self) -> &[Wave] {
        &self.named
    }

    #[cfg(test)]
    pub fn ambient(&self) -> &[Wave] {
        &self.ambient
    }

    #[cfg(test)]
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    /// All waves in draw order, named first
    pub fn waves(&self) -> impl Iterator<Item = (&Wave, WaveKind)> {
        self.named
            .iter()
            .map(|w| (w, WaveKind::Named))
            .chain(self.ambient.iter().map(|w| (w, WaveKind::Ambient)))
    }

    /// Move every baseline to its drift position at `time`
    pub fn advance(&mut self, time: f32) {
        let center_y = self.center_y;
        for wave in self.named.iter_mut().chain(self.ambient.iter_mut()) {
            wave.drift(center_y, time);
        }
    }

    /// Stroke every wave across the full surface width
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, time: f32) {
        if surface.is_degenerate() {
            return;
        }

        let columns = surface.size().width.floor() as usize;
        for (wave, kind) in self.waves() {
            let points = (0..columns)
                .map(|column| {
                    let x = column as f32;
                    Point::new(x, wave.y_at(x, time))
                })
                .collect();
            surface.stroke_polyline(points, wave.color, kind.stroke_width());
        }
    }

    /// Recenter everything on a new surface height
    pub fn on_resize(&mut self, height: f32) {
        self.center_y = height / 2.0;
        for wave in self.named.iter_mut().chain(self.ambient.iter_mut()) {
            wave.baseline = self.center_y;
        }
    }
}

fn random_ambient_wave<R: Rng + ?Sized>(center_y: f32, rng: &mut R) -> Wave {
    let alpha = rng.random_range(0.1_f32..0.6);
    Wave {
        baseline: center_y,
        wavelength: rng.random_range(0.005_f32..0.035),
        amplitude: rng.random_range(20.0_f32..70.0),
        frequency: rng.random_range(0.01_f32..0.06),
        color: Color::from_rgba(1.0, 1.0, 1.0, alpha),
        speed: rng.random_range(0.02_f32..0.12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::surface::DisplayList;
    use iced::Size;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(height: f32) -> WaveField {
        let mut rng = StdRng::seed_from_u64(7);
        WaveField::new(height, DEFAULT_AMBIENT_WAVES, &mut rng)
    }

    #[test]
    fn test_construction() {
        let field = field(600.0);
        assert_eq!(field.named().len(), 4);
        assert_eq!(field.ambient().len(), DEFAULT_AMBIENT_WAVES);
        assert!(field.waves().all(|(w, _)| w.baseline == 300.0));
        assert_eq!(field.named()[1].color, color!(0xed64a6));
    }

    #[test]
    fn test_ambient_ranges() {
        let field = field(600.0);
        for wave in field.ambient() {
            assert!((0.005..0.035).contains(&wave.wavelength));
            assert!((20.0..70.0).contains(&wave.amplitude));
            assert!((0.01..0.06).contains(&wave.frequency));
            assert!((0.02..0.12).contains(&wave.speed));
            assert!((0.1..0.6).contains(&wave.color.a));
            assert!(wave.amplitude > 0.0 && wave.wavelength > 0.0);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        assert_eq!(field(600.0).ambient(), field(600.0).ambient());
    }

    #[test]
    fn test_advance_drift() {
        let mut field = field(600.0);
        field.advance(10.0);
        let first = &field.named()[0];
        let expected = 300.0 + (10.0_f32 * 0.05).sin() * DRIFT_AMPLITUDE;
        assert!((first.baseline - expected).abs() < 1e-4);
    }

    #[test]
    fn test_advance_is_periodic_per_wave() {
        let mut field = field(600.0);
        let t = 3.7_f32;
        field.advance(t);
        let before: Vec<f32> = field.waves().map(|(w, _)| w.baseline).collect();
        let speeds: Vec<f32> = field.waves().map(|(w, _)| w.speed).collect();

        for (i, speed) in speeds.iter().enumerate() {
            let period = std::f32::consts::TAU / speed;
            field.advance(t + period);
            let after = field.waves().nth(i).map(|(w, _)| w.baseline).unwrap();
            assert!(
                (after - before[i]).abs() < 1e-2,
                "wave {i} drifted from {} to {}",
                before[i],
                after
            );
        }
    }

    #[test]
    fn test_resize_resets_baselines() {
        let mut field = field(600.0);
        field.advance(42.0);
        field.on_resize(333.0);
        assert!(field.waves().all(|(w, _)| w.baseline == 166.5));
        assert_eq!(field.center_y(), 166.5);
    }

    #[test]
    fn test_render_samples_every_column() {
        let field = field(200.0);
        let mut surface = DisplayList::new(Size::new(64.0, 200.0));
        field.render(&mut surface, 1.5);

        let lines: Vec<_> = surface.polylines().collect();
        assert_eq!(lines.len(), 4 + DEFAULT_AMBIENT_WAVES);
        for (i, (points, _, width)) in lines.iter().enumerate() {
            assert_eq!(points.len(), 64);
            let expected_width = if i < 4 { 3.0 } else { 1.0 };
            assert_eq!(*width, expected_width);
        }

        let wave = &field.named()[0];
        let (points, _, _) = lines[0];
        assert_eq!(points[10].x, 10.0);
        assert!((points[10].y - wave.y_at(10.0, 1.5)).abs() < 1e-4);
    }

    #[test]
    fn test_render_degenerate_surface() {
        let field = field(0.0);
        let mut surface = DisplayList::new(Size::ZERO);
        field.render(&mut surface, 0.0);
        assert!(surface.is_empty());
    }
}
