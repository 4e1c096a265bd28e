//! Spectrum rendering
//!
//! Stateless: bars and a reactive line are a function of the snapshot, the
//! animation clock and the surface size. The random source only jitters bar
//! opacity.

use iced::{Color, Point, Size};
use rand::Rng;

use super::surface::Surface;
use crate::audio::SpectrumSnapshot;

/// Bar height is the raw magnitude divided by this
pub const BAR_HEIGHT_DIVISOR: f32 = 2.0;

/// Horizontal gap after every bar (pixels)
pub const BAR_GAP: f32 = 1.0;

/// Spatial constant of the reactive line's modulation
pub const REACTIVE_LINE_K: f32 = 0.05;

/// Stroke width of the reactive line
pub const REACTIVE_LINE_WIDTH: f32 = 2.0;

const REACTIVE_LINE_COLOR: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 0.5,
};

/// Draw the bars, then the reactive line
pub fn render_spectrum<S, R>(surface: &mut S, snapshot: &SpectrumSnapshot, time: f32, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    if surface.is_degenerate() || snapshot.is_empty() {
        return;
    }
    draw_bars(surface, snapshot, rng);
    draw_reactive_line(surface, snapshot, time);
}

/// One bottom-anchored bar per bin with a random opacity in [0.5, 1.0)
pub fn draw_bars<S, R>(surface: &mut S, snapshot: &SpectrumSnapshot, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let size = surface.size();
    let bar_width = size.width / snapshot.len() as f32;

    let mut x = 0.0;
    for &magnitude in snapshot.magnitudes() {
        let bar_height = magnitude as f32 / BAR_HEIGHT_DIVISOR;
        let alpha = rng.random_range(0.5_f32..1.0);
        surface.fill_rect(
            Point::new(x, size.height - bar_height),
            Size::new(bar_width, bar_height),
            Color::from_rgba(1.0, 1.0, 1.0, alpha),
        );
        x += bar_width + BAR_GAP;
    }
}

/// A line across the full width, displaced by each bin's magnitude
pub fn draw_reactive_line<S>(surface: &mut S, snapshot: &SpectrumSnapshot, time: f32)
where
    S: Surface + ?Sized,
{
    let size = surface.size();
    let bins = snapshot.len() as f32;
    let center_y = size.height / 2.0;

    let points = snapshot
        .magnitudes()
        .iter()
        .enumerate()
        .map(|(i, &magnitude)| {
            let x = i as f32 / bins * size.width;
            let reach = magnitude as f32 / 255.0 * size.height / 4.0;
            Point::new(x, center_y + reach * (x * REACTIVE_LINE_K + time).sin())
        })
        .collect();

    surface.stroke_polyline(points, REACTIVE_LINE_COLOR, REACTIVE_LINE_WIDTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::surface::DisplayList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snapshot() -> SpectrumSnapshot {
        SpectrumSnapshot::new(vec![0, 100, 255, 50])
    }

    #[test]
    fn test_bars_layout() {
        let mut surface = DisplayList::new(Size::new(400.0, 300.0));
        let mut rng = StdRng::seed_from_u64(1);
        render_spectrum(&mut surface, &snapshot(), 0.0, &mut rng);

        let bars: Vec<_> = surface.rects().collect();
        // The silent bin has zero height and is not drawn
        assert_eq!(bars.len(), 3);

        let (top_left, size, color) = bars[1];
        assert_eq!(top_left, Point::new(2.0 * 101.0, 300.0 - 127.5));
        assert_eq!(size, Size::new(100.0, 127.5));
        assert!((0.5..1.0).contains(&color.a));
    }

    #[test]
    fn test_reactive_line() {
        let mut surface = DisplayList::new(Size::new(400.0, 300.0));
        let mut rng = StdRng::seed_from_u64(1);
        let time = 0.3;
        render_spectrum(&mut surface, &snapshot(), time, &mut rng);

        let lines: Vec<_> = surface.polylines().collect();
        assert_eq!(lines.len(), 1);
        let (points, color, width) = lines[0];
        assert_eq!(points.len(), 4);
        assert_eq!(width, REACTIVE_LINE_WIDTH);
        assert_eq!(color, REACTIVE_LINE_COLOR);

        assert_eq!(points[0], Point::new(0.0, 150.0));
        let x = 200.0_f32;
        let expected = 150.0 + 75.0 * (x * REACTIVE_LINE_K + time).sin();
        assert_eq!(points[2].x, x);
        assert!((points[2].y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_opacity_comes_from_injected_rng() {
        let render = |seed| {
            let mut surface = DisplayList::new(Size::new(400.0, 300.0));
            let mut rng = StdRng::seed_from_u64(seed);
            render_spectrum(&mut surface, &snapshot(), 1.0, &mut rng);
            surface
        };
        assert_eq!(render(9).commands(), render(9).commands());
    }

    #[test]
    fn test_degenerate_surface_draws_nothing() {
        let mut surface = DisplayList::new(Size::ZERO);
        let mut rng = StdRng::seed_from_u64(1);
        render_spectrum(&mut surface, &snapshot(), 0.0, &mut rng);
        assert!(surface.is_empty());
    }
}
