//! Drawing surface abstraction
//!
//! The visual core never talks to iced's `Frame` directly. It draws into a
//! `Surface`, and the UI replays the recorded `DisplayList` onto the canvas.
//! This keeps the wave and spectrum math testable without a window.

use iced::{Color, Point, Size};

/// A 2-D drawable region with a mutable size
pub trait Surface {
    /// Current drawable size in pixels
    fn size(&self) -> Size;

    /// Drop everything drawn so far
    fn clear(&mut self);

    /// Stroke a connected line through `points`
    fn stroke_polyline(&mut self, points: Vec<Point>, color: Color, width: f32);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, top_left: Point, size: Size, color: Color);

    /// Whether anything can be drawn at all
    fn is_degenerate(&self) -> bool {
        let size = self.size();
        size.width <= 0.0 || size.height <= 0.0
    }
}

/// One recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polyline {
        points: Vec<Point>,
        color: Color,
        width: f32,
    },
    Rect {
        top_left: Point,
        size: Size,
        color: Color,
    },
}

/// Surface that records draw commands for one tick
#[derive(Debug, Clone)]
pub struct DisplayList {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Update the drawable size (window resize)
    pub fn resize(&mut self, size: Size) {
        self.size = Size::new(size.width.max(0.0), size.height.max(0.0));
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[cfg(test)]
    /// Recorded polylines with their stroke widths
    pub fn polylines(&self) -> impl Iterator<Item = (&[Point], Color, f32)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Polyline {
                points,
                color,
                width,
            } => Some((points.as_slice(), *color, *width)),
            DrawCommand::Rect { .. } => None,
        })
    }

    #[cfg(test)]
    /// Recorded rectangles
    pub fn rects(&self) -> impl Iterator<Item = (Point, Size, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Rect {
                top_left,
                size,
                color,
            } => Some((*top_left, *size, *color)),
            DrawCommand::Polyline { .. } => None,
        })
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn stroke_polyline(&mut self, points: Vec<Point>, color: Color, width: f32) {
        // A single point has no visible stroke
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polyline {
            points,
            color,
            width,
        });
    }

    fn fill_rect(&mut self, top_left: Point, size: Size, color: Color) {
        if size.width <= 0.0 || size.height <= 0.0 {
            return;
        }
        self.commands.push(DrawCommand::Rect {
            top_left,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_commands_in_order() {
        let mut list = DisplayList::new(Size::new(100.0, 50.0));
        list.fill_rect(Point::ORIGIN, Size::new(10.0, 10.0), Color::WHITE);
        list.stroke_polyline(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            Color::BLACK,
            2.0,
        );

        assert_eq!(list.commands().len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::Rect { .. }));
        assert_eq!(list.polylines().count(), 1);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_skips_invisible_shapes() {
        let mut list = DisplayList::new(Size::new(100.0, 50.0));
        list.stroke_polyline(vec![Point::ORIGIN], Color::WHITE, 1.0);
        list.fill_rect(Point::ORIGIN, Size::new(0.0, 10.0), Color::WHITE);
        assert!(list.is_empty());
    }

    #[test]
    fn test_degenerate_size() {
        let mut list = DisplayList::default();
        assert!(list.is_degenerate());
        list.resize(Size::new(640.0, 480.0));
        assert!(!list.is_degenerate());
        list.resize(Size::new(-5.0, 480.0));
        assert_eq!(list.size().width, 0.0);
        assert!(list.is_degenerate());
    }
}
