//! Visualizer canvas
//!
//! Replays the display list recorded by the frame scheduler onto an iced
//! canvas frame. Drawing happens in the scheduler tick; this only translates.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Element, Fill, Point, Renderer, Theme, mouse};

use crate::ui::theme;
use crate::visuals::{DisplayList, DrawCommand};

/// Canvas program over a borrowed display list
#[derive(Debug, Clone, Copy)]
pub struct Visualizer<'a> {
    list: &'a DisplayList,
}

impl<'a> Visualizer<'a> {
    pub fn new(list: &'a DisplayList) -> Self {
        Self { list }
    }
}

impl<Message> Program<Message> for Visualizer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::BACKGROUND);

        for command in self.list.commands() {
            match command {
                DrawCommand::Polyline {
                    points,
                    color,
                    width,
                } => {
                    let path = Path::new(|builder| {
                        let mut points = points.iter();
                        if let Some(first) = points.next() {
                            builder.move_to(*first);
                            for point in points {
                                builder.line_to(*point);
                            }
                        }
                    });
                    frame.stroke(&path, Stroke::default().with_color(*color).with_width(*width));
                }
                DrawCommand::Rect {
                    top_left,
                    size,
                    color,
                } => {
                    frame.fill_rectangle(*top_left, *size, *color);
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Full-size visualizer element
pub fn view_visualizer<'a, Message: 'a>(list: &'a DisplayList) -> Element<'a, Message> {
    Canvas::new(Visualizer::new(list))
        .width(Fill)
        .height(Fill)
        .into()
}
