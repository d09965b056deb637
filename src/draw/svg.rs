//! Draw the visualisation into a svg document

use crate::draw::{Canvas, Color};
use crate::Point;
use std::fmt::{Display, Formatter};

type Rect = (f32, f32, f32, f32);

/// Canvas collecting svg elements.
///
/// Its [`Display`] implementation writes the complete `<svg>` document.
///
/// ```
/// # use casteljau_viz::Point;
/// use casteljau_viz::draw::{Canvas, Color};
/// use casteljau_viz::draw::svg::SvgCanvas;
///
/// let mut svg = SvgCanvas::new(100.0, 100.0);
/// svg.draw_circle(Point::new(50.0, 50.0), 4.0, Color::BLACK);
/// assert!(svg.to_string().contains("<circle cx=\"50\" cy=\"50\" r=\"4\" fill=\"rgb(0,0,0)\"/>"));
/// ```
pub struct SvgCanvas {
    /// Visible area as `(x, y, width, height)`
    pub view_box: Rect,

    /// Fill of the whole view box, `None` leaves it transparent
    pub background: Option<Color>,

    /// Elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl SvgCanvas {
    /// Empty canvas showing `(0, 0)` to `(width, height)` on the default background
    pub fn new(width: f32, height: f32) -> Self {
        SvgCanvas {
            view_box: (0.0, 0.0, width, height),
            background: Some(Color::BACKGROUND),
            elements: Vec::new(),
        }
    }

    /// Appends an arbitrary element
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }
}

impl Canvas for SvgCanvas {
    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.add_elem(Line {
            from,
            to,
            width: thickness,
            color,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.add_elem(Circle {
            center,
            radius,
            color,
        });
    }
}

impl Display for SvgCanvas {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (x, y, width, height) = self.view_box;
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            x, y, width, height
        )?;
        if let Some(background) = self.background {
            writeln!(
                f,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                x, y, width, height, background
            )?;
        }
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        return Ok(());
    }
}

struct Line {
    from: Point,
    to: Point,
    width: f32,
    color: Color,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            self.from.x, self.from.y, self.to.x, self.to.y, self.color, self.width
        )
    }
}

struct Circle {
    center: Point,
    radius: f32,
    color: Color,
}

impl Display for Circle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            self.center.x, self.center.y, self.radius, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SvgCanvas;
    use crate::draw::{Canvas, Color};
    use crate::Point;

    #[test]
    fn document_layout() {
        let mut svg = SvgCanvas::new(720.0, 720.0);
        svg.draw_line(
            Point::new(0.0, 0.0),
            Point::new(10.5, 20.0),
            3.0,
            Color::GRAY,
        );
        svg.background = None;

        let document = svg.to_string();
        let lines: Vec<&str> = document.lines().collect();
        assert_eq!(
            lines,
            vec![
                "<svg viewBox=\"0 0 720 720\" xmlns=\"http://www.w3.org/2000/svg\">",
                "<line x1=\"0\" y1=\"0\" x2=\"10.5\" y2=\"20\" stroke=\"rgb(130,130,130)\" stroke-width=\"3\" stroke-linecap=\"round\"/>",
                "</svg>",
            ]
        );
    }

    #[test]
    fn background_comes_first() {
        let mut svg = SvgCanvas::new(10.0, 20.0);
        svg.draw_circle(Point::new(1.0, 2.0), 5.0, Color::BLACK);

        let document = svg.to_string();
        let rect = document.find("<rect").expect("background missing");
        let circle = document.find("<circle").expect("circle missing");
        assert!(rect < circle);
        assert!(document.contains("fill=\"rgb(245,245,245)\""));
    }
}
