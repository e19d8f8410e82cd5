//! The drawable element list an artifact carries.
//!
//! Coordinates are artifact-local: origin at the top-left corner, y growing
//! downward, units in points. A backend (screen or PDF) places the whole list
//! by offsetting and scaling it, so artifacts stay position-independent until
//! assembly.

use sheaf_types::{Color, Size};

/// A sized list of drawable elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub size: Size,
    pub elements: Vec<PositionedElement>,
}

/// A single drawable item with its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: DrawElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawElement {
    Text(TextElement),
    Rect(RectElement),
    /// A straight line from the element origin to origin + (width, height).
    Line(LineElement),
    /// A circle sector, for pie slices. The bounding box is the full circle;
    /// the center sits at its middle.
    Wedge(WedgeElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 9.0,
            bold: false,
            color: Color::default(),
            align: TextAlign::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WedgeElement {
    pub radius: f32,
    /// Degrees, measured counter-clockwise from the positive x axis.
    pub start_angle: f32,
    /// Degrees, counter-clockwise. Always positive for visible slices.
    pub sweep: f32,
    pub fill: Color,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, rect: RectElement) {
        self.elements.push(PositionedElement {
            x,
            y,
            width,
            height,
            element: DrawElement::Rect(rect),
        });
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color, width: f32) {
        self.elements.push(PositionedElement {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
            element: DrawElement::Line(LineElement { color, width }),
        });
    }

    /// Text laid out inside a box of the given width; the box height follows
    /// from the font size. Alignment is resolved by the backend against this
    /// box.
    pub fn text(&mut self, x: f32, y: f32, width: f32, content: impl Into<String>, style: TextStyle) {
        let height = line_height(style.font_size);
        self.elements.push(PositionedElement {
            x,
            y,
            width,
            height,
            element: DrawElement::Text(TextElement { content: content.into(), style }),
        });
    }

    pub fn wedge(&mut self, cx: f32, cy: f32, wedge: WedgeElement) {
        let r = wedge.radius;
        self.elements.push(PositionedElement {
            x: cx - r,
            y: cy - r,
            width: 2.0 * r,
            height: 2.0 * r,
            element: DrawElement::Wedge(wedge),
        });
    }
}

pub fn line_height(font_size: f32) -> f32 {
    font_size * 1.2
}

/// Cheap width estimate for the base font. Good enough for alignment and
/// truncation decisions; the backends use the same estimate so on-screen and
/// exported placement agree.
pub fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedge_bounding_box_is_centered() {
        let mut list = DrawList::new();
        list.wedge(
            100.0,
            80.0,
            WedgeElement { radius: 50.0, start_angle: 90.0, sweep: 180.0, fill: Color::gray(0) },
        );
        let el = &list.elements[0];
        assert_eq!((el.x, el.y), (50.0, 30.0));
        assert_eq!((el.width, el.height), (100.0, 100.0));
    }

    #[test]
    fn text_box_height_follows_font() {
        let mut list = DrawList::new();
        list.text(0.0, 0.0, 120.0, "hi", TextStyle { font_size: 10.0, ..Default::default() });
        assert_eq!(list.elements[0].height, 12.0);
    }
}
