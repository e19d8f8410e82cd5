//! A drawing context for one PDF page.
//!
//! Converts artifact draw lists into content-stream operations. Artifact
//! coordinates are top-down; PDF device space is bottom-up, so every y is
//! flipped against the page height. Font and fill-color changes are tracked
//! so consecutive elements don't repeat state operators.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use sheaf_artifact::draw::{
    approx_text_width, DrawElement, DrawList, LineElement, RectElement, TextAlign, TextElement,
    WedgeElement,
};
use sheaf_types::Color;

pub(crate) const FONT_REGULAR: &str = "F1";
pub(crate) const FONT_BOLD: &str = "F2";

/// Arc segments are flattened to straight runs of at most this many degrees.
const ARC_STEP_DEG: f32 = 4.0;

pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Color,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    /// Draws a whole artifact list with its top-left corner at
    /// `(origin_x, origin_y)` (top-down device coordinates), uniformly scaled.
    pub(crate) fn draw_list(&mut self, list: &DrawList, origin_x: f32, origin_y: f32, scale: f32) {
        for el in &list.elements {
            let x = origin_x + el.x * scale;
            let y = origin_y + el.y * scale;
            let width = el.width * scale;
            let height = el.height * scale;
            match &el.element {
                DrawElement::Rect(rect) => self.draw_rect(x, y, width, height, rect),
                DrawElement::Line(line) => self.draw_line(x, y, width, height, line),
                DrawElement::Text(text) => self.draw_text(x, y, width, text, scale),
                DrawElement::Wedge(wedge) => {
                    self.draw_wedge(x + width / 2.0, y + height / 2.0, wedge, scale)
                }
            }
        }
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rect: &RectElement) {
        let pdf_y = self.page_height - y - height;
        if let Some(fill) = &rect.fill {
            self.set_fill_color(fill);
            self.push("re", vec![x.into(), pdf_y.into(), width.into(), height.into()]);
            self.push("f", vec![]);
        }
        if let Some(stroke) = &rect.stroke {
            self.set_stroke(&stroke.color, stroke.width);
            self.push("re", vec![x.into(), pdf_y.into(), width.into(), height.into()]);
            self.push("S", vec![]);
        }
    }

    fn draw_line(&mut self, x: f32, y: f32, width: f32, height: f32, line: &LineElement) {
        self.set_stroke(&line.color, line.width);
        self.push("m", vec![x.into(), (self.page_height - y).into()]);
        self.push(
            "l",
            vec![(x + width).into(), (self.page_height - y - height).into()],
        );
        self.push("S", vec![]);
    }

    fn draw_text(&mut self, x: f32, y: f32, box_width: f32, text: &TextElement, scale: f32) {
        if text.content.trim().is_empty() {
            return;
        }
        let style = &text.style;
        let font_size = style.font_size * scale;
        let text_width = approx_text_width(&text.content, style.font_size) * scale;
        let x = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x + (box_width - text_width) / 2.0,
            TextAlign::Right => x + box_width - text_width,
        };

        self.push("BT", vec![]);
        self.set_font(if style.bold { FONT_BOLD } else { FONT_REGULAR }, font_size);
        self.set_fill_color(&style.color);
        let baseline_y = y + font_size * 0.8;
        let pdf_y = self.page_height - baseline_y;
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_wedge(&mut self, cx: f32, cy: f32, wedge: &WedgeElement, scale: f32) {
        let radius = wedge.radius * scale;
        let cy_pdf = self.page_height - cy;
        self.set_fill_color(&wedge.fill);

        // Fan out from the center; counter-clockwise in artifact space is
        // counter-clockwise in PDF space once y is flipped.
        self.push("m", vec![cx.into(), cy_pdf.into()]);
        let steps = (wedge.sweep / ARC_STEP_DEG).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let angle = (wedge.start_angle + wedge.sweep * i as f32 / steps as f32).to_radians();
            let px = cx + radius * angle.cos();
            let py = cy_pdf + radius * angle.sin();
            self.push("l", vec![px.into(), py.into()]);
        }
        self.push("h", vec![]);
        self.push("f", vec![]);
    }

    fn set_font(&mut self, font_name: &str, font_size: f32) {
        if self.state.font_name != font_name || self.state.font_size != font_size {
            self.push(
                "Tf",
                vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()],
            );
            self.state.font_name = font_name.to_string();
            self.state.font_size = font_size;
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        if self.state.fill_color != *color {
            self.push(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            );
            self.state.fill_color = color.clone();
        }
    }

    fn set_stroke(&mut self, color: &Color, width: f32) {
        self.push(
            "RG",
            vec![
                (color.r as f32 / 255.0).into(),
                (color.g as f32 / 255.0).into(),
                (color.b as f32 / 255.0).into(),
            ],
        );
        self.push("w", vec![width.into()]);
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| if c as u32 <= 255 { c as u8 } else { b'?' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheaf_artifact::draw::{Stroke, TextStyle};

    fn operators(ctx: PageContext) -> Vec<String> {
        ctx.finish()
            .operations
            .iter()
            .map(|op| op.operator.clone())
            .collect()
    }

    #[test]
    fn rect_emits_fill_then_stroke() {
        let mut list = DrawList::new();
        list.rect(
            0.0,
            0.0,
            10.0,
            10.0,
            RectElement {
                fill: Some(Color::gray(200)),
                stroke: Some(Stroke { color: Color::gray(0), width: 1.0 }),
            },
        );
        let mut ctx = PageContext::new(792.0);
        ctx.draw_list(&list, 0.0, 0.0, 1.0);
        let ops = operators(ctx);
        assert_eq!(ops, vec!["rg", "re", "f", "RG", "w", "re", "S"]);
    }

    #[test]
    fn wedge_closes_and_fills_its_path() {
        let mut list = DrawList::new();
        list.wedge(
            50.0,
            50.0,
            WedgeElement { radius: 40.0, start_angle: 90.0, sweep: 120.0, fill: Color::gray(10) },
        );
        let mut ctx = PageContext::new(792.0);
        ctx.draw_list(&list, 0.0, 0.0, 1.0);
        let ops = operators(ctx);
        assert_eq!(ops.first().map(String::as_str), Some("rg"));
        assert_eq!(ops.last().map(String::as_str), Some("f"));
        assert!(ops.iter().filter(|op| *op == "l").count() >= 30);
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut list = DrawList::new();
        list.text(0.0, 0.0, 50.0, "   ", TextStyle::default());
        let mut ctx = PageContext::new(792.0);
        ctx.draw_list(&list, 0.0, 0.0, 1.0);
        assert!(operators(ctx).is_empty());
    }

    #[test]
    fn non_latin_text_degrades_without_panicking() {
        assert_eq!(to_win_ansi("héllo"), vec![b'h', 0xE9, b'l', b'l', b'o']);
        assert_eq!(to_win_ansi("日本"), vec![b'?', b'?']);
    }

    #[test]
    fn bold_text_switches_font_resource() {
        let mut list = DrawList::new();
        list.text(0.0, 0.0, 50.0, "head", TextStyle { bold: true, ..Default::default() });
        let mut ctx = PageContext::new(792.0);
        ctx.draw_list(&list, 0.0, 0.0, 1.0);
        let content = ctx.finish();
        let tf = content
            .operations
            .iter()
            .find(|op| op.operator == "Tf")
            .expect("font operator");
        assert_eq!(tf.operands[0], Object::Name(b"F2".to_vec()));
    }
}
