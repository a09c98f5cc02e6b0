use unicode_segmentation::UnicodeSegmentation;

use trellis_core::{
    Color, Element, GeometryHandle, LayoutContext, Padding, PaintHandle, Position, Size,
};

use crate::drawing::Drawing;

/// Average glyph advance as a fraction of the font size.
pub const CHAR_ADVANCE: f64 = 0.6;
/// Line height as a fraction of the font size.
pub const LINE_HEIGHT: f64 = 1.2;

pub const DEFAULT_FONT_SIZE: f64 = 13.0;

/// Single-line text.
///
/// Metrics are estimated from the grapheme count; real shaping belongs to the
/// rendering backend.
#[derive(Debug)]
pub struct Label {
    text: String,
    font_size: f64,
    padding: Padding,
    position: Position,
    measured: Size,
    drawing: Drawing,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            padding: Padding::ZERO,
            position: Position::ZERO,
            measured: Size::ZERO,
            drawing: Drawing::new(PaintHandle::solid(Color::BLACK)),
        }
    }

    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = px;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.drawing.set_paint(PaintHandle::solid(color));
        self
    }

    /// Draws with a paint shared with other elements.
    pub fn paint(mut self, paint: PaintHandle) -> Self {
        self.drawing.set_paint(paint);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn geometry(&self) -> &GeometryHandle {
        &self.drawing.geometry
    }

    pub fn is_attached(&self) -> bool {
        self.drawing.is_attached()
    }

    fn estimate(&self) -> Size {
        let graphemes = self.text.graphemes(true).count() as f64;
        Size::new(
            graphemes * self.font_size * CHAR_ADVANCE + self.padding.horizontal(),
            self.font_size * LINE_HEIGHT + self.padding.vertical(),
        )
    }
}

impl Element for Label {
    fn measure(&mut self, _ctx: &mut LayoutContext<'_>) -> Size {
        self.measured = self.estimate().sanitized();
        self.measured
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn on_attach(&mut self, ctx: &mut LayoutContext<'_>) {
        self.drawing.attach(ctx, self.position, self.measured);
    }

    fn set_parent_geometry(&mut self, parent: Option<GeometryHandle>) {
        self.drawing.set_parent(parent);
    }

    fn remove_from_surface(&mut self, ctx: &mut LayoutContext<'_>) {
        self.drawing.detach(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::RecordingSurface;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_label_estimate_counts_graphemes() {
        let mut surface = RecordingSurface::new();
        let mut ctx = LayoutContext::new(&mut surface, Size::new(100.0, 100.0));

        // "é" written as e + combining accent is one grapheme
        let mut label = Label::new("cafe\u{301}").font_size(10.0);
        let size = label.measure(&mut ctx);
        assert!(approx(size.width, 24.0));
        assert!(approx(size.height, 12.0));
    }

    #[test]
    fn test_label_padding_adds_to_estimate() {
        let mut surface = RecordingSurface::new();
        let mut ctx = LayoutContext::new(&mut surface, Size::ZERO);

        let mut label = Label::new("").padding(Padding::new(1.0, 2.0, 3.0, 4.0));
        let size = label.measure(&mut ctx);
        assert!(approx(size.width, 4.0));
        assert!(approx(size.height, DEFAULT_FONT_SIZE * LINE_HEIGHT + 6.0));
    }

    #[test]
    fn test_label_attach_and_detach() {
        let mut surface = RecordingSurface::new();
        let mut label = Label::new("Sales").color(Color::from_hex("#112233"));
        let geometry = label.geometry().clone();

        {
            let mut ctx = LayoutContext::new(&mut surface, Size::ZERO);
            label.measure(&mut ctx);
            label.set_position(Position::new(3.0, 4.0));
            label.on_attach(&mut ctx);
        }
        assert!(label.is_attached());
        assert!(surface.is_attached(&geometry));
        assert_eq!(geometry.local_rect().origin(), Position::new(3.0, 4.0));

        {
            let mut ctx = LayoutContext::new(&mut surface, Size::ZERO);
            label.remove_from_surface(&mut ctx);
        }
        assert!(!label.is_attached());
        assert!(!surface.is_attached(&geometry));
    }
}
