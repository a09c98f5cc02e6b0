use trellis_core::{Element, GeometryHandle, LayoutContext, PaintHandle, Position, Size};

use crate::drawing::Drawing;

/// Fixed-size marker, e.g. the colored swatch in front of a legend entry.
#[derive(Debug)]
pub struct Icon {
    size: Size,
    position: Position,
    drawing: Drawing,
}

impl Icon {
    pub fn new(size: Size, paint: PaintHandle) -> Self {
        Self {
            size,
            position: Position::ZERO,
            drawing: Drawing::new(paint),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn paint(&self) -> &PaintHandle {
        &self.drawing.paint
    }

    pub fn geometry(&self) -> &GeometryHandle {
        &self.drawing.geometry
    }

    pub fn is_attached(&self) -> bool {
        self.drawing.is_attached()
    }
}

impl Element for Icon {
    fn measure(&mut self, _ctx: &mut LayoutContext<'_>) -> Size {
        self.size
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn on_attach(&mut self, ctx: &mut LayoutContext<'_>) {
        self.drawing
            .attach(ctx, self.position, self.size.sanitized());
    }

    fn set_parent_geometry(&mut self, parent: Option<GeometryHandle>) {
        self.drawing.set_parent(parent);
    }

    fn remove_from_surface(&mut self, ctx: &mut LayoutContext<'_>) {
        self.drawing.detach(ctx);
    }
}
