use crate::{GeometryHandle, Position, RenderSurface, Size};

slotmap::new_key_type! {
    /// Identity of a child inside its panel.
    pub struct ChildId;
}

/// Everything a measure or attach pass needs from the outside world.
///
/// Panels never look inside; they hand the same context down to their
/// children.
pub struct LayoutContext<'a> {
    viewport: Size,
    surface: &'a mut dyn RenderSurface,
}

impl<'a> LayoutContext<'a> {
    pub fn new(surface: &'a mut dyn RenderSurface, viewport: Size) -> Self {
        Self { viewport, surface }
    }

    /// Size of the control hosting the chart.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn surface(&mut self) -> &mut (dyn RenderSurface + 'a) {
        &mut *self.surface
    }
}

/// A participant in layout: legend entries, labels, icons, nested panels.
///
/// Ownership of the position is split: the parent panel is the only caller of
/// [`Element::set_position`], while the element alone decides its measured
/// size.
pub trait Element {
    /// Measures the element. Must return the same size for the same inputs.
    fn measure(&mut self, ctx: &mut LayoutContext<'_>) -> Size;

    fn position(&self) -> Position;

    fn set_position(&mut self, position: Position);

    /// Attaches (or refreshes) this element's drawing on the surface.
    fn on_attach(&mut self, ctx: &mut LayoutContext<'_>);

    /// Geometry this element's own geometry is positioned relative to.
    fn set_parent_geometry(&mut self, parent: Option<GeometryHandle>);

    /// Detaches everything this element drew.
    fn remove_from_surface(&mut self, ctx: &mut LayoutContext<'_>);
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn measure(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        (**self).measure(ctx)
    }

    fn position(&self) -> Position {
        (**self).position()
    }

    fn set_position(&mut self, position: Position) {
        (**self).set_position(position)
    }

    fn on_attach(&mut self, ctx: &mut LayoutContext<'_>) {
        (**self).on_attach(ctx)
    }

    fn set_parent_geometry(&mut self, parent: Option<GeometryHandle>) {
        (**self).set_parent_geometry(parent)
    }

    fn remove_from_surface(&mut self, ctx: &mut LayoutContext<'_>) {
        (**self).remove_from_surface(ctx)
    }
}
