use trellis_core::{GeometryHandle, LayoutContext, PaintHandle, Position, Size};

/// One geometry drawn with one paint; the drawable half of a leaf element.
#[derive(Debug)]
pub(crate) struct Drawing {
    pub(crate) paint: PaintHandle,
    pub(crate) geometry: GeometryHandle,
    /// Paint the geometry is currently attached under, if any.
    attached: Option<PaintHandle>,
}

impl Drawing {
    pub(crate) fn new(paint: PaintHandle) -> Self {
        Self {
            paint,
            geometry: GeometryHandle::new(),
            attached: None,
        }
    }

    pub(crate) fn set_paint(&mut self, paint: PaintHandle) {
        self.paint = paint;
    }

    pub(crate) fn set_parent(&self, parent: Option<GeometryHandle>) {
        self.geometry.set_parent(parent);
    }

    pub(crate) fn attach(&mut self, ctx: &mut LayoutContext<'_>, position: Position, size: Size) {
        self.geometry.set_origin_size(position, size);
        if let Some(old) = self.attached.take() {
            if !old.ptr_eq(&self.paint) {
                ctx.surface().detach_geometry(&old, &self.geometry);
            }
        }
        ctx.surface().register_paint_task(&self.paint);
        ctx.surface().attach_geometry(&self.paint, &self.geometry);
        self.attached = Some(self.paint.clone());
    }

    pub(crate) fn detach(&mut self, ctx: &mut LayoutContext<'_>) {
        if let Some(paint) = self.attached.take() {
            ctx.surface().detach_geometry(&paint, &self.geometry);
        }
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attached.is_some()
    }
}
