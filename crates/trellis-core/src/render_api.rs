use crate::{Color, GeometryHandle, PaintHandle, Rect, Vec2};

/// The narrow slice of a rendering backend the layout engine talks to.
///
/// Every call is idempotent by identity: registering the same paint twice or
/// attaching the same geometry under the same paint twice has no further
/// effect.
pub trait RenderSurface {
    fn register_paint_task(&mut self, paint: &PaintHandle);
    fn attach_geometry(&mut self, paint: &PaintHandle, geometry: &GeometryHandle);
    fn detach_geometry(&mut self, paint: &PaintHandle, geometry: &GeometryHandle);
}

#[derive(Clone, Debug)]
struct Attachment {
    paint: PaintHandle,
    geometry: GeometryHandle,
}

/// Resolved draw call, in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    pub bounds: Rect,
    pub color: Color,
    pub fill: bool,
    pub z_index: f64,
}

/// In-memory surface that records what would be drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    paints: Vec<PaintHandle>,
    attachments: Vec<Attachment>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paint_count(&self) -> usize {
        self.paints.len()
    }

    pub fn is_registered(&self, paint: &PaintHandle) -> bool {
        self.paints.iter().any(|p| p.ptr_eq(paint))
    }

    pub fn geometry_count(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_attached(&self, geometry: &GeometryHandle) -> bool {
        self.attachments.iter().any(|a| a.geometry.ptr_eq(geometry))
    }

    /// Draw list ordered by z-index; ties keep attachment order.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out: Vec<Drawable> = self
            .attachments
            .iter()
            .map(|a| {
                let paint = a.paint.get();
                Drawable {
                    bounds: a.geometry.absolute_bounds(),
                    color: paint.color,
                    fill: paint.fill,
                    z_index: paint.z_index,
                }
            })
            .collect();
        out.sort_by(|a, b| a.z_index.total_cmp(&b.z_index));
        out
    }

    /// Topmost drawable containing `p`.
    pub fn hit_test(&self, p: Vec2) -> Option<Drawable> {
        self.drawables()
            .into_iter()
            .rev()
            .find(|d| d.bounds.contains(p))
    }

    pub fn clear(&mut self) {
        self.paints.clear();
        self.attachments.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn register_paint_task(&mut self, paint: &PaintHandle) {
        if !self.is_registered(paint) {
            self.paints.push(paint.clone());
        }
    }

    fn attach_geometry(&mut self, paint: &PaintHandle, geometry: &GeometryHandle) {
        let exists = self
            .attachments
            .iter()
            .any(|a| a.paint.ptr_eq(paint) && a.geometry.ptr_eq(geometry));
        if !exists {
            self.attachments.push(Attachment {
                paint: paint.clone(),
                geometry: geometry.clone(),
            });
        }
    }

    fn detach_geometry(&mut self, paint: &PaintHandle, geometry: &GeometryHandle) {
        let before = self.attachments.len();
        self.attachments
            .retain(|a| !(a.paint.ptr_eq(paint) && a.geometry.ptr_eq(geometry)));
        if self.attachments.len() == before {
            log::trace!("detach_geometry: geometry was not attached");
        }
    }
}
