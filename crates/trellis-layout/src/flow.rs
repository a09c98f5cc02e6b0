//! Flow panel: a wrapping row/column container.
//!
//! Children are placed one after another along the main axis (x for
//! horizontal panels, y for vertical ones). When the next child would cross
//! the panel's maximum extent, the open line is closed and a new one starts
//! below (or to the right of) it. Every closed line aligns its children
//! across the main axis using the tallest (widest) child as the line extent.
//!
//! The first child of a line is always admitted, so a child larger than the
//! maximum extent simply occupies a line of its own.

use slotmap::SlotMap;
use smallvec::SmallVec;

use trellis_core::error::Result;
use trellis_core::{
    Alignment, ChildId, Element, FlowConfig, GeometryHandle, LayoutContext, LayoutError,
    Orientation, Padding, PaintHandle, Position, Size,
};

/// Z-index of panel backgrounds; they draw beneath their children.
pub const BACKGROUND_Z_INDEX: f64 = -1.0;

/// Children of the line being built, with the size they measured to.
type Line = SmallVec<[(ChildId, Size); 8]>;

/// Container that lays its children out in wrapping lines.
///
/// Children keep the order they were added in. The panel's own background is
/// drawn beneath them at [`BACKGROUND_Z_INDEX`]; it is transparent unless one
/// is set.
pub struct FlowPanel {
    children: SlotMap<ChildId, Box<dyn Element>>,
    /// Layout order. Insertion order, kept stable across passes.
    order: Vec<ChildId>,
    config: FlowConfig,
    background: Option<PaintHandle>,
    /// Paint `bounds` is attached under on the surface, if any.
    attached_paint: Option<PaintHandle>,
    /// Position anchor for the children's geometries; not used by layout math.
    bounds: GeometryHandle,
    parent_geometry: Option<GeometryHandle>,
    position: Position,
    measured: Size,
}

impl FlowPanel {
    pub fn new() -> Self {
        Self {
            children: SlotMap::with_key(),
            order: Vec::new(),
            config: FlowConfig::default(),
            background: None,
            attached_paint: None,
            bounds: GeometryHandle::new(),
            parent_geometry: None,
            position: Position::ZERO,
            measured: Size::ZERO,
        }
    }

    /// Creates a panel from externally sourced configuration.
    pub fn with_config(config: FlowConfig) -> Result<Self> {
        let mut panel = Self::new();
        panel.set_config(config)?;
        Ok(panel)
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    pub fn max_width(mut self, width: f64) -> Self {
        self.config.max_width = Some(width);
        self
    }

    pub fn max_height(mut self, height: f64) -> Self {
        self.config.max_height = Some(height);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.config.padding = padding;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: Alignment) -> Self {
        self.config.horizontal_alignment = alignment;
        self
    }

    pub fn vertical_alignment(mut self, alignment: Alignment) -> Self {
        self.config.vertical_alignment = alignment;
        self
    }

    pub fn background(mut self, paint: PaintHandle) -> Self {
        self.background = Some(paint);
        self
    }

    /// Builder form of [`FlowPanel::add_child`].
    pub fn push(mut self, child: impl Element + 'static) -> Self {
        self.add_child(child);
        self
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FlowConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Changes the main axis; takes effect on the next measure.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
    }

    pub fn set_background(&mut self, paint: Option<PaintHandle>) {
        self.background = paint;
    }

    /// The background paint; `None` until one is set or the panel is attached.
    pub fn background_paint(&self) -> Option<&PaintHandle> {
        self.background.as_ref()
    }

    /// Geometry tracking the panel's resolved position and size.
    pub fn bounds(&self) -> &GeometryHandle {
        &self.bounds
    }

    /// Size returned by the last measure.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    pub fn add_child(&mut self, child: impl Element + 'static) -> ChildId {
        let id = self.children.insert(Box::new(child));
        self.order.push(id);
        id
    }

    /// Removes a child and detaches everything it drew from the surface.
    pub fn remove_child(
        &mut self,
        ctx: &mut LayoutContext<'_>,
        id: ChildId,
    ) -> Result<Box<dyn Element>> {
        let mut child = self
            .children
            .remove(id)
            .ok_or(LayoutError::UnknownChild(id))?;
        self.order.retain(|c| *c != id);
        child.remove_from_surface(ctx);
        child.set_parent_geometry(None);
        log::debug!("flow panel: removed child {id:?}, {} left", self.order.len());
        Ok(child)
    }

    /// Removes and detaches every child.
    pub fn clear(&mut self, ctx: &mut LayoutContext<'_>) {
        for id in std::mem::take(&mut self.order) {
            if let Some(mut child) = self.children.remove(id) {
                child.remove_from_surface(ctx);
                child.set_parent_geometry(None);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: ChildId) -> bool {
        self.children.contains_key(id)
    }

    pub fn child(&self, id: ChildId) -> Option<&dyn Element> {
        self.children.get(id).map(|c| &**c)
    }

    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut (dyn Element + 'static)> {
        self.children.get_mut(id).map(|c| &mut **c)
    }

    /// Children in layout order.
    pub fn children(&self) -> impl Iterator<Item = (ChildId, &dyn Element)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.children.get(*id).map(|c| (*id, &**c)))
    }

    fn is_horizontal(&self) -> bool {
        self.config.orientation == Orientation::Horizontal
    }

    /// Splits a size into (main, cross) extents for this panel's orientation.
    fn split(&self, size: Size) -> (f64, f64) {
        if self.is_horizontal() {
            (size.width, size.height)
        } else {
            (size.height, size.width)
        }
    }

    /// Lays out the children and returns the panel size.
    fn arrange(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        let padding = self.config.padding.sanitized();
        if padding != self.config.padding {
            log::warn!(
                "flow panel: padding {:?} clamped to {padding:?}",
                self.config.padding
            );
        }
        let limit = self.config.main_axis_limit();
        let horizontal = self.is_horizontal();
        let (main_start, cross_start) = if horizontal {
            (padding.left, padding.top)
        } else {
            (padding.top, padding.left)
        };

        let mut main = main_start;
        let mut cross = cross_start;
        let mut line_extent = 0.0f64;
        let mut max_main = 0.0f64;
        let mut line = Line::new();

        for idx in 0..self.order.len() {
            let id = self.order[idx];
            let Some(child) = self.children.get_mut(id) else {
                continue;
            };
            let raw = child.measure(ctx);
            let size = raw.sanitized();
            if !raw.is_sane() {
                log::warn!("flow panel: child {id:?} measured {raw:?}; clamped to {size:?}");
            }
            let (child_main, child_cross) = self.split(size);

            if main > main_start && main + child_main > limit {
                self.close_line(ctx, &mut line, cross, line_extent);
                cross += line_extent;
                main = main_start;
                line_extent = 0.0;
            }

            line_extent = line_extent.max(child_cross);

            if let Some(child) = self.children.get_mut(id) {
                let mut p = child.position();
                if horizontal {
                    p.x = main;
                } else {
                    p.y = main;
                }
                child.set_position(p);
            }
            main += child_main;
            max_main = max_main.max(main - main_start);
            line.push((id, size));
        }

        let mut total_cross = cross - cross_start;
        if !line.is_empty() {
            self.close_line(ctx, &mut line, cross, line_extent);
            total_cross += line_extent;
        }

        let (content_w, content_h) = if horizontal {
            (max_main, total_cross)
        } else {
            (total_cross, max_main)
        };
        Size::new(
            padding.horizontal() + content_w,
            padding.vertical() + content_h,
        )
    }

    /// Fixes the cross coordinate of every child in `line`, then attaches them.
    fn close_line(
        &mut self,
        ctx: &mut LayoutContext<'_>,
        line: &mut Line,
        edge: f64,
        extent: f64,
    ) {
        let horizontal = self.is_horizontal();
        let alignment = self.config.cross_axis_alignment();
        log::trace!(
            "flow panel: closing line of {} at {edge} (extent {extent}, {alignment})",
            line.len()
        );

        for (id, size) in line.drain(..) {
            let Some(child) = self.children.get_mut(id) else {
                continue;
            };
            let child_cross = if horizontal { size.height } else { size.width };
            let offset = edge + alignment.offset(extent, child_cross);

            let mut p = child.position();
            if horizontal {
                p.y = offset;
            } else {
                p.x = offset;
            }
            child.set_position(p);
            child.set_parent_geometry(Some(self.bounds.clone()));
            child.on_attach(ctx);
        }
    }
}

impl Default for FlowPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlowPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowPanel")
            .field("children", &self.order.len())
            .field("config", &self.config)
            .field("position", &self.position)
            .field("measured", &self.measured)
            .field("background", &self.background)
            .finish()
    }
}

impl Element for FlowPanel {
    fn measure(&mut self, ctx: &mut LayoutContext<'_>) -> Size {
        let size = self.arrange(ctx);
        log::debug!(
            "flow panel: measured {} children ({}) -> {}x{}",
            self.order.len(),
            self.config.orientation,
            size.width,
            size.height
        );
        self.measured = size;
        size
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn on_attach(&mut self, ctx: &mut LayoutContext<'_>) {
        let paint = self
            .background
            .get_or_insert_with(PaintHandle::transparent)
            .clone();
        paint.set_fill(true);
        paint.set_z_index(BACKGROUND_Z_INDEX);

        if let Some(old) = self.attached_paint.take() {
            if !old.ptr_eq(&paint) {
                ctx.surface().detach_geometry(&old, &self.bounds);
            }
        }

        ctx.surface().register_paint_task(&paint);
        self.bounds.set_origin_size(self.position, self.measured);
        self.bounds.set_parent(self.parent_geometry.clone());
        ctx.surface().attach_geometry(&paint, &self.bounds);
        self.attached_paint = Some(paint);

        for idx in 0..self.order.len() {
            if let Some(child) = self.children.get_mut(self.order[idx]) {
                child.set_parent_geometry(Some(self.bounds.clone()));
                child.on_attach(ctx);
            }
        }
    }

    fn set_parent_geometry(&mut self, parent: Option<GeometryHandle>) {
        self.bounds.set_parent(parent.clone());
        self.parent_geometry = parent;
    }

    fn remove_from_surface(&mut self, ctx: &mut LayoutContext<'_>) {
        if let Some(paint) = self.attached_paint.take() {
            ctx.surface().detach_geometry(&paint, &self.bounds);
        }
        for idx in 0..self.order.len() {
            if let Some(child) = self.children.get_mut(self.order[idx]) {
                child.remove_from_surface(ctx);
            }
        }
    }
}
