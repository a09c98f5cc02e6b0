use trellis_core::{
    Color, GeometryHandle, Paint, PaintHandle, RecordingSurface, Rect, RenderSurface, Vec2,
};

/// Draws above everything a chart puts on the surface.
const OUTLINE_Z_INDEX: f64 = 1_000.0;

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub layout_ms: f64,
    pub panels: usize,
}

/// Layout inspector: a textual report of what a surface draws, plus an
/// outline around the drawable under the pointer.
pub struct Inspector {
    pub enabled: bool,
    pub hovered: Option<Rect>,
    pub metrics: Option<Metrics>,
    pass_count: u64,
    outline_paint: PaintHandle,
    outline: GeometryHandle,
    outline_attached: bool,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        let outline_paint = PaintHandle::new(Paint::stroke(Color::from_hex("#44AAFF")));
        outline_paint.set_z_index(OUTLINE_Z_INDEX);
        Self {
            enabled: false,
            hovered: None,
            metrics: None,
            pass_count: 0,
            outline_paint,
            outline: GeometryHandle::new(),
            outline_attached: false,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Picks the drawable under `p` (if any) as the hovered one.
    pub fn hover(&mut self, surface: &RecordingSurface, p: Option<Vec2>) -> Option<Rect> {
        self.hovered = p.and_then(|p| {
            surface
                .drawables()
                .into_iter()
                .rev()
                .filter(|d| d.z_index < OUTLINE_Z_INDEX)
                .find(|d| d.bounds.contains(p))
                .map(|d| d.bounds)
        });
        self.hovered
    }

    /// One line per drawable, bottom to top, after a summary line.
    pub fn report(&mut self, surface: &RecordingSurface) -> String {
        self.pass_count += 1;
        let drawables = surface.drawables();
        let mut lines = vec![format!(
            "pass {} | paints {} | drawables {}",
            self.pass_count,
            surface.paint_count(),
            drawables.len()
        )];
        if let Some(m) = &self.metrics {
            lines.push(format!("layout {:.2} ms | panels {}", m.layout_ms, m.panels));
        }
        for d in &drawables {
            lines.push(format!(
                "  {}{} z={} [{}, {}, {}x{}]",
                if d.fill { "fill " } else { "stroke " },
                d.color,
                d.z_index,
                d.bounds.x,
                d.bounds.y,
                d.bounds.w,
                d.bounds.h
            ));
        }
        lines.join("\n")
    }

    pub fn log_report(&mut self, surface: &RecordingSurface) {
        if self.enabled {
            let report = self.report(surface);
            log::debug!("layout inspector\n{report}");
        }
    }

    /// Keeps the hover outline on the surface in sync with `hovered`.
    pub fn frame(&mut self, surface: &mut dyn RenderSurface) {
        match (self.enabled, self.hovered) {
            (true, Some(r)) => {
                self.outline.set_rect(r);
                surface.register_paint_task(&self.outline_paint);
                surface.attach_geometry(&self.outline_paint, &self.outline);
                self.outline_attached = true;
            }
            _ if self.outline_attached => {
                surface.detach_geometry(&self.outline_paint, &self.outline);
                self.outline_attached = false;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{Element, LayoutContext, Padding, Size};
    use trellis_layout::{FlowPanel, Icon};

    fn laid_out_surface() -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        let mut panel = FlowPanel::new()
            .padding(Padding::all(1.0))
            .background(PaintHandle::solid(Color::WHITE))
            .push(Icon::new(Size::new(4.0, 4.0), PaintHandle::solid(Color::BLACK)));
        {
            let mut ctx = LayoutContext::new(&mut surface, Size::ZERO);
            panel.measure(&mut ctx);
            panel.on_attach(&mut ctx);
        }
        surface
    }

    #[test]
    fn test_report_lists_drawables_bottom_up() {
        let surface = laid_out_surface();
        let mut inspector = Inspector::new();
        inspector.metrics = Some(Metrics {
            layout_ms: 0.5,
            panels: 1,
        });

        let report = inspector.report(&surface);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "pass 1 | paints 2 | drawables 2");
        assert_eq!(lines[1], "layout 0.50 ms | panels 1");
        assert_eq!(lines[2], "  fill #FFFFFFFF z=-1 [0, 0, 6x6]");
        assert_eq!(lines[3], "  fill #000000FF z=0 [1, 1, 4x4]");

        assert!(inspector.report(&surface).starts_with("pass 2"));
    }

    #[test]
    fn test_hover_outline_follows_pointer() {
        let mut surface = laid_out_surface();
        let mut inspector = Inspector::new();
        inspector.toggle();

        let hovered = inspector.hover(&surface, Some(Vec2::new(2.0, 2.0)));
        assert_eq!(hovered, Some(Rect::new(1.0, 1.0, 4.0, 4.0)));
        inspector.frame(&mut surface);
        assert_eq!(surface.geometry_count(), 3);

        let top = surface.drawables().pop().unwrap();
        assert!(!top.fill);
        assert_eq!(top.bounds, Rect::new(1.0, 1.0, 4.0, 4.0));

        // the outline itself is never picked
        assert_eq!(
            inspector.hover(&surface, Some(Vec2::new(0.5, 0.5))),
            Some(Rect::new(0.0, 0.0, 6.0, 6.0))
        );

        inspector.hover(&surface, None);
        inspector.frame(&mut surface);
        assert_eq!(surface.geometry_count(), 2);
    }
}
