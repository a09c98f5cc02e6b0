//! Flow panels and the leaf elements that go inside them.
//!
//! A [`FlowPanel`] lays its children out in rows (or columns), wrapping to a
//! new line once the next child would cross the panel's maximum extent, and
//! aligns children across each line. Panels are elements themselves, so
//! legends nest freely:
//!
//! ```rust
//! use trellis_core::prelude::*;
//! use trellis_layout::{FlowPanel, Icon, Label};
//!
//! let mut entry = FlowPanel::new().vertical_alignment(Alignment::Middle);
//! entry.add_child(Icon::new(Size::new(10.0, 10.0), PaintHandle::solid(Color::from_hex("#3366CC"))));
//! entry.add_child(Label::new("Revenue").font_size(12.0));
//!
//! let mut legend = FlowPanel::new().max_width(200.0).padding(Padding::all(4.0));
//! legend.add_child(entry);
//!
//! let mut surface = RecordingSurface::new();
//! let mut ctx = LayoutContext::new(&mut surface, Size::new(640.0, 480.0));
//! let size = legend.measure(&mut ctx);
//! legend.on_attach(&mut ctx);
//! assert!(size.width > 8.0 && size.height > 8.0);
//! ```

mod drawing;
pub mod flow;
pub mod icon;
pub mod label;

pub use flow::FlowPanel;
pub use icon::Icon;
pub use label::Label;
