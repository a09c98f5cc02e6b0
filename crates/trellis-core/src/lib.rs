//! # Trellis core
//!
//! Value types and seams shared by the layout crates:
//!
//! - geometry (`Vec2`, `Size`, `Rect`, `Padding`) and axis settings
//!   (`Alignment`, `Orientation`, `FlowConfig`);
//! - shared drawing handles: `PaintHandle` and `GeometryHandle`, both cheap
//!   `Rc` clones compared by identity;
//! - the `Element` capability every layout participant implements, and the
//!   `LayoutContext` handed down a measure/attach pass;
//! - the `RenderSurface` trait plus `RecordingSurface`, an in-memory surface
//!   that resolves what would be drawn.
//!
//! ```rust
//! use trellis_core::*;
//!
//! let mut surface = RecordingSurface::new();
//! let paint = PaintHandle::solid(Color::from_hex("#3366CC"));
//! let geometry = GeometryHandle::with_rect(Rect::new(4.0, 4.0, 10.0, 10.0));
//!
//! surface.register_paint_task(&paint);
//! surface.attach_geometry(&paint, &geometry);
//! assert!(surface.hit_test(Vec2::new(8.0, 8.0)).is_some());
//! ```

pub mod alignment;
pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod paint;
pub mod prelude;
pub mod render_api;
pub mod shape;

pub use alignment::*;
pub use config::*;
pub use element::*;
pub use error::LayoutError;
pub use geometry::*;
pub use paint::*;
pub use render_api::*;
pub use shape::*;
