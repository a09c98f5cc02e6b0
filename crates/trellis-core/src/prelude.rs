pub use crate::alignment::{Alignment, Orientation};
pub use crate::config::FlowConfig;
pub use crate::element::{ChildId, Element, LayoutContext};
pub use crate::error::LayoutError;
pub use crate::geometry::{Padding, Position, Rect, Size, Vec2};
pub use crate::paint::{Color, Paint, PaintHandle};
pub use crate::render_api::{Drawable, RecordingSurface, RenderSurface};
pub use crate::shape::GeometryHandle;
