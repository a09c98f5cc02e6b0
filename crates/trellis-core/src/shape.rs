use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::{Rect, Size, Vec2};

/// A rectangle in its parent's coordinate space.
#[derive(Clone, Debug, Default)]
pub struct RectGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub parent: Option<GeometryHandle>,
}

#[derive(Clone, Default)]
pub struct GeometryHandle(Rc<RefCell<RectGeometry>>);

impl GeometryHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(rect: Rect) -> Self {
        let g = Self::new();
        g.set_rect(rect);
        g
    }

    pub fn local_rect(&self) -> Rect {
        let g = self.0.borrow();
        Rect::new(g.x, g.y, g.width, g.height)
    }

    pub fn set_rect(&self, rect: Rect) {
        let mut g = self.0.borrow_mut();
        g.x = rect.x;
        g.y = rect.y;
        g.width = rect.w;
        g.height = rect.h;
    }

    pub fn set_origin_size(&self, origin: Vec2, size: Size) {
        self.set_rect(Rect::from_origin_size(origin, size));
    }

    pub fn parent(&self) -> Option<GeometryHandle> {
        self.0.borrow().parent.clone()
    }

    pub fn set_parent(&self, parent: Option<GeometryHandle>) {
        self.0.borrow_mut().parent = parent;
    }

    /// Translation accumulated from every ancestor.
    ///
    /// A chain that loops back on itself stops at the first repeated handle.
    pub fn parent_offset(&self) -> Vec2 {
        let mut offset = Vec2::ZERO;
        let mut seen = HashSet::from([Rc::as_ptr(&self.0)]);
        let mut next = self.parent();
        while let Some(p) = next {
            if !seen.insert(Rc::as_ptr(&p.0)) {
                log::warn!("geometry parent chain forms a cycle; stopping at {p:?}");
                break;
            }
            let r = p.local_rect();
            offset.x += r.x;
            offset.y += r.y;
            next = p.parent();
        }
        offset
    }

    /// Bounds in surface coordinates, composed through the parent chain.
    pub fn absolute_bounds(&self) -> Rect {
        self.local_rect().translate(self.parent_offset())
    }

    pub fn ptr_eq(&self, other: &GeometryHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for GeometryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryHandle")
            .field("local", &self.local_rect())
            .field("has_parent", &self.0.borrow().parent.is_some())
            .finish()
    }
}
