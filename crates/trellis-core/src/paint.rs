use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`. Malformed input yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        let channel = |i: usize, fallback: u8| {
            s.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(fallback)
        };
        match s.len() {
            6 => Color(channel(0, 0), channel(2, 0), channel(4, 0), 255),
            8 => Color(channel(0, 0), channel(2, 0), channel(4, 0), channel(6, 255)),
            _ => Color::BLACK,
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    pub fn is_transparent(&self) -> bool {
        self.3 == 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.0, self.1, self.2, self.3)
    }
}

/// Drawing state shared by every geometry attached under it.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub fill: bool,
    /// Higher values draw on top.
    pub z_index: f64,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            fill: true,
            z_index: 0.0,
        }
    }

    pub fn stroke(color: Color) -> Self {
        Self {
            color,
            fill: false,
            z_index: 0.0,
        }
    }
}

/// Shared, externally owned paint.
///
/// Cloning the handle shares the paint; equality of handles is identity
/// (`ptr_eq`), never structural.
#[derive(Clone)]
pub struct PaintHandle(Rc<RefCell<Paint>>);

impl PaintHandle {
    pub fn new(paint: Paint) -> Self {
        Self(Rc::new(RefCell::new(paint)))
    }

    pub fn solid(color: Color) -> Self {
        Self::new(Paint::solid(color))
    }

    pub fn transparent() -> Self {
        Self::solid(Color::TRANSPARENT)
    }

    pub fn get(&self) -> Ref<'_, Paint> {
        self.0.borrow()
    }

    pub fn color(&self) -> Color {
        self.0.borrow().color
    }

    pub fn is_fill(&self) -> bool {
        self.0.borrow().fill
    }

    pub fn z_index(&self) -> f64 {
        self.0.borrow().z_index
    }

    pub fn set_fill(&self, fill: bool) {
        self.0.borrow_mut().fill = fill;
    }

    pub fn set_z_index(&self, z: f64) {
        self.0.borrow_mut().z_index = z;
    }

    pub fn ptr_eq(&self, other: &PaintHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for PaintHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0.borrow();
        f.debug_struct("PaintHandle")
            .field("color", &p.color)
            .field("fill", &p.fill)
            .field("z_index", &p.z_index)
            .finish()
    }
}
