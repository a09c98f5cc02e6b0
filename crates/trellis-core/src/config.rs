use crate::error::{LayoutError, Result};
use crate::{Alignment, Orientation, Padding};

/// Layout parameters of a flow panel.
///
/// `max_width` only constrains horizontal panels and `max_height` only
/// vertical ones; `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowConfig {
    pub orientation: Orientation,
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    pub padding: Padding,
    pub horizontal_alignment: Alignment,
    pub vertical_alignment: Alignment,
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, o: Orientation) -> Self {
        self.orientation = o;
        self
    }

    pub fn max_width(mut self, w: f64) -> Self {
        self.max_width = Some(w);
        self
    }

    pub fn max_height(mut self, h: f64) -> Self {
        self.max_height = Some(h);
        self
    }

    pub fn padding(mut self, p: Padding) -> Self {
        self.padding = p;
        self
    }

    pub fn horizontal_alignment(mut self, a: Alignment) -> Self {
        self.horizontal_alignment = a;
        self
    }

    pub fn vertical_alignment(mut self, a: Alignment) -> Self {
        self.vertical_alignment = a;
        self
    }

    /// Extent at which the current line wraps, on the main axis.
    ///
    /// A NaN maximum counts as unbounded and a negative one as zero.
    pub fn main_axis_limit(&self) -> f64 {
        let limit = match self.orientation {
            Orientation::Horizontal => self.max_width,
            Orientation::Vertical => self.max_height,
        };
        match limit {
            Some(v) if v.is_nan() => f64::INFINITY,
            Some(v) => v.max(0.0),
            None => f64::INFINITY,
        }
    }

    /// Alignment applied across each line.
    pub fn cross_axis_alignment(&self) -> Alignment {
        match self.orientation {
            Orientation::Horizontal => self.vertical_alignment,
            Orientation::Vertical => self.horizontal_alignment,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_valid() {
            return Err(LayoutError::InvalidPadding(self.padding));
        }
        for (axis, value) in [("width", self.max_width), ("height", self.max_height)] {
            if let Some(v) = value.filter(|v| v.is_nan() || *v < 0.0) {
                return Err(LayoutError::InvalidExtent { axis, value: v });
            }
        }
        Ok(())
    }
}
