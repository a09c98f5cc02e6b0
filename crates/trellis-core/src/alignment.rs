use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

/// Placement of an element along one axis of the line it sits in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    #[default]
    Start,
    Middle,
    End,
}

impl Alignment {
    /// Offset of an item of extent `item` inside a line of extent `line`.
    pub fn offset(self, line: f64, item: f64) -> f64 {
        match self {
            Alignment::Start => 0.0,
            Alignment::Middle => (line - item) / 2.0,
            Alignment::End => line - item,
        }
    }
}

impl FromStr for Alignment {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Alignment::Start),
            "middle" | "center" => Ok(Alignment::Middle),
            "end" => Ok(Alignment::End),
            _ => Err(LayoutError::UnknownAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Start => "start",
            Alignment::Middle => "middle",
            Alignment::End => "end",
        })
    }
}

/// Main axis of a flow panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "row" => Ok(Orientation::Horizontal),
            "vertical" | "column" => Ok(Orientation::Vertical),
            _ => Err(LayoutError::UnknownOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}
