//! Display configuration options for filebox, read from the `[display]` table.

use crate::utils::{DEFAULT_DISPLAY_WIDTH, clamp_display_width};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Display {
    width: usize,
    timestamps: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            width: DEFAULT_DISPLAY_WIDTH,
            timestamps: true,
        }
    }
}

impl Display {
    /// Total width of a listing line, clamped to the supported range.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether listings show the modification time column.
    #[inline]
    pub fn timestamps(&self) -> bool {
        self.timestamps
    }

    pub(crate) fn clamped(self) -> Self {
        Display {
            width: clamp_display_width(self.width),
            ..self
        }
    }
}
