//! The general configuration settings for filebox.
//!
//! Holds the [General] struct deserialized from the `[general]` table and
//! the sort order read from the `[sort]` table of filebox.toml.

use crate::core::{Formatter, SortOrder};

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    dirs_first: bool,
    show_hidden: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            dirs_first: true,
            show_hidden: false,
        }
    }
}

impl General {
    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.dirs_first
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Builds the listing [Formatter] for these settings and the given sort order.
    pub fn formatter(&self, order: SortOrder) -> Formatter {
        Formatter::new(order, self.dirs_first, self.show_hidden)
    }
}
