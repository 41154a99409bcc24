//! Configuration module for filebox.
//!
//! Loads `filebox.toml` (see [load]) into the processed [Config] used by the binary.
//! - [general]: listing behavior (directories first, hidden files, sort order).
//! - [display]: rendering options for the listing table.

pub mod display;
pub mod general;
pub mod load;

pub use display::Display;
pub use general::General;
pub use load::{Config, RawConfig};
