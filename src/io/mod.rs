//! Filesystem side of an export.
//!
//! - repository layout resolution + directory creation (`layout`)
//! - config file write (`export`)

pub mod export;
pub mod layout;

pub use export::*;
pub use layout::*;
