#![allow(clippy::module_inception)]

mod collection;
mod geometry;
mod types;

pub use collection::*;
pub use geometry::*;
pub use types::*;
