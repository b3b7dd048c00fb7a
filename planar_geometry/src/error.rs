//! Error conditions raised while measuring geometries.
//!
//! Functions in this crate return [`anyhow::Result`]; the conditions below are wrapped
//! into it, so callers can recover them with `err.downcast_ref::<GeometryError>()`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
	/// The geometry kind has no centroid/area rule.
	#[error("unsupported geometry type: {0}")]
	UnsupportedVariant(&'static str),

	/// The geometry has no coordinates, so no average exists.
	#[error("cannot compute the centroid of an empty {0}")]
	EmptyGeometry(&'static str),
}
