//! Planar centroid and area.
//!
//! Every geometry type implements [`CentroidAreaTrait`]. Rings go through a recentred
//! shoelace accumulator; everything built from several parts is combined with an
//! area-weighted average that falls back to a plain average when there is no area.

mod average;
mod ring;

pub(crate) use average::{WeightedSum, combine, mean_of};
pub(crate) use ring::{effective_vertices, ring_centroid_area};

use crate::geometry::{Coordinates, Geometry};
use anyhow::Result;

/// Centroid and signed area of a planar geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentroidArea {
	pub centroid: Coordinates,
	pub area: f64,
}

impl CentroidArea {
	#[must_use]
	pub fn new(centroid: Coordinates, area: f64) -> Self {
		Self { centroid, area }
	}

	/// A zero-area result located at `centroid`.
	#[must_use]
	pub fn point(centroid: Coordinates) -> Self {
		Self { centroid, area: 0.0 }
	}
}

/// Geometries that have a planar centroid and area.
pub trait CentroidAreaTrait {
	/// Computes the centroid and area in one pass.
	///
	/// Rings report a signed area (counterclockwise positive). Polygons report the outer
	/// area minus the hole areas. Points and lines report zero.
	fn centroid_area(&self) -> Result<CentroidArea>;

	/// Returns only the centroid.
	fn centroid(&self) -> Result<Coordinates> {
		Ok(self.centroid_area()?.centroid)
	}

	/// Returns only the area. Geometries without coordinates have an area of 0.
	fn area(&self) -> f64 {
		self.centroid_area().map_or(0.0, |result| result.area)
	}
}

/// Computes the centroid and area of any [`Geometry`].
pub fn centroid_area(geometry: &Geometry) -> Result<CentroidArea> {
	geometry.centroid_area()
}

/// Computes the centroid of any [`Geometry`].
pub fn centroid(geometry: &Geometry) -> Result<Coordinates> {
	geometry.centroid()
}

/// Computes the area of any [`Geometry`], 0 for empty geometries.
pub fn area(geometry: &Geometry) -> f64 {
	geometry.area()
}
