use super::{BoundGeometry, Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use crate::centroid::{CentroidArea, CentroidAreaTrait};
use anyhow::Result;
use std::fmt::Debug;

/// A single location. Its centroid is the location itself and its area is 0.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		Some(BoundGeometry::new(self.0, self.0))
	}
}

impl CentroidAreaTrait for PointGeometry {
	fn centroid_area(&self) -> Result<CentroidArea> {
		Ok(CentroidArea::point(self.0))
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
