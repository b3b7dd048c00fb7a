use super::{BoundGeometry, CompositeGeometryTrait, GeometryTrait, PointGeometry};
use crate::centroid::{CentroidArea, CentroidAreaTrait, mean_of};
use anyhow::Result;
use std::fmt::Debug;

/// Represents a collection of points, used to store multiple discrete locations in 2D space.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		for point in &self.0 {
			point.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		BoundGeometry::from_coordinates(self.0.iter().map(PointGeometry::as_coord))
	}
}

/// Every point has the same weight, regardless of duplicates or spacing.
impl CentroidAreaTrait for MultiPointGeometry {
	fn centroid_area(&self) -> Result<CentroidArea> {
		mean_of(self.0.iter().map(PointGeometry::as_coord), "MultiPoint")
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_member_conversions!(MultiPointGeometry => PointGeometry);

impl From<geo::MultiPoint> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint) -> Self {
		geometry.into_iter().map(PointGeometry::from).collect()
	}
}
