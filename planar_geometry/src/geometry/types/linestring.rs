use super::{BoundGeometry, CompositeGeometryTrait, Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use crate::centroid::{CentroidArea, CentroidAreaTrait, mean_of};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming an open path in 2D space.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the `LineStringGeometry` has at least two points.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		BoundGeometry::from_coordinates(&self.0)
	}
}

impl CentroidAreaTrait for LineStringGeometry {
	/// A line encloses no area, so its centroid is the plain average of its vertices.
	fn centroid_area(&self) -> Result<CentroidArea> {
		mean_of(&self.0, "LineString")
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	/// Converts this single line into a `MultiLineStringGeometry` containing just this one line.
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_member_conversions!(LineStringGeometry => Coordinates);

impl From<geo::LineString> for LineStringGeometry {
	fn from(geometry: geo::LineString) -> Self {
		geometry.into_iter().map(Coordinates::from).collect()
	}
}
