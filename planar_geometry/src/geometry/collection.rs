use super::{BoundGeometry, CompositeGeometryTrait, Geometry, GeometryTrait};
use crate::centroid::{CentroidArea, CentroidAreaTrait, combine};
use anyhow::Result;
use std::fmt::Debug;

/// A heterogeneous list of geometries.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryTrait for GeometryCollection {
	fn verify(&self) -> Result<()> {
		for geometry in &self.0 {
			geometry.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		self
			.0
			.iter()
			.filter_map(Geometry::compute_bounds)
			.reduce(|a, b| a.extended(&b))
	}
}

/// Members are weighted by their area, so points and lines do not move the centroid of a
/// collection that also contains areas. A collection without any area averages the
/// centroids of its members.
impl CentroidAreaTrait for GeometryCollection {
	fn centroid_area(&self) -> Result<CentroidArea> {
		combine(self.0.iter().map(Geometry::centroid_area), "Collection")
	}
}

impl CompositeGeometryTrait<Geometry> for GeometryCollection {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Geometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Geometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Geometry> {
		self.0
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}
