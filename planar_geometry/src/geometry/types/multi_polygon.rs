use super::{BoundGeometry, CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use crate::centroid::{CentroidArea, CentroidAreaTrait, combine};
use anyhow::Result;
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
/// This struct is used for complex, multi-part areas in 2D space.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		self
			.0
			.iter()
			.filter_map(PolygonGeometry::compute_bounds)
			.reduce(|a, b| a.extended(&b))
	}
}

/// - `area` is the sum of all polygon areas.
/// - `centroid` is the area-weighted average of the polygon centroids, or their plain
///   average if all polygons are degenerate.
impl CentroidAreaTrait for MultiPolygonGeometry {
	fn centroid_area(&self) -> Result<CentroidArea> {
		combine(self.0.iter().map(PolygonGeometry::centroid_area), "MultiPolygon")
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_member_conversions!(MultiPolygonGeometry => PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		geometry.into_iter().map(PolygonGeometry::from).collect()
	}
}
