use super::{BoundGeometry, CompositeGeometryTrait, GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait};
use crate::{
	centroid::{CentroidArea, CentroidAreaTrait, WeightedSum},
	error::GeometryError,
};
use anyhow::{Result, ensure};
use log::trace;
use std::fmt::Debug;

/// A polygon: the first ring is the outer boundary, all following rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Returns the outer ring, if any.
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	/// Returns the holes.
	#[must_use]
	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		self.exterior().and_then(RingGeometry::compute_bounds)
	}
}

impl CentroidAreaTrait for PolygonGeometry {
	/// Holes always reduce the area, whatever their winding. Each hole's centroid enters
	/// the weighted average with the negative magnitude of its area.
	///
	/// The returned area is the outer area minus the hole areas, both by magnitude.
	fn centroid_area(&self) -> Result<CentroidArea> {
		let Some(exterior) = self.exterior() else {
			return Err(GeometryError::EmptyGeometry("Polygon").into());
		};

		let outer = exterior.centroid_area()?;
		let mut sum = WeightedSum::default();
		sum.add(&outer.centroid, outer.area.abs());

		for ring in self.interiors() {
			let hole = ring.centroid_area()?;
			sum.subtract(&hole.centroid, hole.area.abs());
		}

		match sum.mean() {
			Some(centroid) => Ok(CentroidArea::new(centroid, sum.weight())),
			None => {
				trace!("polygon with zero area, using the centroid of its outer ring");
				Ok(CentroidArea::point(outer.centroid))
			}
		}
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_member_conversions!(PolygonGeometry => RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		std::iter::once(exterior).chain(interiors).map(RingGeometry::from).collect()
	}
}
