use super::{BoundGeometry, CompositeGeometryTrait, Coordinates, GeometryTrait};
use crate::centroid::{CentroidArea, CentroidAreaTrait, effective_vertices, ring_centroid_area};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Represents a closed ring geometry, which is a connected series of coordinates forming a loop.
/// This structure is typically used as the building block for polygons.
///
/// The closing point may be given explicitly (last point equals the first) or left out;
/// both forms describe the same ring.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the last point repeats the first one.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		self.0.len() > 1 && self.0.first() == self.0.last()
	}

	/// Reverses the winding order in place.
	pub fn reverse(&mut self) {
		self.0.reverse();
	}

	/// Returns a copy with reversed winding order.
	#[must_use]
	pub fn reversed(&self) -> Self {
		let mut ring = self.clone();
		ring.reverse();
		ring
	}
}

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring has at least 3 distinct positions, not counting an
	/// explicit closing point.
	fn verify(&self) -> Result<()> {
		ensure!(
			effective_vertices(&self.0).len() >= 3,
			"Ring must have at least 3 points"
		);
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		BoundGeometry::from_coordinates(&self.0)
	}
}

impl CentroidAreaTrait for RingGeometry {
	/// Computes the centroid and the signed area of the ring using the shoelace formula.
	/// The area is positive if the ring is oriented counterclockwise,
	/// and negative if clockwise.
	fn centroid_area(&self) -> Result<CentroidArea> {
		ring_centroid_area(&self.0)
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_member_conversions!(RingGeometry => Coordinates);

/// Converts a `geo::LineString<f64>` into a `RingGeometry`, preserving the order of coordinates.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		geometry.into_iter().map(Coordinates::from).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	// ── centroid / area ─────────────────────────────────────────────────

	#[test]
	fn area_ccw_positive() {
		assert_eq!(square().area(), 100.0);
	}

	#[test]
	fn area_cw_negative() {
		assert_eq!(square().reversed().area(), -100.0);
	}

	#[test]
	fn area_empty() {
		assert_eq!(RingGeometry::new().area(), 0.0);
		assert!(RingGeometry::new().centroid_area().is_err());
	}

	#[test]
	fn centroid() {
		assert_eq!(square().centroid().unwrap(), Coordinates::new(5.0, 5.0));
		assert_eq!(square().reversed().centroid().unwrap(), Coordinates::new(5.0, 5.0));
	}

	#[test]
	fn triangle_any_winding_or_closure() {
		let cw_closed = RingGeometry::from(&[[0, 0], [1, 3], [2, 0], [0, 0]]);
		let cw_open = RingGeometry::from(&[[0, 0], [1, 3], [2, 0]]);
		let ccw_closed = cw_closed.reversed();
		for ring in [cw_closed, cw_open, ccw_closed] {
			assert_eq!(ring.centroid().unwrap(), Coordinates::new(1.0, 1.0), "{ring:?}");
		}
	}

	// ── closure / reversal ──────────────────────────────────────────────

	#[test]
	fn is_closed() {
		assert!(square().is_closed());
		assert!(!RingGeometry::from(&[[0, 0], [1, 0], [1, 1]]).is_closed());
		assert!(!RingGeometry::from(&[[0, 0]]).is_closed());
		assert!(!RingGeometry::new().is_closed());
	}

	#[test]
	fn reverse_in_place() {
		let mut ring = RingGeometry::from(&[[0, 0], [1, 0], [1, 1]]);
		ring.reverse();
		assert_eq!(ring, RingGeometry::from(&[[1, 1], [1, 0], [0, 0]]));
	}

	// ── verify ──────────────────────────────────────────────────────────

	#[test]
	fn verify_valid() {
		assert!(square().verify().is_ok());
		assert!(RingGeometry::from(&[[0, 0], [1, 0], [1, 1]]).verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		let ring = RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]);
		assert!(ring.verify().is_err());
	}

	// ── compute_bounds ──────────────────────────────────────────────────

	#[test]
	fn compute_bounds() {
		let bounds = square().compute_bounds().unwrap();
		assert_eq!(bounds, BoundGeometry::new(Coordinates::new(0.0, 0.0), Coordinates::new(10.0, 10.0)));
	}

	#[test]
	fn compute_bounds_empty() {
		assert!(RingGeometry::new().compute_bounds().is_none());
	}

	// ── Debug / From ────────────────────────────────────────────────────

	#[test]
	fn debug_format() {
		let ring = RingGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(format!("{ring:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		let ring = RingGeometry::from(ls);
		assert_eq!(ring.len(), 2);
	}
}
