use super::{BoundGeometry, CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use crate::centroid::{CentroidArea, CentroidAreaTrait, combine};
use anyhow::Result;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		self
			.0
			.iter()
			.filter_map(LineStringGeometry::compute_bounds)
			.reduce(|a, b| a.extended(&b))
	}
}

/// Lines have no area, so this is the unweighted average of the lines' centroids.
impl CentroidAreaTrait for MultiLineStringGeometry {
	fn centroid_area(&self) -> Result<CentroidArea> {
		combine(self.0.iter().map(LineStringGeometry::centroid_area), "MultiLineString")
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

super::macros::impl_member_conversions!(MultiLineStringGeometry => LineStringGeometry);

impl From<geo::MultiLineString> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString) -> Self {
		geometry.into_iter().map(LineStringGeometry::from).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Coordinates;

	#[test]
	fn centroid_averages_line_centroids() {
		let mls = MultiLineStringGeometry::from(&[vec![[0, 0], [2, 0]], vec![[0, 4], [2, 4], [4, 4], [6, 4]]]);
		let result = mls.centroid_area().unwrap();
		assert_eq!(result, CentroidArea::point(Coordinates::new(2.0, 2.0)));
	}

	#[test]
	fn centroid_of_empty_is_error() {
		assert!(MultiLineStringGeometry::new().centroid_area().is_err());
		let with_empty_line = MultiLineStringGeometry(vec![LineStringGeometry::new()]);
		assert!(with_empty_line.centroid_area().is_err());
	}

	#[test]
	fn compute_bounds() {
		let mls = MultiLineStringGeometry::from(&[vec![[0, 0], [2, 1]], vec![[-1, 4], [1, 3]]]);
		assert_eq!(
			mls.compute_bounds().unwrap(),
			BoundGeometry::new(Coordinates::new(-1.0, 0.0), Coordinates::new(2.0, 4.0))
		);
		assert!(MultiLineStringGeometry::new().compute_bounds().is_none());
	}

	#[test]
	fn verify_checks_members() {
		assert!(MultiLineStringGeometry::from(&[vec![[0, 0], [2, 1]]]).verify().is_ok());
		assert!(MultiLineStringGeometry::from(&[vec![[0, 0]]]).verify().is_err());
	}
}
