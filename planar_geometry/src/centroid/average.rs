use super::CentroidArea;
use crate::{error::GeometryError, geometry::Coordinates};
use anyhow::Result;
use log::trace;

/// Running sum of centroid moments, weighted by area.
#[derive(Default)]
pub(crate) struct WeightedSum {
	x: f64,
	y: f64,
	weight: f64,
}

impl WeightedSum {
	pub fn add(&mut self, centroid: &Coordinates, weight: f64) {
		self.x += centroid.x() * weight;
		self.y += centroid.y() * weight;
		self.weight += weight;
	}

	/// Removes a region, e.g. a polygon hole.
	pub fn subtract(&mut self, centroid: &Coordinates, weight: f64) {
		self.x -= centroid.x() * weight;
		self.y -= centroid.y() * weight;
		self.weight -= weight;
	}

	pub fn weight(&self) -> f64 {
		self.weight
	}

	/// Weighted mean, or `None` when the total weight is zero.
	pub fn mean(&self) -> Option<Coordinates> {
		if self.weight == 0.0 {
			None
		} else {
			Some(Coordinates::new(self.x / self.weight, self.y / self.weight))
		}
	}
}

/// Running sum for an unweighted mean of coordinates.
#[derive(Default)]
pub(crate) struct MeanSum {
	x: f64,
	y: f64,
	count: usize,
}

impl MeanSum {
	pub fn add(&mut self, c: &Coordinates) {
		self.x += c.x();
		self.y += c.y();
		self.count += 1;
	}

	/// Arithmetic mean, or `None` when nothing was added.
	pub fn mean(&self) -> Option<Coordinates> {
		if self.count == 0 {
			None
		} else {
			let n = self.count as f64;
			Some(Coordinates::new(self.x / n, self.y / n))
		}
	}
}

impl<'a> FromIterator<&'a Coordinates> for MeanSum {
	fn from_iter<I: IntoIterator<Item = &'a Coordinates>>(iter: I) -> Self {
		let mut sum = MeanSum::default();
		for c in iter {
			sum.add(c);
		}
		sum
	}
}

/// Averages the coordinates of a zero-area geometry; fails when there are none.
pub(crate) fn mean_of<'a>(coords: impl IntoIterator<Item = &'a Coordinates>, kind: &'static str) -> Result<CentroidArea> {
	let sum: MeanSum = coords.into_iter().collect();
	match sum.mean() {
		Some(centroid) => Ok(CentroidArea::point(centroid)),
		None => Err(GeometryError::EmptyGeometry(kind).into()),
	}
}

/// Combines the results of several member geometries.
///
/// Members are weighted by the magnitude of their area, so a clockwise ring counts like a
/// counterclockwise one. If every member has zero area, e.g. in a collection of points and
/// lines, the members' centroids are averaged with equal weight instead.
pub(crate) fn combine(parts: impl IntoIterator<Item = Result<CentroidArea>>, kind: &'static str) -> Result<CentroidArea> {
	let mut weighted = WeightedSum::default();
	let mut unweighted = MeanSum::default();

	for part in parts {
		let part = part?;
		weighted.add(&part.centroid, part.area.abs());
		unweighted.add(&part.centroid);
	}

	if let Some(centroid) = weighted.mean() {
		return Ok(CentroidArea::new(centroid, weighted.weight()));
	}

	trace!("{kind} has zero total area, averaging member centroids");
	let centroid = unweighted.mean().ok_or(GeometryError::EmptyGeometry(kind))?;
	Ok(CentroidArea::point(centroid))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn c(x: f64, y: f64) -> Coordinates {
		Coordinates::new(x, y)
	}

	#[test]
	fn weighted_mean() {
		let mut sum = WeightedSum::default();
		sum.add(&c(2.0, 1.5), 12.0);
		sum.subtract(&c(2.5, 1.5), 1.0);
		assert_eq!(sum.weight(), 11.0);
		assert_eq!(sum.mean(), Some(c(21.5 / 11.0, 1.5)));
	}

	#[test]
	fn weighted_mean_of_nothing() {
		assert_eq!(WeightedSum::default().mean(), None);
	}

	#[test]
	fn unweighted_mean() {
		let points = [c(0.0, 0.0), c(1.0, 1.5), c(2.0, 0.0)];
		let sum: MeanSum = points.iter().collect();
		assert_eq!(sum.mean(), Some(c(1.0, 0.5)));
		assert!(MeanSum::default().mean().is_none());
	}

	#[test]
	fn mean_of_empty_is_error() {
		let err = mean_of(&Vec::<Coordinates>::new(), "MultiPoint").unwrap_err();
		assert_eq!(
			err.downcast_ref::<GeometryError>(),
			Some(&GeometryError::EmptyGeometry("MultiPoint"))
		);
	}

	#[test]
	fn combine_by_area() {
		let parts: Vec<Result<CentroidArea>> = vec![
			Ok(CentroidArea::new(c(0.5, 0.5), 1.0)),
			Ok(CentroidArea::new(c(3.0, 0.5), 3.0)),
			Ok(CentroidArea::point(c(100.0, 100.0))),
		];
		let result = combine(parts, "Collection").unwrap();
		assert_eq!(result, CentroidArea::new(c(2.375, 0.5), 4.0));
	}

	#[test]
	fn combine_counts_clockwise_members_positively() {
		let parts: Vec<Result<CentroidArea>> = vec![
			Ok(CentroidArea::new(c(1.0, 1.0), 4.0)),
			Ok(CentroidArea::new(c(10.5, 0.5), -1.0)),
		];
		let result = combine(parts, "Collection").unwrap();
		assert_eq!(result, CentroidArea::new(c(14.5 / 5.0, 4.5 / 5.0), 5.0));
	}

	#[test]
	fn combine_opposite_windings_do_not_cancel() {
		let parts: Vec<Result<CentroidArea>> = vec![
			Ok(CentroidArea::new(c(0.5, 0.5), 1.0)),
			Ok(CentroidArea::new(c(2.5, 0.5), -1.0)),
		];
		let result = combine(parts, "Collection").unwrap();
		assert_eq!(result, CentroidArea::new(c(1.5, 0.5), 2.0));
	}

	#[test]
	fn combine_zero_area_members() {
		let parts: Vec<Result<CentroidArea>> = vec![
			Ok(CentroidArea::point(c(0.0, 0.0))),
			Ok(CentroidArea::point(c(4.0, 2.0))),
		];
		let result = combine(parts, "Collection").unwrap();
		assert_eq!(result, CentroidArea::point(c(2.0, 1.0)));
	}

	#[test]
	fn combine_empty_is_error() {
		assert!(combine(Vec::<Result<CentroidArea>>::new(), "Collection").is_err());
	}

	#[test]
	fn combine_propagates_member_errors() {
		let parts: Vec<Result<CentroidArea>> = vec![
			Ok(CentroidArea::point(c(0.0, 0.0))),
			Err(GeometryError::EmptyGeometry("Ring").into()),
		];
		assert!(combine(parts, "Collection").is_err());
	}
}
