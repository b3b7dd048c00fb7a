use super::{Coordinates, GeometryTrait, RingGeometry};
use crate::centroid::{CentroidArea, CentroidAreaTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// Degenerate bounds with zero width and/or height are allowed.
///
/// # Examples
/// ```
/// use planar_geometry::{BoundGeometry, CentroidAreaTrait, Coordinates};
///
/// let bound = BoundGeometry::new(Coordinates::new(0.0, 2.0), Coordinates::new(1.0, 3.0));
/// let result = bound.centroid_area().unwrap();
/// assert_eq!(result.centroid, Coordinates::new(0.5, 2.5));
/// assert_eq!(result.area, 1.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct BoundGeometry {
	pub min: Coordinates,
	pub max: Coordinates,
}

impl BoundGeometry {
	#[must_use]
	pub fn new(min: Coordinates, max: Coordinates) -> Self {
		Self { min, max }
	}

	/// Smallest bound containing all `coords`, or `None` if there are none.
	pub fn from_coordinates<'a>(coords: impl IntoIterator<Item = &'a Coordinates>) -> Option<Self> {
		let mut iter = coords.into_iter();
		let first = *iter.next()?;
		let mut bound = Self::new(first, first);
		for c in iter {
			bound.extend_to(c);
		}
		Some(bound)
	}

	/// Grows the bound so that it contains `c`.
	pub fn extend_to(&mut self, c: &Coordinates) {
		self.min = Coordinates::new(self.min.x().min(c.x()), self.min.y().min(c.y()));
		self.max = Coordinates::new(self.max.x().max(c.x()), self.max.y().max(c.y()));
	}

	/// Grows the bound so that it contains `other`.
	pub fn extend(&mut self, other: &BoundGeometry) {
		self.extend_to(&other.min);
		self.extend_to(&other.max);
	}

	/// Non-mutating version of [`extend`](Self::extend).
	#[must_use]
	pub fn extended(mut self, other: &BoundGeometry) -> BoundGeometry {
		self.extend(other);
		self
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.max.x() - self.min.x()
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.max.y() - self.min.y()
	}

	/// Counterclockwise, explicitly closed ring along the edges of the bound.
	#[must_use]
	pub fn to_ring(&self) -> RingGeometry {
		RingGeometry(vec![
			self.min,
			Coordinates::new(self.max.x(), self.min.y()),
			self.max,
			Coordinates::new(self.min.x(), self.max.y()),
			self.min,
		])
	}
}

impl GeometryTrait for BoundGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(
			self.min.x() <= self.max.x(),
			"min x ({}) must be <= max x ({})",
			self.min.x(),
			self.max.x()
		);
		ensure!(
			self.min.y() <= self.max.y(),
			"min y ({}) must be <= max y ({})",
			self.min.y(),
			self.max.y()
		);
		Ok(())
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		Some(*self)
	}
}

impl CentroidAreaTrait for BoundGeometry {
	fn centroid_area(&self) -> Result<CentroidArea> {
		Ok(CentroidArea::new(
			self.min.midpoint(&self.max),
			self.width() * self.height(),
		))
	}
}

impl Debug for BoundGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Bound").field(&self.min).field(&self.max).finish()
	}
}

impl From<geo::Rect> for BoundGeometry {
	fn from(rect: geo::Rect) -> Self {
		Self::new(Coordinates::from(rect.min()), Coordinates::from(rect.max()))
	}
}
