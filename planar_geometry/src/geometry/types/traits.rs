use super::BoundGeometry;
use anyhow::Result;
use std::fmt::Debug;

/// Structural checks and bounds shared by every geometry value type.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Checks that the geometry is well formed, e.g. that a ring has at least three
	/// distinct vertices or that a bound is not inverted.
	fn verify(&self) -> Result<()>;

	/// Axis-aligned bounds of all coordinates, or `None` if there are none.
	fn compute_bounds(&self) -> Option<BoundGeometry>;
}

/// A single geometry that has a multi-geometry counterpart, e.g. point and multipoint.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// A geometry that is a list of simpler members: a ring of coordinates, a polygon of
/// rings, a multipolygon of polygons.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;
	fn as_vec(&self) -> &Vec<Item>;
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;
	fn into_inner(self) -> Vec<Item>;

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}
}
