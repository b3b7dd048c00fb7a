use super::*;
use crate::{
	centroid::{CentroidArea, CentroidAreaTrait},
	error::GeometryError,
};
use anyhow::Result;
use std::fmt::Debug;

/// Any geometry that has a planar centroid and area.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Ring(RingGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Bound(BoundGeometry),
	Collection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry(
			value.into_iter().map(LineStringGeometry::from).collect(),
		))
	}
	pub fn new_ring<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Ring(RingGeometry::from(value))
	}
	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry(value.into_iter().map(RingGeometry::from).collect()))
	}
	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry(
			value
				.into_iter()
				.map(|polygon| PolygonGeometry(polygon.into_iter().map(RingGeometry::from).collect()))
				.collect(),
		))
	}
	pub fn new_bound<T>(min: T, max: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Bound(BoundGeometry::new(Coordinates::from(min), Coordinates::from(max)))
	}
	pub fn new_collection(value: Vec<Geometry>) -> Self {
		Self::Collection(GeometryCollection(value))
	}

	#[must_use]
	pub fn get_type(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::LineString(_) => "LineString",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::Ring(_) => "Ring",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::Bound(_) => "Bound",
			Geometry::Collection(_) => "Collection",
		}
	}

	/// Wraps single geometries into their multi counterpart. Rings become
	/// single-ring multipolygons and bounds are left untouched.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Ring(g) => Geometry::MultiPolygon(PolygonGeometry(vec![g]).into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::MultiPolygon(_)
			| Geometry::Bound(_)
			| Geometry::Collection(_) => self,
		}
	}

	/// One non-empty example of every variant.
	#[must_use]
	pub fn examples() -> Vec<Geometry> {
		vec![
			Self::new_point([1.0, 2.0]),
			Self::new_multi_point(vec![[0.0, 0.0], [1.0, 1.5], [2.0, 0.0]]),
			Self::new_line_string(vec![[0.0, 0.0], [3.0, 0.0], [3.0, 4.0]]),
			Self::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]], vec![[5.0, 5.0], [6.0, 5.0]]]),
			Self::new_ring(vec![[0.0, 0.0], [1.0, 3.0], [2.0, 0.0], [0.0, 0.0]]),
			Self::new_polygon(vec![
				vec![[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [3.0, 1.0], [3.0, 2.0], [2.0, 2.0], [2.0, 1.0]],
			]),
			Self::new_multi_polygon(vec![
				vec![
					vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
					vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
				],
				vec![
					vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
					vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
				],
			]),
			Self::new_bound([0.0, 2.0], [1.0, 3.0]),
			Self::new_collection(vec![
				Self::new_point([10.0, 10.0]),
				Self::new_bound([0.0, 0.0], [2.0, 2.0]),
			]),
		]
	}
}

impl GeometryTrait for Geometry {
	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::Ring(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::Bound(g) => g.verify(),
			Geometry::Collection(g) => g.verify(),
		}
	}

	fn compute_bounds(&self) -> Option<BoundGeometry> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::Ring(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
			Geometry::Bound(g) => g.compute_bounds(),
			Geometry::Collection(g) => g.compute_bounds(),
		}
	}
}

impl CentroidAreaTrait for Geometry {
	fn centroid_area(&self) -> Result<CentroidArea> {
		match self {
			Geometry::Point(g) => g.centroid_area(),
			Geometry::MultiPoint(g) => g.centroid_area(),
			Geometry::LineString(g) => g.centroid_area(),
			Geometry::MultiLineString(g) => g.centroid_area(),
			Geometry::Ring(g) => g.centroid_area(),
			Geometry::Polygon(g) => g.centroid_area(),
			Geometry::MultiPolygon(g) => g.centroid_area(),
			Geometry::Bound(g) => g.centroid_area(),
			Geometry::Collection(g) => g.centroid_area(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Ring(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::Bound(g) => g,
			Geometry::Collection(g) => g,
		};
		f.debug_tuple(self.get_type()).field(inner).finish()
	}
}

/// Converts geometries of the `geo` crate. `Line` and `Triangle` have no counterpart and
/// are rejected as unsupported.
impl TryFrom<geo::Geometry<f64>> for Geometry {
	type Error = anyhow::Error;

	fn try_from(geometry: geo::Geometry<f64>) -> Result<Self> {
		Ok(match geometry {
			geo::Geometry::Point(g) => Geometry::Point(PointGeometry::from(g)),
			geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(MultiPointGeometry::from(g)),
			geo::Geometry::LineString(g) => Geometry::LineString(LineStringGeometry::from(g)),
			geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry::from(g)),
			geo::Geometry::Polygon(g) => Geometry::Polygon(PolygonGeometry::from(g)),
			geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(MultiPolygonGeometry::from(g)),
			geo::Geometry::Rect(g) => Geometry::Bound(BoundGeometry::from(g)),
			geo::Geometry::GeometryCollection(g) => Geometry::Collection(GeometryCollection(
				g.into_iter().map(Geometry::try_from).collect::<Result<Vec<_>>>()?,
			)),
			geo::Geometry::Line(_) => return Err(GeometryError::UnsupportedVariant("Line").into()),
			geo::Geometry::Triangle(_) => return Err(GeometryError::UnsupportedVariant("Triangle").into()),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn every_example_has_a_centroid() {
		for geometry in Geometry::examples() {
			let result = geometry.centroid_area();
			assert!(result.is_ok(), "{geometry:?}: {result:?}");
			assert!(geometry.verify().is_ok(), "{geometry:?}");
			assert!(geometry.compute_bounds().is_some(), "{geometry:?}");
		}
	}

	#[rstest]
	#[case::point(Geometry::new_point([1.0, 2.0]), [1.0, 2.0], 0.0)]
	#[case::multi_point(Geometry::new_multi_point(vec![[0.0, 0.0], [1.0, 1.5], [2.0, 0.0]]), [1.0, 0.5], 0.0)]
	#[case::line_string(Geometry::new_line_string(vec![[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]]), [2.0, 1.0], 0.0)]
	#[case::ring_ccw(Geometry::new_ring(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]), [0.5, 0.5], 1.0)]
	#[case::ring_cw(Geometry::new_ring(vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]), [0.5, 0.5], -1.0)]
	#[case::bound(Geometry::new_bound([0.0, 2.0], [1.0, 3.0]), [0.5, 2.5], 1.0)]
	#[case::bound_degenerate(Geometry::new_bound([0.0, 2.0], [0.0, 2.0]), [0.0, 2.0], 0.0)]
	fn dispatch(#[case] geometry: Geometry, #[case] centroid: [f64; 2], #[case] area: f64) {
		let result = geometry.centroid_area().unwrap();
		assert_eq!(result.centroid, Coordinates::from(centroid));
		assert_eq!(result.area, area);
	}

	#[test]
	fn get_type() {
		let types: Vec<&str> = Geometry::examples().iter().map(Geometry::get_type).collect();
		assert_eq!(
			types,
			[
				"Point",
				"MultiPoint",
				"LineString",
				"MultiLineString",
				"Ring",
				"Polygon",
				"MultiPolygon",
				"Bound",
				"Collection"
			]
		);
	}

	#[test]
	fn into_multi() {
		let ring = Geometry::new_ring(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
		let multi = ring.clone().into_multi();
		assert_eq!(multi.get_type(), "MultiPolygon");
		assert_eq!(multi.centroid_area().unwrap().area, ring.centroid_area().unwrap().area);

		assert_eq!(Geometry::new_point([1.0, 2.0]).into_multi().get_type(), "MultiPoint");
		let bound = Geometry::new_bound([0.0, 0.0], [1.0, 1.0]);
		assert_eq!(bound.clone().into_multi(), bound);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Geometry::new_point([1.0, 2.0])), "Point([1.0, 2.0])");
	}

	#[test]
	fn from_geo_geometry() {
		let collection = geo::Geometry::GeometryCollection(geo::GeometryCollection(vec![
			geo::Geometry::Point(geo::Point::new(1.0, 1.0)),
			geo::Geometry::Rect(geo::Rect::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 2.0, y: 2.0 })),
		]));
		let geometry = Geometry::try_from(collection).unwrap();
		assert_eq!(geometry.get_type(), "Collection");
		let result = geometry.centroid_area().unwrap();
		assert_eq!(result, CentroidArea::new(Coordinates::new(1.0, 1.0), 4.0));
	}

	#[rstest]
	#[case::line(geo::Geometry::Line(geo::Line::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 1.0, y: 1.0 })), "Line")]
	#[case::triangle(
		geo::Geometry::Triangle(geo::Triangle::new(
			geo::coord! { x: 0.0, y: 0.0 },
			geo::coord! { x: 1.0, y: 0.0 },
			geo::coord! { x: 0.0, y: 1.0 },
		)),
		"Triangle"
	)]
	fn from_geo_unsupported(#[case] geometry: geo::Geometry<f64>, #[case] name: &'static str) {
		let err = Geometry::try_from(geometry).unwrap_err();
		assert_eq!(err.downcast_ref::<GeometryError>(), Some(&GeometryError::UnsupportedVariant(name)));
	}

	#[test]
	fn unsupported_member_fails_the_collection() {
		let collection = geo::Geometry::GeometryCollection(geo::GeometryCollection(vec![
			geo::Geometry::Point(geo::Point::new(1.0, 1.0)),
			geo::Geometry::Line(geo::Line::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 1.0, y: 1.0 })),
		]));
		assert!(Geometry::try_from(collection).is_err());
	}
}
