use std::{
	fmt::Debug,
	ops::{Add, Sub},
};

/// A flat Cartesian coordinate pair `[x, y]`.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Returns the coordinate shifted by `(dx, dy)`.
	#[must_use]
	pub fn translated(&self, dx: f64, dy: f64) -> Self {
		Self([self.0[0] + dx, self.0[1] + dy])
	}

	/// Returns the midpoint between `self` and `other`.
	#[must_use]
	pub fn midpoint(&self, other: &Coordinates) -> Self {
		Self([(self.0[0] + other.0[0]) / 2.0, (self.0[1] + other.0[1]) / 2.0])
	}
}

impl Add for Coordinates {
	type Output = Coordinates;

	fn add(self, rhs: Coordinates) -> Coordinates {
		Coordinates([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
	}
}

impl Sub for Coordinates {
	type Output = Coordinates;

	fn sub(self, rhs: Coordinates) -> Coordinates {
		Coordinates([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<geo::Point> for Coordinates {
	fn from(value: geo::Point) -> Self {
		Coordinates([value.x(), value.y()])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
