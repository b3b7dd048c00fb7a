use super::{CentroidArea, mean_of};
use crate::geometry::Coordinates;
use anyhow::Result;
use log::trace;

/// Drops an explicit closing vertex, so that closed and open rings are handled alike.
pub(crate) fn effective_vertices(coords: &[Coordinates]) -> &[Coordinates] {
	match coords {
		[first, .., last] if first == last => &coords[..coords.len() - 1],
		_ => coords,
	}
}

/// Vertices in their original order, each position kept only once.
fn distinct_vertices(vertices: &[Coordinates]) -> Vec<Coordinates> {
	let mut distinct: Vec<Coordinates> = Vec::with_capacity(vertices.len());
	for vertex in vertices {
		if !distinct.contains(vertex) {
			distinct.push(*vertex);
		}
	}
	distinct
}

/// Shoelace centroid and signed area of a ring.
///
/// All vertices are translated by the first vertex before summing, which keeps each
/// cross product proportional to the ring's extent instead of its distance from the
/// origin. The centroid is translated back once at the end.
///
/// Rings with fewer than three vertices yield the average of all vertices and an area of 0.
/// Rings with zero area yield the average of their distinct vertices and an area of 0.
pub(crate) fn ring_centroid_area(coords: &[Coordinates]) -> Result<CentroidArea> {
	let vertices = effective_vertices(coords);
	if vertices.len() < 3 {
		return mean_of(vertices, "Ring");
	}

	let origin = vertices[0];
	let mut area_sum = 0.0;
	let mut cx_sum = 0.0;
	let mut cy_sum = 0.0;

	let mut a = vertices[vertices.len() - 1] - origin;
	for vertex in vertices {
		let b = *vertex - origin;
		let cross = a.x() * b.y() - b.x() * a.y();
		area_sum += cross;
		cx_sum += (a.x() + b.x()) * cross;
		cy_sum += (a.y() + b.y()) * cross;
		a = b;
	}

	if area_sum == 0.0 {
		trace!("ring with zero area, averaging its distinct vertices");
		return mean_of(&distinct_vertices(vertices), "Ring");
	}

	let centroid = Coordinates::new(cx_sum / (3.0 * area_sum), cy_sum / (3.0 * area_sum)) + origin;
	Ok(CentroidArea::new(centroid, area_sum / 2.0))
}
