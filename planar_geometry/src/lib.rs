//! Planar centroid and area of points, lines, rings, polygons, bounds and collections.
//!
//! Coordinates are treated as flat Cartesian values. Ring-based geometries are measured
//! with the shoelace formula after translating every vertex by the ring's first vertex,
//! which keeps results exact for shapes far away from the origin.
//!
//! ```
//! use planar_geometry::{CentroidAreaTrait, Coordinates, Geometry};
//!
//! let polygon = Geometry::new_polygon(vec![
//! 	vec![[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0], [0.0, 0.0]],
//! 	vec![[2.0, 1.0], [3.0, 1.0], [3.0, 2.0], [2.0, 2.0], [2.0, 1.0]],
//! ]);
//! let result = polygon.centroid_area().unwrap();
//! assert_eq!(result.area, 11.0);
//! assert_eq!(result.centroid, Coordinates::new(21.5 / 11.0, 1.5));
//! ```

pub mod centroid;
pub mod error;
mod geometry;

pub use centroid::{CentroidArea, CentroidAreaTrait, area, centroid, centroid_area};
pub use error::GeometryError;
pub use geometry::*;
