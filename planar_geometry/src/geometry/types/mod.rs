// The geometry value types of this crate: `PointGeometry`, `LineStringGeometry`,
// `RingGeometry`, `PolygonGeometry`, `BoundGeometry` and their multi-geometry counterparts.
// All of them implement `GeometryTrait` and `CentroidAreaTrait`; container types also
// implement `CompositeGeometryTrait`.

mod bound;
mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use bound::*;
pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
