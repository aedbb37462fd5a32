//! Star geometry: the wedge primitive, its rotations, and page placement
//!
//! Everything here is pure computation; serialization lives in the renderer.

pub mod page;
pub mod star;
pub mod transform;
pub mod types;

pub use page::{PageConfig, PageGeometry};
pub use star::{SpokeCount, StarGeometry, WedgeStrategy, Wedges};
pub use transform::RotationMatrix;
pub use types::{Point, Wedge};
