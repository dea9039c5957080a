//! Collision detection
//!
//! Two phases per unordered pair:
//! - broad: cheap shape-aware bounding test (`aabb_overlap`)
//! - narrow: closed-form circle test, or SAT over polygon representations
//!   (rectangles as 4 corners, circles as 16-gons, polygons from the registry)
//!
//! Every reported MTV points from body A toward body B.

mod broad;
mod narrow;
mod sat;
mod types;

pub use broad::aabb_overlap;
pub use narrow::{
    circle_polygon, detect_circle_collision, detect_collision, detect_polygon_collision,
    polygon_of, rect_corners,
};
pub use sat::{edge_normals, interval_overlap, min_overlap_axis, project, SatHit};
pub use types::CollisionInfo;
