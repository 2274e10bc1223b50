//! Ray-shape intersection routines.
//!
//! Each shape type has a dedicated routine returning the uniform
//! [`IntersectResult`](crate::IntersectResult): a miss when no
//! intersection with `t >= 0` exists, otherwise a hit at the smallest
//! such `t`. `Ray` dispatches here and performs no geometry of its own.

mod aabb;
mod plane;
mod sphere;
mod volume;

pub use aabb::intersect_aabb;
pub use plane::intersect_plane;
pub use sphere::intersect_sphere;
pub use volume::intersect_volume;
