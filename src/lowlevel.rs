//! Low-level building blocks for custom text pipelines.
//!
//! These expose the geometry, sampling and warp primitives the renderer is
//! built from. Most users should prefer [`crate::RotatedTextRenderer`].

pub use crate::geom::{Affine2, Point2d, Point2i, Rect};
pub use crate::render::{RotatedTextLayout, MARGIN};
pub use crate::warp::{
    sample_bilinear, sample_nearest, warp_affine, BorderMode, Interpolation, WarpConfig,
};
