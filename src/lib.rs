//! rotext draws text at arbitrary angles onto raster images using a text
//! renderer that can only draw horizontally.
//!
//! The region under the rotated text is straightened by an inverse affine warp,
//! the text is drawn horizontally, and the region is warped back and copied
//! into place. Pixels outside the rotated text's bounding box are never
//! touched. Row-parallel warps are available via the `rayon` feature, and
//! zero-copy views over `image` crate buffers via the `image` feature.

pub mod geom;
pub mod image;
pub mod lowlevel;
pub mod render;
pub mod text;
mod trace;
pub mod util;
pub mod warp;

pub use geom::{Affine2, Point2d, Point2i, Rect};
pub use crate::image::{ImageView, ImageViewMut, OwnedImage, Pixel};
pub use render::{
    draw_rotated_text, BorderPolicy, RenderConfig, RotatedTextLayout, RotatedTextRenderer, MARGIN,
};
pub use text::{BitmapFont, FontFace, LineStyle, TextMetrics, TextRenderer, TextStyle};
pub use util::{RotextError, RotextResult};

#[cfg(feature = "image")]
pub use crate::image::interop;
