//! Row-parallel warp (feature-gated).

use super::{warp_row, BorderMode, Interpolation};
use crate::geom::Affine2;
use crate::image::{ImageView, Pixel};
use rayon::prelude::*;

/// Fills `out` row by row in parallel; each row is computed exactly as the
/// sequential path would, so results are identical.
pub(super) fn warp_rows_par<P: Pixel>(
    src: ImageView<'_, P>,
    inverse: &Affine2,
    border: &BorderMode<P>,
    interpolation: Interpolation,
    width: usize,
    out: &mut [P],
) {
    out.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, row)| warp_row(src, inverse, border, interpolation, y, row));
}
