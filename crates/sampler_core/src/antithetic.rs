//! Antithetic mirroring of sample matrices.

use crate::matrix::SampleMatrix;

/// Expands a sample matrix with antithetic variates on the selected axes.
///
/// Every input column spawns `2^k` adjacent output columns, where `k` is the
/// number of axes flagged `true` in `mask`. Variant 0 is the column itself;
/// the remaining variants reflect each subset of the selected axes through
/// `x -> 1 - x`, with the lowest selected axis toggling fastest. Input
/// columns keep their order, so for a single mirrored axis the output
/// interleaves originals and reflections:
///
/// ```rust
/// use sampler_core::{antithetic::mirror_axes, SampleMatrix};
///
/// let points = SampleMatrix::from_vec(1, 2, vec![0.25, 0.5]);
/// let mirrored = mirror_axes(&points, &[true]);
/// assert_eq!(mirrored.row(0), &[0.25, 0.75, 0.5, 0.5]);
/// ```
///
/// An all-`false` mask returns an unchanged copy. `mask` must have one entry
/// per axis; the caller is responsible for ensuring the expanded column count
/// fits in `usize`.
pub fn mirror_axes(samples: &SampleMatrix, mask: &[bool]) -> SampleMatrix {
    debug_assert_eq!(mask.len(), samples.dim(), "one mask entry per axis");

    let selected: Vec<usize> = mask
        .iter()
        .enumerate()
        .filter_map(|(d, &on)| on.then_some(d))
        .collect();
    let variants = 1usize << selected.len();

    let dim = samples.dim();
    let columns = samples.columns();
    let mut out = SampleMatrix::zeros(dim, columns * variants);
    for i in 0..columns {
        for c in 0..variants {
            let column = i * variants + c;
            for d in 0..dim {
                let value = samples.get(d, i);
                let flipped = match selected.iter().position(|&axis| axis == d) {
                    Some(b) if (c >> b) & 1 == 1 => 1.0 - value,
                    _ => value,
                };
                out.set(d, column, flipped);
            }
        }
    }
    out
}
