// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Coordinate arithmetic for the flat slot buffer.
//!
//! Values sit at odd coordinates and every parent sits between its two
//! children, so the level of a coordinate is its lowest set bit:
//!
//! ```text
//!     16              -      10000
//!      8       -             x1000
//!      4   -  12   -         xx100
//!      2 - 6 -10 -14 -18     xxx10
//!      1 3 5 7 9 ...         xxxx1
//! ```
//!
//! Throughout, `k` is the level bit of the coordinate being worked on
//! (`1` for leaves, `2` for their parents, and so on). A slot buffer holding
//! `n` elements is exactly `2n` long and coordinate 0 is never used.

/// Coordinate of the leaf holding element `index`.
#[inline]
pub fn leaf(index: usize) -> usize {
    return (index << 1) | 1;
}

/// Element index stored at a leaf coordinate.
#[inline]
pub fn leaf_index(coord: usize) -> usize {
    return coord >> 1;
}

/// The level bit of a coordinate: its lowest set bit.
#[inline]
pub fn level(coord: usize) -> usize {
    return coord & coord.wrapping_neg();
}

/// Parent of `coord`, which sits at level `k`.
#[inline]
pub fn parent(coord: usize, k: usize) -> usize {
    return (coord & !k) | (k << 1);
}

/// The left node of the sibling pair `coord` belongs to at level `k`.
#[inline]
pub fn left_of_pair(coord: usize, k: usize) -> usize {
    return coord & !(k << 1);
}

/// The right node of the sibling pair `coord` belongs to at level `k`.
#[inline]
pub fn right_of_pair(coord: usize, k: usize) -> usize {
    return coord | (k << 1);
}

/// Whether `coord` at level `k` is the right child of its parent.
#[inline]
pub fn is_right_child(coord: usize, k: usize) -> bool {
    return coord & (k << 1) != 0;
}

/// Half-open range of element indices covered by the subtree at `coord`.
#[inline]
pub fn span(coord: usize) -> (usize, usize) {
    let k = level(coord);
    return ((coord - k) >> 1, (coord + k) >> 1);
}

/// Whether every leaf under the node at `coord` (level `k`) exists in a
/// buffer of `slots` coordinates.
#[inline]
pub fn is_complete(coord: usize, k: usize, slots: usize) -> bool {
    return coord + k <= slots;
}
