//! Knight movement.

use crate::square::Square;

/// Knights jump in an L: two squares one way, one square the other.
pub(super) fn knight_reaches(from: Square, to: Square) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    matches!(
        (file_delta.abs(), rank_delta.abs()),
        (1, 2) | (2, 1)
    )
}
