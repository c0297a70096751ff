//! King movement, one square in any direction. Castling lives in [`crate::castling`].

use crate::square::Square;

pub(super) fn king_reaches(from: Square, to: Square) -> bool {
    let (file_delta, rank_delta) = from.delta(to);
    file_delta.abs().max(rank_delta.abs()) == 1
}

#[cfg(test)]
mod tests {
    use super::king_reaches;
    use crate::square::Square;

    #[test]
    fn one_square_any_direction() {
        let targets = Square::all().filter(|&to| king_reaches(Square::E4, to)).count();
        assert_eq!(targets, 8);
        assert_eq!(Square::all().filter(|&to| king_reaches(Square::H1, to)).count(), 3);
    }

    #[test]
    fn castling_shape_is_not_a_king_step() {
        assert!(!king_reaches(Square::E1, Square::G1));
        assert!(!king_reaches(Square::E1, Square::C1));
    }
}
