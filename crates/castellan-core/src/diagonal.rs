//! Precomputed diagonal lines used for bishop and queen path scans.
//!
//! Each square lies on one diagonal of each family. A square's id in a family
//! is fixed by its coordinates, and the line for every id is stored in the
//! order squares are visited rank by rank, so two squares on the same line
//! can be compared by position and everything between them read as a slice.

use crate::square::Square;

/// Number of diagonals in each family.
pub const DIAGONAL_COUNT: usize = 15;

/// One of the two diagonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalFamily {
    /// Lines running from the top-left to the bottom-right (a2-b1, a8-h1, ...).
    /// Id is `rank + file`, so a1 is diagonal 0.
    TopLeftBottomRight = 0,
    /// Lines running from the bottom-left to the top-right (a1-h8, ...).
    /// Id is `7 - rank + file`, so a8 is diagonal 0.
    BottomLeftTopRight = 1,
}

impl DiagonalFamily {
    pub const ALL: [DiagonalFamily; 2] = [
        DiagonalFamily::TopLeftBottomRight,
        DiagonalFamily::BottomLeftTopRight,
    ];

    /// The id of the diagonal in this family that `sq` lies on.
    #[inline]
    pub const fn id_of(self, sq: Square) -> u8 {
        let rank = sq.rank() as u8;
        let file = sq.file() as u8;
        match self {
            DiagonalFamily::TopLeftBottomRight => rank + file,
            DiagonalFamily::BottomLeftTopRight => 7 - rank + file,
        }
    }
}

/// Every diagonal of both families, as ordered square lists.
pub struct DiagonalIndex {
    lines: [[[Square; 8]; DIAGONAL_COUNT]; 2],
    lens: [[u8; DIAGONAL_COUNT]; 2],
}

/// The diagonal index, built once at compile time.
pub static DIAGONALS: DiagonalIndex = DiagonalIndex::build();

impl DiagonalIndex {
    const fn build() -> DiagonalIndex {
        let mut lines = [[[Square::A1; 8]; DIAGONAL_COUNT]; 2];
        let mut lens = [[0u8; DIAGONAL_COUNT]; 2];
        let mut index = 0u8;
        while index < 64 {
            let sq = match Square::from_index(index) {
                Some(sq) => sq,
                None => unreachable!(),
            };
            let mut family = 0;
            while family < 2 {
                let id = DiagonalFamily::ALL[family].id_of(sq) as usize;
                let len = lens[family][id] as usize;
                lines[family][id][len] = sq;
                lens[family][id] += 1;
                family += 1;
            }
            index += 1;
        }
        DiagonalIndex { lines, lens }
    }

    /// The ordered squares of diagonal `id` in `family`.
    ///
    /// # Panics
    ///
    /// Panics if `id >= DIAGONAL_COUNT`.
    pub fn line(&self, family: DiagonalFamily, id: u8) -> &[Square] {
        let f = family as usize;
        let id = id as usize;
        &self.lines[f][id][..self.lens[f][id] as usize]
    }

    /// The squares strictly between `from` and `to` along a shared diagonal,
    /// or `None` if the two squares do not share a diagonal of `family`.
    pub fn between(&self, family: DiagonalFamily, from: Square, to: Square) -> Option<&[Square]> {
        let id = family.id_of(from);
        if id != family.id_of(to) {
            return None;
        }
        let line = self.line(family, id);
        let a = line.iter().position(|&sq| sq == from)?;
        let b = line.iter().position(|&sq| sq == to)?;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        Some(&line[(lo + 1).min(hi)..hi])
    }
}

#[cfg(test)]
mod tests {
    use super::{DIAGONAL_COUNT, DIAGONALS, DiagonalFamily};
    use crate::square::Square;

    #[test]
    fn every_square_appears_once_per_family() {
        for family in DiagonalFamily::ALL {
            let total: usize = (0..DIAGONAL_COUNT as u8)
                .map(|id| DIAGONALS.line(family, id).len())
                .sum();
            assert_eq!(total, Square::COUNT);
        }
    }

    #[test]
    fn corner_ids() {
        assert_eq!(DiagonalFamily::TopLeftBottomRight.id_of(Square::A1), 0);
        assert_eq!(DiagonalFamily::TopLeftBottomRight.id_of(Square::H8), 14);
        assert_eq!(DiagonalFamily::BottomLeftTopRight.id_of(Square::A8), 0);
        assert_eq!(DiagonalFamily::BottomLeftTopRight.id_of(Square::H1), 14);
        assert_eq!(DiagonalFamily::BottomLeftTopRight.id_of(Square::A1), 7);
    }

    #[test]
    fn lines_are_rank_ordered() {
        let long = DIAGONALS.line(DiagonalFamily::BottomLeftTopRight, 7);
        assert_eq!(long.len(), 8);
        assert_eq!(long[0], Square::A1);
        assert_eq!(long[7], Square::H8);

        let anti = DIAGONALS.line(DiagonalFamily::TopLeftBottomRight, 7);
        assert_eq!(anti[0], Square::H1);
        assert_eq!(anti[7], Square::A8);
    }

    #[test]
    fn between_in_either_direction() {
        let fwd = DIAGONALS
            .between(DiagonalFamily::BottomLeftTopRight, Square::C1, Square::F4)
            .unwrap();
        assert_eq!(fwd, &[Square::D2, Square::E3]);
        let back = DIAGONALS
            .between(DiagonalFamily::BottomLeftTopRight, Square::F4, Square::C1)
            .unwrap();
        assert_eq!(back, &[Square::D2, Square::E3]);
    }

    #[test]
    fn between_adjacent_is_empty() {
        let none = DIAGONALS
            .between(DiagonalFamily::TopLeftBottomRight, Square::D4, Square::C5)
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn between_rejects_other_lines() {
        assert!(
            DIAGONALS
                .between(DiagonalFamily::TopLeftBottomRight, Square::C1, Square::F4)
                .is_none()
        );
    }
}
