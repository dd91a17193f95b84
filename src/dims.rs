use std::ops::Add;

use serde::{Deserialize, Serialize};

/// 2D position or size, `Dims(x, y)`.
///
/// `x` is the column and `y` the row, so `Dims(3, 1)` is the fourth cell of the second row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Iterates over all positions in `from..to`, row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn iter_fill_is_row_major() {
        let all: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(2, 2)).collect();
        assert_eq!(all, vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Dims(2, 3) + Dims(-1, 1), Dims(1, 4));
        assert!(Dims(0, 3).all_non_negative());
        assert!(!(Dims(0, 3) + Dims(-1, 0)).all_non_negative());
    }
}
