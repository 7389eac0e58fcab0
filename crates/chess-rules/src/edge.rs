//! Precomputed distances from each square to the board edge.
//!
//! Sliding rays, king steps, and knight jumps all consult this table
//! instead of bounds-checking raw index arithmetic, which would wrap
//! across files.

use chess_core::Square;

/// A ray direction on the board, in the fixed table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
    NorthWest = 4,
    SouthEast = 5,
    NorthEast = 6,
    SouthWest = 7,
}

impl Direction {
    /// All eight directions in table order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// The four rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The four bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// Returns the square-index delta for one step in this direction.
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => 8,
            Direction::South => -8,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthWest => 7,
            Direction::SouthEast => -7,
            Direction::NorthEast => 9,
            Direction::SouthWest => -9,
        }
    }

    /// Returns the index into the distance table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// For every square, the number of steps in each direction before
/// leaving the board. Built once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct EdgeDistanceTable {
    distances: [[u8; 8]; 64],
}

impl EdgeDistanceTable {
    /// Builds the table.
    pub fn new() -> Self {
        let mut distances = [[0u8; 8]; 64];

        for rank in 0..8u8 {
            for file in 0..8u8 {
                let north = 7 - rank;
                let south = rank;
                let east = 7 - file;
                let west = file;
                distances[(rank * 8 + file) as usize] = [
                    north,
                    south,
                    east,
                    west,
                    north.min(west),
                    south.min(east),
                    north.min(east),
                    south.min(west),
                ];
            }
        }

        EdgeDistanceTable { distances }
    }

    /// Returns the number of steps from `square` to the edge in `direction`.
    #[inline]
    pub fn distance(&self, square: Square, direction: Direction) -> u8 {
        self.distances[square.index()][direction.index()]
    }
}

impl Default for EdgeDistanceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_interior_distances() {
        let table = EdgeDistanceTable::new();

        let a1 = Square::A1;
        assert_eq!(
            Direction::ALL.map(|d| table.distance(a1, d)),
            [7, 0, 7, 0, 0, 0, 7, 0]
        );

        let b1 = Square::B1;
        assert_eq!(
            Direction::ALL.map(|d| table.distance(b1, d)),
            [7, 0, 6, 1, 1, 0, 6, 0]
        );

        let c7 = Square::new(2, 6);
        assert_eq!(
            Direction::ALL.map(|d| table.distance(c7, d)),
            [1, 6, 5, 2, 1, 5, 1, 2]
        );
    }

    #[test]
    fn rays_stay_on_the_board() {
        let table = EdgeDistanceTable::new();
        for square in Square::all() {
            for direction in Direction::ALL {
                let steps = table.distance(square, direction);
                let mut file = square.file() as i8;
                let mut rank = square.rank() as i8;
                let (df, dr) = match direction {
                    Direction::North => (0, 1),
                    Direction::South => (0, -1),
                    Direction::East => (1, 0),
                    Direction::West => (-1, 0),
                    Direction::NorthWest => (-1, 1),
                    Direction::SouthEast => (1, -1),
                    Direction::NorthEast => (1, 1),
                    Direction::SouthWest => (-1, -1),
                };
                for _ in 0..steps {
                    file += df;
                    rank += dr;
                }
                // The full ray ends on the board, one more step leaves it
                assert!((0..8).contains(&file) && (0..8).contains(&rank));
                assert!(!(0..8).contains(&(file + df)) || !(0..8).contains(&(rank + dr)));
            }
        }
    }
}
