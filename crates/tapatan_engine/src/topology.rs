//! Board graph: which points a piece can slide between.
//!
//! ```text
//! 0---1---2
//! |\  |  /|
//! 3---4---5
//! |/  |  \|
//! 6---7---8
//! ```

use super::position::Position;
use Position::*;

/// Neighbors of each point, ascending, indexed by [`Position::to_index`].
const ADJACENCY: [&[Position]; 9] = [
    &[TopCenter, MiddleLeft, Center],
    &[TopLeft, TopRight, Center],
    &[TopCenter, Center, MiddleRight],
    &[TopLeft, Center, BottomLeft],
    &[
        TopLeft,
        TopCenter,
        TopRight,
        MiddleLeft,
        MiddleRight,
        BottomLeft,
        BottomCenter,
        BottomRight,
    ],
    &[TopRight, Center, BottomRight],
    &[MiddleLeft, Center, BottomCenter],
    &[Center, BottomLeft, BottomRight],
    &[Center, MiddleRight, BottomCenter],
];

/// Points reachable from `pos` by one slide, ascending.
pub fn neighbors(pos: Position) -> &'static [Position] {
    ADJACENCY[pos.to_index()]
}

/// Whether a piece on `from` may slide to `to`.
pub fn is_adjacent(from: Position, to: Position) -> bool {
    neighbors(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_reaches_everything() {
        assert_eq!(neighbors(Center).len(), 8);
        assert!(!is_adjacent(Center, Center));
    }

    #[test]
    fn test_outer_points_have_three_neighbors() {
        for pos in Position::ALL.into_iter().filter(|p| *p != Center) {
            assert_eq!(neighbors(pos).len(), 3, "{pos}");
            assert!(is_adjacent(pos, Center));
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for a in Position::ALL {
            for &b in neighbors(a) {
                assert!(is_adjacent(b, a), "{a} -> {b} has no way back");
            }
        }
    }

    #[test]
    fn test_neighbors_sorted() {
        for pos in Position::ALL {
            assert!(neighbors(pos).windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_no_off_center_diagonals() {
        assert!(!is_adjacent(TopCenter, MiddleLeft));
        assert!(!is_adjacent(TopLeft, TopRight));
    }
}
