use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, also used for `(height, width)` sizes.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Positions of the 3×3 block around `center`, without the center itself, clipped to `size`.
pub fn neighbors_of(center: Coord2, size: Coord2) -> NeighborIter {
    NeighborIter::new(center, size)
}

/// Whether `coords` lies inside the 3×3 block around `center` (center included).
pub const fn is_within_block(center: Coord2, coords: Coord2) -> bool {
    center.0.abs_diff(coords.0) < 2 && center.1.abs_diff(coords.1) < 2
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // boards are built from `Coord` sizes, so the dimensions always fit
        neighbors_of(index, (rows as Coord, cols as Coord))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (height, width) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= height {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= width {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = neighbors_of((1, 1), (3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        assert_eq!(
            neighbors_of((0, 0), (3, 4)).collect::<Vec<_>>(),
            [(0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(neighbors_of((2, 3), (3, 4)).count(), 3);
        assert_eq!(neighbors_of((0, 2), (3, 4)).count(), 5);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors_of((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn edge_of_coord_range_does_not_overflow() {
        let max = Coord::MAX;
        let neighbors: Vec<_> = neighbors_of((max - 1, max - 1), (max, max)).collect();

        assert_eq!(neighbors, [(max - 2, max - 2), (max - 2, max - 1), (max - 1, max - 2)]);
    }

    #[test]
    fn block_membership_includes_center() {
        assert!(is_within_block((2, 2), (2, 2)));
        assert!(is_within_block((2, 2), (1, 3)));
        assert!(!is_within_block((2, 2), (0, 2)));
        assert!(!is_within_block((0, 0), (0, 2)));
    }
}
