use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
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

/// Converts an `ndarray` dimension pair back into board coordinates.
pub(crate) fn dim_to_size((rows, cols): (usize, usize)) -> Coord2 {
    (
        rows.try_into().unwrap_or(Coord::MAX),
        cols.try_into().unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, dim_to_size(self.dim()))
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
    let (dr, dc) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(dr.into())?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(dc.into())?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up-to-8 neighbours of a cell, clipped at the board edges.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
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
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn edge_is_clipped() {
        let neighbors: Vec<_> = NeighborIter::new((2, 1), (3, 4)).collect();
        assert_eq!(neighbors, [(1, 0), (1, 1), (1, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }
}
