// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A lattice point addressed by `(row, col)`.
///
/// Points are plain values: equality, ordering and hashing are structural, so a
/// point can key maps and sets directly without a string encoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct LatticePoint {
    pub row: i32,
    pub col: i32,
}

impl LatticePoint {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset from `self` to `other` as `(d_row, d_col)`, widened so it cannot overflow.
    pub fn delta_to(self, other: Self) -> (i64, i64) {
        (i64::from(other.row) - i64::from(self.row), i64::from(other.col) - i64::from(self.col))
    }

    pub fn with_row(self, row: i32) -> Self {
        Self { row, ..self }
    }

    pub fn with_col(self, col: i32) -> Self {
        Self { col, ..self }
    }
}

impl From<(i32, i32)> for LatticePoint {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit lattice cell. Cell `(r, c)` spans the corners `(r, c)` through `(r + 1, c + 1)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub struct CellId {
    pub row: i32,
    pub col: i32,
}

impl CellId {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Corner points of the cell. Corners past `i32::MAX` do not exist and are skipped.
    pub fn corners(self) -> impl Iterator<Item = LatticePoint> {
        let rows = [Some(self.row), self.row.checked_add(1)];
        let cols = [Some(self.col), self.col.checked_add(1)];
        rows.into_iter().flatten().flat_map(move |row| {
            cols.into_iter().flatten().map(move |col| LatticePoint::new(row, col))
        })
    }

    /// The (up to) four cells that have `point` as a corner.
    pub fn touching(point: LatticePoint) -> impl Iterator<Item = CellId> {
        let rows = [point.row.checked_sub(1), Some(point.row)];
        let cols = [point.col.checked_sub(1), Some(point.col)];
        rows.into_iter().flatten().flat_map(move |row| {
            cols.into_iter().flatten().map(move |col| CellId::new(row, col))
        })
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellId, LatticePoint};

    #[test]
    fn points_with_swapped_digits_stay_distinct() {
        let a = LatticePoint::new(1, 23);
        let b = LatticePoint::new(12, 3);
        assert_ne!(a, b);

        let set = [a, b].into_iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn every_corner_of_a_cell_touches_it() {
        let cell = CellId::new(3, 4);
        assert_eq!(cell.corners().count(), 4);
        for corner in cell.corners() {
            assert!(CellId::touching(corner).any(|c| c == cell), "{corner} should touch {cell}");
        }
    }

    #[test]
    fn extreme_coordinates_have_fewer_neighbours() {
        let low = LatticePoint::new(i32::MIN, i32::MIN);
        assert_eq!(CellId::touching(low).collect::<Vec<_>>(), vec![CellId::new(i32::MIN, i32::MIN)]);
        assert_eq!(CellId::touching(LatticePoint::new(i32::MIN, 0)).count(), 2);

        let high = CellId::new(i32::MAX, 0);
        assert_eq!(high.corners().count(), 2);
        assert!(high.corners().all(|corner| corner.row == i32::MAX));
    }

    #[test]
    fn delta_spans_the_full_range() {
        let a = LatticePoint::new(i32::MIN, 0);
        let b = LatticePoint::new(i32::MAX, 0);
        assert_eq!(a.delta_to(b), (i64::from(i32::MAX) - i64::from(i32::MIN), 0));
    }
}
