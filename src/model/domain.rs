// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::point::{CellId, LatticePoint};

/// The set of selected cells. A lattice point is legal iff it is a corner of a selected cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    cells: BTreeSet<CellId>,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: impl IntoIterator<Item = CellId>) -> Self {
        Self { cells: cells.into_iter().collect() }
    }

    pub fn cells(&self) -> &BTreeSet<CellId> {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains_cell(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    pub fn contains_point(&self, point: LatticePoint) -> bool {
        CellId::touching(point).any(|cell| self.cells.contains(&cell))
    }

    /// Flips membership of `cell`; returns `true` if the cell is selected afterwards.
    pub fn toggle(&mut self, cell: CellId) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    pub fn retain(&mut self, keep: impl FnMut(&CellId) -> bool) {
        self.cells.retain(keep);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Domain;
    use crate::model::{CellId, LatticePoint};

    #[test]
    fn corners_of_a_selected_cell_are_in_domain() {
        let domain = Domain::from_cells([CellId::new(2, 3)]);
        for (row, col) in [(2, 3), (2, 4), (3, 3), (3, 4)] {
            assert!(domain.contains_point(LatticePoint::new(row, col)));
        }
        assert!(!domain.contains_point(LatticePoint::new(1, 3)));
        assert!(!domain.contains_point(LatticePoint::new(2, 5)));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut domain = Domain::new();
        assert!(domain.toggle(CellId::new(0, 0)));
        assert!(domain.contains_cell(CellId::new(0, 0)));
        assert!(!domain.toggle(CellId::new(0, 0)));
        assert!(domain.is_empty());
    }
}
