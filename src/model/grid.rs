// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::point::CellId;

pub const MIN_GRID_DIM: u32 = 5;
pub const MAX_GRID_DIM: u32 = 20;
pub const DEFAULT_GRID_DIM: u32 = 10;

/// Size of the editable grid in cells. Lattice points run from `0..=rows` by `0..=cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    rows: u32,
    cols: u32,
}

impl GridConfig {
    /// Builds a grid, clamping both dimensions into `MIN_GRID_DIM..=MAX_GRID_DIM`.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows: rows.clamp(MIN_GRID_DIM, MAX_GRID_DIM),
            cols: cols.clamp(MIN_GRID_DIM, MAX_GRID_DIM),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn contains_cell(&self, cell: CellId) -> bool {
        cell.row >= 0 && cell.col >= 0 && (cell.row as u32) < self.rows && (cell.col as u32) < self.cols
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_DIM, DEFAULT_GRID_DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::{GridConfig, MAX_GRID_DIM, MIN_GRID_DIM};
    use crate::model::CellId;

    #[test]
    fn dimensions_are_clamped() {
        let grid = GridConfig::new(1, 99);
        assert_eq!(grid.rows(), MIN_GRID_DIM);
        assert_eq!(grid.cols(), MAX_GRID_DIM);
    }

    #[test]
    fn contains_cell_respects_bounds() {
        let grid = GridConfig::new(5, 6);
        assert!(grid.contains_cell(CellId::new(0, 0)));
        assert!(grid.contains_cell(CellId::new(4, 5)));
        assert!(!grid.contains_cell(CellId::new(5, 0)));
        assert!(!grid.contains_cell(CellId::new(0, 6)));
        assert!(!grid.contains_cell(CellId::new(-1, 0)));
    }
}
