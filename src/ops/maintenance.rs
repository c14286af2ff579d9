// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Bolt, CellId, GridConfig, LatticePoint, Session};

use super::EditError;

impl Session {
    pub fn delete_bolt(&mut self, bolt_index: usize) -> Result<Bolt, EditError> {
        self.forest_mut().remove(bolt_index).ok_or(EditError::BoltNotFound { bolt_index })
    }

    /// Drops every bolt, the selection and any draft. The domain is kept.
    pub fn clear_bolts(&mut self) {
        self.forest_mut().clear();
        *self.draft_mut() = None;
    }

    /// Drops bolts, selection, draft and domain.
    pub fn clear_all(&mut self) {
        self.clear_bolts();
        self.domain_mut().clear();
    }

    /// Toggles `(row, col)` in the domain; returns whether the cell is selected afterwards.
    pub fn toggle_domain_cell(&mut self, row: i32, col: i32) -> Result<bool, EditError> {
        let cell = CellId::new(row, col);
        if !self.grid().contains_cell(cell) {
            return Err(EditError::CellOutOfGrid { cell });
        }
        Ok(self.domain_mut().toggle(cell))
    }

    pub fn clear_domain(&mut self) {
        self.domain_mut().clear();
    }

    /// Resizes the grid (clamped) and drops domain cells that no longer fit.
    pub fn set_grid(&mut self, rows: u32, cols: u32) -> GridConfig {
        let grid = GridConfig::new(rows, cols);
        self.set_grid_config(grid);
        self.domain_mut().retain(|cell| grid.contains_cell(*cell));
        grid
    }

    pub fn select_bolt(&mut self, bolt_index: usize) -> Result<(), EditError> {
        if self.forest_mut().select(bolt_index) {
            Ok(())
        } else {
            Err(EditError::BoltNotFound { bolt_index })
        }
    }

    /// Selects the first bolt with a vertex at `point`.
    pub fn select_bolt_at(&mut self, point: LatticePoint) -> Option<usize> {
        let bolt_index = self.forest().bolt_at(point)?;
        self.forest_mut().select(bolt_index);
        Some(bolt_index)
    }

    pub fn find_vertex(&self, bolt_index: usize, point: LatticePoint) -> Option<usize> {
        self.forest().bolt(bolt_index)?.position_of(point)
    }

    /// First edge of the bolt whose segment passes through `point`.
    pub fn find_edge_at(&self, bolt_index: usize, point: LatticePoint) -> Option<usize> {
        self.forest().bolt(bolt_index)?.edge_through(point)
    }
}
