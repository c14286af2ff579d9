// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural edits: edge move and rectangle swap.
//!
//! Both compute the relocated positions up front, validate them, and only then write them into
//! the forest and rebuild. A rejected edit leaves the session untouched.

use crate::model::{EdgeAxis, LatticePoint, Session, Sign};

use super::rebuild::{rebuild_forest, RebuildReport};
use super::{Direction, EditError, Heading};

impl Session {
    /// Slides edge `edge_index` of bolt `bolt_index` one unit across its own axis: vertical
    /// edges move along columns, horizontal edges along rows.
    pub fn move_edge(
        &mut self,
        bolt_index: usize,
        edge_index: usize,
        direction: Direction,
    ) -> Result<RebuildReport, EditError> {
        let axis = self.movable_edge_axis(bolt_index, edge_index)?;
        self.shift_edge(bolt_index, edge_index, axis, direction)
    }

    /// Like [`Session::move_edge`], but driven by a heading: `Left`/`Right` only move vertical
    /// edges and `Up`/`Down` only move horizontal ones.
    pub fn move_edge_toward(
        &mut self,
        bolt_index: usize,
        edge_index: usize,
        heading: Heading,
    ) -> Result<RebuildReport, EditError> {
        let axis = self.movable_edge_axis(bolt_index, edge_index)?;
        let (movable_axis, direction) = heading.resolve();
        if axis != movable_axis {
            return Err(EditError::HeadingMismatch { edge_axis: axis, heading });
        }
        self.shift_edge(bolt_index, edge_index, axis, direction)
    }

    fn movable_edge_axis(&self, bolt_index: usize, edge_index: usize) -> Result<EdgeAxis, EditError> {
        let bolt = self.forest().bolt(bolt_index).ok_or(EditError::BoltNotFound { bolt_index })?;
        if bolt.edge(edge_index).is_none() {
            return Err(EditError::EdgeNotFound { bolt_index, edge_index });
        }
        bolt.edge_axis(edge_index)
            .ok_or(EditError::EdgeNotAxisAligned { bolt_index, edge_index })
    }

    fn shift_edge(
        &mut self,
        bolt_index: usize,
        edge_index: usize,
        axis: EdgeAxis,
        direction: Direction,
    ) -> Result<RebuildReport, EditError> {
        let bolt = self.forest().bolt(bolt_index).ok_or(EditError::BoltNotFound { bolt_index })?;
        let (a, b) = bolt.edge(edge_index).ok_or(EditError::EdgeNotFound { bolt_index, edge_index })?;

        // A shift past the i32 range cannot land in any cell, so it is reported on the old point.
        let shift = |point: LatticePoint| {
            let shifted = match axis {
                EdgeAxis::Vertical => {
                    point.col.checked_add(direction.delta()).map(|col| point.with_col(col))
                }
                EdgeAxis::Horizontal => {
                    point.row.checked_add(direction.delta()).map(|row| point.with_row(row))
                }
            };
            match shifted {
                Some(target) if self.domain().contains_point(target) => Ok(target),
                Some(target) => Err(EditError::OutOfDomain { point: target }),
                None => Err(EditError::OutOfDomain { point }),
            }
        };
        let moved = [(a, shift(bolt.vertices()[a].point)?), (b, shift(bolt.vertices()[b].point)?)];

        crate::log::debug!(bolt_index, edge_index, ?axis, ?direction, "moving edge");
        self.relocate_and_rebuild(bolt_index, &moved)
    }

    /// Moves two equally signed vertices to the other diagonal of the rectangle they span.
    ///
    /// Only one direction per sign is legal. A `-` pair must start on the main diagonal (rows and
    /// columns increase together) and exchanges columns. A `+` pair must start on the
    /// anti-diagonal; `idx_a` goes to the top-left corner and `idx_b` to the bottom-right.
    pub fn swap_rectangle(
        &mut self,
        bolt_index: usize,
        idx_a: usize,
        idx_b: usize,
    ) -> Result<RebuildReport, EditError> {
        let bolt = self.forest().bolt(bolt_index).ok_or(EditError::BoltNotFound { bolt_index })?;
        if idx_a == idx_b {
            return Err(EditError::SameVertex { vertex_index: idx_a });
        }
        let vertex = |vertex_index: usize| {
            bolt.vertices()
                .get(vertex_index)
                .copied()
                .ok_or(EditError::VertexNotFound { bolt_index, vertex_index })
        };
        let (va, vb) = (vertex(idx_a)?, vertex(idx_b)?);
        let sign = va.sign.ok_or(EditError::Unsigned { vertex_index: idx_a })?;
        if vb.sign.ok_or(EditError::Unsigned { vertex_index: idx_b })? != sign {
            return Err(EditError::SignMismatch);
        }

        let (pa, pb) = (va.point, vb.point);
        if pa.row == pb.row || pa.col == pb.col {
            return Err(EditError::SharedAxis);
        }
        let (min_row, max_row) = (pa.row.min(pb.row), pa.row.max(pb.row));
        let (min_col, max_col) = (pa.col.min(pb.col), pa.col.max(pb.col));
        let corners = [
            LatticePoint::new(min_row, min_col),
            LatticePoint::new(min_row, max_col),
            LatticePoint::new(max_row, min_col),
            LatticePoint::new(max_row, max_col),
        ];
        if let Some(&point) = corners.iter().find(|&&c| !self.domain().contains_point(c)) {
            return Err(EditError::OutOfDomain { point });
        }

        let well_ordered = (pa.row < pb.row) == (pa.col < pb.col);
        let moved = match (sign, well_ordered) {
            (Sign::Minus, true) => [(idx_a, pa.with_col(pb.col)), (idx_b, pb.with_col(pa.col))],
            (Sign::Plus, false) => [(idx_a, corners[0]), (idx_b, corners[3])],
            _ => return Err(EditError::ParityMismatch),
        };
        crate::log::debug!(bolt_index, idx_a, idx_b, %sign, well_ordered, "swapping rectangle");
        self.relocate_and_rebuild(bolt_index, &moved)
    }

    /// Writes every relocation first, then rebuilds once on the complete snapshot.
    fn relocate_and_rebuild(
        &mut self,
        bolt_index: usize,
        moved: &[(usize, LatticePoint)],
    ) -> Result<RebuildReport, EditError> {
        let bolt = self
            .forest_mut()
            .bolts_mut()
            .get_mut(bolt_index)
            .ok_or(EditError::BoltNotFound { bolt_index })?;
        for &(vertex_index, point) in moved {
            bolt.vertices_mut()[vertex_index].point = point;
        }
        Ok(rebuild_forest(self.forest_mut()))
    }
}
