// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Incremental path construction.
//!
//! Shape rules are enforced per appended point, so a draft is always a valid prefix of a bolt:
//! every step is horizontal or vertical and every interior vertex is a right-angle turn.

use crate::model::geometry::{edge_axis, valid_turn};
use crate::model::{Bolt, LatticePoint, Session, Vertex};

use super::{AppendOutcome, EditError};

fn check_step(from: LatticePoint, to: LatticePoint) -> Result<(), EditError> {
    if from == to {
        return Err(EditError::ZeroLengthStep { point: to });
    }
    if edge_axis(from, to).is_none() {
        return Err(EditError::DiagonalStep { from, to });
    }
    Ok(())
}

impl Session {
    /// Discards any draft and starts an empty open one.
    pub fn start_new_path(&mut self) {
        *self.draft_mut() = Some(Bolt::default());
    }

    pub fn cancel_path(&mut self) {
        *self.draft_mut() = None;
    }

    /// Appends `point` to the draft, committing the draft as a closed bolt when `point` closes
    /// the loop on its first vertex.
    pub fn append_point(&mut self, point: LatticePoint) -> Result<AppendOutcome, EditError> {
        let draft = self.draft().ok_or(EditError::NoDraft)?;
        if draft.is_closed() {
            return Err(EditError::DraftClosed);
        }
        if !self.domain().contains_point(point) {
            return Err(EditError::OutOfDomain { point });
        }

        let len = draft.len();
        let (Some(first), Some(last)) = (draft.first_point(), draft.last_point()) else {
            self.ensure_unoccupied(point)?;
            self.push_draft_point(point);
            return Ok(AppendOutcome::Extended);
        };

        if len >= 3 && point == first {
            check_step(last, point)?;
            let before_last = draft.point(len - 2).ok_or(EditError::TooShort { len })?;
            if !valid_turn(before_last, last, point) {
                return Err(EditError::InvalidTurn { at: last });
            }
            let bolt_index = self.commit_draft(true)?;
            return Ok(AppendOutcome::Closed { bolt_index });
        }

        check_step(last, point)?;
        if let Some(before_last) = len.checked_sub(2).and_then(|i| draft.point(i)) {
            if !valid_turn(before_last, last, point) {
                return Err(EditError::InvalidTurn { at: last });
            }
        }
        if draft.contains_point(point) {
            return Err(EditError::RepeatedPoint { point });
        }
        self.ensure_unoccupied(point)?;
        self.push_draft_point(point);
        Ok(AppendOutcome::Extended)
    }

    /// Commits the draft as an open bolt. Needs at least two points.
    pub fn finish_open_path(&mut self) -> Result<usize, EditError> {
        let draft = self.draft().ok_or(EditError::NoDraft)?;
        if draft.len() < 2 {
            return Err(EditError::TooShort { len: draft.len() });
        }
        self.commit_draft(false)
    }

    fn ensure_unoccupied(&self, point: LatticePoint) -> Result<(), EditError> {
        match self.forest().bolt_at(point) {
            Some(bolt_index) => Err(EditError::PointOccupied { point, bolt_index }),
            None => Ok(()),
        }
    }

    fn push_draft_point(&mut self, point: LatticePoint) {
        if let Some(draft) = self.draft_mut() {
            draft.vertices_mut().push(Vertex::new(point));
        }
    }

    fn commit_draft(&mut self, closed: bool) -> Result<usize, EditError> {
        let mut bolt = self.draft_mut().take().ok_or(EditError::NoDraft)?;
        bolt.set_closed(closed);
        crate::log::debug!(len = bolt.len(), closed, "committing drawn bolt");
        Ok(self.forest_mut().push_selected(bolt))
    }
}
