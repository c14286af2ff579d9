// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Bolt, Session, Sign};

use super::EditError;

/// Relabels every vertex in path order, starting at `start` and flipping after each vertex.
///
/// Odd closed bolts end up with equal signs across the closing edge; that seam is left alone.
pub(crate) fn assign_alternating(bolt: &mut Bolt, start: Sign) {
    let mut sign = start;
    for vertex in bolt.vertices_mut() {
        vertex.sign = Some(sign);
        sign = sign.flipped();
    }
}

impl Session {
    pub fn assign_signs(&mut self, bolt_index: usize, start: Sign) -> Result<(), EditError> {
        let bolt = self
            .forest_mut()
            .bolts_mut()
            .get_mut(bolt_index)
            .ok_or(EditError::BoltNotFound { bolt_index })?;
        assign_alternating(bolt, start);
        Ok(())
    }

    pub fn clear_signs(&mut self, bolt_index: usize) -> Result<(), EditError> {
        let bolt = self
            .forest_mut()
            .bolts_mut()
            .get_mut(bolt_index)
            .ok_or(EditError::BoltNotFound { bolt_index })?;
        bolt.clear_signs();
        Ok(())
    }
}
