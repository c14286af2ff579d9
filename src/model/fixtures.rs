// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::bolt::{Bolt, Vertex};
use super::domain::Domain;
use super::grid::GridConfig;
use super::point::{CellId, LatticePoint};
use super::session::Session;
use super::sign::Sign;

pub(crate) fn p(row: i32, col: i32) -> LatticePoint {
    LatticePoint::new(row, col)
}

/// Cells `(0..rows) x (0..cols)`.
pub(crate) fn block_domain(rows: i32, cols: i32) -> Domain {
    Domain::from_cells((0..rows).flat_map(|r| (0..cols).map(move |c| CellId::new(r, c))))
}

pub(crate) fn block_session(rows: i32, cols: i32) -> Session {
    Session::with_domain(GridConfig::default(), block_domain(rows, cols))
}

/// Alternately signed bolt starting at `start`, or unsigned when `start` is `None`.
pub(crate) fn bolt(points: &[(i32, i32)], closed: bool, start: Option<Sign>) -> Bolt {
    let mut sign = start;
    let vertices = points
        .iter()
        .map(|&(row, col)| {
            let vertex = Vertex { point: p(row, col), sign };
            sign = sign.map(Sign::flipped);
            vertex
        })
        .collect();
    Bolt::new(vertices, closed)
}

/// Commits `bolt` directly, bypassing the path builder, and selects it.
pub(crate) fn insert_bolt(session: &mut Session, bolt: Bolt) -> usize {
    session.forest_mut().push_selected(bolt)
}

/// 2x2 domain holding the closed square (0,0) (0,2) (2,2) (2,0), signed from `+`.
pub(crate) fn signed_square_session() -> Session {
    let mut session = block_session(2, 2);
    insert_bolt(
        &mut session,
        bolt(&[(0, 0), (0, 2), (2, 2), (2, 0)], true, Some(Sign::Plus)),
    );
    session
}

pub(crate) fn points_of(bolt: &Bolt) -> Vec<(i32, i32)> {
    bolt.points().map(|pt| (pt.row, pt.col)).collect()
}
