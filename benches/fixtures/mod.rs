// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic forests for the rebuild benchmarks (no RNG).

use boltforest::model::{Bolt, Forest, LatticePoint, Sign, Vertex};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// Nested squares, no shared points.
    Quiet,
    /// Nested squares, each crossed by an open bolt that cancels one corner.
    Colliding,
}

fn signed(points: &[LatticePoint], closed: bool, start: Sign) -> Bolt {
    let mut sign = start;
    let vertices = points
        .iter()
        .map(|&point| {
            let vertex = Vertex::signed(point, sign);
            sign = sign.flipped();
            vertex
        })
        .collect();
    Bolt::new(vertices, closed)
}

fn ring(k: i32, side: i32) -> [LatticePoint; 4] {
    let far = side - k;
    [
        LatticePoint::new(k, k),
        LatticePoint::new(k, far),
        LatticePoint::new(far, far),
        LatticePoint::new(far, k),
    ]
}

/// `rings` nested squares on a `2 * rings + 2` wide lattice.
pub fn forest(case: Case, rings: usize) -> Forest {
    let rings = i32::try_from(rings).unwrap_or(i32::MAX / 4);
    let side = 2 * rings + 2;
    let mut forest = Forest::new();

    for k in 0..rings {
        let corners = ring(k, side);
        forest.push_selected(signed(&corners, true, Sign::Plus));

        if let Case::Colliding = case {
            // Middle vertex lands on corner 1 (signed '-') with '+'.
            let crossing = [
                LatticePoint::new(-1 - k, side + 10 + k),
                corners[1],
                LatticePoint::new(-1 - k, 2 * side + 10 + k),
            ];
            forest.push_selected(signed(&crossing, false, Sign::Minus));
        }
    }

    forest
}

pub fn vertex_count(forest: &Forest) -> usize {
    forest.bolts().iter().map(Bolt::len).sum()
}
