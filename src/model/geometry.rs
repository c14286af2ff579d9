// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lattice geometry predicates shared by the path builder, edits and rebuild.

use super::point::LatticePoint;

/// Orientation of an edge between two lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeAxis {
    /// Equal rows.
    Horizontal,
    /// Equal columns.
    Vertical,
}

/// Classifies the step `from -> to`. `None` for zero-length or diagonal steps.
pub fn edge_axis(from: LatticePoint, to: LatticePoint) -> Option<EdgeAxis> {
    match (from.row == to.row, from.col == to.col) {
        (true, false) => Some(EdgeAxis::Horizontal),
        (false, true) => Some(EdgeAxis::Vertical),
        _ => None,
    }
}

/// `true` when `(a -> b)` and `(b -> c)` are perpendicular (dot product zero).
pub fn valid_turn(a: LatticePoint, b: LatticePoint, c: LatticePoint) -> bool {
    let (r1, c1) = a.delta_to(b);
    let (r2, c2) = b.delta_to(c);
    i128::from(r1) * i128::from(r2) + i128::from(c1) * i128::from(c2) == 0
}

/// `true` when the three points lie on one line (cross product zero).
pub fn collinear(a: LatticePoint, b: LatticePoint, c: LatticePoint) -> bool {
    let (r1, c1) = a.delta_to(b);
    let (r2, c2) = b.delta_to(c);
    i128::from(r1) * i128::from(c2) - i128::from(c1) * i128::from(r2) == 0
}

/// `true` if any three consecutive points (cyclically when `closed`) are collinear.
pub fn has_collinear_run(points: &[LatticePoint], closed: bool) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let windows = if closed { n } else { n - 2 };
    (0..windows).any(|i| collinear(points[i], points[(i + 1) % n], points[(i + 2) % n]))
}

/// `true` if `point` lies on the closed segment `a..=b` of an axis-aligned edge.
pub fn segment_contains(a: LatticePoint, b: LatticePoint, point: LatticePoint) -> bool {
    match edge_axis(a, b) {
        Some(EdgeAxis::Horizontal) => {
            point.row == a.row && point.col >= a.col.min(b.col) && point.col <= a.col.max(b.col)
        }
        Some(EdgeAxis::Vertical) => {
            point.col == a.col && point.row >= a.row.min(b.row) && point.row <= a.row.max(b.row)
        }
        None => point == a || point == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> LatticePoint {
        LatticePoint::new(row, col)
    }

    #[test]
    fn edge_axis_rejects_diagonal_and_zero_steps() {
        assert_eq!(edge_axis(p(0, 0), p(0, 3)), Some(EdgeAxis::Horizontal));
        assert_eq!(edge_axis(p(0, 0), p(2, 0)), Some(EdgeAxis::Vertical));
        assert_eq!(edge_axis(p(0, 0), p(1, 1)), None);
        assert_eq!(edge_axis(p(4, 4), p(4, 4)), None);
    }

    #[test]
    fn valid_turn_needs_right_angle() {
        assert!(valid_turn(p(0, 0), p(0, 2), p(3, 2)));
        assert!(!valid_turn(p(0, 0), p(0, 2), p(0, 4)));
        assert!(!valid_turn(p(0, 0), p(0, 2), p(0, 1)));
    }

    #[test]
    fn collinear_run_wraps_only_when_closed() {
        let points = [p(0, 1), p(0, 2), p(1, 2), p(1, 0), p(0, 0)];
        assert!(!has_collinear_run(&points, false));
        assert!(has_collinear_run(&points, true));
    }

    #[test]
    fn segment_contains_interior_and_endpoints() {
        assert!(segment_contains(p(2, 1), p(2, 5), p(2, 3)));
        assert!(segment_contains(p(2, 1), p(2, 5), p(2, 5)));
        assert!(!segment_contains(p(2, 1), p(2, 5), p(3, 3)));
        assert!(segment_contains(p(4, 0), p(1, 0), p(2, 0)));
    }
}
