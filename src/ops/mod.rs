// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutating operations on a [`Session`](crate::model::Session).
//!
//! Every fallible command validates all of its preconditions before touching the session, so a
//! rejected command is a no-op. Edits that relocate vertices finish with a forest rebuild.

use std::fmt;

use crate::model::{CellId, EdgeAxis, LatticePoint};

mod builder;
mod edit;
mod maintenance;
mod rebuild;
mod signs;

pub use rebuild::{rebuild_forest, RebuildReport};

/// One lattice unit along the axis an edge is allowed to move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    pub fn delta(self) -> i32 {
        match self {
            Self::Negative => -1,
            Self::Positive => 1,
        }
    }
}

/// Screen-style heading for an edge move. Rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Axis of the edges this heading can move, and the shift along the other axis.
    pub fn resolve(self) -> (EdgeAxis, Direction) {
        match self {
            Self::Up => (EdgeAxis::Horizontal, Direction::Negative),
            Self::Down => (EdgeAxis::Horizontal, Direction::Positive),
            Self::Left => (EdgeAxis::Vertical, Direction::Negative),
            Self::Right => (EdgeAxis::Vertical, Direction::Positive),
        }
    }
}

/// Result of a successful `append_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The draft grew by one point.
    Extended,
    /// The point closed the loop and the draft was committed at `bolt_index`.
    Closed { bolt_index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    NoDraft,
    DraftClosed,
    OutOfDomain { point: LatticePoint },
    ZeroLengthStep { point: LatticePoint },
    DiagonalStep { from: LatticePoint, to: LatticePoint },
    InvalidTurn { at: LatticePoint },
    RepeatedPoint { point: LatticePoint },
    PointOccupied { point: LatticePoint, bolt_index: usize },
    TooShort { len: usize },
    BoltNotFound { bolt_index: usize },
    VertexNotFound { bolt_index: usize, vertex_index: usize },
    EdgeNotFound { bolt_index: usize, edge_index: usize },
    EdgeNotAxisAligned { bolt_index: usize, edge_index: usize },
    HeadingMismatch { edge_axis: EdgeAxis, heading: Heading },
    SameVertex { vertex_index: usize },
    Unsigned { vertex_index: usize },
    SignMismatch,
    SharedAxis,
    ParityMismatch,
    CellOutOfGrid { cell: CellId },
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDraft => f.write_str("no path is being drawn"),
            Self::DraftClosed => f.write_str("the path being drawn is already closed"),
            Self::OutOfDomain { point } => write!(f, "point {point} is outside the domain"),
            Self::ZeroLengthStep { point } => write!(f, "point {point} repeats the previous point"),
            Self::DiagonalStep { from, to } => {
                write!(f, "step {from} -> {to} is not horizontal or vertical")
            }
            Self::InvalidTurn { at } => write!(f, "path does not turn by 90 degrees at {at}"),
            Self::RepeatedPoint { point } => write!(f, "point {point} is already on the path"),
            Self::PointOccupied { point, bolt_index } => {
                write!(f, "point {point} is already a vertex of bolt {bolt_index}")
            }
            Self::TooShort { len } => write!(f, "path has {len} point(s); at least 2 are needed"),
            Self::BoltNotFound { bolt_index } => write!(f, "bolt not found (index={bolt_index})"),
            Self::VertexNotFound { bolt_index, vertex_index } => {
                write!(f, "vertex not found (bolt={bolt_index}, vertex={vertex_index})")
            }
            Self::EdgeNotFound { bolt_index, edge_index } => {
                write!(f, "edge not found (bolt={bolt_index}, edge={edge_index})")
            }
            Self::EdgeNotAxisAligned { bolt_index, edge_index } => write!(
                f,
                "edge is neither horizontal nor vertical (bolt={bolt_index}, edge={edge_index})"
            ),
            Self::HeadingMismatch { edge_axis, heading } => {
                write!(f, "a {edge_axis:?} edge cannot move {heading:?}")
            }
            Self::SameVertex { vertex_index } => {
                write!(f, "rectangle corners must be two different vertices (got {vertex_index} twice)")
            }
            Self::Unsigned { vertex_index } => write!(f, "vertex {vertex_index} has no sign"),
            Self::SignMismatch => f.write_str("rectangle corners carry different signs"),
            Self::SharedAxis => f.write_str("rectangle corners share a row or column"),
            Self::ParityMismatch => {
                f.write_str("sign and diagonal do not allow a swap ('-' needs main, '+' needs anti)")
            }
            Self::CellOutOfGrid { cell } => write!(f, "{cell} is outside the grid"),
        }
    }
}

impl std::error::Error for EditError {}
