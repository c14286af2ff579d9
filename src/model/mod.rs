// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session owns the grid, the domain, the forest of committed bolts and at most one draft.

pub mod bolt;
pub mod domain;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod forest;
pub mod geometry;
pub mod grid;
pub mod point;
pub mod session;
pub mod sign;

pub use bolt::{Bolt, Vertex};
pub use domain::Domain;
pub use forest::Forest;
pub use geometry::EdgeAxis;
pub use grid::GridConfig;
pub use point::{CellId, LatticePoint};
pub use session::Session;
pub use sign::{ParseSignError, Sign, SignSum};
