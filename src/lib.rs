// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boltforest: signed axis-aligned lattice paths with collision-cancelling rebuilds.
//!
//! A [`model::Session`] owns the domain, the forest of bolts and the path being drawn. All
//! mutation goes through the commands in [`ops`]; [`query`] produces serializable snapshots.

pub mod format;
pub mod log;
pub mod model;
pub mod ops;
pub mod query;
