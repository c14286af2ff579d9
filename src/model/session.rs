// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::bolt::Bolt;
use super::domain::Domain;
use super::forest::Forest;
use super::grid::GridConfig;

/// The editing session: every piece of mutable state the engine owns.
///
/// Mutations go through the command surface in [`crate::ops`]; this type only exposes
/// read access publicly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    grid: GridConfig,
    domain: Domain,
    forest: Forest,
    draft: Option<Bolt>,
}

impl Session {
    pub fn new(grid: GridConfig) -> Self {
        Self { grid, ..Self::default() }
    }

    pub fn with_domain(grid: GridConfig, domain: Domain) -> Self {
        Self { grid, domain, ..Self::default() }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub(crate) fn set_grid_config(&mut self, grid: GridConfig) {
        self.grid = grid;
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub(crate) fn domain_mut(&mut self) -> &mut Domain {
        &mut self.domain
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub(crate) fn forest_mut(&mut self) -> &mut Forest {
        &mut self.forest
    }

    /// The in-progress bolt, if drawing is active.
    pub fn draft(&self) -> Option<&Bolt> {
        self.draft.as_ref()
    }

    pub(crate) fn draft_mut(&mut self) -> &mut Option<Bolt> {
        &mut self.draft
    }

    pub fn bolts(&self) -> &[Bolt] {
        self.forest.bolts()
    }

    pub fn selected(&self) -> Option<usize> {
        self.forest.selected()
    }
}
