// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::bolt::Bolt;
use super::point::LatticePoint;

/// Ordered committed bolts plus the current selection.
///
/// `selected` is either `None` or a valid index into `bolts`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Forest {
    bolts: Vec<Bolt>,
    selected: Option<usize>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bolts(&self) -> &[Bolt] {
        &self.bolts
    }

    pub(crate) fn bolts_mut(&mut self) -> &mut Vec<Bolt> {
        &mut self.bolts
    }

    pub fn bolt(&self, index: usize) -> Option<&Bolt> {
        self.bolts.get(index)
    }

    pub fn len(&self) -> usize {
        self.bolts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bolts.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects `index` if it names a bolt; returns whether the selection changed to it.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.bolts.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Appends a bolt and selects it.
    pub fn push_selected(&mut self, bolt: Bolt) -> usize {
        self.bolts.push(bolt);
        let index = self.bolts.len() - 1;
        self.selected = Some(index);
        index
    }

    pub fn remove(&mut self, index: usize) -> Option<Bolt> {
        if index >= self.bolts.len() {
            return None;
        }
        let removed = self.bolts.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        Some(removed)
    }

    /// Swaps in a new bolt list with an explicit selection, clamped to validity.
    pub(crate) fn replace(&mut self, bolts: Vec<Bolt>, selected: Option<usize>) {
        self.selected = selected.filter(|&index| index < bolts.len());
        self.bolts = bolts;
    }

    pub fn clear(&mut self) {
        self.bolts.clear();
        self.selected = None;
    }

    /// Index of the first bolt with a vertex at `point`.
    pub fn bolt_at(&self, point: LatticePoint) -> Option<usize> {
        self.bolts.iter().position(|bolt| bolt.contains_point(point))
    }
}
