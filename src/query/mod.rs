// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only snapshots of a session for rendering and tooling.
//!
//! Views are detached copies: they never borrow the session and can be serialized as JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Bolt, CellId, GridConfig, LatticePoint, Session, Sign};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VertexView {
    pub row: i32,
    pub col: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BoltView {
    pub index: usize,
    pub closed: bool,
    pub composite: bool,
    pub selected: bool,
    pub vertices: Vec<VertexView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DraftView {
    pub points: Vec<LatticePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SessionView {
    pub grid: GridConfig,
    pub domain: Vec<CellId>,
    pub bolts: Vec<BoltView>,
    pub selected: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<DraftView>,
}

pub fn bolt_view(index: usize, bolt: &Bolt, selected: bool) -> BoltView {
    BoltView {
        index,
        closed: bolt.is_closed(),
        composite: bolt.composite(),
        selected,
        vertices: bolt
            .vertices()
            .iter()
            .map(|v| VertexView { row: v.point.row, col: v.point.col, sign: v.sign })
            .collect(),
    }
}

pub fn session_view(session: &Session) -> SessionView {
    let selected = session.selected();
    SessionView {
        grid: *session.grid(),
        domain: session.domain().cells().iter().copied().collect(),
        bolts: session
            .bolts()
            .iter()
            .enumerate()
            .map(|(index, bolt)| bolt_view(index, bolt, selected == Some(index)))
            .collect(),
        selected,
        draft: session.draft().map(|draft| DraftView { points: draft.points().collect() }),
    }
}

/// JSON schema of [`SessionView`], for collaborators that validate snapshots.
pub fn session_view_schema() -> schemars::Schema {
    schemars::schema_for!(SessionView)
}
