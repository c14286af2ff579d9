// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geometry::{self, EdgeAxis};
use super::point::LatticePoint;
use super::sign::Sign;

/// One path vertex. The sign belongs to the vertex and moves with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub point: LatticePoint,
    pub sign: Option<Sign>,
}

impl Vertex {
    pub fn new(point: LatticePoint) -> Self {
        Self { point, sign: None }
    }

    pub fn signed(point: LatticePoint, sign: Sign) -> Self {
        Self { point, sign: Some(sign) }
    }
}

/// An open or closed axis-aligned lattice path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bolt {
    vertices: Vec<Vertex>,
    closed: bool,
}

impl Bolt {
    pub fn new(vertices: Vec<Vertex>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    pub fn from_points(points: impl IntoIterator<Item = LatticePoint>, closed: bool) -> Self {
        Self { vertices: points.into_iter().map(Vertex::new).collect(), closed }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<Vertex> {
        &mut self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub(crate) fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    pub fn points(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        self.vertices.iter().map(|v| v.point)
    }

    pub fn point(&self, index: usize) -> Option<LatticePoint> {
        self.vertices.get(index).map(|v| v.point)
    }

    pub fn first_point(&self) -> Option<LatticePoint> {
        self.point(0)
    }

    pub fn last_point(&self) -> Option<LatticePoint> {
        self.vertices.last().map(|v| v.point)
    }

    pub fn sign_at(&self, index: usize) -> Option<Sign> {
        self.vertices.get(index).and_then(|v| v.sign)
    }

    pub fn has_signs(&self) -> bool {
        self.vertices.iter().any(|v| v.sign.is_some())
    }

    pub fn clear_signs(&mut self) {
        for vertex in &mut self.vertices {
            vertex.sign = None;
        }
    }

    /// Redundant degree-2 vertex present: three consecutive points are collinear.
    pub fn composite(&self) -> bool {
        let points = self.points().collect::<Vec<_>>();
        geometry::has_collinear_run(&points, self.closed)
    }

    /// Number of edges: `len - 1` when open, `len` when closed.
    pub fn edge_count(&self) -> usize {
        match (self.closed, self.vertices.len()) {
            (_, 0) => 0,
            (true, n) => n,
            (false, n) => n - 1,
        }
    }

    /// Vertex indices of edge `edge_index`, wrapping to vertex 0 for the closing edge.
    pub fn edge(&self, edge_index: usize) -> Option<(usize, usize)> {
        if edge_index >= self.edge_count() {
            return None;
        }
        Some((edge_index, (edge_index + 1) % self.vertices.len()))
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.edge_count()).filter_map(|i| self.edge(i))
    }

    pub fn edge_axis(&self, edge_index: usize) -> Option<EdgeAxis> {
        let (a, b) = self.edge(edge_index)?;
        geometry::edge_axis(self.vertices[a].point, self.vertices[b].point)
    }

    pub fn position_of(&self, point: LatticePoint) -> Option<usize> {
        self.vertices.iter().position(|v| v.point == point)
    }

    pub fn contains_point(&self, point: LatticePoint) -> bool {
        self.position_of(point).is_some()
    }

    /// Index of the first edge whose segment passes through `point`.
    pub fn edge_through(&self, point: LatticePoint) -> Option<usize> {
        self.edges().position(|(a, b)| {
            geometry::segment_contains(self.vertices[a].point, self.vertices[b].point, point)
        })
    }

    /// `true` if signs alternate along the path (cyclically when closed) and every vertex is signed.
    pub fn signs_alternate(&self) -> bool {
        if self.vertices.iter().any(|v| v.sign.is_none()) {
            return false;
        }
        self.edges().all(|(a, b)| {
            // The closing edge of an odd cycle always repeats a sign.
            if self.closed && b == 0 && self.vertices.len() % 2 == 1 {
                return true;
            }
            self.vertices[a].sign != self.vertices[b].sign
        })
    }
}
