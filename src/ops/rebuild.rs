// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boltforest-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boltforest and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Forest rebuild: restores vertex-disjointness and sign alternation after vertices moved.
//!
//! The pipeline runs in six steps over a fully relocated snapshot of the forest:
//!
//! 1. group every `(bolt, vertex)` by the lattice point it occupies;
//! 2. fold each shared group's signs; a cancelled group loses every member, otherwise only the
//!    first member (in bolt, then vertex order) survives;
//! 3. rebuild each bolt's edges, bridging over runs of deleted vertices;
//! 4. split the survivors of each bolt into connected components (bolts never merge);
//! 5. order each component into an open or closed vertex sequence;
//! 6. replace the forest, relabel every bolt with alternating signs from `+` and re-anchor the
//!    selection on the old selected bolt's first point.
//!
//! Component discovery order is irrelevant to the result: each component is ordered from its
//! own lowest surviving index.

use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;

use crate::model::{Bolt, Forest, LatticePoint, Session, Sign, SignSum};

use super::signs::assign_alternating;

/// Summary of one rebuild pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebuildReport {
    pub bolts_before: usize,
    pub bolts_after: usize,
    /// Lattice points shared by two or more vertices.
    pub collisions: usize,
    /// Shared points whose signs cancelled to zero.
    pub cancellations: usize,
    pub removed_vertices: usize,
    /// Components whose ordering walk could not reach every node.
    pub truncated_walks: usize,
}

impl RebuildReport {
    pub fn is_noop(&self) -> bool {
        self.collisions == 0 && self.bolts_before == self.bolts_after
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct VertexRef {
    bolt: usize,
    vertex: usize,
}

type CollisionGroup = SmallVec<[VertexRef; 2]>;

/// Step 1. Members are pushed in enumeration order, so each group is already ordered.
fn group_by_point(bolts: &[Bolt]) -> BTreeMap<LatticePoint, CollisionGroup> {
    let mut groups = BTreeMap::<LatticePoint, CollisionGroup>::new();
    for (bolt, b) in bolts.iter().enumerate() {
        for (vertex, v) in b.vertices().iter().enumerate() {
            groups.entry(v.point).or_default().push(VertexRef { bolt, vertex });
        }
    }
    groups
}

/// Step 2. Returns per-bolt deletion marks.
fn resolve_collisions(
    bolts: &mut [Bolt],
    groups: &BTreeMap<LatticePoint, CollisionGroup>,
    report: &mut RebuildReport,
) -> Vec<Vec<bool>> {
    let mut deleted = bolts.iter().map(|b| vec![false; b.len()]).collect::<Vec<_>>();

    for group in groups.values().filter(|group| group.len() > 1) {
        report.collisions += 1;
        let sum = SignSum::fold(group.iter().map(|r| bolts[r.bolt].sign_at(r.vertex)));

        let doomed = if sum.is_cancelled() {
            report.cancellations += 1;
            &group[..]
        } else {
            let keep = group[0];
            bolts[keep.bolt].vertices_mut()[keep.vertex].sign = sum.sign();
            &group[1..]
        };
        for r in doomed {
            deleted[r.bolt][r.vertex] = true;
            report.removed_vertices += 1;
        }
    }

    deleted
}

/// Surviving-vertex graph of one bolt after step 3.
#[derive(Debug, Default)]
struct BoltGraph {
    adjacency: Vec<SmallVec<[usize; 2]>>,
    /// Path-order successor of each node, when one was recorded.
    successor: Vec<Option<usize>>,
    seen: BTreeSet<(usize, usize)>,
}

impl BoltGraph {
    fn new(len: usize) -> Self {
        Self {
            adjacency: vec![SmallVec::new(); len],
            successor: vec![None; len],
            seen: BTreeSet::new(),
        }
    }

    fn connect(&mut self, from: usize, to: usize) {
        if from == to || !self.seen.insert((from.min(to), from.max(to))) {
            return;
        }
        self.adjacency[from].push(to);
        self.adjacency[to].push(from);
        self.successor[from].get_or_insert(to);
    }

    fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }
}

#[derive(Debug, Clone, Copy)]
enum Walk {
    Forward,
    Backward,
}

/// Nearest surviving vertex strictly past `start` in direction `walk`.
fn nearest_survivor(deleted: &[bool], closed: bool, start: usize, walk: Walk) -> Option<usize> {
    let n = deleted.len();
    let mut index = start;
    for _ in 0..n {
        index = match walk {
            Walk::Forward if index + 1 < n => index + 1,
            Walk::Forward if closed => 0,
            Walk::Backward if index > 0 => index - 1,
            Walk::Backward if closed => n - 1,
            _ => return None,
        };
        if !deleted[index] {
            return Some(index);
        }
    }
    None
}

/// Step 3.
fn reconnect(bolt: &Bolt, deleted: &[bool]) -> BoltGraph {
    let mut graph = BoltGraph::new(bolt.len());
    let closed = bolt.is_closed();

    for (a, b) in bolt.edges() {
        match (deleted[a], deleted[b]) {
            (false, false) => graph.connect(a, b),
            (true, true) => {}
            (false, true) => {
                if let Some(c) = nearest_survivor(deleted, closed, b, Walk::Forward) {
                    graph.connect(a, c);
                }
            }
            (true, false) => {
                if let Some(c) = nearest_survivor(deleted, closed, a, Walk::Backward) {
                    graph.connect(c, b);
                }
            }
        }
    }

    graph
}

/// Step 4. Depth-first; components come out with sorted node lists.
fn components(graph: &BoltGraph, deleted: &[bool]) -> Vec<Vec<usize>> {
    let mut visited = vec![false; deleted.len()];
    let mut out = Vec::new();

    for root in 0..deleted.len() {
        if deleted[root] || visited[root] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![root];
        visited[root] = true;
        while let Some(node) = stack.pop() {
            component.push(node);
            for &next in &graph.adjacency[node] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        component.sort_unstable();
        out.push(component);
    }

    out
}

struct OrderedComponent {
    order: Vec<usize>,
    closed: bool,
    truncated: bool,
}

/// Step 5. `component` must be sorted and non-empty.
fn order_component(graph: &BoltGraph, component: &[usize]) -> OrderedComponent {
    let closed = component.len() >= 3 && component.iter().all(|&n| graph.degree(n) == 2);
    let start = if closed {
        component[0]
    } else {
        component.iter().copied().find(|&n| graph.degree(n) == 1).unwrap_or(component[0])
    };

    let mut visited = BTreeSet::from([start]);
    let mut order = vec![start];
    let mut current = start;
    loop {
        let next = graph.successor[current]
            .filter(|n| !visited.contains(n))
            .or_else(|| graph.adjacency[current].iter().copied().find(|n| !visited.contains(n)));
        let Some(next) = next else {
            break;
        };
        visited.insert(next);
        order.push(next);
        current = next;
    }

    let truncated = order.len() < component.len();
    OrderedComponent { order, closed: closed && !truncated, truncated }
}

/// Runs the full rebuild pipeline on `forest`.
pub fn rebuild_forest(forest: &mut Forest) -> RebuildReport {
    let mut bolts = std::mem::take(forest.bolts_mut());
    let anchor = forest.selected().and_then(|i| bolts.get(i)).and_then(Bolt::first_point);
    let mut report = RebuildReport { bolts_before: bolts.len(), ..RebuildReport::default() };

    let groups = group_by_point(&bolts);
    let deleted = resolve_collisions(&mut bolts, &groups, &mut report);

    let mut rebuilt = Vec::new();
    for (bolt_index, bolt) in bolts.iter().enumerate() {
        let marks = &deleted[bolt_index];
        let graph = reconnect(bolt, marks);
        for component in components(&graph, marks) {
            if component.len() < 2 {
                continue;
            }
            let ordered = order_component(&graph, &component);
            if ordered.truncated {
                report.truncated_walks += 1;
                crate::log::warn!(
                    bolt_index,
                    visited = ordered.order.len(),
                    expected = component.len(),
                    "rebuild walk stopped early; truncating component"
                );
            }
            if ordered.order.len() < 2 {
                continue;
            }
            let vertices = ordered.order.iter().map(|&i| bolt.vertices()[i]).collect();
            rebuilt.push(Bolt::new(vertices, ordered.closed));
        }
    }

    for bolt in &mut rebuilt {
        assign_alternating(bolt, Sign::Plus);
    }

    let selected = anchor
        .and_then(|point| rebuilt.iter().position(|bolt| bolt.contains_point(point)))
        .or(if rebuilt.is_empty() { None } else { Some(0) });

    report.bolts_after = rebuilt.len();
    crate::log::debug!(
        bolts_before = report.bolts_before,
        bolts_after = report.bolts_after,
        collisions = report.collisions,
        cancellations = report.cancellations,
        removed_vertices = report.removed_vertices,
        "forest rebuilt"
    );

    forest.replace(rebuilt, selected);
    report
}

impl Session {
    /// Runs the rebuild pipeline on the current forest.
    pub fn rebuild(&mut self) -> RebuildReport {
        rebuild_forest(self.forest_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::{nearest_survivor, reconnect, Walk};
    use crate::model::fixtures::bolt;

    #[test]
    fn nearest_survivor_wraps_only_on_closed_bolts() {
        let deleted = [false, true, true, false];
        assert_eq!(nearest_survivor(&deleted, false, 1, Walk::Forward), Some(3));
        assert_eq!(nearest_survivor(&deleted, false, 2, Walk::Backward), Some(0));
        assert_eq!(nearest_survivor(&deleted, false, 3, Walk::Forward), None);
        assert_eq!(nearest_survivor(&deleted, true, 3, Walk::Forward), Some(0));
        assert_eq!(nearest_survivor(&deleted, true, 0, Walk::Backward), Some(3));
    }

    #[test]
    fn nearest_survivor_gives_up_when_everything_else_is_gone() {
        let deleted = [true, true, true];
        assert_eq!(nearest_survivor(&deleted, true, 0, Walk::Forward), None);
    }

    #[test]
    fn reconnect_bridges_a_deleted_corner() {
        let b = bolt(&[(0, 0), (0, 2), (2, 2), (2, 0)], true, None);
        let graph = reconnect(&b, &[false, true, false, false]);
        assert_eq!(graph.successor[0], Some(2));
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(2), 2);
        assert_eq!(graph.degree(1), 0);
    }

    #[test]
    fn reconnect_collapses_a_triangle_to_one_edge() {
        let b = bolt(&[(0, 0), (0, 2), (2, 2)], true, None);
        let graph = reconnect(&b, &[false, true, false]);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(2), 1);
    }
}
