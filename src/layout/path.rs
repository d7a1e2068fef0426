// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use smallvec::SmallVec;
use smol_str::SmolStr;

/// Points of one edge. Most edges have 2 or 3, deep overlap regions reach 5.
pub type PathPoints = SmallVec<[Point; 4]>;

/// How a renderer should treat a polyline vertex.
///
/// Bends always come in pairs on the same row: the bend point plus an
/// [`PointKind::Anchor`] (late bends) or the bend point right after one
/// (early bends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    /// A node position or the end of a straight vertical run.
    Anchor,
    /// Lane change drawn on the approach to this row. Sits on the column
    /// being left; the next point is the anchor on the new column.
    LateBend,
    /// Lane change drawn right after leaving this row, toward a higher
    /// column. Sits on the new column.
    EarlyBendOut,
    /// Lane change drawn right after leaving this row, toward a lower
    /// column. Sits on the new column.
    EarlyBendIn,
}

impl PointKind {
    /// Compact numeric form: anchor 0, late 1, early-out 2, early-in 3.
    pub fn code(self) -> u8 {
        match self {
            Self::Anchor => 0,
            Self::LateBend => 1,
            Self::EarlyBendOut => 2,
            Self::EarlyBendIn => 3,
        }
    }

    pub fn is_bend(self) -> bool {
        !matches!(self, Self::Anchor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    column: usize,
    row: usize,
    kind: PointKind,
}

impl Point {
    pub fn new(column: usize, row: usize, kind: PointKind) -> Self {
        Self { column, row, kind }
    }

    pub fn anchor(column: usize, row: usize) -> Self {
        Self::new(column, row, PointKind::Anchor)
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }
}

/// The rendered line from a node to one of its parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgePath {
    /// Parent id.
    id: String,
    path: PathPoints,
    color: SmolStr,
}

impl EdgePath {
    pub fn parent_id(&self) -> &str {
        &self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.path
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn first(&self) -> Option<Point> {
        self.path.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.path.last().copied()
    }

    /// Column the edge travels in once every point up to `row` has been
    /// drawn, i.e. the column it enters `row + 1` with.
    pub fn column_after(&self, row: usize) -> Option<usize> {
        self.path.iter().take_while(|p| p.row <= row).last().map(|p| p.column)
    }
}

/// Accumulates the points of one edge while its target is unresolved.
#[derive(Debug, Clone)]
pub(crate) struct PathBuilder {
    points: PathPoints,
    color: SmolStr,
    sealed: bool,
}

impl PathBuilder {
    pub(crate) fn start(column: usize, row: usize, color: SmolStr) -> Self {
        let mut points = PathPoints::new();
        points.push(Point::anchor(column, row));
        Self { points, color, sealed: false }
    }

    pub(crate) fn column(&self) -> usize {
        self.points.last().map_or(0, |p| p.column)
    }

    /// Leaves the starting row already headed for `column`.
    pub(crate) fn bend_early(&mut self, column: usize, row: usize) {
        let kind = if column > self.column() {
            PointKind::EarlyBendOut
        } else {
            PointKind::EarlyBendIn
        };
        self.push(Point::new(column, row, kind));
    }

    /// Slides the edge from its current column to `column` on `row`.
    pub(crate) fn shift(&mut self, column: usize, row: usize) {
        let from = self.column();
        self.push(Point::new(from, row, PointKind::LateBend));
        self.push(Point::anchor(column, row));
    }

    /// Merges into the target sitting at `column` on `row` from another lane.
    pub(crate) fn merge_into(&mut self, column: usize, row: usize) {
        let from = self.column();
        self.push(Point::new(from, row, PointKind::LateBend));
        self.seal(column, row);
    }

    /// Ends the edge on its target.
    pub(crate) fn seal(&mut self, column: usize, row: usize) {
        self.push(Point::anchor(column, row));
        self.sealed = true;
    }

    pub(crate) fn is_sealed(&self) -> bool {
        self.sealed
    }

    pub(crate) fn finish(self, parent_id: &str) -> EdgePath {
        debug_assert!(self.is_sealed(), "edge to {parent_id} finished before its target resolved");
        EdgePath { id: parent_id.to_owned(), path: self.points, color: self.color }
    }

    fn push(&mut self, point: Point) {
        debug_assert!(!self.sealed, "point pushed onto a sealed edge");
        self.points.push(point);
    }
}
