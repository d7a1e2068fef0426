// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Column assignment and reservation arbitration.
//!
//! The table is a vector of slots indexed by column. A reserved slot holds a
//! [`Lane`]: a claim that some not-yet-processed commit (the lane's target,
//! identified by its row) will sit in that column with the lane's color. Every
//! edge still waiting for its parent travels in exactly one lane.
//!
//! Freed columns are closed in the row they free up: lanes to their right
//! slide left, so reserved columns stay contiguous between rows.

use smallvec::SmallVec;
use smol_str::SmolStr;

use super::palette::{ColorCursor, Palette};
use super::path::PathBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct EdgeId(usize);

#[derive(Debug, Clone)]
struct Lane {
    target: usize,
    color: SmolStr,
    edges: SmallVec<[EdgeId; 2]>,
}

#[derive(Debug, Clone)]
enum Slot {
    Open,
    /// Occupied by the commit being placed on the current row.
    Held,
    Reserved(Lane),
}

/// Column and color a commit was placed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Placement {
    pub(crate) column: usize,
    pub(crate) color: SmolStr,
}

#[derive(Debug)]
pub(crate) struct LaneTable<'p> {
    slots: Vec<Slot>,
    paths: Vec<PathBuilder>,
    colors: ColorCursor<'p>,
    width: usize,
}

impl<'p> LaneTable<'p> {
    pub(crate) fn new(palette: &'p Palette) -> Self {
        Self { slots: Vec::new(), paths: Vec::new(), colors: palette.cursor(), width: 0 }
    }

    /// Places the commit on `row`.
    ///
    /// The claim with the smallest column wins. Edges in every other claim
    /// for this commit merge into the winner with a late bend and keep their
    /// own color.
    pub(crate) fn resolve(&mut self, row: usize) -> Placement {
        let mut won: Option<Placement> = None;
        let mut merged = 0usize;

        for column in 0..self.slots.len() {
            match &self.slots[column] {
                Slot::Reserved(lane) if lane.target == row => {}
                _ => continue,
            }
            let next = if won.is_none() { Slot::Held } else { Slot::Open };
            let Slot::Reserved(lane) = std::mem::replace(&mut self.slots[column], next) else {
                continue;
            };

            match won.as_ref().map(|placement| placement.column) {
                None => {
                    for edge in &lane.edges {
                        self.paths[edge.0].seal(column, row);
                    }
                    won = Some(Placement { column, color: lane.color });
                }
                Some(target) => {
                    for edge in &lane.edges {
                        self.paths[edge.0].merge_into(target, row);
                    }
                    merged += 1;
                }
            }
        }

        let placement = match won {
            Some(placement) => {
                self.close_open_columns(row);
                placement
            }
            None => {
                let column = self.open_column();
                self.slots[column] = Slot::Held;
                Placement { column, color: self.colors.next_color() }
            }
        };

        tracing::trace!(row, column = placement.column, merged, "resolved commit");
        placement
    }

    /// Hands the placed commit's claims to its parents (given as rows, in
    /// parent order).
    ///
    /// The primary parent continues the commit's column and color unless it
    /// already holds a claim further left. In that case the first later
    /// parent without any claim inherits the column, and the primary edge
    /// joins its existing claim. When no later parent can inherit, the
    /// primary keeps the column as a competing claim and merges late.
    ///
    /// Starts one edge per parent, in parent order.
    pub(crate) fn distribute(&mut self, row: usize, placement: &Placement, parents: &[usize]) {
        let column = placement.column;

        let Some(&primary) = parents.first() else {
            self.slots[column] = Slot::Open;
            self.close_open_columns(row);
            return;
        };

        let preempted = self.lane_for(primary).is_some_and(|existing| existing < column);
        let heir = if preempted {
            parents
                .iter()
                .skip(1)
                .position(|&parent| self.lane_for(parent).is_none())
                .map_or(0, |idx| idx + 1)
        } else {
            0
        };

        for (idx, &parent) in parents.iter().enumerate() {
            if idx == heir {
                let edge = self.start_edge(column, row, placement.color.clone());
                self.slots[column] = Slot::Reserved(Lane {
                    target: parent,
                    color: placement.color.clone(),
                    edges: SmallVec::from_elem(edge, 1),
                });
            } else if let Some(existing) = self.lane_for(parent) {
                let Slot::Reserved(lane) = &mut self.slots[existing] else {
                    continue;
                };
                let edge = EdgeId(self.paths.len());
                let mut path = PathBuilder::start(column, row, lane.color.clone());
                path.bend_early(existing, row);
                lane.edges.push(edge);
                self.paths.push(path);
            } else {
                let target_column = self.open_column();
                let color = self.colors.next_color();
                let edge = self.start_edge(column, row, color.clone());
                self.paths[edge.0].bend_early(target_column, row);
                self.slots[target_column] = Slot::Reserved(Lane {
                    target: parent,
                    color,
                    edges: SmallVec::from_elem(edge, 1),
                });
            }
        }
    }

    /// Number of columns ever in use.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn colors_drawn(&self) -> usize {
        self.colors.drawn()
    }

    /// True once every claim has been resolved.
    pub(crate) fn is_drained(&self) -> bool {
        self.slots.iter().all(|slot| matches!(slot, Slot::Open))
    }

    /// Consumes the table, yielding edges in creation order: row by row,
    /// parents in list order.
    pub(crate) fn into_paths(self) -> Vec<PathBuilder> {
        self.paths
    }

    fn lane_for(&self, target: usize) -> Option<usize> {
        self.slots.iter().position(|slot| matches!(slot, Slot::Reserved(lane) if lane.target == target))
    }

    fn start_edge(&mut self, column: usize, row: usize, color: SmolStr) -> EdgeId {
        let edge = EdgeId(self.paths.len());
        self.paths.push(PathBuilder::start(column, row, color));
        edge
    }

    fn open_column(&mut self) -> usize {
        if let Some(column) = self.slots.iter().position(|slot| matches!(slot, Slot::Open)) {
            return column;
        }
        self.slots.push(Slot::Open);
        self.width = self.width.max(self.slots.len());
        self.slots.len() - 1
    }

    fn close_open_columns(&mut self, row: usize) {
        if !self.slots.iter().any(|slot| matches!(slot, Slot::Open)) {
            return;
        }

        let slots = std::mem::take(&mut self.slots);
        for (from, slot) in slots.into_iter().enumerate() {
            let to = self.slots.len();
            match slot {
                Slot::Open => continue,
                Slot::Held => debug_assert_eq!(from, to, "placed commit must not move"),
                Slot::Reserved(ref lane) if from != to => {
                    for edge in &lane.edges {
                        self.paths[edge.0].shift(to, row);
                    }
                }
                Slot::Reserved(_) => {}
            }
            self.slots.push(slot);
        }
    }
}
