// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use serde::ser::{Serialize, Serializer};
use smallvec::SmallVec;
use smol_str::SmolStr;

use super::lanes::LaneTable;
use super::palette::Palette;
use super::path::EdgePath;
use crate::model::commit::CommitNode;

/// Lanes and edge polylines for a whole commit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitGraphLayout {
    nodes: Vec<PlacedCommit>,
    width: usize,
}

impl CommitGraphLayout {
    /// Placed commits, in input order (`nodes()[row].row() == row`).
    pub fn nodes(&self) -> &[PlacedCommit] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<PlacedCommit> {
        self.nodes
    }

    /// Number of columns the graph ever occupies.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn node(&self, id: &str) -> Option<&PlacedCommit> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn columns(&self) -> Vec<usize> {
        self.nodes.iter().map(|node| node.column).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedCommit {
    id: String,
    parents: Vec<String>,
    row: usize,
    column: usize,
    color: SmolStr,
    parents_paths: ParentPaths,
}

impl PlacedCommit {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Color of the lane the commit sits on.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn parents_paths(&self) -> &ParentPaths {
        &self.parents_paths
    }

    pub fn path_to(&self, parent_id: &str) -> Option<&EdgePath> {
        self.parents_paths.get(parent_id)
    }
}

/// Edge paths of one commit keyed by parent id, kept in parent order.
///
/// Serializes as a JSON object whose keys follow the parent list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentPaths(Vec<EdgePath>);

impl ParentPaths {
    pub fn get(&self, parent_id: &str) -> Option<&EdgePath> {
        self.0.iter().find(|path| path.parent_id() == parent_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgePath> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ParentPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|path| (path.parent_id(), path)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    #[error("commit {id} references parent {parent}, which never appears after it in the sequence")]
    DanglingParent { id: String, parent: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedInput {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("commit at row {row} has an empty id")]
    EmptyId { row: usize },
    #[error("commit {id} appears at rows {first_row} and {row}")]
    DuplicateId { id: String, first_row: usize, row: usize },
    #[error("commit {id} lists parent {parent} more than once")]
    DuplicateParent { id: String, parent: String },
}

/// Parent rows of each commit, in parent order.
type ParentRows = Vec<SmallVec<[usize; 2]>>;

/// Checks ids and parent references and resolves parents to rows.
///
/// Runs to completion before any layout state exists, so errors never come
/// with partial output.
fn validate(nodes: &[CommitNode]) -> Result<ParentRows, LayoutError> {
    let mut rows = HashMap::<&str, usize>::with_capacity(nodes.len());
    for (row, node) in nodes.iter().enumerate() {
        if node.id().is_empty() {
            return Err(MalformedInput::EmptyId { row }.into());
        }
        if let Some(first_row) = rows.insert(node.id(), row) {
            return Err(MalformedInput::DuplicateId { id: node.id().to_owned(), first_row, row }.into());
        }
    }

    let mut parent_rows = ParentRows::with_capacity(nodes.len());
    for (row, node) in nodes.iter().enumerate() {
        let mut resolved = SmallVec::<[usize; 2]>::with_capacity(node.parents().len());
        for parent in node.parents() {
            // A parent seen only at or above its child never follows it.
            let parent_row = match rows.get(parent.as_str()) {
                Some(&parent_row) if parent_row > row => parent_row,
                _ => {
                    return Err(LayoutError::DanglingParent {
                        id: node.id().to_owned(),
                        parent: parent.clone(),
                    })
                }
            };
            if resolved.contains(&parent_row) {
                return Err(MalformedInput::DuplicateParent {
                    id: node.id().to_owned(),
                    parent: parent.clone(),
                }
                .into());
            }
            resolved.push(parent_row);
        }
        parent_rows.push(resolved);
    }

    Ok(parent_rows)
}

/// Lays out `nodes` (children first) using colors from `palette`.
///
/// Each commit gets a column, and each commit→parent edge a polyline with
/// explicit bend points. The result is fully determined by the input: the
/// same nodes and palette always give the same layout.
///
/// # Errors
///
/// - [`LayoutError::MalformedInput`] for an empty palette, empty or duplicate
///   ids, or repeated parents.
/// - [`LayoutError::DanglingParent`] when a parent does not appear as a node
///   after its child.
pub fn layout_commit_graph<S: AsRef<str>>(
    nodes: &[CommitNode],
    palette: &[S],
) -> Result<CommitGraphLayout, LayoutError> {
    let palette = Palette::new(palette).ok_or(MalformedInput::EmptyPalette)?;
    layout_commit_graph_with(nodes, &palette)
}

/// Like [`layout_commit_graph`], with an already validated [`Palette`].
pub fn layout_commit_graph_with(
    nodes: &[CommitNode],
    palette: &Palette,
) -> Result<CommitGraphLayout, LayoutError> {
    let parent_rows = validate(nodes)?;

    let mut lanes = LaneTable::new(palette);
    let mut placements = Vec::with_capacity(nodes.len());
    for (row, parents) in parent_rows.iter().enumerate() {
        let placement = lanes.resolve(row);
        lanes.distribute(row, &placement, parents);
        placements.push(placement);
    }
    debug_assert!(lanes.is_drained(), "validated input leaves no claim unresolved");

    let width = lanes.width();
    tracing::debug!(
        nodes = nodes.len(),
        width,
        colors = lanes.colors_drawn(),
        "laid out commit graph"
    );

    let mut paths = lanes.into_paths().into_iter();
    let nodes = nodes
        .iter()
        .zip(placements)
        .enumerate()
        .map(|(row, (node, placement))| {
            let parents_paths = node
                .parents()
                .iter()
                .zip(paths.by_ref())
                .map(|(parent, path)| path.finish(parent))
                .collect();
            PlacedCommit {
                id: node.id().to_owned(),
                parents: node.parents().to_vec(),
                row,
                column: placement.column,
                color: placement.color,
                parents_paths: ParentPaths(parents_paths),
            }
        })
        .collect();

    Ok(CommitGraphLayout { nodes, width })
}
