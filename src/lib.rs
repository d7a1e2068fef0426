// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nereid gitgraph: lanes and edge polylines for commit graphs.
//!
//! Feed commits children-first (the order `git log` prints them) to
//! [`layout_commit_graph`] and draw the result: every commit gets a column,
//! every commit→parent edge a colored polyline with tagged bend points.

pub mod config;
pub mod layout;
pub mod model;

pub use config::{ConfigError, GraphConfig};
pub use layout::{
    layout_commit_graph, layout_commit_graph_with, CommitGraphLayout, EdgePath, LayoutError,
    MalformedInput, Palette, PlacedCommit, Point, PointKind,
};
pub use model::{parse_log_lines, CommitNode};
