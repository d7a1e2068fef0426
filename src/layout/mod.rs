// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Commit graph layout.
//!
//! A single forward pass over children-first commits assigns every commit a
//! column and routes every commit→parent edge as a polyline on the
//! `(column, row)` grid.

pub mod graph;
mod lanes;
pub mod palette;
pub mod path;

pub use graph::{
    layout_commit_graph, layout_commit_graph_with, CommitGraphLayout, LayoutError, MalformedInput,
    ParentPaths, PlacedCommit,
};
pub use palette::{Palette, DEFAULT_COLORS};
pub use path::{EdgePath, PathPoints, Point, PointKind};
