// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use nereid_gitgraph::{CommitGraphLayout, CommitNode};

pub fn checksum_layout(layout: &CommitGraphLayout) -> u64 {
    let mut acc = layout.width() as u64;
    for node in layout.nodes() {
        acc = acc.wrapping_mul(31).wrapping_add(node.column() as u64);
        for path in node.parents_paths().iter() {
            for point in path.points() {
                acc = acc.wrapping_add(point.column() as u64);
                acc = acc.wrapping_add(point.row() as u64);
                acc = acc.wrapping_add(u64::from(point.kind().code()));
            }
        }
    }
    acc
}

/// Renders `nodes` the way `git log --format='%H %P'` prints them.
pub fn log_lines(nodes: &[CommitNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(node.id());
        for parent in node.parents() {
            out.push(' ');
            out.push_str(parent);
        }
        out.push('\n');
    }
    out
}

pub mod history {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub commits: usize,
        pub branches: usize,
        pub merge_every: usize,
    }

    impl Params {
        pub const fn new(commits: usize, branches: usize, merge_every: usize) -> Self {
            Self { commits, branches, merge_every }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Linear,
        FeatureBranches,
        WideMerges,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Linear => "linear",
                Self::FeatureBranches => "feature_branches",
                Self::WideMerges => "wide_merges",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Linear => Params::new(2_000, 1, 0),
                Self::FeatureBranches => Params::new(2_000, 4, 5),
                Self::WideMerges => Params::new(5_000, 16, 3),
            }
        }
    }

    fn commit_id(index: usize) -> String {
        format!("{index:040x}")
    }

    /// Deterministic branchy history, newest commit first.
    ///
    /// - Commits are assigned to branches round-robin; branch 0 is mainline.
    /// - A branch without a head forks from the current mainline head.
    /// - Every `merge_every`-th mainline commit merges one side branch, which
    ///   then forks afresh.
    pub fn history(params: Params) -> Vec<CommitNode> {
        assert!(params.commits >= 1, "commits must be >= 1");
        assert!(params.branches >= 1, "branches must be >= 1");

        let mut heads = vec![None::<usize>; params.branches];
        heads[0] = Some(0);
        let mut parents = Vec::<Vec<usize>>::with_capacity(params.commits);
        parents.push(Vec::new());

        for index in 1..params.commits {
            let branch = index % params.branches;
            let mainline = heads[0].unwrap_or(0);
            let mut commit_parents = vec![heads[branch].unwrap_or(mainline)];

            if branch == 0 && params.branches > 1 && params.merge_every > 0 && index % params.merge_every == 0 {
                let side = 1 + (index / params.merge_every) % (params.branches - 1);
                if let Some(side_head) = heads[side].take() {
                    if side_head != commit_parents[0] {
                        commit_parents.push(side_head);
                    }
                }
            }

            heads[branch] = Some(index);
            parents.push(commit_parents);
        }

        parents
            .iter()
            .enumerate()
            .rev()
            .map(|(index, parents)| CommitNode::new(commit_id(index), parents.iter().map(|p| commit_id(*p))))
            .collect()
    }

    pub fn fixture(case: Case) -> Vec<CommitNode> {
        history(case.params())
    }
}
