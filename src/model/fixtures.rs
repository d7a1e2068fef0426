// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![cfg(test)]

use super::commit::CommitNode;

pub(crate) const PALETTE: [&str; 6] = ["color1", "color2", "color3", "color4", "color5", "color6"];

fn commits(rows: &[(&str, &[&str])]) -> Vec<CommitNode> {
    rows.iter().map(|(id, parents)| CommitNode::new(*id, parents.iter().copied())).collect()
}

/// `1 -> 2 -> 3`
pub(crate) fn linear_chain() -> Vec<CommitNode> {
    commits(&[("1", &["2"]), ("2", &["3"]), ("3", &[])])
}

/// Two tips sharing one parent.
pub(crate) fn two_children_one_parent() -> Vec<CommitNode> {
    commits(&[("1", &["3"]), ("2", &["3"]), ("3", &[])])
}

/// A merge commit whose side branch forks off the same parent.
pub(crate) fn merge_commit() -> Vec<CommitNode> {
    commits(&[("1", &["3", "2"]), ("2", &["3"]), ("3", &[])])
}

/// The side branch of a merge merges back into main and continues on.
pub(crate) fn merge_hands_over_column() -> Vec<CommitNode> {
    commits(&[("1", &["3", "2"]), ("2", &["3", "4"]), ("3", &["5"]), ("4", &["5"]), ("5", &[])])
}

/// Four tips; the two lanes to the right slide left as the first merge frees a column.
pub(crate) fn sliding_lanes() -> Vec<CommitNode> {
    commits(&[
        ("0", &["4"]),
        ("1", &["4"]),
        ("2", &["5"]),
        ("3", &["5"]),
        ("4", &["6"]),
        ("5", &["6"]),
        ("6", &[]),
    ])
}
