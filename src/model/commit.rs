// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// One commit of the input sequence.
///
/// `parents[0]` is the primary parent; the rest are merge parents. Ids are
/// opaque strings (usually hashes) and are validated by the layout, not here,
/// so that empty or duplicate ids surface as layout errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitNode {
    id: String,
    #[serde(default)]
    parents: Vec<String>,
}

impl CommitNode {
    pub fn new<I, S>(id: impl Into<String>, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { id: id.into(), parents: parents.into_iter().map(Into::into).collect() }
    }

    pub fn root(id: impl Into<String>) -> Self {
        Self { id: id.into(), parents: Vec::new() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn primary_parent(&self) -> Option<&str> {
        self.parents.first().map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// Parses `git log --format='%H %P'` style output: one commit per line, the
/// id first, then its parents separated by whitespace.
///
/// Blank lines are skipped; no other validation happens here.
pub fn parse_log_lines(input: &str) -> Vec<CommitNode> {
    input
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let id = fields.next()?;
            Some(CommitNode::new(id, fields))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_log_lines, CommitNode};

    #[test]
    fn parses_log_lines_with_merge_and_root() {
        let nodes = parse_log_lines("a1 b2 c3\n\nb2 c3\n  c3  \n");

        assert_eq!(
            nodes,
            vec![
                CommitNode::new("a1", ["b2", "c3"]),
                CommitNode::new("b2", ["c3"]),
                CommitNode::root("c3"),
            ]
        );
        assert!(nodes[0].is_merge());
        assert_eq!(nodes[1].primary_parent(), Some("c3"));
        assert!(nodes[2].is_root());
    }

    #[test]
    fn deserializes_json_with_optional_parents() {
        let nodes: Vec<CommitNode> =
            serde_json::from_str(r#"[{"id":"1","parents":["2"]},{"id":"2"}]"#).expect("json");

        assert_eq!(nodes, vec![CommitNode::new("1", ["2"]), CommitNode::root("2")]);
    }
}
